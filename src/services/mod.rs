pub mod mode_selector;
pub mod quality_gate_check;
pub mod report_task_reader;
pub mod sonar_client;
pub mod status_evaluator;
pub mod task_poller;
