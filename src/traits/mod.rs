pub mod sleeper;
pub mod sonar_api;
pub mod task_handle_source;
