pub mod check_outcome;
pub mod commands;
pub mod gate_status;
pub mod resolution_mode;
pub mod task_status;
