pub mod condition;
pub mod envelope;
pub mod project_status;
pub mod task;
