pub mod config_helper;
pub mod string_helper;
