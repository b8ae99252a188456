pub mod config;
pub mod gate_settings;
