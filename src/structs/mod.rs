pub mod cli;
pub mod config;
pub mod sonar;
pub mod verdict;
