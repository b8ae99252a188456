//! Check the quality gate of a project on a SonarQube server and fail the
//! build when it is not passed.
//!
//! The gate is resolved in one of three modes: *integrated* (the analysis of a
//! previous scanner run, found through `report-task.txt`), *simple* (project
//! key only) or *advanced* (project key plus branch or pull request).

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
