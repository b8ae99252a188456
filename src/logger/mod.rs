pub mod gate_report_logger;
