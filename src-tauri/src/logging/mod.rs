mod file_logger;

pub use file_logger::{prune_rotated_logs, setup_logging, setup_logging_with, LogConfig};
