mod error;
pub use error::LoggerError;

mod logger;
pub use logger::{LogFormat, LoggerConfig, logger_init};
