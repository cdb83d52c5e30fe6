pub mod clock;
pub mod config;
pub mod entry;
pub mod error;
pub mod result;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LoggerConfig;
pub use entry::{ActionKind, ActionLogEntry, ErrorLogEntry};
pub use error::AppLogError;
pub use result::AppLogResult;
