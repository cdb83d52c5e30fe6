pub mod action_logger;
pub mod app_logger;
pub mod error_logger;

pub use action_logger::ActionLogger;
pub use app_logger::AppLogger;
pub use error_logger::ErrorLogger;
