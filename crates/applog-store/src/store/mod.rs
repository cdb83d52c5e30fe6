pub mod daily_file;

pub use daily_file::{read_entries, DailyLogFile};
