use crate::console::Console;
use crate::serialization::JsonRecordSerializer;
use crate::store::DailyLogFile;
use crate::traits::RecordSerializer;
use applog_core::{AppLogResult, Clock, ErrorLogEntry, LoggerConfig, SystemClock};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes `error_<date>.log` records and mirrors them to the console
pub struct ErrorLogger {
    config: LoggerConfig,
    console: Arc<Console>,
    clock: Arc<dyn Clock>,
}

impl ErrorLogger {
    pub fn new(config: &LoggerConfig, console: Arc<Console>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: config.clone(),
            console,
            clock,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(
            config,
            Arc::new(Console::from_config(config)),
            Arc::new(SystemClock),
        )
    }

    pub fn dir(&self) -> AppLogResult<&Path> {
        self.config.error_dir()
    }

    /// Path of the file the next call would write to
    pub fn current_path(&self) -> AppLogResult<PathBuf> {
        Ok(self.file()?.path_for(self.clock.today()))
    }

    fn file(&self) -> AppLogResult<DailyLogFile> {
        Ok(DailyLogFile::errors(self.config.error_dir()?))
    }

    /// Append one error record to today's file
    ///
    /// `details` may be empty; it is still recorded, but only non-empty
    /// details get their own console line. Returns the file written.
    pub fn log_error(&self, message: &str, details: &str) -> AppLogResult<PathBuf> {
        let file = self.file()?;
        let now = self.clock.now();
        let entry = ErrorLogEntry::new(&now, message, details);
        let bytes = JsonRecordSerializer.serialize(&entry)?;

        let path = file.append(now.date_naive(), &bytes)?;

        self.console.error_lines(&now, message, details);
        Ok(path)
    }

    pub fn entries_on(&self, date: chrono::NaiveDate) -> AppLogResult<Vec<ErrorLogEntry>> {
        self.file()?.read_day(date)
    }
}

impl std::fmt::Debug for ErrorLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorLogger")
            .field("error_dir", &self.config.error_dir)
            .finish()
    }
}
