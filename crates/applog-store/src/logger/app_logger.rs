use super::{ActionLogger, ErrorLogger};
use crate::console::Console;
use applog_core::{ActionKind, AppLogResult, Clock, LoggerConfig, SystemClock};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Error and action logging behind one configuration, console and clock
#[derive(Debug)]
pub struct AppLogger {
    errors: ErrorLogger,
    actions: ActionLogger,
}

impl AppLogger {
    pub fn new(config: &LoggerConfig, console: Arc<Console>, clock: Arc<dyn Clock>) -> Self {
        Self {
            errors: ErrorLogger::new(config, Arc::clone(&console), Arc::clone(&clock)),
            actions: ActionLogger::new(config, console, clock),
        }
    }

    /// Stderr console and the system clock
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(
            config,
            Arc::new(Console::from_config(config)),
            Arc::new(SystemClock),
        )
    }

    /// Configuration from the config file, overlaid by the environment
    pub fn load() -> AppLogResult<Self> {
        let config = LoggerConfig::load()?;
        Ok(Self::from_config(&config))
    }

    pub fn errors(&self) -> &ErrorLogger {
        &self.errors
    }

    pub fn actions(&self) -> &ActionLogger {
        &self.actions
    }

    pub fn log_error(&self, message: &str, details: &str) -> AppLogResult<PathBuf> {
        self.errors.log_error(message, details)
    }

    pub fn log_created_success<A>(&self, entity_name: &str, attributes: &A) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.actions.log_created_success(entity_name, attributes)
    }

    pub fn log_updated_success<A>(&self, entity_name: &str, attributes: &A) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.actions.log_updated_success(entity_name, attributes)
    }

    pub fn log_deleted_success<A>(&self, entity_name: &str, attributes: &A) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.actions.log_deleted_success(entity_name, attributes)
    }

    pub fn log_action<A>(
        &self,
        kind: ActionKind,
        entity_name: &str,
        attributes: &A,
    ) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.actions.log_action(kind, entity_name, attributes)
    }
}
