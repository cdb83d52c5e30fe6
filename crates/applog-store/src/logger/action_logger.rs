use crate::console::Console;
use crate::serialization::JsonRecordSerializer;
use crate::store::DailyLogFile;
use crate::traits::RecordSerializer;
use applog_core::{
    ActionKind, ActionLogEntry, AppLogResult, Clock, LoggerConfig, SystemClock,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Success log for create/update/delete operations
///
/// Each kind has its own directory; all of them use `action_<date>.log`.
pub struct ActionLogger {
    config: LoggerConfig,
    console: Arc<Console>,
    clock: Arc<dyn Clock>,
}

impl ActionLogger {
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

    pub fn current_path(&self, kind: ActionKind) -> AppLogResult<PathBuf> {
        Ok(self.file(kind)?.path_for(self.clock.today()))
    }

    fn file(&self, kind: ActionKind) -> AppLogResult<DailyLogFile> {
        Ok(DailyLogFile::actions(self.config.dir_for(kind)?))
    }

    pub fn log_created_success<A>(&self, entity_name: &str, attributes: &A) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.log_action_success(ActionKind::Create, entity_name, attributes)
    }

    pub fn log_updated_success<A>(&self, entity_name: &str, attributes: &A) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.log_action_success(ActionKind::Update, entity_name, attributes)
    }

    pub fn log_deleted_success<A>(&self, entity_name: &str, attributes: &A) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        self.log_action_success(ActionKind::Delete, entity_name, attributes)
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
        match kind {
            ActionKind::Create => self.log_created_success(entity_name, attributes),
            ActionKind::Update => self.log_updated_success(entity_name, attributes),
            ActionKind::Delete => self.log_deleted_success(entity_name, attributes),
        }
    }

    pub fn entries_on(
        &self,
        kind: ActionKind,
        date: chrono::NaiveDate,
    ) -> AppLogResult<Vec<ActionLogEntry>> {
        self.file(kind)?.read_day(date)
    }

    fn log_action_success<A>(
        &self,
        kind: ActionKind,
        entity_name: &str,
        attributes: &A,
    ) -> AppLogResult<PathBuf>
    where
        A: Serialize + ?Sized,
    {
        let file = self.file(kind)?;
        let now = self.clock.now();
        let attributes = serde_json::to_value(attributes)?;
        let entry = ActionLogEntry::new(&now, kind, entity_name, attributes);
        let bytes = JsonRecordSerializer.serialize(&entry)?;

        let path = file.append(now.date_naive(), &bytes)?;

        let attributes_json = serde_json::to_string(&entry.attributes)?;
        self.console
            .action_line(&now, kind, &entry.entity_name, &attributes_json);
        Ok(path)
    }
}

impl std::fmt::Debug for ActionLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionLogger")
            .field("created_dir", &self.config.created_dir)
            .field("updated_dir", &self.config.updated_dir)
            .field("deleted_dir", &self.config.deleted_dir)
            .finish()
    }
}
