use crate::cli::{LogKind, ShowArgs};
use applog_core::{ActionKind, Clock, LoggerConfig, SystemClock};
use applog_store::{read_entries, DailyLogFile};
use serde_json::Value;

pub fn handle(config: &LoggerConfig, args: ShowArgs) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(|| SystemClock.today());
    let file = match args.log {
        LogKind::Error => DailyLogFile::errors(config.error_dir()?),
        LogKind::Create => DailyLogFile::actions(config.dir_for(ActionKind::Create)?),
        LogKind::Update => DailyLogFile::actions(config.dir_for(ActionKind::Update)?),
        LogKind::Delete => DailyLogFile::actions(config.dir_for(ActionKind::Delete)?),
    };

    let records: Vec<Value> = read_entries(&file.path_for(date))?;
    for record in records {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
