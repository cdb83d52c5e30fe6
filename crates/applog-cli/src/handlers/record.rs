use crate::cli::{ActionArgs, ErrorArgs};
use anyhow::Context;
use applog_core::{ActionKind, LoggerConfig};
use applog_store::AppLogger;

pub fn handle_error(config: &LoggerConfig, args: ErrorArgs) -> anyhow::Result<()> {
    let logger = AppLogger::from_config(config);
    let path = logger.log_error(&args.message, &args.details)?;
    tracing::debug!("Error recorded in {}", path.display());
    Ok(())
}

pub fn handle_action(
    config: &LoggerConfig,
    kind: ActionKind,
    args: ActionArgs,
) -> anyhow::Result<()> {
    let attributes: serde_json::Value = serde_json::from_str(&args.attributes)
        .with_context(|| format!("invalid --attributes JSON: {}", args.attributes))?;

    let logger = AppLogger::from_config(config);
    let path = logger.log_action(kind, &args.entity, &attributes)?;
    tracing::debug!("{} recorded in {}", kind, path.display());
    Ok(())
}
