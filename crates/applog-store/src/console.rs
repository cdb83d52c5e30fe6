use applog_core::{ActionKind, LoggerConfig};
use chrono::{DateTime, FixedOffset};
use crossterm::style::{style, StyledContent, Stylize};
use std::fmt::Display;
use std::io::Write;
use std::sync::Mutex;

/// Human-readable mirror of each log record
///
/// Lines look like `[APP] 2024/01/31 14:05:09 ERROR Message: db timeout`.
/// Failures writing to the sink are traced and otherwise ignored.
pub struct Console {
    sink: Mutex<Box<dyn Write + Send>>,
    prefix: String,
    ansi: bool,
}

impl Console {
    pub fn new(sink: impl Write + Send + 'static, prefix: impl Into<String>, ansi: bool) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
            prefix: prefix.into(),
            ansi,
        }
    }

    pub fn stderr(prefix: impl Into<String>, ansi: bool) -> Self {
        Self::new(std::io::stderr(), prefix, ansi)
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::stderr(config.console_prefix.clone(), config.ansi)
    }

    pub fn error_lines(&self, at: &DateTime<FixedOffset>, message: &str, details: &str) {
        let error = self.paint(style("ERROR").dark_red());
        let body = format!("{} {}: {}", error, self.paint(style("Message").dark_cyan()), message);
        self.write_line(at, &body);

        if !details.is_empty() {
            let body = format!("{} {}: {}", error, self.paint(style("Details").dark_cyan()), details);
            self.write_line(at, &body);
        }
    }

    pub fn action_line(
        &self,
        at: &DateTime<FixedOffset>,
        kind: ActionKind,
        entity_name: &str,
        attributes_json: &str,
    ) {
        let entity = self.paint(style(format!(" {} ", entity_name)).grey().on_cyan());
        let body = format!("{} {}: {}", self.kind_tag(kind), entity, attributes_json);
        self.write_line(at, &body);
    }

    fn kind_tag(&self, kind: ActionKind) -> String {
        let tag = style(format!(" {} ", kind)).grey();
        let tag = match kind {
            ActionKind::Create => tag.on_dark_green(),
            ActionKind::Update => tag.on_dark_yellow(),
            ActionKind::Delete => tag.on_dark_red(),
        };
        self.paint(tag)
    }

    fn paint<D: Display>(&self, styled: StyledContent<D>) -> String {
        if self.ansi {
            styled.to_string()
        } else {
            styled.content().to_string()
        }
    }

    fn write_line(&self, at: &DateTime<FixedOffset>, body: &str) {
        let line = format!("{}{} {}\n", self.prefix, at.format("%Y/%m/%d %H:%M:%S"), body);
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let result = sink.write_all(line.as_bytes());
        if let Err(e) = result.and_then(|()| sink.flush()) {
            tracing::warn!("Failed to write console log line: {}", e);
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("prefix", &self.prefix)
            .field("ansi", &self.ansi)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn at() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-31T14:05:09+01:00").unwrap()
    }

    #[test]
    fn test_error_without_details_is_one_line() {
        let out = Captured::default();
        let console = Console::new(out.clone(), "[APP] ", false);

        console.error_lines(&at(), "db timeout", "");

        assert_eq!(out.text(), "[APP] 2024/01/31 14:05:09 ERROR Message: db timeout\n");
    }

    #[test]
    fn test_error_with_details_adds_second_line() {
        let out = Captured::default();
        let console = Console::new(out.clone(), "[APP] ", false);

        console.error_lines(&at(), "db timeout", "after 30s");

        let text = out.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "[APP] 2024/01/31 14:05:09 ERROR Details: after 30s");
    }

    #[test]
    fn test_action_line_plain() {
        let out = Captured::default();
        let console = Console::new(out.clone(), "", false);

        console.action_line(&at(), ActionKind::Delete, "User", r#"{"id":1}"#);

        assert_eq!(out.text(), "2024/01/31 14:05:09  DELETE   User : {\"id\":1}\n");
    }

    #[test]
    fn test_ansi_output_wraps_tags_in_escape_codes() {
        let out = Captured::default();
        let console = Console::new(out.clone(), "[APP] ", true);

        console.action_line(&at(), ActionKind::Create, "Order", "{}");

        let text = out.text();
        assert!(text.contains(" CREATE "));
        assert!(text.contains(" Order "));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(text.contains('\u{1b}'));
        }
    }
}
