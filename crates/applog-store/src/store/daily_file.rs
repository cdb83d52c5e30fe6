use applog_core::{AppLogError, AppLogResult};
use chrono::NaiveDate;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::serialization::JsonRecordSerializer;
use crate::traits::RecordSerializer;

pub const ERROR_FILE_PREFIX: &str = "error";
pub const ACTION_FILE_PREFIX: &str = "action";

/// A directory of `<prefix>_<YYYY-MM-DD>.log` files, one per calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLogFile {
    dir: PathBuf,
    prefix: &'static str,
}

impl DailyLogFile {
    pub fn new(dir: impl AsRef<Path>, prefix: &'static str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            prefix,
        }
    }

    pub fn errors(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, ERROR_FILE_PREFIX)
    }

    pub fn actions(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, ACTION_FILE_PREFIX)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.log", self.prefix, date.format("%Y-%m-%d"))
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(self.file_name(date))
    }

    /// Create the directory and any missing parents
    pub fn ensure_dir(&self) -> AppLogResult<()> {
        if self.dir.is_dir() {
            return Ok(());
        }

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(&self.dir)
            .map_err(|source| AppLogError::DirectoryCreation {
                path: self.dir.clone(),
                source,
            })?;

        tracing::info!("Created log directory {}", self.dir.display());
        Ok(())
    }

    /// Append raw bytes to the given day's file, creating it if absent
    /// The handle is dropped before returning on every path
    pub fn append(&self, date: NaiveDate, bytes: &[u8]) -> AppLogResult<PathBuf> {
        self.ensure_dir()?;
        let path = self.path_for(date);

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }
        let mut file = options.open(&path).map_err(|source| AppLogError::FileOpen {
            path: path.clone(),
            source,
        })?;

        file.write_all(bytes).map_err(|source| AppLogError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Appended {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }

    /// All records written on the given day
    pub fn read_day<T>(&self, date: NaiveDate) -> AppLogResult<Vec<T>>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        read_entries(&self.path_for(date))
    }
}

/// Parse every record in a log file; a missing file has no records
pub fn read_entries<T>(path: &Path) -> AppLogResult<Vec<T>>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(AppLogError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    JsonRecordSerializer.deserialize_all(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_name_format() {
        let errors = DailyLogFile::errors("/logs");
        let actions = DailyLogFile::actions("/logs");
        assert_eq!(errors.file_name(day(2024, 3, 7)), "error_2024-03-07.log");
        assert_eq!(actions.file_name(day(2024, 12, 31)), "action_2024-12-31.log");
        assert_eq!(
            errors.path_for(day(2024, 3, 7)),
            Path::new("/logs").join("error_2024-03-07.log")
        );
    }

    #[test]
    fn test_append_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        let file = DailyLogFile::errors(&nested);

        let path = file.append(day(2024, 1, 1), b"{}\n").unwrap();

        assert!(nested.is_dir());
        assert_eq!(fs::read(&path).unwrap(), b"{}\n");
    }

    #[test]
    fn test_append_never_truncates() {
        let dir = tempdir().unwrap();
        let file = DailyLogFile::actions(dir.path());

        file.append(day(2024, 1, 1), b"first\n").unwrap();
        let path = file.append(day(2024, 1, 1), b"second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_directory_path_occupied_by_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let file = DailyLogFile::errors(&blocker);
        let err = file.append(day(2024, 1, 1), b"{}").unwrap_err();
        assert!(matches!(err, AppLogError::DirectoryCreation { .. }));
    }

    #[test]
    fn test_open_failure_when_log_path_is_a_directory() {
        let dir = tempdir().unwrap();
        let file = DailyLogFile::errors(dir.path());
        fs::create_dir(file.path_for(day(2024, 1, 1))).unwrap();

        let err = file.append(day(2024, 1, 1), b"{}").unwrap_err();
        assert!(matches!(err, AppLogError::FileOpen { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("logs");
        DailyLogFile::errors(&target).ensure_dir().unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        // umask can only remove bits
        assert_eq!(mode & !0o755, 0);
        assert_ne!(mode & 0o700, 0);
    }

    #[test]
    fn test_read_entries_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let entries: Vec<Value> = read_entries(&dir.path().join("nope.log")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_read_day_round_trip() {
        let dir = tempdir().unwrap();
        let file = DailyLogFile::actions(dir.path());
        file.append(day(2024, 2, 29), b"{\"n\":1}\n{\"n\":2}\n").unwrap();

        let entries: Vec<Value> = file.read_day(day(2024, 2, 29)).unwrap();
        assert_eq!(entries, vec![json!({"n": 1}), json!({"n": 2})]);

        let other: Vec<Value> = file.read_day(day(2024, 3, 1)).unwrap();
        assert!(other.is_empty());
    }
}
