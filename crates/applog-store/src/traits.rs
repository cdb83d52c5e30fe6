use applog_core::AppLogResult;

/// Encoding of individual log records
/// Allows swapping the on-disk record framing without touching the loggers
pub trait RecordSerializer<T>: Send + Sync {
    /// Encode one record, including any trailing delimiter
    fn serialize(&self, record: &T) -> AppLogResult<Vec<u8>>;

    /// Decode every record found in a file's contents
    fn deserialize_all(&self, bytes: &[u8]) -> AppLogResult<Vec<T>>;
}
