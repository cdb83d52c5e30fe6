use crate::traits::RecordSerializer;
use applog_core::AppLogResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compact JSON, one record per line
///
/// Reading accepts both newline-delimited records and objects written
/// back-to-back with no separator at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordSerializer;

impl<T: Serialize + DeserializeOwned> RecordSerializer<T> for JsonRecordSerializer {
    fn serialize(&self, record: &T) -> AppLogResult<Vec<u8>> {
        let mut bytes = serde_json::to_vec(record)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn deserialize_all(&self, bytes: &[u8]) -> AppLogResult<Vec<T>> {
        let records = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<T>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
