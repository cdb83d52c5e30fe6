pub mod json_record;

pub use json_record::JsonRecordSerializer;
