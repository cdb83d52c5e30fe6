use crate::error::AppLogError;

pub type AppLogResult<T> = Result<T, AppLogError>;
