pub mod console;
pub mod logger;
pub mod serialization;
pub mod store;
pub mod traits;

pub use console::Console;
pub use logger::*;
pub use serialization::*;
pub use store::*;
pub use traits::*;
