pub mod value;

pub use value::{Category, Value};
