pub mod kind;

pub use expresso_error::Error;
