pub mod codec;
pub mod error;
pub mod models;

pub use error::Error;
