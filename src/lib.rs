pub mod anonymizer;
pub mod config;
pub mod error;
pub mod ner;
pub mod server;

pub use error::{Error, Result};
