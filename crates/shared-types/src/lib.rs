pub mod assignment;
pub mod config;
pub mod error;

pub use assignment::*;
pub use config::*;
pub use error::*;
