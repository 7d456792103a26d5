//! Password generation core.

pub mod charset;
mod generate;

pub use generate::GenerateError;
pub use generate::generate;
