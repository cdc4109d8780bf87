/// Typed, trust-scoped stream reading for verification inputs
pub mod reader;
pub mod source;

pub use reader::{StreamError, TokenReader};
pub use source::{Source, Trust};
