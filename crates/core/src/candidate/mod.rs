//! Search result candidates and the targets they are matched against.

mod types;

pub use types::*;
