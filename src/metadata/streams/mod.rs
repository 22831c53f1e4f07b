//! Metadata heaps read from linked modules.

mod strings;

pub use strings::Strings;
