//! Metadata table definitions the emitter reads or produces.
//!
//! The emitter hands finished rows to an external table writer, so only the pieces it needs
//! to compute row contents live here: Assembly flags and hash algorithm identifiers, File
//! attributes, and the ManifestResource row reader used for linked modules.

mod assembly;
mod file;
mod manifestresource;

pub use assembly::*;
pub use file::*;
pub use manifestresource::*;
