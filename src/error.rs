use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors are reserved for conditions a caller has to act on: unreadable module images,
/// unsupported hash algorithms when a hash is actually requested, or a symbol graph that
/// violates a structural precondition. Problems that should be surfaced to the user without
/// stopping emission are reported through [`crate::metadata::diagnostics::Diagnostics`]
/// instead and never show up here.
///
/// # Error Categories
///
/// ## Image Parsing Errors
/// - [`Error::Malformed`] - Corrupted or invalid linked module image
/// - [`Error::OutOfBounds`] - Attempted to read beyond the image boundaries
/// - [`Error::Empty`] - Empty input provided
///
/// ## I/O Errors
/// - [`Error::FileError`] - Filesystem I/O errors while mapping module or resource files
///
/// ## Emission Errors
/// - [`Error::UnsupportedHashAlgorithm`] - A file hash was requested with an unknown algorithm
/// - [`Error::MissingContainingType`] - A method implementation record was requested for a
///   method that is not declared inside a type
///
/// # Examples
///
/// ```rust
/// use dotemit::{metadata::identity::hash_data, Error};
///
/// match hash_data(0x1234, b"payload") {
///     Err(Error::UnsupportedHashAlgorithm(id)) => assert_eq!(id, 0x1234),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The image is damaged and could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected
    /// for debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while reading an image.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while opening or mapping module images
    /// and linked resource files.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),

    /// The requested hash algorithm is not one this emitter can compute.
    ///
    /// The associated value is the raw `AssemblyHashAlgorithm` identifier.
    #[error("Unsupported hash algorithm - 0x{0:04x}")]
    UnsupportedHashAlgorithm(u32),

    /// The method has no containing type and can't be the body of a `MethodImpl` row.
    ///
    /// The associated value is the name of the offending method.
    #[error("Method '{0}' is not declared inside a type")]
    MissingContainingType(String),
}
