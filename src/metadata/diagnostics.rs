//! Diagnostics collection for assembly emission.
//!
//! This module provides the diagnostic sink the emission layer reports into. Emission never
//! stops for a reported problem: an unsupported hash algorithm, a corrupt linked module or an
//! over-long file name is recorded here, and the compilation driver decides afterwards whether
//! the collected diagnostics block producing the final image.
//!
//! # Architecture
//!
//! The [`Diagnostics`] container uses `boxcar::Vec` for thread-safe, lock-free append
//! operations, allowing diagnostics to be reported from parallel emission sub-tasks without
//! synchronization overhead. Ordering of entries is not significant.
//!
//! # Key Components
//!
//! - [`Diagnostics`] - Thread-safe container for diagnostic entries
//! - [`Diagnostic`] - Individual diagnostic entry with code, severity and location
//! - [`ErrorCode`] - Stable identifier of each diagnostic the emitter can produce
//! - [`DiagnosticSeverity`] - Severity level (Info, Warning, Error)
//! - [`Location`] - Source location or the "no location" sentinel
//!
//! # Usage Examples
//!
//! ```rust
//! use dotemit::metadata::diagnostics::{Diagnostic, Diagnostics, ErrorCode, Location};
//!
//! let diagnostics = Diagnostics::new();
//! diagnostics.push(Diagnostic::new(ErrorCode::CryptoHashFailed, Location::None));
//!
//! assert!(diagnostics.has_errors());
//! assert_eq!(diagnostics.count_code(ErrorCode::CryptoHashFailed), 1);
//! for entry in diagnostics.iter() {
//!     println!("{entry}");
//! }
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are [`Send`] and [`Sync`]. Multiple threads can safely add
//! diagnostics simultaneously without coordination.

use std::fmt;

use strum::{EnumCount, EnumIter};

use crate::metadata::token::Token;

/// Severity level of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    Info,

    /// Warning about a construct that is emitted but probably not what the user wanted.
    Warning,

    /// Error; the compilation driver is expected to refuse producing an output image.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "info"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Error => write!(f, "error"),
        }
    }
}

/// Stable identifier of every diagnostic the emission layer reports.
///
/// The identifiers are the ones users already know from the command-line compiler, so they
/// must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ErrorCode {
    /// The configured assembly hash algorithm can't be computed but there are files to hash.
    CryptoHashFailed,

    /// A linked module image is malformed and its resources can't be read.
    BindToBogus,

    /// A name or path written to the string heap exceeds the metadata length limit.
    MetadataNameTooLong,

    /// A linked resource file could not be read while computing its hash.
    ResourceFileUnreadable,
}

impl ErrorCode {
    /// Returns the stable, user-visible identifier.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            ErrorCode::CryptoHashFailed => "CS8013",
            ErrorCode::BindToBogus => "CS0570",
            ErrorCode::MetadataNameTooLong => "CS7013",
            ErrorCode::ResourceFileUnreadable => "CS1566",
        }
    }

    /// Returns the default severity.
    #[must_use]
    pub fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    /// Returns the message with `{0}` standing for the first argument.
    #[must_use]
    pub fn message_format(&self) -> &'static str {
        match self {
            ErrorCode::CryptoHashFailed => "Cryptographic failure while creating hashes.",
            ErrorCode::BindToBogus => "'{0}' is not supported by the language",
            ErrorCode::MetadataNameTooLong => {
                "Name '{0}' exceeds the maximum length allowed in metadata."
            }
            ErrorCode::ResourceFileUnreadable => "Error reading resource '{0}'",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where a diagnostic points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Sentinel for diagnostics that are not tied to source, such as most emit-time problems.
    None,

    /// A span inside a source document.
    Source {
        /// Path of the source document
        path: String,
        /// Start offset of the span
        start: u32,
        /// Length of the span
        length: u32,
    },

    /// A metadata module, identified by file name.
    Module(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::None => Ok(()),
            Location::Source {
                path,
                start,
                length,
            } => write!(f, "{path}[{start}..{}]", start + length),
            Location::Module(name) => write!(f, "{name}"),
        }
    }
}

/// A single diagnostic entry.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Stable identifier.
    pub code: ErrorCode,

    /// Severity level of this diagnostic.
    pub severity: DiagnosticSeverity,

    /// Where the diagnostic points to.
    pub location: Location,

    /// Message arguments; the first one replaces `{0}` in the message format.
    pub arguments: Vec<String>,

    /// Optional metadata token related to the issue.
    pub token: Option<Token>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the code's default severity and no arguments.
    #[must_use]
    pub fn new(code: ErrorCode, location: Location) -> Self {
        Self {
            code,
            severity: code.severity(),
            location,
            arguments: Vec::new(),
            token: None,
        }
    }

    /// Adds a message argument, usually the offending module or resource name.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Adds metadata token information to the diagnostic.
    #[must_use]
    pub fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    /// Returns the formatted message.
    #[must_use]
    pub fn message(&self) -> String {
        let format = self.code.message_format();
        match self.arguments.first() {
            Some(argument) => format.replace("{0}", argument),
            None => format.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location != Location::None {
            write!(f, "{}: ", self.location)?;
        }

        write!(f, "{} {}: {}", self.severity, self.code, self.message())?;

        if let Some(token) = self.token {
            write!(f, " (token: {token})")?;
        }

        Ok(())
    }
}

/// Thread-safe container for collecting diagnostic entries.
///
/// Uses `boxcar::Vec` internally for lock-free concurrent append operations.
#[derive(Debug)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds a diagnostic entry.
    pub fn push(&self, diagnostic: Diagnostic) {
        tracing::debug!(code = %diagnostic.code, message = %diagnostic.message(), "diagnostic reported");
        self.entries.push(diagnostic);
    }

    /// Reports `code` without a location and with a single argument.
    pub fn report(&self, code: ErrorCode, argument: impl Into<String>) {
        self.push(Diagnostic::new(code, Location::None).with_argument(argument));
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Error)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns the number of diagnostics with the given code.
    pub fn count_code(&self, code: ErrorCode) -> usize {
        self.entries.iter().filter(|(_, d)| d.code == code).count()
    }

    /// Returns an iterator over all collected diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(_, d)| d)
    }

    /// Returns a snapshot of all diagnostics with the given code.
    pub fn with_code(&self, code: ErrorCode) -> Vec<Diagnostic> {
        self.iter().filter(|d| d.code == code).cloned().collect()
    }

    /// Returns a summary string of all diagnostics.
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        for entry in self.iter() {
            summary.push_str(&entry.to_string());
            summary.push('\n');
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, sync::Arc, thread};
    use strum::IntoEnumIterator;

    #[test]
    fn codes_are_unique() {
        let ids: HashSet<_> = ErrorCode::iter().map(|code| code.id()).collect();
        assert_eq!(ids.len(), ErrorCode::COUNT);
    }

    #[test]
    fn message_formatting() {
        let diagnostic = Diagnostic::new(ErrorCode::BindToBogus, Location::None)
            .with_argument("Broken.netmodule");
        assert_eq!(
            diagnostic.message(),
            "'Broken.netmodule' is not supported by the language"
        );
        assert_eq!(
            diagnostic.to_string(),
            "error CS0570: 'Broken.netmodule' is not supported by the language"
        );

        let located = Diagnostic::new(
            ErrorCode::MetadataNameTooLong,
            Location::Module("A.netmodule".to_string()),
        )
        .with_argument("x")
        .with_token(Token::new(0x2600_0001));
        assert_eq!(
            located.to_string(),
            "A.netmodule: error CS7013: Name 'x' exceeds the maximum length allowed in metadata. (token: 0x26000001)"
        );
    }

    #[test]
    fn message_without_arguments() {
        let diagnostic = Diagnostic::new(ErrorCode::CryptoHashFailed, Location::None);
        assert_eq!(
            diagnostic.message(),
            "Cryptographic failure while creating hashes."
        );
    }

    #[test]
    fn counting() {
        let diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_any());
        assert!(!diagnostics.has_errors());

        diagnostics.report(ErrorCode::BindToBogus, "A");
        diagnostics.report(ErrorCode::BindToBogus, "B");
        diagnostics.push(Diagnostic::new(ErrorCode::CryptoHashFailed, Location::None));

        assert!(diagnostics.has_any());
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.count(), 3);
        assert_eq!(diagnostics.count_code(ErrorCode::BindToBogus), 2);
        assert_eq!(diagnostics.with_code(ErrorCode::CryptoHashFailed).len(), 1);
        assert_eq!(diagnostics.summary().lines().count(), 3);
    }

    #[test]
    fn concurrent_push() {
        let diagnostics = Arc::new(Diagnostics::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let diagnostics = Arc::clone(&diagnostics);
                thread::spawn(move || {
                    for j in 0..50 {
                        diagnostics.report(ErrorCode::BindToBogus, format!("{i}-{j}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.count(), 400);
    }
}
