//! Assembly identity: the name, version, culture and strong name an assembly is known by.
//!
//! [`AssemblyIdentity`] is immutable once the source assembly is bound. The emitter projects it
//! into the Assembly table row (flags, public key, culture, version) and into display names
//! used in diagnostics.

use std::{fmt, str::FromStr};

use crate::{
    metadata::{
        identity::cryptographic::{from_hex, public_key_token, to_hex, PUBLIC_KEY_TOKEN_SIZE},
        tables::AssemblyFlags,
    },
    Error, Result,
};

/// Four-part assembly version, `major.minor.build.revision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AssemblyVersion {
    /// Major version
    pub major: u16,
    /// Minor version
    pub minor: u16,
    /// Build number
    pub build: u16,
    /// Revision number
    pub revision: u16,
}

impl AssemblyVersion {
    /// Creates a version from its four components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parses `1`, `1.2`, `1.2.3` or `1.2.3.4`; missing components are zero.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for more than four components or a component that
    /// isn't a `u16`.
    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.split('.').collect();
        if parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [0u16; 4];
        for (component, part) in components.iter_mut().zip(&parts) {
            *component = part
                .parse::<u16>()
                .map_err(|_| malformed_error!("Invalid version component: {}", part))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Kind of content an assembly carries, stored in bits 9-11 of the assembly flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssemblyContentType {
    /// Regular managed code
    #[default]
    Default,
    /// Windows Runtime metadata
    WindowsRuntime,
}

impl AssemblyContentType {
    /// Flag bits of this content type.
    #[must_use]
    pub fn flags(&self) -> AssemblyFlags {
        match self {
            AssemblyContentType::Default => AssemblyFlags::empty(),
            AssemblyContentType::WindowsRuntime => AssemblyFlags::WINDOWS_RUNTIME,
        }
    }

    /// Decodes the content type bits of raw assembly flags; unknown values map to `Default`.
    #[must_use]
    pub fn from_flags(flags: u32) -> Self {
        if flags & AssemblyFlags::CONTENT_TYPE_MASK == AssemblyFlags::WINDOWS_RUNTIME.bits() {
            AssemblyContentType::WindowsRuntime
        } else {
            AssemblyContentType::Default
        }
    }
}

/// Identity of an assembly.
///
/// ```rust
/// use dotemit::metadata::identity::{AssemblyIdentity, AssemblyVersion};
///
/// let identity = AssemblyIdentity::new("Contoso.Core", AssemblyVersion::new(1, 2, 0, 0))
///     .with_culture("de-DE");
/// assert_eq!(
///     identity.display_name(),
///     "Contoso.Core, Version=1.2.0.0, Culture=de-DE, PublicKeyToken=null"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyIdentity {
    /// Simple name, without extension
    pub name: String,
    /// Four-part version
    pub version: AssemblyVersion,
    /// Culture, `None` for culture-neutral assemblies
    pub culture: Option<String>,
    // set together by `with_public_key`, so the token always matches the key
    public_key: Vec<u8>,
    public_key_token: Vec<u8>,
    /// Content type
    pub content_type: AssemblyContentType,
    /// The assembly may be redirected to another publisher's implementation at runtime
    pub retargetable: bool,
}

impl AssemblyIdentity {
    /// Creates a culture-neutral identity without a strong name.
    pub fn new(name: impl Into<String>, version: AssemblyVersion) -> Self {
        Self {
            name: name.into(),
            version,
            culture: None,
            public_key: Vec::new(),
            public_key_token: Vec::new(),
            content_type: AssemblyContentType::Default,
            retargetable: false,
        }
    }

    /// Sets the culture; `""` and `"neutral"` mean culture-neutral.
    #[must_use]
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        let culture = culture.into();
        self.culture = match culture.as_str() {
            "" | "neutral" => None,
            _ => Some(culture),
        };
        self
    }

    /// Sets the full public key and derives its token.
    #[must_use]
    pub fn with_public_key(mut self, public_key: Vec<u8>) -> Self {
        self.public_key_token = public_key_token(&public_key);
        self.public_key = public_key;
        self
    }

    /// Sets only the public key token, as found in references.
    #[must_use]
    pub fn with_public_key_token(mut self, token: Vec<u8>) -> Self {
        self.public_key.clear();
        self.public_key_token = token;
        self
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: AssemblyContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Marks the identity as retargetable.
    #[must_use]
    pub fn retargetable(mut self) -> Self {
        self.retargetable = true;
        self
    }

    /// Full public key, empty if the assembly isn't strong-named.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Public key token, derived from [`AssemblyIdentity::public_key`] or given directly for
    /// references.
    #[must_use]
    pub fn public_key_token(&self) -> &[u8] {
        &self.public_key_token
    }

    /// Returns `true` if a full public key is present.
    #[must_use]
    pub fn has_public_key(&self) -> bool {
        !self.public_key.is_empty()
    }

    /// Returns `true` if the assembly carries a strong name, by key or by token.
    #[must_use]
    pub fn is_strong_named(&self) -> bool {
        !self.public_key_token.is_empty()
    }

    /// Culture name, `""` for culture-neutral assemblies.
    #[must_use]
    pub fn culture_name(&self) -> &str {
        self.culture.as_deref().unwrap_or("")
    }

    /// Assembly flags implied by this identity.
    ///
    /// `PUBLIC_KEY` is set exactly when a full public key is present.
    #[must_use]
    pub fn flags(&self) -> AssemblyFlags {
        let mut flags = self.content_type.flags();
        flags.set(AssemblyFlags::PUBLIC_KEY, self.has_public_key());
        flags.set(AssemblyFlags::RETARGETABLE, self.retargetable);
        flags
    }

    /// Formats the identity as `Name, Version=a.b.c.d, Culture=c, PublicKeyToken=t`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut display = format!(
            "{}, Version={}, Culture={}, PublicKeyToken={}",
            self.name,
            self.version,
            self.culture.as_deref().unwrap_or("neutral"),
            if self.public_key_token.is_empty() {
                "null".to_string()
            } else {
                to_hex(&self.public_key_token)
            }
        );

        if self.retargetable {
            display.push_str(", Retargetable=Yes");
        }
        if self.content_type == AssemblyContentType::WindowsRuntime {
            display.push_str(", ContentType=WindowsRuntime");
        }

        display
    }

    /// Parses a display name as produced by [`AssemblyIdentity::display_name`].
    ///
    /// Unknown components are ignored; a missing version is `0.0.0.0`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for an empty name, an invalid version or a token
    /// that isn't 16 hex digits.
    pub fn parse(display_name: &str) -> Result<Self> {
        let mut parts = display_name.split(',').map(str::trim);

        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(malformed_error!("Assembly name cannot be empty"));
        }

        let mut identity = AssemblyIdentity::new(name, AssemblyVersion::default());
        for part in parts {
            if let Some(value) = part.strip_prefix("Version=") {
                identity.version = AssemblyVersion::parse(value)?;
            } else if let Some(value) = part.strip_prefix("Culture=") {
                identity = identity.with_culture(value);
            } else if let Some(value) = part.strip_prefix("PublicKeyToken=") {
                if value != "null" && !value.is_empty() {
                    let token = from_hex(value)?;
                    if token.len() != PUBLIC_KEY_TOKEN_SIZE {
                        return Err(malformed_error!(
                            "PublicKeyToken must be exactly 8 bytes, got {} bytes from '{}'",
                            token.len(),
                            value
                        ));
                    }
                    identity = identity.with_public_key_token(token);
                }
            } else if let Some(value) = part.strip_prefix("Retargetable=") {
                identity.retargetable = value.eq_ignore_ascii_case("yes");
            } else if let Some(value) = part.strip_prefix("ContentType=") {
                if value == "WindowsRuntime" {
                    identity.content_type = AssemblyContentType::WindowsRuntime;
                }
            }
        }

        Ok(identity)
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for AssemblyIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_parse() {
        assert_eq!(
            AssemblyVersion::parse("1.2.3.4").unwrap(),
            AssemblyVersion::new(1, 2, 3, 4)
        );
        assert_eq!(
            AssemblyVersion::parse("4.0").unwrap(),
            AssemblyVersion::new(4, 0, 0, 0)
        );
        assert!(AssemblyVersion::parse("1.2.3.4.5").is_err());
        assert!(AssemblyVersion::parse("1.x").is_err());
        assert!(AssemblyVersion::parse("70000").is_err());
        assert_eq!(AssemblyVersion::new(1, 0, 0, 7).to_string(), "1.0.0.7");
    }

    #[test]
    fn public_key_flag_follows_key() {
        let plain = AssemblyIdentity::new("A", AssemblyVersion::default());
        assert!(!plain.flags().contains(AssemblyFlags::PUBLIC_KEY));

        let signed = plain.clone().with_public_key(vec![1, 2, 3]);
        assert!(signed.flags().contains(AssemblyFlags::PUBLIC_KEY));
        assert_eq!(signed.public_key(), &[1, 2, 3]);
        assert_eq!(signed.public_key_token(), public_key_token(&[1, 2, 3]));

        // replacing the key replaces the token with it
        let resigned = signed.with_public_key(vec![4, 5, 6]);
        assert_eq!(resigned.public_key_token(), public_key_token(&[4, 5, 6]));

        let by_token = plain.with_public_key_token(vec![0; 8]);
        assert!(!by_token.flags().contains(AssemblyFlags::PUBLIC_KEY));
        assert!(by_token.is_strong_named());
    }

    #[test]
    fn content_type_and_retargetable_flags() {
        let identity = AssemblyIdentity::new("Windows", AssemblyVersion::new(255, 255, 255, 255))
            .with_content_type(AssemblyContentType::WindowsRuntime)
            .retargetable();

        let flags = identity.flags();
        assert!(flags.contains(AssemblyFlags::WINDOWS_RUNTIME));
        assert!(flags.contains(AssemblyFlags::RETARGETABLE));
        assert_eq!(
            AssemblyContentType::from_flags(flags.bits()),
            AssemblyContentType::WindowsRuntime
        );
        assert_eq!(AssemblyContentType::from_flags(0), AssemblyContentType::Default);
    }

    #[test]
    fn display_name_roundtrip() {
        let display = "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
        let identity = AssemblyIdentity::parse(display).unwrap();

        assert_eq!(identity.name, "mscorlib");
        assert_eq!(identity.version, AssemblyVersion::new(4, 0, 0, 0));
        assert_eq!(identity.culture, None);
        assert_eq!(
            identity.public_key_token(),
            &[0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]
        );
        assert!(!identity.has_public_key());
        assert_eq!(identity.to_string(), display);
    }

    #[test]
    fn display_name_extras() {
        let identity: AssemblyIdentity =
            "Lib, Version=1.0, Culture=fr, Retargetable=Yes, ContentType=WindowsRuntime"
                .parse()
                .unwrap();

        assert_eq!(identity.culture_name(), "fr");
        assert!(identity.retargetable);
        assert_eq!(identity.content_type, AssemblyContentType::WindowsRuntime);
        assert_eq!(
            identity.display_name(),
            "Lib, Version=1.0.0.0, Culture=fr, PublicKeyToken=null, Retargetable=Yes, ContentType=WindowsRuntime"
        );
    }

    #[test]
    fn parse_errors() {
        assert!(AssemblyIdentity::parse("").is_err());
        assert!(AssemblyIdentity::parse(", Version=1.0").is_err());
        assert!(AssemblyIdentity::parse("A, PublicKeyToken=abcd").is_err());
        assert!(AssemblyIdentity::parse("A, Version=a.b").is_err());
    }
}
