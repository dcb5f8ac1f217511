//! Credential configuration.
//!
//! [`Credentials`] selects SNMPv1/v2c community authentication or SNMPv3
//! USM. The SNMP engine performs the actual authentication and encryption;
//! this crate only validates and carries the settings.
//!
//! ```
//! use snmp_inspect::{AuthProtocol, Credentials, PrivProtocol, SecurityLevel};
//!
//! // Nothing configured means v2c with the "public" community.
//! assert_eq!(Credentials::default(), Credentials::v2c("public"));
//!
//! let creds: Credentials = Credentials::usm("monitor")
//!     .auth(AuthProtocol::Sha256, "authpassword")
//!     .privacy(PrivProtocol::Aes128, "privpassword")
//!     .into();
//! assert_eq!(creds.security_level(), SecurityLevel::AuthPriv);
//! assert!(creds.validate().is_ok());
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// SNMP version for community-based authentication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CommunityVersion {
    /// SNMPv1
    V1,
    /// SNMPv2c
    #[default]
    V2c,
}

/// Protocol version a set of credentials selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V1,
    V2c,
    V3,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2c => write!(f, "v2c"),
            Self::V3 => write!(f, "v3"),
        }
    }
}

/// Credentials passed to the SNMP engine when connecting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Credentials {
    /// Community string authentication (SNMPv1 or v2c).
    Community {
        #[cfg_attr(feature = "serde", serde(default))]
        version: CommunityVersion,
        community: String,
    },
    /// User-based Security Model (SNMPv3).
    Usm(UsmCredentials),
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::v2c("public")
    }
}

impl Credentials {
    /// SNMPv1 community authentication.
    pub fn v1(community: impl Into<String>) -> Self {
        Credentials::Community {
            version: CommunityVersion::V1,
            community: community.into(),
        }
    }

    /// SNMPv2c community authentication.
    pub fn v2c(community: impl Into<String>) -> Self {
        Credentials::Community {
            version: CommunityVersion::V2c,
            community: community.into(),
        }
    }

    /// Start building SNMPv3 USM credentials.
    pub fn usm(user: impl Into<String>) -> UsmBuilder {
        UsmBuilder::new(user)
    }

    pub fn version(&self) -> Version {
        match self {
            Credentials::Community {
                version: CommunityVersion::V1,
                ..
            } => Version::V1,
            Credentials::Community {
                version: CommunityVersion::V2c,
                ..
            } => Version::V2c,
            Credentials::Usm(_) => Version::V3,
        }
    }

    /// Security level. Community credentials are always noAuthNoPriv.
    pub fn security_level(&self) -> SecurityLevel {
        match self {
            Credentials::Community { .. } => SecurityLevel::NoAuthNoPriv,
            Credentials::Usm(usm) => usm.level,
        }
    }

    /// The community string, for v1/v2c credentials.
    pub fn community(&self) -> Option<&str> {
        match self {
            Credentials::Community { community, .. } => Some(community),
            Credentials::Usm(_) => None,
        }
    }

    /// The USM user name, for v3 credentials.
    pub fn user(&self) -> Option<&str> {
        match self {
            Credentials::Usm(usm) => Some(&usm.user),
            Credentials::Community { .. } => None,
        }
    }

    /// Check that the credentials are complete for their security level.
    pub fn validate(&self) -> Result<()> {
        match self {
            Credentials::Community { .. } => Ok(()),
            Credentials::Usm(usm) => usm.validate(),
        }
    }
}

/// SNMPv3 USM parameters.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsmCredentials {
    pub user: String,
    pub level: SecurityLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub auth_protocol: Option<AuthProtocol>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub auth_key: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub priv_protocol: Option<PrivProtocol>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub priv_key: Option<String>,
}

impl UsmCredentials {
    fn validate(&self) -> Result<()> {
        if self.user.is_empty() {
            return Err(Error::Config("USM user name is empty".into()));
        }
        if self.level >= SecurityLevel::AuthNoPriv {
            if self.auth_protocol.is_none() {
                return Err(Error::Config(format!(
                    "security level {} requires an authentication protocol",
                    self.level
                )));
            }
            if self.auth_key.as_deref().is_none_or(str::is_empty) {
                return Err(Error::Config(format!(
                    "security level {} requires an authentication key",
                    self.level
                )));
            }
        }
        if self.level == SecurityLevel::AuthPriv {
            if self.priv_protocol.is_none() {
                return Err(Error::Config(
                    "security level authPriv requires a privacy protocol".into(),
                ));
            }
            if self.priv_key.as_deref().is_none_or(str::is_empty) {
                return Err(Error::Config(
                    "security level authPriv requires a privacy key".into(),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for UsmCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsmCredentials")
            .field("user", &self.user)
            .field("level", &self.level)
            .field("auth_protocol", &self.auth_protocol)
            .field("auth_key", &self.auth_key.as_ref().map(|_| "<redacted>"))
            .field("priv_protocol", &self.priv_protocol)
            .field("priv_key", &self.priv_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Builder for [`UsmCredentials`].
///
/// The security level follows from what is configured: a user alone is
/// noAuthNoPriv, `auth` makes it authNoPriv and `privacy` authPriv.
#[derive(Debug, Clone)]
pub struct UsmBuilder {
    creds: UsmCredentials,
}

impl UsmBuilder {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            creds: UsmCredentials {
                user: user.into(),
                level: SecurityLevel::NoAuthNoPriv,
                auth_protocol: None,
                auth_key: None,
                priv_protocol: None,
                priv_key: None,
            },
        }
    }

    pub fn auth(mut self, protocol: AuthProtocol, key: impl Into<String>) -> Self {
        self.creds.auth_protocol = Some(protocol);
        self.creds.auth_key = Some(key.into());
        self.creds.level = self.creds.level.max(SecurityLevel::AuthNoPriv);
        self
    }

    pub fn privacy(mut self, protocol: PrivProtocol, key: impl Into<String>) -> Self {
        self.creds.priv_protocol = Some(protocol);
        self.creds.priv_key = Some(key.into());
        self.creds.level = SecurityLevel::AuthPriv;
        self
    }

    /// Override the derived security level.
    pub fn level(mut self, level: SecurityLevel) -> Self {
        self.creds.level = level;
        self
    }

    pub fn build(self) -> UsmCredentials {
        self.creds
    }
}

impl From<UsmBuilder> for Credentials {
    fn from(builder: UsmBuilder) -> Self {
        Credentials::Usm(builder.build())
    }
}

impl From<UsmCredentials> for Credentials {
    fn from(usm: UsmCredentials) -> Self {
        Credentials::Usm(usm)
    }
}

/// SNMPv3 security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SecurityLevel {
    NoAuthNoPriv,
    AuthNoPriv,
    AuthPriv,
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAuthNoPriv => write!(f, "noAuthNoPriv"),
            Self::AuthNoPriv => write!(f, "authNoPriv"),
            Self::AuthPriv => write!(f, "authPriv"),
        }
    }
}

impl std::str::FromStr for SecurityLevel {
    type Err = ParseProtocolError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "noauthnopriv" => Ok(Self::NoAuthNoPriv),
            "authnopriv" => Ok(Self::AuthNoPriv),
            "authpriv" => Ok(Self::AuthPriv),
            _ => Err(ParseProtocolError {
                input: s.to_string(),
                kind: ProtocolKind::Level,
            }),
        }
    }
}

/// Authentication protocol identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthProtocol {
    /// HMAC-MD5-96 (RFC 3414)
    Md5,
    /// HMAC-SHA-96 (RFC 3414)
    Sha1,
    /// HMAC-SHA-224 (RFC 7860)
    Sha224,
    /// HMAC-SHA-256 (RFC 7860)
    Sha256,
    /// HMAC-SHA-384 (RFC 7860)
    Sha384,
    /// HMAC-SHA-512 (RFC 7860)
    Sha512,
}

impl fmt::Display for AuthProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => write!(f, "MD5"),
            Self::Sha1 => write!(f, "SHA"),
            Self::Sha224 => write!(f, "SHA-224"),
            Self::Sha256 => write!(f, "SHA-256"),
            Self::Sha384 => write!(f, "SHA-384"),
            Self::Sha512 => write!(f, "SHA-512"),
        }
    }
}

impl std::str::FromStr for AuthProtocol {
    type Err = ParseProtocolError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Self::Md5),
            "SHA" | "SHA1" | "SHA-1" => Ok(Self::Sha1),
            "SHA224" | "SHA-224" => Ok(Self::Sha224),
            "SHA256" | "SHA-256" => Ok(Self::Sha256),
            "SHA384" | "SHA-384" => Ok(Self::Sha384),
            "SHA512" | "SHA-512" => Ok(Self::Sha512),
            _ => Err(ParseProtocolError {
                input: s.to_string(),
                kind: ProtocolKind::Auth,
            }),
        }
    }
}

/// Privacy protocol identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrivProtocol {
    /// CBC-DES (RFC 3414)
    Des,
    /// CFB128-AES-128 (RFC 3826)
    Aes128,
    /// AES-256 with Blumenthal key extension
    Aes256Blumenthal,
    /// AES-256 with Reeder key extension
    Aes256Reeder,
}

impl fmt::Display for PrivProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Des => write!(f, "DES"),
            Self::Aes128 => write!(f, "AES"),
            Self::Aes256Blumenthal => write!(f, "AES-256-B"),
            Self::Aes256Reeder => write!(f, "AES-256-R"),
        }
    }
}

impl std::str::FromStr for PrivProtocol {
    type Err = ParseProtocolError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DES" => Ok(Self::Des),
            "AES" | "AES128" | "AES-128" => Ok(Self::Aes128),
            "AES256B" | "AES-256-B" => Ok(Self::Aes256Blumenthal),
            "AES256R" | "AES-256-R" => Ok(Self::Aes256Reeder),
            _ => Err(ParseProtocolError {
                input: s.to_string(),
                kind: ProtocolKind::Priv,
            }),
        }
    }
}

/// Error returned when parsing a protocol or level name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProtocolError {
    input: String,
    kind: ProtocolKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProtocolKind {
    Auth,
    Priv,
    Level,
}

impl fmt::Display for ParseProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProtocolKind::Auth => write!(
                f,
                "unknown authentication protocol '{}'; expected one of: MD5, SHA, SHA-224, SHA-256, SHA-384, SHA-512",
                self.input
            ),
            ProtocolKind::Priv => write!(
                f,
                "unknown privacy protocol '{}'; expected one of: DES, AES, AES256B, AES256R",
                self.input
            ),
            ProtocolKind::Level => write!(
                f,
                "unknown security level '{}'; expected one of: noAuthNoPriv, authNoPriv, authPriv",
                self.input
            ),
        }
    }
}

impl std::error::Error for ParseProtocolError {}
