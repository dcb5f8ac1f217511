//! Connection targets and receiver configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::notification::Notification;

/// Default SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

/// Default notification receiver port.
pub const DEFAULT_TRAP_PORT: u16 = 162;

/// An agent to connect to, with the credentials to use.
///
/// ```
/// use snmp_inspect::{Credentials, Target};
///
/// let target = Target::builder("192.0.2.10")
///     .credentials(Credentials::v2c("monitoring"))
///     .build()
///     .unwrap();
/// assert_eq!(target.port, 161);
/// assert_eq!(target.to_string(), "192.0.2.10:161");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Host name or IP address of the agent.
    pub address: String,
    pub port: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub credentials: Credentials,
    /// Upper bound on GETBULK max-repetitions for walks.
    ///
    /// `None` lets the walker use the session's ceiling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_repetitions: Option<u32>,
    /// Request timeout hint for the SNMP engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timeout: Option<Duration>,
}

impl Target {
    pub fn builder(address: impl Into<String>) -> TargetBuilder {
        TargetBuilder::new(address)
    }

    /// Check the target the same way [`TargetBuilder::build`] does.
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(Error::Config("target address is empty".into()));
        }
        if self.port == 0 {
            return Err(Error::Config("target port must be non-zero".into()));
        }
        if self.max_repetitions == Some(0) {
            return Err(Error::Config("max_repetitions must be non-zero".into()));
        }
        self.credentials.validate()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.address.contains(':') {
            write!(f, "[{}]:{}", self.address, self.port)
        } else {
            write!(f, "{}:{}", self.address, self.port)
        }
    }
}

/// Builder for [`Target`].
#[derive(Debug, Clone)]
pub struct TargetBuilder {
    target: Target,
}

impl TargetBuilder {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            target: Target {
                address: address.into(),
                port: DEFAULT_PORT,
                credentials: Credentials::default(),
                max_repetitions: None,
                timeout: None,
            },
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.target.port = port;
        self
    }

    pub fn credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.target.credentials = credentials.into();
        self
    }

    /// Cap GETBULK max-repetitions below the session's ceiling.
    pub fn max_repetitions(mut self, max: u32) -> Self {
        self.target.max_repetitions = Some(max);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.target.timeout = Some(timeout);
        self
    }

    /// Validate and build the target.
    pub fn build(self) -> Result<Target> {
        self.target.validate()?;
        Ok(self.target)
    }
}

/// Settings for a notification receiver.
///
/// With no credentials the receiver accepts every notification. Otherwise
/// only notifications carrying the configured community or USM user are
/// delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReceiverConfig {
    pub bind: IpAddr,
    pub port: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub credentials: Option<Credentials>,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_TRAP_PORT,
            credentials: None,
        }
    }
}

impl ReceiverConfig {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Whether inbound notifications are checked against credentials.
    pub fn authorization_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        match &self.credentials {
            Some(credentials) => credentials.validate(),
            None => Ok(()),
        }
    }

    /// Check an inbound notification against the configured credentials.
    ///
    /// A community configuration accepts only that community and a USM
    /// configuration only that user. Without credentials everything passes.
    pub fn authorize(&self, notification: &Notification) -> Result<()> {
        let (expected, received, what) = match &self.credentials {
            None => return Ok(()),
            Some(Credentials::Community { community, .. }) => {
                (community.as_str(), notification.community.as_deref(), "community")
            }
            Some(Credentials::Usm(usm)) => (usm.user.as_str(), notification.user.as_deref(), "user"),
        };

        if received == Some(expected) {
            return Ok(());
        }
        Err(Error::AuthenticationFailed {
            target: Some(notification.source.to_string()),
            reason: match received {
                Some(received) => format!("{what} '{received}' not accepted"),
                None => format!("notification carries no {what}"),
            },
        })
    }
}
