//! SNMP value types.
//!
//! The `Value` enum is the typed payload an SNMP engine hands back for a
//! varbind, including the three exception markers.

use crate::error::ExceptionKind;
use crate::format::hex;
use crate::oid::Oid;
use crate::tag;
use bytes::Bytes;

/// SNMP value.
///
/// Represents all SNMP data types including SMIv2 types and exception values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// BOOLEAN (rare on the wire, but reported by some engines)
    Boolean(bool),

    /// INTEGER (ASN.1 primitive, signed 32-bit)
    Integer(i32),

    /// BIT STRING (raw octets, first octet is the unused-bit count)
    BitString(Bytes),

    /// OCTET STRING (arbitrary bytes).
    OctetString(Bytes),

    /// NULL
    Null,

    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),

    /// IpAddress (4 bytes, big-endian)
    IpAddress([u8; 4]),

    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32(u32),

    /// Gauge32 / Unsigned32 (unsigned 32-bit, non-wrapping)
    Gauge32(u32),

    /// TimeTicks (hundredths of seconds since epoch)
    TimeTicks(u32),

    /// Opaque (legacy, arbitrary bytes)
    Opaque(Bytes),

    /// Counter64 (unsigned 64-bit, wrapping).
    ///
    /// Exceeds the range a double can represent exactly, so normalization
    /// renders it as a decimal string.
    Counter64(u64),

    /// noSuchObject exception - the object is not known to the agent.
    ///
    /// ```
    /// use snmp_inspect::Value;
    ///
    /// let response = Value::NoSuchObject;
    /// assert!(response.is_exception());
    /// ```
    NoSuchObject,

    /// noSuchInstance exception - the specific instance does not exist.
    NoSuchInstance,

    /// endOfMibView exception - end of the MIB has been reached.
    ///
    /// Returned during GETNEXT/GETBULK when no lexicographic successor exists.
    EndOfMibView,

    /// Unknown/unrecognized value type (for forward compatibility)
    Unknown { tag: u8, data: Bytes },
}

impl Value {
    /// The numeric wire tag of this value.
    ///
    /// ```
    /// use snmp_inspect::Value;
    ///
    /// assert_eq!(Value::Integer(1).tag(), 2);
    /// assert_eq!(Value::Counter64(1).tag(), 70);
    /// assert_eq!(Value::EndOfMibView.tag(), 130);
    /// ```
    pub fn tag(&self) -> u8 {
        match self {
            Value::Boolean(_) => tag::universal::BOOLEAN,
            Value::Integer(_) => tag::universal::INTEGER,
            Value::BitString(_) => tag::universal::BIT_STRING,
            Value::OctetString(_) => tag::universal::OCTET_STRING,
            Value::Null => tag::universal::NULL,
            Value::ObjectIdentifier(_) => tag::universal::OBJECT_IDENTIFIER,
            Value::IpAddress(_) => tag::application::IP_ADDRESS,
            Value::Counter32(_) => tag::application::COUNTER32,
            Value::Gauge32(_) => tag::application::GAUGE32,
            Value::TimeTicks(_) => tag::application::TIMETICKS,
            Value::Opaque(_) => tag::application::OPAQUE,
            Value::Counter64(_) => tag::application::COUNTER64,
            Value::NoSuchObject => tag::context::NO_SUCH_OBJECT,
            Value::NoSuchInstance => tag::context::NO_SUCH_INSTANCE,
            Value::EndOfMibView => tag::context::END_OF_MIB_VIEW,
            Value::Unknown { tag, .. } => *tag,
        }
    }

    /// Try to get as i32.
    ///
    /// Returns `Some(i32)` for [`Value::Integer`], `None` otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    ///
    /// Returns `Some(u32)` for [`Value::Counter32`], [`Value::Gauge32`],
    /// [`Value::TimeTicks`], or non-negative [`Value::Integer`].
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => Some(*v),
            Value::Integer(v) if *v >= 0 => Some(*v as u32),
            _ => None,
        }
    }

    /// Try to get as u64.
    ///
    /// Returns `Some(u64)` for [`Value::Counter64`] or any value `as_u32` accepts.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter64(v) => Some(*v),
            _ => self.as_u32().map(u64::from),
        }
    }

    /// Try to get as bytes.
    ///
    /// Returns the payload of [`Value::OctetString`], [`Value::Opaque`] or
    /// [`Value::BitString`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(v) | Value::Opaque(v) | Value::BitString(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as a UTF-8 string.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Try to get as an IPv4 address.
    pub fn as_ip(&self) -> Option<std::net::Ipv4Addr> {
        match self {
            Value::IpAddress(bytes) => Some(std::net::Ipv4Addr::from(*bytes)),
            _ => None,
        }
    }

    /// Check if this is an exception value.
    pub fn is_exception(&self) -> bool {
        self.exception().is_some()
    }

    /// The exception marker this value carries, if it is one.
    pub fn exception(&self) -> Option<ExceptionKind> {
        match self {
            Value::NoSuchObject => Some(ExceptionKind::NoSuchObject),
            Value::NoSuchInstance => Some(ExceptionKind::NoSuchInstance),
            Value::EndOfMibView => Some(ExceptionKind::EndOfMibView),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::OctetString(data) => {
                // Try to display as string if it's valid UTF-8
                if let Ok(s) = std::str::from_utf8(data) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "0x{}", hex::Bytes(data))
                }
            }
            Value::BitString(data) => write!(f, "BITS(0x{})", hex::Bytes(data)),
            Value::Null => write!(f, "NULL"),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::IpAddress(addr) => {
                write!(f, "{}.{}.{}.{}", addr[0], addr[1], addr[2], addr[3])
            }
            Value::Counter32(v) => write!(f, "{}", v),
            Value::Gauge32(v) => write!(f, "{}", v),
            Value::TimeTicks(v) => {
                let secs = v / 100;
                let days = secs / 86400;
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let s = secs % 60;
                write!(f, "{}d {}h {}m {}s", days, hours, mins, s)
            }
            Value::Opaque(data) => write!(f, "Opaque(0x{})", hex::Bytes(data)),
            Value::Counter64(v) => write!(f, "{}", v),
            Value::NoSuchObject => write!(f, "noSuchObject"),
            Value::NoSuchInstance => write!(f, "noSuchInstance"),
            Value::EndOfMibView => write!(f, "endOfMibView"),
            Value::Unknown { tag, data } => {
                write!(f, "Unknown(tag=0x{:02X}, data=0x{})", tag, hex::Bytes(data))
            }
        }
    }
}

impl From<ExceptionKind> for Value {
    fn from(kind: ExceptionKind) -> Self {
        match kind {
            ExceptionKind::NoSuchObject => Value::NoSuchObject,
            ExceptionKind::NoSuchInstance => Value::NoSuchInstance,
            ExceptionKind::EndOfMibView => Value::EndOfMibView,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::OctetString(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(data: &[u8]) -> Self {
        Value::OctetString(Bytes::copy_from_slice(data))
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectIdentifier(oid)
    }
}

impl From<std::net::Ipv4Addr> for Value {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Value::IpAddress(addr.octets())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Counter64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_tags_match_engine_numbering() {
        assert_eq!(Value::Boolean(true).tag(), 1);
        assert_eq!(Value::BitString(Bytes::new()).tag(), 3);
        assert_eq!(Value::from("x").tag(), 4);
        assert_eq!(Value::Null.tag(), 5);
        assert_eq!(Value::ObjectIdentifier(oid!(1, 3)).tag(), 6);
        assert_eq!(Value::IpAddress([10, 0, 0, 1]).tag(), 64);
        assert_eq!(Value::Counter32(0).tag(), 65);
        assert_eq!(Value::Gauge32(0).tag(), 66);
        assert_eq!(Value::TimeTicks(0).tag(), 67);
        assert_eq!(Value::Opaque(Bytes::new()).tag(), 68);
        assert_eq!(Value::NoSuchObject.tag(), 128);
        assert_eq!(Value::NoSuchInstance.tag(), 129);
        assert_eq!(
            Value::Unknown {
                tag: 0x47,
                data: Bytes::new()
            }
            .tag(),
            0x47
        );
    }

    #[test]
    fn test_exception() {
        assert_eq!(
            Value::NoSuchInstance.exception(),
            Some(ExceptionKind::NoSuchInstance)
        );
        assert_eq!(Value::Integer(0).exception(), None);
        assert!(Value::EndOfMibView.is_exception());
        for kind in [
            ExceptionKind::NoSuchObject,
            ExceptionKind::NoSuchInstance,
            ExceptionKind::EndOfMibView,
        ] {
            assert_eq!(Value::from(kind).exception(), Some(kind));
            assert_eq!(Value::from(kind).tag(), kind.tag());
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(-1).as_u32(), None);
        assert_eq!(Value::Gauge32(7).as_u64(), Some(7));
        assert_eq!(Value::from("eth0").as_str(), Some("eth0"));
        assert_eq!(
            Value::IpAddress([192, 0, 2, 1]).as_ip(),
            Some(std::net::Ipv4Addr::new(192, 0, 2, 1))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::TimeTicks(8_640_000 + 360_000 + 6_100).to_string(), "1d 1h 1m 1s");
        assert_eq!(
            Value::OctetString(Bytes::from_static(&[0xff, 0x00])).to_string(),
            "0xff00"
        );
        assert_eq!(Value::Counter64(u64::MAX).to_string(), "18446744073709551615");
    }
}
