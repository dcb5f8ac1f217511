//! Value normalization.
//!
//! Converts a wire varbind (or a bare [`Value`]) into a [`NormalizedValue`]
//! an application can use directly, or a [`ProtocolValueError`] when the
//! payload is an exception marker.
//!
//! Normalization is lossy on purpose. Binary payloads become text and
//! 64-bit counters become decimal strings so that no consumer ever sees an
//! approximated magnitude.
//!
//! There are two entry points and callers pick one explicitly:
//! [`normalize`] for a full varbind (errors carry the OID) and
//! [`normalize_value`] for a value already separated from its OID.
//!
//! ```
//! use snmp_inspect::normalize::{normalize, NormalizedValue};
//! use snmp_inspect::{oid, ExceptionKind, Value, VarBind};
//!
//! let octets = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), Value::from("core-sw1"));
//! assert_eq!(normalize(&octets), Ok(NormalizedValue::Text("core-sw1".into())));
//!
//! let hc = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6, 1), Value::Counter64(u64::MAX));
//! assert_eq!(
//!     normalize(&hc),
//!     Ok(NormalizedValue::Decimal("18446744073709551615".into()))
//! );
//!
//! let missing = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 9, 0), Value::NoSuchInstance);
//! assert_eq!(normalize(&missing).unwrap_err().kind, ExceptionKind::NoSuchInstance);
//! ```

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::ProtocolValueError;
use crate::oid::Oid;
use crate::value::Value;
use crate::varbind::VarBind;

/// Outcome of normalizing one varbind.
pub type Normalized = Result<NormalizedValue, ProtocolValueError>;

/// A host-usable value derived from a varbind payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NormalizedValue {
    /// NULL payload.
    Null,
    /// Boolean payload.
    Boolean(bool),
    /// INTEGER, Counter32, Gauge32 or TimeTicks, passed through as a number.
    Integer(i64),
    /// Counter64, rendered as its exact decimal representation.
    Decimal(String),
    /// OCTET STRING, Opaque or BIT STRING payload decoded as UTF-8 text.
    ///
    /// Invalid sequences are replaced with U+FFFD.
    Text(String),
    /// OBJECT IDENTIFIER payload.
    Oid(Oid),
    /// IpAddress payload.
    IpAddress(Ipv4Addr),
}

impl NormalizedValue {
    /// Returns `true` for [`NormalizedValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, NormalizedValue::Null)
    }

    /// The text payload, if this is [`NormalizedValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is [`NormalizedValue::Integer`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NormalizedValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizedValue::Null => write!(f, "null"),
            NormalizedValue::Boolean(v) => write!(f, "{}", v),
            NormalizedValue::Integer(v) => write!(f, "{}", v),
            NormalizedValue::Decimal(s) | NormalizedValue::Text(s) => f.write_str(s),
            NormalizedValue::Oid(oid) => write!(f, "{}", oid),
            NormalizedValue::IpAddress(addr) => write!(f, "{}", addr),
        }
    }
}

impl From<&str> for NormalizedValue {
    fn from(s: &str) -> Self {
        NormalizedValue::Text(s.to_owned())
    }
}

impl From<i64> for NormalizedValue {
    fn from(v: i64) -> Self {
        NormalizedValue::Integer(v)
    }
}

/// Normalize a full varbind.
///
/// An exception marker fails with a [`ProtocolValueError`] that names the
/// varbind's OID.
pub fn normalize(varbind: &VarBind) -> Normalized {
    normalize_value(&varbind.value).map_err(|mut e| {
        e.oid = Some(varbind.oid.clone());
        e
    })
}

/// Normalize a bare value that has already been separated from its OID.
pub fn normalize_value(value: &Value) -> Normalized {
    if let Some(kind) = value.exception() {
        return Err(ProtocolValueError::new(kind));
    }

    Ok(match value {
        Value::Null => NormalizedValue::Null,
        Value::Boolean(v) => NormalizedValue::Boolean(*v),
        Value::Integer(v) => NormalizedValue::Integer(i64::from(*v)),
        Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => {
            NormalizedValue::Integer(i64::from(*v))
        }
        Value::Counter64(v) => NormalizedValue::Decimal(v.to_string()),
        Value::OctetString(data) | Value::Opaque(data) | Value::BitString(data) => {
            NormalizedValue::Text(String::from_utf8_lossy(data).into_owned())
        }
        Value::Unknown { data, .. } => {
            NormalizedValue::Text(String::from_utf8_lossy(data).into_owned())
        }
        Value::ObjectIdentifier(oid) => NormalizedValue::Oid(oid.clone()),
        Value::IpAddress(octets) => NormalizedValue::IpAddress(Ipv4Addr::from(*octets)),
        // exceptions handled above
        Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
            NormalizedValue::Null
        }
    })
}

/// Serializes a [`Normalized`] as the bare value, or as `{"error": "..."}`
/// when it carries an exception marker.
#[cfg(feature = "serde")]
pub(crate) fn serialize_normalized<S>(
    value: &Normalized,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::Serialize;
    use serde::ser::SerializeMap;

    match value {
        Ok(v) => v.serialize(serializer),
        Err(e) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("error", &e.kind.to_string())?;
            map.end()
        }
    }
}
