//! Variable binding (VarBind) type.
//!
//! A VarBind pairs an OID with a value. It is produced by the SNMP engine and
//! never modified afterwards.

use crate::oid::Oid;
use crate::value::Value;

/// Variable binding - an OID-value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct VarBind {
    /// The object identifier.
    pub oid: Oid,
    /// The value.
    pub value: Value,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }

    /// Create a VarBind with a NULL value (for GET requests).
    pub fn null(oid: Oid) -> Self {
        Self {
            oid,
            value: Value::Null,
        }
    }

    /// The numeric wire tag of the bound value.
    pub fn tag(&self) -> u8 {
        self.value.tag()
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_display() {
        let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), Value::from("router1"));
        assert_eq!(vb.to_string(), "1.3.6.1.2.1.1.5.0 = router1");
    }

    #[test]
    fn test_null() {
        let vb = VarBind::null(oid!(1, 3, 6, 1));
        assert_eq!(vb.value, Value::Null);
        assert_eq!(vb.tag(), 5);
    }
}
