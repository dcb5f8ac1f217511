//! Display labels for wire tags.
//!
//! Data-type, exception and PDU-kind tags share one numeric space, so a
//! single lookup covers all of them. Unknown tags label as `"UNKNOWN"`.

use crate::tag::{application, context, pdu, universal};

/// Label used for any tag not in the table.
pub const UNKNOWN: &str = "UNKNOWN";

/// Human-readable label for a numeric wire tag.
///
/// ```
/// use snmp_inspect::label::label;
///
/// assert_eq!(label(4), "String");
/// assert_eq!(label(70), "Counter64");
/// assert_eq!(label(0xA7), "Trap (v2)");
/// assert_eq!(label(99), "UNKNOWN");
/// ```
pub fn label(tag: u8) -> &'static str {
    match tag {
        universal::BOOLEAN => "Boolean",
        universal::INTEGER => "Integer",
        universal::BIT_STRING => "Bit String",
        universal::OCTET_STRING => "String",
        universal::NULL => "Null",
        universal::OBJECT_IDENTIFIER => "OID",
        application::IP_ADDRESS => "IP Address",
        application::COUNTER32 => "Counter",
        application::GAUGE32 => "Gauge",
        application::TIMETICKS => "Time Ticks",
        application::OPAQUE => "Opaque",
        application::COUNTER64 => "Counter64",
        context::NO_SUCH_OBJECT => "No Such Object",
        context::NO_SUCH_INSTANCE => "No Such Instance",
        context::END_OF_MIB_VIEW => "End Of MIB",
        pdu::GET_REQUEST => "Get request",
        pdu::GET_NEXT_REQUEST => "Get Next request",
        pdu::RESPONSE => "Get response",
        pdu::SET_REQUEST => "Set request",
        pdu::TRAP_V1 => "Trap (v1)",
        pdu::GET_BULK_REQUEST => "Get Bulk request",
        pdu::INFORM_REQUEST => "Inform request",
        pdu::TRAP_V2 => "Trap (v2)",
        pdu::REPORT => "Report",
        _ => UNKNOWN,
    }
}

/// A numeric tag paired with its label.
///
/// Serializes as `{"numeric": 2, "name": "Integer"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeInfo {
    pub numeric: u8,
    pub name: &'static str,
}

impl TypeInfo {
    pub fn new(tag: u8) -> Self {
        Self {
            numeric: tag,
            name: label(tag),
        }
    }
}

impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_types() {
        let expected = [
            (1, "Boolean"),
            (2, "Integer"),
            (3, "Bit String"),
            (4, "String"),
            (5, "Null"),
            (6, "OID"),
            (64, "IP Address"),
            (65, "Counter"),
            (66, "Gauge"),
            (67, "Time Ticks"),
            (68, "Opaque"),
            (70, "Counter64"),
            (128, "No Such Object"),
            (129, "No Such Instance"),
            (130, "End Of MIB"),
        ];
        for (tag, name) in expected {
            assert_eq!(label(tag), name, "tag {}", tag);
        }
    }

    #[test]
    fn test_pdu_kinds() {
        assert_eq!(label(0xA0), "Get request");
        assert_eq!(label(0xA1), "Get Next request");
        assert_eq!(label(0xA2), "Get response");
        assert_eq!(label(0xA3), "Set request");
        assert_eq!(label(0xA4), "Trap (v1)");
        assert_eq!(label(0xA5), "Get Bulk request");
        assert_eq!(label(0xA6), "Inform request");
        assert_eq!(label(0xA8), "Report");
    }

    #[test]
    fn test_unknown_never_panics() {
        let known: Vec<u8> = (0..=u8::MAX).filter(|t| label(*t) != UNKNOWN).collect();
        assert_eq!(known.len(), 24);
        assert_eq!(label(0), UNKNOWN);
        assert_eq!(label(69), UNKNOWN);
        assert_eq!(label(0xA9), UNKNOWN);
        assert_eq!(label(0xFF), UNKNOWN);
    }

    #[test]
    fn test_type_info() {
        let info = TypeInfo::new(67);
        assert_eq!(info.name, "Time Ticks");
        assert_eq!(info.to_string(), "Time Ticks (67)");
    }
}
