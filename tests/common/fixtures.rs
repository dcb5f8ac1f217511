//! Standard test fixtures with realistic MIB data.

use snmp_inspect::notification::{Notification, NotificationPdu, oids};
use snmp_inspect::session::MemorySession;
use snmp_inspect::{Credentials, Oid, Target, Value, VarBind, oid, tag};
use std::collections::BTreeMap;

// =============================================================================
// MIB data fixtures
// =============================================================================

/// Standard system MIB entries (1.3.6.1.2.1.1), sysDescr.0 to sysServices.0.
pub fn system_mib() -> BTreeMap<Oid, Value> {
    let mut data = BTreeMap::new();

    data.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 1, 0),
        Value::OctetString("Test SNMP Agent".into()),
    );
    data.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 2, 0),
        Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 99999)),
    );
    data.insert(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), Value::TimeTicks(123456));
    data.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 4, 0),
        Value::OctetString("admin@test.local".into()),
    );
    data.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 5, 0),
        Value::OctetString("test-agent".into()),
    );
    data.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 6, 0),
        Value::OctetString("Test Lab".into()),
    );
    data.insert(oid!(1, 3, 6, 1, 2, 1, 1, 7, 0), Value::Integer(72));

    data
}

/// `count` ifTable rows plus ifNumber.0.
pub fn interface_table(count: usize) -> BTreeMap<Oid, Value> {
    let mut data = BTreeMap::new();

    data.insert(
        oid!(1, 3, 6, 1, 2, 1, 2, 1, 0),
        Value::Integer(count as i32),
    );

    for i in 1..=count {
        let idx = i as u32;

        // ifIndex
        data.insert(
            oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 1, idx),
            Value::Integer(i as i32),
        );
        // ifDescr
        data.insert(
            oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 2, idx),
            Value::OctetString(format!("eth{}", i - 1).into()),
        );
        // ifType ethernetCsmacd(6)
        data.insert(oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 3, idx), Value::Integer(6));
        // ifSpeed
        data.insert(
            oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 5, idx),
            Value::Gauge32(1_000_000_000),
        );
        // ifOperStatus up(1)
        data.insert(oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 8, idx), Value::Integer(1));
        // ifInOctets
        data.insert(
            oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 10, idx),
            Value::Counter32(1000 * idx),
        );
    }

    data
}

/// Combine multiple fixture sets.
pub fn combined(fixtures: impl IntoIterator<Item = BTreeMap<Oid, Value>>) -> BTreeMap<Oid, Value> {
    let mut result = BTreeMap::new();
    for fixture in fixtures {
        result.extend(fixture);
    }
    result
}

// =============================================================================
// Agents and targets
// =============================================================================

/// An in-memory agent holding `data`.
pub fn agent(data: BTreeMap<Oid, Value>) -> MemorySession {
    MemorySession::new("192.0.2.1:161").with_entries(data)
}

/// A v2c target for the in-memory agent.
pub fn target() -> Target {
    Target::builder("192.0.2.1")
        .credentials(Credentials::v2c("public"))
        .build()
        .unwrap()
}

// =============================================================================
// OID helper functions
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}

pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}

pub fn sys_contact() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 4, 0)
}

pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}

/// System subtree root: 1.3.6.1.2.1.1
pub fn system_subtree() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1)
}

/// Interfaces subtree root: 1.3.6.1.2.1.2
pub fn interfaces_subtree() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2)
}

/// ifTable: 1.3.6.1.2.1.2.2
pub fn if_table() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2)
}

/// Nonexistent OID for testing NoSuchObject
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 99, 99, 99, 0)
}

// =============================================================================
// Notifications
// =============================================================================

/// A v2c linkDown trap for interface `if_index`.
pub fn link_down_trap(request_id: i32, if_index: u32) -> Notification {
    Notification {
        source: "198.51.100.4:40162".parse().unwrap(),
        community: Some("public".into()),
        user: None,
        pdu: NotificationPdu::new(
            tag::pdu::TRAP_V2,
            request_id,
            vec![
                VarBind::new(oids::sys_up_time(), Value::TimeTicks(8_640_000)),
                VarBind::new(
                    oids::snmp_trap_oid(),
                    Value::ObjectIdentifier(oids::link_down()),
                ),
                VarBind::new(
                    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 1, if_index),
                    Value::Integer(if_index as i32),
                ),
                VarBind::new(
                    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 8, if_index),
                    Value::Integer(2),
                ),
            ],
        ),
    }
}
