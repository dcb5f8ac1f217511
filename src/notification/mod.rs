//! Inbound notifications (traps and informs).
//!
//! The engine's receiver yields [`Notification`]s through a
//! [`NotificationSource`](crate::session::NotificationSource). This module
//! turns them into [`DecodedNotification`]s and delivers them:
//!
//! - [`decode`] - label the PDU kind, name and normalize every varbind
//! - [`NotificationStream`] - a `Stream` of decoded notifications
//! - [`NotificationListener`] - drives a stream into a consumer until
//!   cancelled; [`NotificationListener::bind`] opens one through a
//!   [`Receiver`](crate::session::Receiver) for a
//!   [`ReceiverConfig`](crate::target::ReceiverConfig)
//!
//! Decoding never fails. A varbind carrying an exception marker keeps its
//! error in [`DecodedVarbind::value`] and the rest of the notification is
//! still delivered.
//!
//! ```
//! use snmp_inspect::mib::Resolver;
//! use snmp_inspect::notification::{decode, oids, Notification, NotificationPdu};
//! use snmp_inspect::{tag, Value, VarBind};
//!
//! let notification = Notification {
//!     source: "192.0.2.1:40000".parse().unwrap(),
//!     community: Some("public".into()),
//!     user: None,
//!     pdu: NotificationPdu::new(
//!         tag::pdu::TRAP_V2,
//!         7,
//!         vec![
//!             VarBind::new(oids::sys_up_time(), Value::TimeTicks(4200)),
//!             VarBind::new(oids::snmp_trap_oid(), Value::ObjectIdentifier(oids::link_down())),
//!         ],
//!     ),
//! };
//!
//! let decoded = decode(&notification, &Resolver::standard());
//! assert_eq!(decoded.pdu.pdu_type.name, "Trap (v2)");
//! assert_eq!(decoded.trap_oid(), Some(&oids::link_down()));
//! ```

mod decode;
mod listener;

pub use decode::{DecodedNotification, DecodedPdu, DecodedVarbind, decode};
pub use listener::{NotificationListener, NotificationStream};

use std::net::SocketAddr;

use crate::varbind::VarBind;

/// The PDU carried by a notification, as the engine decoded it.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPdu {
    /// PDU kind tag (`0xA4` for v1 traps, `0xA6` informs, `0xA7` v2 traps).
    pub pdu_type: u8,
    pub request_id: i32,
    pub varbinds: Vec<VarBind>,
}

impl NotificationPdu {
    pub fn new(pdu_type: u8, request_id: i32, varbinds: Vec<VarBind>) -> Self {
        Self {
            pdu_type,
            request_id,
            varbinds,
        }
    }

    /// Whether the sender expects an acknowledgement.
    pub fn is_inform(&self) -> bool {
        self.pdu_type == crate::tag::pdu::INFORM_REQUEST
    }
}

/// A notification accepted by the engine's receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Address the notification came from.
    pub source: SocketAddr,
    /// Community string for v1/v2c notifications.
    pub community: Option<String>,
    /// USM user name for v3 notifications.
    pub user: Option<String>,
    pub pdu: NotificationPdu,
}

/// Well-known notification OIDs.
pub mod oids {
    use crate::oid;
    use crate::oid::Oid;

    /// sysUpTime.0, the first varbind of a v2c/v3 notification.
    pub fn sys_up_time() -> Oid {
        oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
    }

    /// snmpTrapOID.0, the second varbind; its value names the notification.
    pub fn snmp_trap_oid() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 4, 1, 0)
    }

    /// snmpTraps, parent of the generic traps below.
    pub fn snmp_traps() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5)
    }

    pub fn cold_start() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5, 1)
    }

    pub fn warm_start() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5, 2)
    }

    pub fn link_down() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5, 3)
    }

    pub fn link_up() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5, 4)
    }

    pub fn authentication_failure() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5, 5)
    }

    pub fn egp_neighbor_loss() -> Oid {
        oid!(1, 3, 6, 1, 6, 3, 1, 1, 5, 6)
    }
}
