use std::net::SocketAddr;

use crate::label::TypeInfo;
use crate::mib::Resolver;
use crate::normalize::{Normalized, NormalizedValue, normalize};
use crate::oid::Oid;
use crate::varbind::VarBind;

use super::{Notification, oids};

/// One varbind of a decoded notification.
///
/// Unlike a walk entry, `value` may hold the exception marker the agent
/// sent; its `Display` reads as e.g. `1.3.6.1.2.1.2.2.1.8.7 = noSuchInstance`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedVarbind {
    pub oid: Oid,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_info: TypeInfo,
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::normalize::serialize_normalized")
    )]
    pub value: Normalized,
}

impl DecodedVarbind {
    fn new(varbind: &VarBind, resolver: &Resolver) -> Self {
        Self {
            oid: varbind.oid.clone(),
            name: resolver.display_name(&varbind.oid),
            type_info: TypeInfo::new(varbind.tag()),
            value: normalize(varbind),
        }
    }
}

/// A notification PDU with its kind labeled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedPdu {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub pdu_type: TypeInfo,
    pub request_id: i32,
    pub varbinds: Vec<DecodedVarbind>,
}

/// A notification ready for a consumer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedNotification {
    pub source: SocketAddr,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub community: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub user: Option<String>,
    pub pdu: DecodedPdu,
}

impl DecodedNotification {
    /// The notification OID carried in snmpTrapOID.0, if present.
    pub fn trap_oid(&self) -> Option<&Oid> {
        let trap_oid = oids::snmp_trap_oid();
        self.pdu
            .varbinds
            .iter()
            .find(|vb| vb.oid == trap_oid)
            .and_then(|vb| match &vb.value {
                Ok(NormalizedValue::Oid(oid)) => Some(oid),
                _ => None,
            })
    }

    /// Varbinds whose value could not be normalized.
    pub fn degraded(&self) -> impl Iterator<Item = &DecodedVarbind> {
        self.pdu.varbinds.iter().filter(|vb| vb.value.is_err())
    }
}

/// Decode a notification.
///
/// Every varbind is named, labeled and normalized independently. An
/// exception marker degrades only that varbind and is logged at `warn`.
pub fn decode(notification: &Notification, resolver: &Resolver) -> DecodedNotification {
    let varbinds: Vec<DecodedVarbind> = notification
        .pdu
        .varbinds
        .iter()
        .map(|vb| DecodedVarbind::new(vb, resolver))
        .collect();

    for vb in &varbinds {
        if let Err(e) = &vb.value {
            tracing::warn!(target: "snmp_inspect::notification", { snmp.source = %notification.source, snmp.oid = %vb.oid, error = %e }, "notification varbind degraded");
        }
    }

    let decoded = DecodedNotification {
        source: notification.source,
        community: notification.community.clone(),
        user: notification.user.clone(),
        pdu: DecodedPdu {
            pdu_type: TypeInfo::new(notification.pdu.pdu_type),
            request_id: notification.pdu.request_id,
            varbinds,
        },
    };

    tracing::debug!(target: "snmp_inspect::notification", { snmp.source = %decoded.source, snmp.pdu_type = decoded.pdu.pdu_type.name, snmp.request_id = decoded.pdu.request_id, snmp.varbind_count = decoded.pdu.varbinds.len() }, "decoded notification");
    decoded
}
