//! Operation dispatcher.
//!
//! [`Inspector`] connects to a target, runs one [`Operation`] and returns
//! one normalized record per result item. The session is closed when the
//! operation finishes, whether it succeeded, failed or was cancelled.
//!
//! ```no_run
//! # async fn example<C: snmp_inspect::session::Connector>(connector: C) -> snmp_inspect::Result<()> {
//! use snmp_inspect::ops::{Inspector, Operation, Records};
//! use snmp_inspect::{oid, Credentials, Target};
//!
//! let inspector = Inspector::new(connector);
//! let target = Target::builder("192.0.2.1")
//!     .credentials(Credentials::v2c("public"))
//!     .build()?;
//!
//! let records = inspector
//!     .execute(&target, Operation::get([oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)]))
//!     .await?;
//! if let Records::Varbinds(varbinds) = records {
//!     for vb in varbinds {
//!         println!("{} = {:?}", vb.oid, vb.value);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::net::Ipv4Addr;

use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::format::hex;
use crate::mib::Resolver;
use crate::normalize::{Normalized, normalize};
use crate::oid::Oid;
use crate::session::{Connector, Session};
use crate::table::{TableRow, fetch_table};
use crate::tag::{application, universal};
use crate::target::Target;
use crate::value::Value;
use crate::varbind::VarBind;
use crate::walk::{DEFAULT_WALK_ROOT, TreeEntry, WalkOptions, walk_subtree};

/// One operation against a target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "operation", rename_all = "lowercase")
)]
pub enum Operation {
    /// Fetch the listed object instances.
    Get { oids: Vec<Oid> },
    /// Write values, coerced to each object's current type.
    Set { values: Vec<SetRequest> },
    /// Walk a subtree. `None` walks `mib-2`.
    Walk {
        #[cfg_attr(feature = "serde", serde(default))]
        root: Option<Oid>,
    },
    /// Fetch a conceptual table by its table OID.
    Table { base: Oid },
}

impl Operation {
    pub fn get(oids: impl IntoIterator<Item = Oid>) -> Self {
        Self::Get {
            oids: oids.into_iter().collect(),
        }
    }

    pub fn set(values: impl IntoIterator<Item = SetRequest>) -> Self {
        Self::Set {
            values: values.into_iter().collect(),
        }
    }

    pub fn walk(root: Oid) -> Self {
        Self::Walk { root: Some(root) }
    }

    pub fn table(base: Oid) -> Self {
        Self::Table { base }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Get { .. } => "get",
            Self::Set { .. } => "set",
            Self::Walk { .. } => "walk",
            Self::Table { .. } => "table",
        }
    }
}

/// A value to write, as text. It is parsed according to the object's type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetRequest {
    pub oid: Oid,
    pub value: String,
}

impl SetRequest {
    pub fn new(oid: Oid, value: impl Into<String>) -> Self {
        Self {
            oid,
            value: value.into(),
        }
    }
}

/// A GET or SET result item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VarbindRecord {
    pub oid: Oid,
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::normalize::serialize_normalized")
    )]
    pub value: Normalized,
}

impl From<&VarBind> for VarbindRecord {
    fn from(vb: &VarBind) -> Self {
        Self {
            oid: vb.oid.clone(),
            value: normalize(vb),
        }
    }
}

/// Output of [`Inspector::execute`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Records {
    Varbinds(Vec<VarbindRecord>),
    Tree(Vec<TreeEntry>),
    Table(Vec<TableRow>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Self::Varbinds(v) => v.len(),
            Self::Tree(v) => v.len(),
            Self::Table(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_varbinds(self) -> Option<Vec<VarbindRecord>> {
        match self {
            Self::Varbinds(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_tree(self) -> Option<Vec<TreeEntry>> {
        match self {
            Self::Tree(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<Vec<TableRow>> {
        match self {
            Self::Table(v) => Some(v),
            _ => None,
        }
    }
}

/// An OID offered by [`search_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OidChoice {
    /// `"<name> (<oid>)"`.
    pub label: String,
    pub oid: Oid,
}

/// Filter walk entries for an OID picker.
///
/// An entry matches when its numeric OID contains the filter or its name
/// contains it case-insensitively. An empty filter keeps everything.
pub fn search_entries(entries: &[TreeEntry], filter: &str) -> Vec<OidChoice> {
    let needle = filter.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.oid.to_string().contains(&needle)
                || entry.name.to_lowercase().contains(&needle)
        })
        .map(|entry| OidChoice {
            label: format!("{} ({})", entry.name, entry.oid),
            oid: entry.oid.clone(),
        })
        .collect()
}

/// Runs operations against targets through a [`Connector`].
pub struct Inspector<C> {
    connector: C,
    resolver: Resolver,
    cancel: CancellationToken,
}

impl<C: Connector> Inspector<C> {
    /// An inspector resolving names against the bundled standard modules.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            resolver: Resolver::standard(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Abandon in-flight operations when `cancel` fires.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Connect to `target`, run `operation` and close the session.
    #[instrument(
        skip(self, target, operation),
        err,
        fields(snmp.target = %target, snmp.operation = operation.name())
    )]
    pub async fn execute(&self, target: &Target, operation: Operation) -> Result<Records> {
        target.validate()?;
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let session = self.connector.connect(target).await?;
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            result = self.dispatch(&session, target, operation) => result,
        };
        session.close().await;

        if let Ok(records) = &result {
            tracing::debug!(target: "snmp_inspect::ops", { snmp.records = records.len() }, "operation complete");
        }
        result
    }

    /// Walk `mib-2` on `target` and filter the entries for an OID picker.
    pub async fn search(&self, target: &Target, filter: &str) -> Result<Vec<OidChoice>> {
        let records = self
            .execute(target, Operation::Walk { root: None })
            .await?;
        let entries = records.into_tree().unwrap_or_default();
        Ok(search_entries(&entries, filter))
    }

    async fn dispatch(
        &self,
        session: &C::Session,
        target: &Target,
        operation: Operation,
    ) -> Result<Records> {
        match operation {
            Operation::Get { oids } => {
                let varbinds = session.get(&oids).await?;
                Ok(Records::Varbinds(varbinds.iter().map(Into::into).collect()))
            }
            Operation::Set { values } => {
                let varbinds = coerce_set_request(session, &values).await?;
                let response = session.set(&varbinds).await?;
                Ok(Records::Varbinds(response.iter().map(Into::into).collect()))
            }
            Operation::Walk { root } => {
                let root = root.unwrap_or_else(|| DEFAULT_WALK_ROOT.clone());
                let mut options = WalkOptions::default().with_cancel(self.cancel.child_token());
                options.max_repetitions = target.max_repetitions;
                let entries = walk_subtree(session, &root, &self.resolver, &options).await?;
                Ok(Records::Tree(entries))
            }
            Operation::Table { base } => {
                let rows = fetch_table(session, &base, &self.resolver).await?;
                Ok(Records::Table(rows))
            }
        }
    }
}

impl<C> std::fmt::Debug for Inspector<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("resolver", &self.resolver)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// GET the requested objects to learn their types, then parse each textual
/// value as that type. Nothing is written if any value fails.
async fn coerce_set_request<S: Session>(session: &S, values: &[SetRequest]) -> Result<Vec<VarBind>> {
    let oids: Vec<Oid> = values.iter().map(|v| v.oid.clone()).collect();
    let current = session.get(&oids).await?;

    values
        .iter()
        .map(|request| {
            let existing = current
                .iter()
                .find(|vb| vb.oid == request.oid)
                .ok_or_else(|| Error::InvalidValue {
                    oid: request.oid.clone(),
                    reason: "agent did not return the object".into(),
                })?;
            let value = coerce(&existing.value, &request.value).map_err(|reason| {
                Error::InvalidValue {
                    oid: request.oid.clone(),
                    reason,
                }
            })?;
            tracing::debug!(target: "snmp_inspect::ops", { snmp.oid = %request.oid, snmp.tag = value.tag() }, "coerced set value");
            Ok(VarBind::new(request.oid.clone(), value))
        })
        .collect()
}

/// Parse `input` as a value of the same type as `current`.
fn coerce(current: &Value, input: &str) -> std::result::Result<Value, String> {
    if let Some(kind) = current.exception() {
        return Err(format!("object cannot be written ({kind})"));
    }

    let trimmed = input.trim();
    let tag = current.tag();
    let invalid = |e: &dyn std::fmt::Display| format!("'{input}' is not a valid {}: {e}", crate::label::label(tag));

    match tag {
        universal::BOOLEAN => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Value::Boolean(true)),
            "false" | "0" => Ok(Value::Boolean(false)),
            _ => Err(invalid(&"expected true or false")),
        },
        universal::INTEGER => trimmed
            .parse::<i32>()
            .map(Value::Integer)
            .map_err(|e| invalid(&e)),
        universal::OCTET_STRING => Ok(Value::from(input)),
        universal::OBJECT_IDENTIFIER => Oid::parse(trimmed)
            .map(Value::ObjectIdentifier)
            .map_err(|e| invalid(&e)),
        application::IP_ADDRESS => trimmed
            .parse::<Ipv4Addr>()
            .map(Value::from)
            .map_err(|e| invalid(&e)),
        application::COUNTER32 => trimmed
            .parse::<u32>()
            .map(Value::Counter32)
            .map_err(|e| invalid(&e)),
        application::GAUGE32 => trimmed
            .parse::<u32>()
            .map(Value::Gauge32)
            .map_err(|e| invalid(&e)),
        application::TIMETICKS => trimmed
            .parse::<u32>()
            .map(Value::TimeTicks)
            .map_err(|e| invalid(&e)),
        application::COUNTER64 => trimmed
            .parse::<u64>()
            .map(Value::Counter64)
            .map_err(|e| invalid(&e)),
        application::OPAQUE => hex::decode(trimmed)
            .map(|bytes| Value::Opaque(bytes.into()))
            .map_err(|e| invalid(&e)),
        _ => Err(format!(
            "writing {} values is not supported",
            crate::label::label(tag)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizedValue;
    use crate::oid;

    fn entry(oid: Oid, name: &str) -> TreeEntry {
        TreeEntry {
            oid,
            name: name.into(),
            type_info: crate::label::TypeInfo::new(universal::OCTET_STRING),
            value: NormalizedValue::from("x"),
        }
    }

    #[test]
    fn test_search_entries() {
        let entries = vec![
            entry(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), "iso.org.dod.internet.mgmt.mib-2.system.sysDescr.0"),
            entry(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), "iso.org.dod.internet.mgmt.mib-2.system.sysName.0"),
            entry(oid!(1, 3, 6, 1, 2, 1, 2, 1, 0), "iso.org.dod.internet.mgmt.mib-2.interfaces.ifNumber.0"),
        ];

        assert_eq!(search_entries(&entries, "").len(), 3);

        let by_name = search_entries(&entries, "SYSNAME");
        assert_eq!(by_name.len(), 1);
        assert_eq!(
            by_name[0].label,
            "iso.org.dod.internet.mgmt.mib-2.system.sysName.0 (1.3.6.1.2.1.1.5.0)"
        );

        let by_oid = search_entries(&entries, "1.3.6.1.2.1.1.");
        assert_eq!(by_oid.len(), 2);
        assert!(search_entries(&entries, "ifInOctets").is_empty());
    }

    #[test]
    fn test_coerce_follows_current_type() {
        assert_eq!(coerce(&Value::Integer(0), " 42 "), Ok(Value::Integer(42)));
        assert_eq!(coerce(&Value::from("old"), "new name"), Ok(Value::from("new name")));
        assert_eq!(coerce(&Value::Gauge32(0), "1000"), Ok(Value::Gauge32(1000)));
        assert_eq!(coerce(&Value::TimeTicks(0), "17"), Ok(Value::TimeTicks(17)));
        assert_eq!(
            coerce(&Value::Counter64(0), "18446744073709551615"),
            Ok(Value::Counter64(u64::MAX))
        );
        assert_eq!(
            coerce(&Value::IpAddress([0; 4]), "10.0.0.1"),
            Ok(Value::IpAddress([10, 0, 0, 1]))
        );
        assert_eq!(
            coerce(&Value::ObjectIdentifier(Oid::empty()), "1.3.6.1.4.1.9"),
            Ok(Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 9)))
        );
        assert_eq!(coerce(&Value::Boolean(false), "TRUE"), Ok(Value::Boolean(true)));
        assert_eq!(
            coerce(&Value::Opaque(Default::default()), "0xdead"),
            Ok(Value::Opaque(vec![0xde, 0xad].into()))
        );
    }

    #[test]
    fn test_coerce_rejects() {
        let err = coerce(&Value::Integer(0), "fast").unwrap_err();
        assert!(err.contains("'fast' is not a valid Integer"), "{err}");
        assert!(coerce(&Value::Gauge32(0), "-1").is_err());
        assert!(coerce(&Value::IpAddress([0; 4]), "10.0.0").is_err());
        assert!(coerce(&Value::Opaque(Default::default()), "abc").is_err());
        assert!(coerce(&Value::Opaque(Default::default()), "+a+b").is_err());
        assert!(coerce(&Value::NoSuchObject, "1").is_err());
        assert!(coerce(&Value::Null, "1").is_err());
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::get(Vec::new()).name(), "get");
        assert_eq!(Operation::set(Vec::new()).name(), "set");
        assert_eq!(Operation::walk(oid!(1, 3, 6, 1)).name(), "walk");
        assert_eq!(Operation::table(oid!(1, 3, 6, 1, 2, 1, 2, 2)).name(), "table");
    }
}
