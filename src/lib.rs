// Allow large error types - the Error enum carries OIDs inline for context.
#![allow(clippy::result_large_err)]

//! # snmp-inspect
//!
//! Turn raw SNMP results into records an application can use directly.
//!
//! The crate sits on top of an SNMP engine (wire codec, sockets, USM) that
//! plugs in through the traits in [`session`]. On top of it:
//!
//! - [`normalize`] converts varbind payloads into host values
//! - [`mib`] resolves numeric OIDs to symbolic paths
//! - [`label`] names wire type tags
//! - [`walk`] collects a whole subtree, all or nothing
//! - [`table`] rebuilds conceptual tables with named columns
//! - [`notification`] decodes and delivers traps and informs
//! - [`ops`] runs GET, SET, walk and table operations against a target
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_inspect::mib::Resolver;
//! use snmp_inspect::normalize::{normalize, NormalizedValue};
//! use snmp_inspect::{oid, Value, VarBind};
//!
//! let resolver = Resolver::standard();
//! let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), Value::from("Linux core-sw1"));
//!
//! assert_eq!(
//!     resolver.resolve(&vb.oid).as_deref(),
//!     Some("iso.org.dod.internet.mgmt.mib-2.system.sysDescr.0")
//! );
//! assert_eq!(normalize(&vb), Ok(NormalizedValue::Text("Linux core-sw1".into())));
//! ```
//!
//! ## Walking a subtree
//!
//! ```rust
//! use snmp_inspect::mib::Resolver;
//! use snmp_inspect::session::MemorySession;
//! use snmp_inspect::walk::{walk_subtree, WalkOptions};
//! use snmp_inspect::{oid, Value};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let session = MemorySession::new("192.0.2.1:161")
//!     .with_entry(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), "router")
//!     .with_entry(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), Value::TimeTicks(360000));
//!
//! let entries = walk_subtree(
//!     &session,
//!     &oid!(1, 3, 6, 1, 2, 1, 1),
//!     &Resolver::standard(),
//!     &WalkOptions::default(),
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[1].type_info.name, "Time Ticks");
//! # });
//! ```

pub mod credentials;
pub mod error;
pub mod format;
pub mod label;
pub mod mib;
pub mod normalize;
pub mod notification;
pub mod oid;
pub mod ops;
pub mod prelude;
pub mod session;
pub mod table;
pub mod tag;
pub mod target;
pub mod value;
pub mod varbind;
pub mod walk;

// Re-exports for convenience
pub use credentials::{
    AuthProtocol, CommunityVersion, Credentials, ParseProtocolError, PrivProtocol, SecurityLevel,
    UsmBuilder, UsmCredentials, Version,
};
pub use error::{
    Error, ErrorStatus, ExceptionKind, OidErrorKind, ProtocolValueError, Result, WalkAbortReason,
};
pub use label::TypeInfo;
pub use mib::{MibDatabase, ModuleStore, Resolver};
pub use normalize::{Normalized, NormalizedValue};
pub use notification::{DecodedNotification, Notification, NotificationListener};
pub use oid::Oid;
pub use ops::{Inspector, Operation, Records};
pub use table::TableRow;
pub use target::{ReceiverConfig, Target};
pub use value::Value;
pub use varbind::VarBind;
pub use walk::TreeEntry;
