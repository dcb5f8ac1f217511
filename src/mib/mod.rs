//! MIB module database and OID name resolution.
//!
//! The database maps numeric OIDs to symbolic descriptor paths and back.
//! It is built once, shared read-only behind an `Arc`, and never mutated
//! while requests are being handled.
//!
//! - [`MibDatabase`] - the lookup seam; inject a fake in tests
//! - [`ModuleStore`] - the bundled implementation, loaded from module definitions
//! - [`Resolver`] - longest-prefix name resolution on top of any database
//!
//! ```
//! use snmp_inspect::mib::Resolver;
//! use snmp_inspect::oid;
//!
//! let resolver = Resolver::standard();
//! assert_eq!(
//!     resolver.resolve(&oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)).as_deref(),
//!     Some("iso.org.dod.internet.mgmt.mib-2.system.sysDescr.0")
//! );
//! ```

mod resolve;
mod standard;
mod store;

pub use resolve::Resolver;
pub use store::{ModuleStore, ModuleStoreBuilder, ObjectDef};

use crate::oid::Oid;

/// Read-only translation between numeric OIDs and descriptor paths.
pub trait MibDatabase: Send + Sync {
    /// Translate a numeric OID to its dotted descriptor path
    /// (`iso.org.dod.internet.mgmt.mib-2.system.sysDescr`).
    ///
    /// Returns `None` when the OID is not a registered node.
    fn translate_oid(&self, oid: &Oid) -> Option<String>;

    /// Translate a descriptor path, a bare descriptor or a
    /// `MODULE::descriptor` reference to its numeric OID.
    ///
    /// A descriptor path need not start at the root: `mib-2.system.sysDescr`
    /// and `iso.org.dod.internet.mgmt.mib-2.system.sysDescr` name the same
    /// node. Trailing numeric arcs are appended as an instance suffix.
    ///
    /// Returns `None` when any named segment is unknown or out of place.
    fn translate_path(&self, path: &str) -> Option<Oid>;
}

impl<T: MibDatabase + ?Sized> MibDatabase for std::sync::Arc<T> {
    fn translate_oid(&self, oid: &Oid) -> Option<String> {
        (**self).translate_oid(oid)
    }

    fn translate_path(&self, path: &str) -> Option<Oid> {
        (**self).translate_path(path)
    }
}
