use std::sync::Arc;

use super::{MibDatabase, ModuleStore};
use crate::oid::Oid;

/// Maps numeric OIDs to the best-known symbolic path.
///
/// Module databases register object definitions, not instances, so the
/// resolver tries progressively shorter prefixes of the OID and keeps the
/// arcs it strips as a suffix. `1.3.6.1.2.1.1.1.0` resolves to
/// `...system.sysDescr.0` because `sysDescr` is registered.
///
/// Cheap to clone; the database is shared.
#[derive(Clone)]
pub struct Resolver {
    db: Arc<dyn MibDatabase>,
}

impl Resolver {
    pub fn new(db: Arc<dyn MibDatabase>) -> Self {
        Self { db }
    }

    /// Resolver over the bundled standard modules.
    pub fn standard() -> Self {
        Self::new(ModuleStore::standard())
    }

    pub fn database(&self) -> &dyn MibDatabase {
        &*self.db
    }

    /// Resolve `oid` to a symbolic path, or `None` if nothing matches.
    ///
    /// Lookup order:
    ///
    /// 1. The longest registered prefix, followed by the stripped arcs.
    /// 2. The full OID as given.
    /// 3. The OID without its last arc.
    pub fn resolve(&self, oid: &Oid) -> Option<String> {
        for len in (1..=oid.len()).rev() {
            if let Some(name) = self.db.translate_oid(&oid.prefix(len)) {
                let mut path = name;
                for arc in &oid.arcs()[len..] {
                    path.push('.');
                    path.push_str(&arc.to_string());
                }
                return Some(path);
            }
        }

        let resolved = self
            .db
            .translate_oid(oid)
            .or_else(|| oid.parent().and_then(|parent| self.db.translate_oid(&parent)));
        if resolved.is_none() {
            tracing::trace!(target: "snmp_inspect::mib", { snmp.oid = %oid }, "no MIB name for OID");
        }
        resolved
    }

    /// Resolved path, or the numeric OID when nothing matches.
    pub fn display_name(&self, oid: &Oid) -> String {
        self.resolve(oid).unwrap_or_else(|| oid.to_string())
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Database that answers from a fixed map and records every lookup.
    #[derive(Default)]
    struct FakeDb {
        names: HashMap<Oid, String>,
        lookups: Mutex<Vec<Oid>>,
    }

    impl FakeDb {
        fn with(entries: &[(Oid, &str)]) -> Self {
            Self {
                names: entries
                    .iter()
                    .map(|(oid, name)| (oid.clone(), (*name).to_owned()))
                    .collect(),
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    impl MibDatabase for FakeDb {
        fn translate_oid(&self, oid: &Oid) -> Option<String> {
            self.lookups.lock().unwrap().push(oid.clone());
            self.names.get(oid).cloned()
        }

        fn translate_path(&self, _path: &str) -> Option<Oid> {
            None
        }
    }

    #[test]
    fn test_instance_suffix_preserved() {
        let resolver = Resolver::standard();
        assert_eq!(
            resolver.resolve(&oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)).as_deref(),
            Some("iso.org.dod.internet.mgmt.mib-2.system.sysDescr.0")
        );
        assert_eq!(
            resolver.resolve(&oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 10, 3)).as_deref(),
            Some("iso.org.dod.internet.mgmt.mib-2.interfaces.ifTable.ifEntry.ifInOctets.3")
        );
    }

    #[test]
    fn test_exact_node() {
        let resolver = Resolver::standard();
        assert_eq!(
            resolver.resolve(&oid!(1, 3, 6, 1, 2, 1)).as_deref(),
            Some("iso.org.dod.internet.mgmt.mib-2")
        );
    }

    #[test]
    fn test_partial_match_keeps_unknown_arcs() {
        let resolver = Resolver::standard();
        assert_eq!(
            resolver.resolve(&oid!(1, 3, 6, 1, 4, 1, 9, 9, 42)).as_deref(),
            Some("iso.org.dod.internet.private.enterprises.9.9.42")
        );
    }

    #[test]
    fn test_nothing_resolves() {
        let db = Arc::new(FakeDb::default());
        let resolver = Resolver::new(db.clone());
        let oid = oid!(1, 3, 6, 1);
        assert_eq!(resolver.resolve(&oid), None);

        // four prefixes, then the full OID, then the OID minus its last arc
        let lookups = std::mem::take(&mut *db.lookups.lock().unwrap());
        assert_eq!(
            lookups,
            vec![
                oid!(1, 3, 6, 1),
                oid!(1, 3, 6),
                oid!(1, 3),
                oid!(1),
                oid!(1, 3, 6, 1),
                oid!(1, 3, 6),
            ]
        );

        assert_eq!(resolver.display_name(&oid), "1.3.6.1");
        assert_eq!(db.lookups.lock().unwrap().len(), 6);
    }

    #[test]
    fn test_empty_oid() {
        let resolver = Resolver::new(Arc::new(FakeDb::default()));
        assert_eq!(resolver.resolve(&Oid::empty()), None);
        assert_eq!(resolver.display_name(&Oid::empty()), "");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let db = FakeDb::with(&[(oid!(1, 3), "iso.org"), (oid!(1, 3, 6), "iso.org.dod")]);
        let resolver = Resolver::new(Arc::new(db));
        assert_eq!(
            resolver.resolve(&oid!(1, 3, 6, 7, 8)).as_deref(),
            Some("iso.org.dod.7.8")
        );
    }
}
