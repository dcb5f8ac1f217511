//! In-memory module store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use super::MibDatabase;
use super::standard;
use crate::error::{Error, Result};
use crate::oid::Oid;

/// One object definition: `descriptor ::= { parent subid }`.
///
/// `parent` is a descriptor defined earlier in the same or a previous
/// module, a numeric OID, or empty for a root arc (`iso`, `ccitt`,
/// `joint-iso-ccitt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    pub descriptor: String,
    pub parent: String,
    pub subid: u32,
}

impl ObjectDef {
    pub fn new(descriptor: impl Into<String>, parent: impl Into<String>, subid: u32) -> Self {
        Self {
            descriptor: descriptor.into(),
            parent: parent.into(),
            subid,
        }
    }
}

impl From<&(&str, &str, u32)> for ObjectDef {
    fn from(&(descriptor, parent, subid): &(&str, &str, u32)) -> Self {
        Self::new(descriptor, parent, subid)
    }
}

#[derive(Debug, Clone)]
struct Node {
    descriptor: Box<str>,
    module: Arc<str>,
}

/// A loaded set of MIB modules.
///
/// Nodes are keyed by OID. Descriptors are looked up bare (first module to
/// define a name wins) or qualified as `MODULE::descriptor`.
#[derive(Debug, Clone, Default)]
pub struct ModuleStore {
    nodes: BTreeMap<Oid, Node>,
    names: HashMap<Box<str>, Oid>,
    qualified: HashMap<(Arc<str>, Box<str>), Oid>,
    modules: Vec<Arc<str>>,
}

static STANDARD: OnceLock<Arc<ModuleStore>> = OnceLock::new();

impl ModuleStore {
    /// Start building a store from module definitions.
    pub fn builder() -> ModuleStoreBuilder {
        ModuleStoreBuilder::default()
    }

    /// The process-wide store holding the bundled standard modules.
    ///
    /// Built on first use and shared afterwards.
    pub fn standard() -> Arc<ModuleStore> {
        STANDARD
            .get_or_init(|| {
                let mut store = ModuleStore::default();
                for (name, objects) in standard::MODULES {
                    let defs: Vec<ObjectDef> = objects.iter().map(ObjectDef::from).collect();
                    if let Err(e) = store.load_module(name, &defs) {
                        tracing::warn!(target: "snmp_inspect::mib", { snmp.module = *name, error = %e }, "skipping bundled module");
                    }
                }
                tracing::debug!(target: "snmp_inspect::mib", { snmp.modules = store.modules.len(), snmp.nodes = store.nodes.len() }, "loaded standard MIB modules");
                Arc::new(store)
            })
            .clone()
    }

    /// Names of the loaded modules, in load order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| &**m)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The module that defines the node at `oid`.
    pub fn module_of(&self, oid: &Oid) -> Option<&str> {
        self.nodes.get(oid).map(|n| &*n.module)
    }

    /// The descriptor registered for exactly `oid`.
    pub fn descriptor(&self, oid: &Oid) -> Option<&str> {
        self.nodes.get(oid).map(|n| &*n.descriptor)
    }

    /// Iterate over all registered nodes in OID order.
    pub fn iter(&self) -> impl Iterator<Item = (&Oid, &str)> {
        self.nodes.iter().map(|(oid, n)| (oid, &*n.descriptor))
    }

    fn load_module(&mut self, module: &str, objects: &[ObjectDef]) -> Result<()> {
        let module: Arc<str> = Arc::from(module);

        // Validate the whole module before touching the store.
        let mut staged: Vec<(Oid, &str)> = Vec::with_capacity(objects.len());
        for def in objects {
            let parent = if def.parent.is_empty() {
                Some(Oid::empty())
            } else {
                staged
                    .iter()
                    .rev()
                    .find(|(_, name)| *name == def.parent)
                    .map(|(oid, _)| oid.clone())
                    .or_else(|| self.names.get(def.parent.as_str()).cloned())
                    .or_else(|| Oid::parse(&def.parent).ok())
            };
            let Some(parent) = parent else {
                return Err(Error::Config(format!(
                    "{}::{}: unknown parent '{}'",
                    module, def.descriptor, def.parent
                )));
            };
            staged.push((parent.child(def.subid), def.descriptor.as_str()));
        }

        for (oid, descriptor) in staged {
            self.nodes.entry(oid.clone()).or_insert_with(|| Node {
                descriptor: descriptor.into(),
                module: module.clone(),
            });
            self.names
                .entry(descriptor.into())
                .or_insert_with(|| oid.clone());
            self.qualified.insert((module.clone(), descriptor.into()), oid);
        }
        if !self.modules.contains(&module) {
            self.modules.push(module);
        }
        Ok(())
    }

    fn lookup_descriptor(&self, name: &str) -> Option<Oid> {
        match name.split_once("::") {
            Some((module, descriptor)) => self
                .qualified
                .get(&(Arc::from(module), Box::from(descriptor)))
                .cloned(),
            None => self.names.get(name).cloned(),
        }
    }
}

impl MibDatabase for ModuleStore {
    fn translate_oid(&self, oid: &Oid) -> Option<String> {
        if !self.nodes.contains_key(oid) {
            return None;
        }
        let mut path = String::new();
        for len in 1..=oid.len() {
            if len > 1 {
                path.push('.');
            }
            match self.nodes.get(&oid.prefix(len)) {
                Some(node) => path.push_str(&node.descriptor),
                None => {
                    let arc = oid.arcs()[len - 1];
                    path.push_str(&arc.to_string());
                }
            }
        }
        Some(path)
    }

    fn translate_path(&self, path: &str) -> Option<Oid> {
        let path = path.trim();
        let path = path.strip_prefix('.').unwrap_or(path);
        if path.is_empty() {
            return None;
        }

        // MODULE::descriptor[.suffix]
        if let Some((module, rest)) = path.split_once("::") {
            let (descriptor, suffix) = rest.split_once('.').unwrap_or((rest, ""));
            let base = self
                .qualified
                .get(&(Arc::from(module), Box::from(descriptor)))?
                .clone();
            return append_numeric(base, suffix);
        }

        let segments: Vec<&str> = path.split('.').collect();
        let last_named = segments
            .iter()
            .rposition(|s| s.parse::<u32>().is_err());

        match last_named {
            None => {
                let oid = Oid::parse(path).ok()?;
                self.nodes.contains_key(&oid).then_some(oid)
            }
            Some(i) => {
                let base = self.lookup_descriptor(segments[i])?;
                if base.len() <= i {
                    return None;
                }
                // Segments before it name the node's nearest ancestors, so a
                // path may start anywhere below the root.
                let offset = base.len() - i;
                for (depth, segment) in segments[..i].iter().enumerate() {
                    let ancestor = base.prefix(offset + depth);
                    let matches = match segment.parse::<u32>() {
                        Ok(arc) => ancestor.last_arc() == Some(arc),
                        Err(_) => self.descriptor(&ancestor) == Some(*segment),
                    };
                    if !matches {
                        return None;
                    }
                }
                append_numeric(base, &segments[i + 1..].join("."))
            }
        }
    }
}

fn append_numeric(base: Oid, suffix: &str) -> Option<Oid> {
    if suffix.is_empty() {
        return Some(base);
    }
    let mut arcs = Vec::new();
    for part in suffix.split('.') {
        arcs.push(part.parse::<u32>().ok()?);
    }
    Some(base.join(&arcs))
}

/// Builder for a [`ModuleStore`].
///
/// ```
/// use snmp_inspect::mib::{MibDatabase, ModuleStore};
/// use snmp_inspect::oid;
///
/// let store = ModuleStore::builder()
///     .with_standard_modules()
///     .module("ACME-MIB", &[("acme", "enterprises", 99999), ("acmeFanSpeed", "acme", 1)])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     store.translate_path("ACME-MIB::acmeFanSpeed"),
///     Some(oid!(1, 3, 6, 1, 4, 1, 99999, 1))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleStoreBuilder {
    modules: Vec<(String, Vec<ObjectDef>)>,
}

impl ModuleStoreBuilder {
    /// Include the bundled standard modules.
    pub fn with_standard_modules(mut self) -> Self {
        for (name, objects) in standard::MODULES {
            self.modules.push((
                (*name).to_owned(),
                objects.iter().map(ObjectDef::from).collect(),
            ));
        }
        self
    }

    /// Add a module from `(descriptor, parent, subid)` triples.
    pub fn module(mut self, name: impl Into<String>, objects: &[(&str, &str, u32)]) -> Self {
        self.modules
            .push((name.into(), objects.iter().map(ObjectDef::from).collect()));
        self
    }

    /// Add a module from owned definitions.
    pub fn module_defs(mut self, name: impl Into<String>, objects: Vec<ObjectDef>) -> Self {
        self.modules.push((name.into(), objects));
        self
    }

    /// Load all modules in order.
    ///
    /// Fails with [`Error::Config`] if a definition names a parent that was
    /// not defined before it.
    pub fn build(self) -> Result<ModuleStore> {
        let mut store = ModuleStore::default();
        for (name, objects) in &self.modules {
            store.load_module(name, objects)?;
        }
        Ok(store)
    }
}
