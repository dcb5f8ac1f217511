//! In-memory agent for tests.
//!
//! [`MemorySession`] answers GET/SET/walk/table requests from a
//! `BTreeMap<Oid, Value>` and can inject faults into specific walk rounds.
//! Clones share state, so a test can keep a handle and inspect what was
//! requested after handing the session to the code under test.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{Connector, MAX_REPETITIONS_CEILING, Session, SubtreeRound};
use crate::credentials::Credentials;
use crate::error::{Error, ErrorStatus, Result};
use crate::oid::Oid;
use crate::table::{RawRow, RawTable};
use crate::target::Target;
use crate::value::Value;
use crate::varbind::VarBind;

/// A failure or malformed answer to inject.
#[derive(Debug, Clone)]
pub enum Fault {
    /// Request timed out.
    Timeout,
    /// I/O error with this message.
    Io(String),
    /// Credentials rejected.
    AuthenticationFailed,
    /// Agent answered with an error status.
    Status(ErrorStatus),
    /// A batch with no varbinds (walk rounds only).
    EmptyBatch,
    /// This exact batch instead of the real answer (walk rounds only).
    Batch(Vec<VarBind>),
}

impl Fault {
    fn into_error(self, peer: &str) -> Error {
        let target = Some(peer.to_owned());
        match self {
            Fault::Timeout => Error::Timeout {
                target,
                elapsed: Duration::from_secs(5),
            },
            Fault::Io(msg) => Error::Io {
                target,
                source: std::io::Error::other(msg),
            },
            Fault::AuthenticationFailed => Error::AuthenticationFailed {
                target,
                reason: "unknown community or user".into(),
            },
            Fault::Status(status) => Error::Snmp {
                target,
                status,
                index: 1,
                oid: None,
            },
            Fault::EmptyBatch | Fault::Batch(_) => Error::Io {
                target,
                source: std::io::Error::other("malformed response"),
            },
        }
    }
}

/// A recorded walk round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRequest {
    pub cursor: Oid,
    pub root: Oid,
    pub max_repetitions: u32,
}

struct Inner {
    data: BTreeMap<Oid, Value>,
    read_only: Vec<Oid>,
    round_cap: usize,
    max_repetitions: u32,
    latency: Option<Duration>,
    round_faults: HashMap<usize, Fault>,
    request_fault: Option<Fault>,
    rounds: Vec<RoundRequest>,
    gets: Vec<Vec<Oid>>,
    sets: Vec<Vec<VarBind>>,
    tables: Vec<Oid>,
}

/// In-memory [`Session`].
///
/// ```
/// use snmp_inspect::session::{MemorySession, Session};
/// use snmp_inspect::{oid, Value};
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let session = MemorySession::new("192.0.2.1:161")
///     .with_entry(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), "sw1");
///
/// let vbs = session.get(&[oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)]).await.unwrap();
/// assert_eq!(vbs[0].value, Value::from("sw1"));
/// # });
/// ```
#[derive(Clone)]
pub struct MemorySession {
    peer: Arc<str>,
    inner: Arc<Mutex<Inner>>,
    closed: CancellationToken,
}

impl MemorySession {
    pub fn new(peer: impl Into<String>) -> Self {
        Self {
            peer: Arc::from(peer.into()),
            inner: Arc::new(Mutex::new(Inner {
                data: BTreeMap::new(),
                read_only: Vec::new(),
                round_cap: usize::MAX,
                max_repetitions: MAX_REPETITIONS_CEILING,
                latency: None,
                round_faults: HashMap::new(),
                request_fault: None,
                rounds: Vec::new(),
                gets: Vec::new(),
                sets: Vec::new(),
                tables: Vec::new(),
            })),
            closed: CancellationToken::new(),
        }
    }

    /// A new handle on the same agent data, addressed as `peer`, with its
    /// own open/closed state.
    pub fn reopen(&self, peer: impl Into<String>) -> Self {
        Self {
            peer: Arc::from(peer.into()),
            inner: Arc::clone(&self.inner),
            closed: CancellationToken::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add one object instance.
    pub fn with_entry(self, oid: Oid, value: impl Into<Value>) -> Self {
        self.lock().data.insert(oid, value.into());
        self
    }

    /// Add many object instances.
    pub fn with_entries(self, entries: impl IntoIterator<Item = (Oid, Value)>) -> Self {
        self.lock().data.extend(entries);
        self
    }

    /// Reject SETs on `oid` with `notWritable`.
    pub fn with_read_only(self, oid: Oid) -> Self {
        self.lock().read_only.push(oid);
        self
    }

    /// Return at most `cap` varbinds per walk round, whatever was asked for.
    pub fn with_round_cap(self, cap: usize) -> Self {
        self.lock().round_cap = cap.max(1);
        self
    }

    /// The max-repetitions ceiling this session reports.
    pub fn with_max_repetitions(self, max: u32) -> Self {
        self.lock().max_repetitions = max;
        self
    }

    /// Delay every answer. A close during the delay fails the request.
    pub fn with_latency(self, latency: Duration) -> Self {
        self.lock().latency = Some(latency);
        self
    }

    /// Replace the answer to walk round `round` (1-based) with `fault`.
    pub fn with_fault(self, round: usize, fault: Fault) -> Self {
        self.lock().round_faults.insert(round, fault);
        self
    }

    /// Fail the next GET, SET or table request with `fault`.
    pub fn fail_next_request(&self, fault: Fault) {
        self.lock().request_fault = Some(fault);
    }

    pub fn rounds(&self) -> Vec<RoundRequest> {
        self.lock().rounds.clone()
    }

    pub fn gets(&self) -> Vec<Vec<Oid>> {
        self.lock().gets.clone()
    }

    pub fn sets(&self) -> Vec<Vec<VarBind>> {
        self.lock().sets.clone()
    }

    pub fn tables(&self) -> Vec<Oid> {
        self.lock().tables.clone()
    }

    /// Current value stored at `oid`.
    pub fn value(&self, oid: &Oid) -> Option<Value> {
        self.lock().data.get(oid).cloned()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    async fn round_trip(&self) -> Result<()> {
        if self.closed.is_cancelled() {
            return Err(self.closed_error());
        }
        let latency = self.lock().latency;
        if let Some(latency) = latency {
            tokio::select! {
                _ = self.closed.cancelled() => return Err(self.closed_error()),
                _ = tokio::time::sleep(latency) => {}
            }
        }
        Ok(())
    }

    fn closed_error(&self) -> Error {
        Error::SessionClosed {
            target: Some(self.peer.to_string()),
        }
    }

    fn take_request_fault(&self) -> Result<()> {
        match self.lock().request_fault.take() {
            Some(fault) => Err(fault.into_error(&self.peer)),
            None => Ok(()),
        }
    }
}

fn missing(data: &BTreeMap<Oid, Value>, oid: &Oid) -> Value {
    let object_known = oid
        .parent()
        .is_some_and(|parent| data.keys().any(|k| k.parent().as_ref() == Some(&parent)));
    if object_known {
        Value::NoSuchInstance
    } else {
        Value::NoSuchObject
    }
}

impl Session for MemorySession {
    fn peer(&self) -> &str {
        &self.peer
    }

    async fn get(&self, oids: &[Oid]) -> Result<Vec<VarBind>> {
        self.round_trip().await?;
        self.take_request_fault()?;
        let mut inner = self.lock();
        inner.gets.push(oids.to_vec());
        Ok(oids
            .iter()
            .map(|oid| {
                let value = inner
                    .data
                    .get(oid)
                    .cloned()
                    .unwrap_or_else(|| missing(&inner.data, oid));
                VarBind::new(oid.clone(), value)
            })
            .collect())
    }

    async fn set(&self, varbinds: &[VarBind]) -> Result<Vec<VarBind>> {
        self.round_trip().await?;
        self.take_request_fault()?;
        let mut inner = self.lock();
        inner.sets.push(varbinds.to_vec());

        for (i, vb) in varbinds.iter().enumerate() {
            let index = i as u32 + 1;
            let status = match inner.data.get(&vb.oid) {
                _ if inner.read_only.contains(&vb.oid) => Some(ErrorStatus::NotWritable),
                None => Some(ErrorStatus::NoCreation),
                Some(current) if current.tag() != vb.value.tag() => Some(ErrorStatus::WrongType),
                Some(_) => None,
            };
            if let Some(status) = status {
                return Err(Error::Snmp {
                    target: Some(self.peer.to_string()),
                    status,
                    index,
                    oid: Some(vb.oid.clone()),
                });
            }
        }

        for vb in varbinds {
            inner.data.insert(vb.oid.clone(), vb.value.clone());
        }
        Ok(varbinds.to_vec())
    }

    async fn subtree_round(
        &self,
        cursor: &Oid,
        root: &Oid,
        max_repetitions: u32,
    ) -> Result<SubtreeRound> {
        self.round_trip().await?;
        let mut inner = self.lock();
        inner.rounds.push(RoundRequest {
            cursor: cursor.clone(),
            root: root.clone(),
            max_repetitions,
        });
        let round = inner.rounds.len();

        if let Some(fault) = inner.round_faults.remove(&round) {
            return match fault {
                Fault::EmptyBatch => Ok(SubtreeRound::Batch(Vec::new())),
                Fault::Batch(batch) => Ok(SubtreeRound::Batch(batch)),
                other => Err(other.into_error(&self.peer)),
            };
        }

        let take = inner
            .round_cap
            .min(usize::try_from(max_repetitions).unwrap_or(usize::MAX));
        let batch: Vec<VarBind> = inner
            .data
            .range(cursor.clone()..)
            .filter(|(oid, _)| *oid > cursor)
            .take_while(|(oid, _)| oid.starts_with(root))
            .take(take)
            .map(|(oid, value)| VarBind::new(oid.clone(), value.clone()))
            .collect();

        if batch.is_empty() {
            Ok(SubtreeRound::Done)
        } else {
            Ok(SubtreeRound::Batch(batch))
        }
    }

    async fn table(&self, base: &Oid) -> Result<RawTable> {
        self.round_trip().await?;
        self.take_request_fault()?;
        let mut inner = self.lock();
        inner.tables.push(base.clone());

        let entry = base.child(1);
        let mut rows: BTreeMap<Vec<u32>, RawRow> = BTreeMap::new();
        for (oid, value) in inner.data.range(entry.clone()..) {
            let Some(rest) = oid.strip_prefix(&entry) else {
                break;
            };
            let [column, index @ ..] = rest else {
                continue;
            };
            if index.is_empty() {
                continue;
            }
            let row = rows.entry(index.to_vec()).or_insert_with(|| {
                let key: Vec<String> = index.iter().map(u32::to_string).collect();
                RawRow::new(key.join("."))
            });
            row.columns.insert(*column, value.clone());
        }
        Ok(rows.into_values().collect())
    }

    fn max_repetitions(&self) -> u32 {
        self.lock().max_repetitions
    }

    async fn close(&self) {
        self.closed.cancel();
    }
}

impl std::fmt::Debug for MemorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySession")
            .field("peer", &self.peer)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

/// [`Connector`] handing out sessions over one shared agent.
///
/// Every connection gets its own handle (see [`MemorySession::reopen`]),
/// so closing one session does not affect the next. Optionally checks the
/// target's credentials and fails the connection with
/// `AuthenticationFailed` when they do not match.
#[derive(Debug, Clone)]
pub struct MemoryConnector {
    session: MemorySession,
    expected: Option<Credentials>,
    connects: Arc<Mutex<Vec<Target>>>,
    opened: Arc<Mutex<Vec<MemorySession>>>,
}

impl MemoryConnector {
    pub fn new(session: MemorySession) -> Self {
        Self {
            session,
            expected: None,
            connects: Arc::new(Mutex::new(Vec::new())),
            opened: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Only accept targets using these credentials.
    pub fn with_credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.expected = Some(credentials.into());
        self
    }

    /// The template session holding the agent data.
    pub fn session(&self) -> &MemorySession {
        &self.session
    }

    /// Sessions handed out so far, in connection order.
    pub fn opened(&self) -> Vec<MemorySession> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Targets connected to so far.
    pub fn connects(&self) -> Vec<Target> {
        self.connects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Connector for MemoryConnector {
    type Session = MemorySession;

    async fn connect(&self, target: &Target) -> Result<MemorySession> {
        self.connects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(target.clone());
        if let Some(expected) = &self.expected
            && *expected != target.credentials
        {
            return Err(Error::AuthenticationFailed {
                target: Some(target.to_string()),
                reason: "credentials rejected".into(),
            });
        }
        let session = self.session.reopen(target.to_string());
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(session.clone());
        Ok(session)
    }
}
