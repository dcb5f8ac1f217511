//! Subtree walks.
//!
//! [`walk_subtree`] chains bulk rounds until the session reports the
//! subtree exhausted and returns every entry in delivery order. A walk is
//! all-or-nothing: any failure discards what was collected and surfaces as
//! [`Error::Walk`].
//!
//! ```no_run
//! # async fn example<S: snmp_inspect::session::Session>(session: &S) -> snmp_inspect::Result<()> {
//! use snmp_inspect::mib::Resolver;
//! use snmp_inspect::walk::{walk_subtree, WalkOptions, DEFAULT_WALK_ROOT};
//!
//! let entries = walk_subtree(session, &DEFAULT_WALK_ROOT, &Resolver::standard(), &WalkOptions::default()).await?;
//! for entry in &entries {
//!     println!("{} ({}) = {}", entry.name, entry.type_info.name, entry.value);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::LazyLock;

use tokio_util::sync::CancellationToken;
use tracing::{Span, instrument};

use crate::error::{Error, Result, WalkAbortReason};
use crate::label::TypeInfo;
use crate::mib::Resolver;
use crate::normalize::{NormalizedValue, normalize};
use crate::oid::Oid;
use crate::session::{Session, SubtreeRound};

/// Default walk root: `mib-2` (1.3.6.1.2.1), where `snmpwalk` starts.
pub static DEFAULT_WALK_ROOT: LazyLock<Oid> = LazyLock::new(|| crate::oid!(1, 3, 6, 1, 2, 1));

/// One varbind discovered during a walk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeEntry {
    pub oid: Oid,
    /// Resolved symbolic path, or the numeric OID when nothing resolves.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_info: TypeInfo,
    pub value: NormalizedValue,
}

/// Options for [`walk_subtree`].
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Cap on max-repetitions per round. `None` uses the session's ceiling.
    pub max_repetitions: Option<u32>,
    /// Checked before every round.
    pub cancel: CancellationToken,
}

impl WalkOptions {
    pub fn with_max_repetitions(mut self, max: u32) -> Self {
        self.max_repetitions = Some(max);
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Walk the subtree under `root` and return every entry in delivery order.
///
/// Each varbind is normalized, named through `resolver` and labeled. The
/// walk fails as a whole, wrapped in [`Error::Walk`], when:
///
/// - the session fails (timeout, I/O, authentication, closed session)
/// - a batch is empty or leaves the subtree or does not advance
/// - a varbind carries an exception marker
/// - `options.cancel` fires before a round
#[instrument(
    skip(session, resolver, options),
    err,
    fields(
        snmp.target = %session.peer(),
        snmp.oid = %root,
        snmp.rounds = tracing::field::Empty,
        snmp.entries = tracing::field::Empty,
    )
)]
pub async fn walk_subtree<S: Session>(
    session: &S,
    root: &Oid,
    resolver: &Resolver,
    options: &WalkOptions,
) -> Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    match collect(session, root, resolver, options, &mut entries).await {
        Ok(rounds) => {
            Span::current().record("snmp.rounds", rounds);
            Span::current().record("snmp.entries", entries.len());
            tracing::debug!(target: "snmp_inspect::walk", { snmp.rounds = rounds, snmp.entries = entries.len() }, "walk complete");
            Ok(entries)
        }
        Err(e) => Err(Error::walk(root.clone(), entries.len(), e)),
    }
}

fn effective_max_repetitions<S: Session>(session: &S, options: &WalkOptions) -> u32 {
    let ceiling = session.max_repetitions();
    options
        .max_repetitions
        .map_or(ceiling, |max| max.min(ceiling))
        .max(1)
}

async fn collect<S: Session>(
    session: &S,
    root: &Oid,
    resolver: &Resolver,
    options: &WalkOptions,
    entries: &mut Vec<TreeEntry>,
) -> Result<usize> {
    let max_repetitions = effective_max_repetitions(session, options);
    let mut cursor = root.clone();
    let mut round = 0usize;

    loop {
        if options.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        round += 1;

        let batch = match session
            .subtree_round(&cursor, root, max_repetitions)
            .await?
        {
            SubtreeRound::Done => return Ok(round),
            SubtreeRound::Batch(batch) => batch,
        };

        let (Some(first), Some(last)) = (batch.first(), batch.last()) else {
            return Err(Error::MalformedWalk {
                reason: WalkAbortReason::EmptyBatch,
            });
        };
        tracing::debug!(
            target: "snmp_inspect::walk",
            { snmp.oid = %root, snmp.round = round, snmp.batch = batch.len(), snmp.first = %first.oid, snmp.last = %last.oid },
            "received batch"
        );

        entries.reserve(batch.len());
        for vb in batch {
            if !vb.oid.starts_with(root) {
                return Err(Error::MalformedWalk {
                    reason: WalkAbortReason::OutsideSubtree { oid: vb.oid },
                });
            }
            if vb.oid <= cursor {
                return Err(Error::MalformedWalk {
                    reason: WalkAbortReason::NonIncreasing {
                        previous: cursor,
                        current: vb.oid,
                    },
                });
            }

            let value = normalize(&vb)?;
            cursor = vb.oid.clone();
            entries.push(TreeEntry {
                name: resolver.display_name(&vb.oid),
                type_info: TypeInfo::new(vb.tag()),
                value,
                oid: vb.oid,
            });
        }
    }
}
