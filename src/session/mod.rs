//! The SNMP engine seen from this crate.
//!
//! Wire encoding, sockets, retries and USM cryptography all live in an
//! external SNMP engine. This module defines the seams the engine plugs
//! into:
//!
//! - [`Connector`] - opens a [`Session`] for a [`Target`]
//! - [`Session`] - request/response primitives used by the operations
//! - [`Receiver`] - binds a [`NotificationSource`] for a [`ReceiverConfig`]
//! - [`NotificationSource`] - inbound trap/inform delivery
//!
//! With the `testing` feature, [`MemorySession`], [`MemoryConnector`],
//! [`ChannelReceiver`] and [`ChannelSource`] provide in-memory
//! implementations.

use std::future::Future;
use std::task::{Context, Poll};

use crate::error::Result;
use crate::notification::Notification;
use crate::oid::Oid;
use crate::table::RawTable;
use crate::target::{ReceiverConfig, Target};
use crate::varbind::VarBind;

#[cfg(any(test, feature = "testing"))]
mod channel;
#[cfg(any(test, feature = "testing"))]
mod memory;

#[cfg(any(test, feature = "testing"))]
pub use channel::{ChannelReceiver, ChannelSender, ChannelSource, channel, receiver};
#[cfg(any(test, feature = "testing"))]
pub use memory::{Fault, MemoryConnector, MemorySession, RoundRequest};

/// Largest value the GETBULK max-repetitions field can carry.
pub const MAX_REPETITIONS_CEILING: u32 = i32::MAX as u32;

/// Result of one bulk round of a subtree walk.
#[derive(Debug, Clone, PartialEq)]
pub enum SubtreeRound {
    /// Varbinds following the cursor, all inside the walked subtree, in
    /// ascending OID order.
    Batch(Vec<VarBind>),
    /// Nothing left under the root.
    Done,
}

/// Opens sessions against agents.
pub trait Connector: Send + Sync {
    type Session: Session;

    /// Establish a request/response session with `target`.
    fn connect(&self, target: &Target) -> impl Future<Output = Result<Self::Session>> + Send;
}

/// A request/response session with one agent.
///
/// Once [`close`](Session::close) has been called, every pending and
/// future request fails with [`Error::SessionClosed`](crate::Error::SessionClosed).
pub trait Session: Send + Sync {
    /// Agent address, used in logs and error context.
    fn peer(&self) -> &str;

    /// GET: one varbind per requested OID, exception markers included.
    fn get(&self, oids: &[Oid]) -> impl Future<Output = Result<Vec<VarBind>>> + Send;

    /// SET: the agent's response varbinds.
    fn set(&self, varbinds: &[VarBind]) -> impl Future<Output = Result<Vec<VarBind>>> + Send;

    /// One bulk round of a walk under `root`, continuing after `cursor`.
    ///
    /// The first round is issued with `cursor == root`. The engine must not
    /// return varbinds outside `root`; it answers [`SubtreeRound::Done`]
    /// instead.
    fn subtree_round(
        &self,
        cursor: &Oid,
        root: &Oid,
        max_repetitions: u32,
    ) -> impl Future<Output = Result<SubtreeRound>> + Send;

    /// Fetch the conceptual table rooted at `base` (the table OID, whose
    /// entry is `base.1`).
    fn table(&self, base: &Oid) -> impl Future<Output = Result<RawTable>> + Send;

    /// The largest max-repetitions value the engine accepts.
    fn max_repetitions(&self) -> u32 {
        MAX_REPETITIONS_CEILING
    }

    /// Release the session.
    fn close(&self) -> impl Future<Output = ()> + Send;
}

/// Opens notification receivers.
pub trait Receiver: Send + Sync {
    type Source: NotificationSource;

    /// Bind a receiver for `config`.
    ///
    /// When `config` carries credentials, notifications with a different
    /// community or user must come out of the source as
    /// [`Error::AuthenticationFailed`](crate::Error::AuthenticationFailed)
    /// items rather than `Ok` (see [`ReceiverConfig::authorize`]).
    fn listen(&self, config: &ReceiverConfig) -> impl Future<Output = Result<Self::Source>> + Send;
}

/// Inbound notification delivery, independent of request sessions.
///
/// `Ok` items are notifications that passed the receiver's authorization;
/// `Err` items are receiver-side failures (rejected community, unknown
/// user, undecodable message). `None` means the source is closed.
pub trait NotificationSource: Send + Unpin {
    fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Notification>>>;

    /// Stop receiving and release the socket.
    fn close(&mut self);
}
