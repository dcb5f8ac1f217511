//! Notification source backed by a tokio channel.

use std::sync::Mutex;
use std::task::{Context, Poll};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::{NotificationSource, Receiver};
use crate::error::{Error, Result};
use crate::notification::Notification;
use crate::target::ReceiverConfig;

/// Create a connected sender/source pair.
///
/// The sender stands in for the engine's receiver socket: every item sent
/// is what the receiver would deliver after its authorization check.
pub fn channel() -> (ChannelSender, ChannelSource) {
    let (tx, rx) = mpsc::unbounded_channel();
    let closed = CancellationToken::new();
    (
        ChannelSender {
            tx,
            closed: closed.clone(),
        },
        ChannelSource {
            rx,
            closed,
            authorization: None,
        },
    )
}

/// Create a sender and a [`Receiver`] that hands out the matching source
/// once.
///
/// Unlike [`channel`], items sent here have not been authorized yet: the
/// source checks each one against the [`ReceiverConfig`] it was bound with.
pub fn receiver() -> (ChannelSender, ChannelReceiver) {
    let (sender, source) = channel();
    (
        sender,
        ChannelReceiver {
            source: Mutex::new(Some(source)),
            bound: Mutex::new(Vec::new()),
        },
    )
}

/// Feeding half of [`channel`].
#[derive(Debug, Clone)]
pub struct ChannelSender {
    tx: mpsc::UnboundedSender<Result<Notification>>,
    closed: CancellationToken,
}

impl ChannelSender {
    /// Deliver a notification. Returns `false` once the source is closed.
    pub fn send(&self, notification: Notification) -> bool {
        self.deliver(Ok(notification))
    }

    /// Deliver a receiver-side failure.
    pub fn send_error(&self, error: crate::Error) -> bool {
        self.deliver(Err(error))
    }

    fn deliver(&self, item: Result<Notification>) -> bool {
        if self.closed.is_cancelled() {
            return false;
        }
        self.tx.send(item).is_ok()
    }

    /// Whether [`NotificationSource::close`] was called on the source.
    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    /// Resolves once the source has been closed.
    pub async fn closed(&self) {
        self.closed.cancelled().await
    }
}

/// [`Receiver`] side of [`receiver`].
#[derive(Debug)]
pub struct ChannelReceiver {
    source: Mutex<Option<ChannelSource>>,
    bound: Mutex<Vec<ReceiverConfig>>,
}

impl ChannelReceiver {
    /// Configurations passed to [`Receiver::listen`] so far.
    pub fn bound(&self) -> Vec<ReceiverConfig> {
        self.bound
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Receiver for ChannelReceiver {
    type Source = ChannelSource;

    async fn listen(&self, config: &ReceiverConfig) -> Result<ChannelSource> {
        config.validate()?;
        self.bound
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(config.clone());

        let mut source = self
            .source
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .ok_or_else(|| Error::Config(format!("{} is already bound", config.bind_addr())))?;
        source.authorization = config.authorization_enabled().then(|| config.clone());
        tracing::debug!(target: "snmp_inspect::notification", { snmp.bind = %config.bind_addr(), snmp.authorization = config.authorization_enabled() }, "channel receiver listening");
        Ok(source)
    }
}

/// Receiving half of [`channel`].
#[derive(Debug)]
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<Result<Notification>>,
    closed: CancellationToken,
    authorization: Option<ReceiverConfig>,
}

impl NotificationSource for ChannelSource {
    fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Notification>>> {
        if self.closed.is_cancelled() {
            return Poll::Ready(None);
        }
        match (self.rx.poll_recv(cx), &self.authorization) {
            (Poll::Ready(Some(Ok(notification))), Some(config)) => {
                Poll::Ready(Some(config.authorize(&notification).map(|()| notification)))
            }
            (poll, _) => poll,
        }
    }

    fn close(&mut self) {
        if !self.closed.is_cancelled() {
            tracing::debug!(target: "snmp_inspect::notification", pending = self.rx.len(), "closing channel source");
        }
        self.rx.close();
        self.closed.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationPdu;
    use crate::tag;
    use std::future::poll_fn;

    fn notification() -> Notification {
        Notification {
            source: "192.0.2.1:50000".parse().unwrap(),
            community: Some("public".into()),
            user: None,
            pdu: NotificationPdu::new(tag::pdu::TRAP_V2, 1, Vec::new()),
        }
    }

    #[tokio::test]
    async fn test_delivers_in_order() {
        let (tx, mut source) = channel();
        assert!(tx.send(notification()));
        assert!(tx.send_error(crate::Error::Cancelled));

        let first = poll_fn(|cx| source.poll_recv(cx)).await.unwrap();
        assert!(first.is_ok());
        let second = poll_fn(|cx| source.poll_recv(cx)).await.unwrap();
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_close_ends_source() {
        let (tx, mut source) = channel();
        tx.send(notification());
        source.close();

        assert!(tx.is_closed());
        assert!(!tx.send(notification()));
        assert!(poll_fn(|cx| source.poll_recv(cx)).await.is_none());
    }

    #[tokio::test]
    async fn test_receiver_applies_authorization() {
        let (tx, receiver) = receiver();
        let config = ReceiverConfig::new(10162).with_credentials(crate::Credentials::v2c("public"));
        let mut source = receiver.listen(&config).await.unwrap();
        assert_eq!(receiver.bound(), vec![config]);

        let mut rejected = notification();
        rejected.community = Some("guess".into());
        tx.send(rejected);
        tx.send(notification());

        let first = poll_fn(|cx| source.poll_recv(cx)).await.unwrap();
        assert!(matches!(first, Err(Error::AuthenticationFailed { .. })));
        let second = poll_fn(|cx| source.poll_recv(cx)).await.unwrap();
        assert_eq!(second.unwrap().community.as_deref(), Some("public"));
    }

    #[tokio::test]
    async fn test_receiver_binds_once() {
        let (_tx, receiver) = receiver();
        let config = ReceiverConfig::default();
        assert!(receiver.listen(&config).await.is_ok());
        assert!(matches!(receiver.listen(&config).await, Err(Error::Config(_))));

        let bad = ReceiverConfig::default().with_credentials(
            crate::Credentials::usm("monitor").level(crate::credentials::SecurityLevel::AuthPriv),
        );
        let (_tx, receiver) = super::receiver();
        assert!(receiver.listen(&bad).await.is_err());
    }

    #[tokio::test]
    async fn test_dropped_sender_ends_source() {
        let (tx, mut source) = channel();
        drop(tx);
        assert!(poll_fn(|cx| source.poll_recv(cx)).await.is_none());
    }
}
