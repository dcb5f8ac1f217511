use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::mib::Resolver;
use crate::session::{NotificationSource, Receiver};
use crate::target::ReceiverConfig;

use super::decode::{DecodedNotification, decode};

/// Stream of decoded notifications from a [`NotificationSource`].
///
/// Receiver errors are passed through as `Err` items. The stream ends when
/// the source closes.
pub struct NotificationStream<S> {
    source: S,
    resolver: Resolver,
    done: bool,
}

impl<S: NotificationSource> NotificationStream<S> {
    pub fn new(source: S, resolver: Resolver) -> Self {
        Self {
            source,
            resolver,
            done: false,
        }
    }

    /// Get the next notification, or `None` once the source is closed.
    pub async fn next(&mut self) -> Option<Result<DecodedNotification>> {
        std::future::poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }

    /// Close the underlying source. The stream ends afterwards.
    pub fn close(&mut self) {
        if !self.done {
            self.done = true;
            self.source.close();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.done
    }
}

impl<S: NotificationSource> Stream for NotificationStream<S> {
    type Item = Result<DecodedNotification>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        match this.source.poll_recv(cx) {
            Poll::Ready(Some(Ok(notification))) => {
                Poll::Ready(Some(Ok(decode(&notification, &this.resolver))))
            }
            Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(e))),
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<S> std::fmt::Debug for NotificationStream<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStream")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Delivers decoded notifications to a consumer until cancelled.
///
/// ```
/// use snmp_inspect::mib::Resolver;
/// use snmp_inspect::notification::NotificationListener;
/// use snmp_inspect::session::channel;
/// use tokio_util::sync::CancellationToken;
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let (sender, source) = channel();
/// let cancel = CancellationToken::new();
/// let listener = NotificationListener::new(source, Resolver::standard())
///     .with_cancel(cancel.clone());
///
/// cancel.cancel();
/// let delivered = listener.run(|n| println!("{} from {}", n.pdu.pdu_type, n.source)).await;
/// assert_eq!(delivered, 0);
/// assert!(sender.is_closed());
/// # });
/// ```
pub struct NotificationListener<S> {
    stream: NotificationStream<S>,
    cancel: CancellationToken,
}

impl<S: NotificationSource> NotificationListener<S> {
    pub fn new(source: S, resolver: Resolver) -> Self {
        Self {
            stream: NotificationStream::new(source, resolver),
            cancel: CancellationToken::new(),
        }
    }

    /// Bind a receiver for `config` and listen on it.
    ///
    /// Notifications rejected by the receiver's authorization reach
    /// [`run`](Self::run) as errors and are skipped.
    #[instrument(
        level = "debug",
        skip_all,
        err,
        fields(snmp.bind = %config.bind_addr(), snmp.authorization = config.authorization_enabled())
    )]
    pub async fn bind<R>(receiver: &R, config: &ReceiverConfig, resolver: Resolver) -> Result<Self>
    where
        R: Receiver<Source = S>,
    {
        let source = receiver.listen(config).await?;
        Ok(Self::new(source, resolver))
    }

    /// Stop the listener when `cancel` fires.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Hand every decoded notification to `consumer` until cancelled or
    /// the source ends.
    ///
    /// Receiver errors (rejected community, unknown user) are logged and
    /// skipped. The source is closed before returning. Returns the number
    /// of notifications delivered.
    #[instrument(level = "debug", skip_all)]
    pub async fn run<F>(mut self, mut consumer: F) -> usize
    where
        F: FnMut(DecodedNotification),
    {
        let mut delivered = 0;
        loop {
            let item = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                item = self.stream.next() => item,
            };

            match item {
                Some(Ok(notification)) => {
                    delivered += 1;
                    consumer(notification);
                }
                Some(Err(e)) => {
                    tracing::warn!(target: "snmp_inspect::notification", error = %e, "dropping notification");
                }
                None => break,
            }
        }

        self.stream.close();
        tracing::debug!(target: "snmp_inspect::notification", delivered, "listener stopped");
        delivered
    }

    /// Wait for exactly one notification, then close the source.
    ///
    /// Unlike [`run`](Self::run), a receiver error is returned instead of
    /// skipped. Fails with [`Error::Cancelled`] if cancelled first and with
    /// [`Error::SessionClosed`] if the source ends first.
    #[instrument(level = "debug", skip_all, err)]
    pub async fn run_once(mut self) -> Result<DecodedNotification> {
        let item = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            item = self.stream.next() => match item {
                Some(result) => result,
                None => Err(Error::SessionClosed { target: None }),
            },
        };

        self.stream.close();
        item
    }
}

impl<S> std::fmt::Debug for NotificationListener<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationListener")
            .field("stream", &self.stream)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
