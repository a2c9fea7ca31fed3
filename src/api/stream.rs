//! Cancellable item streams on top of the trampoline.
//!
//! [`ItemStream`] runs a pagination loop on its own tokio task and hands
//! items to the consumer one at a time through a single-slot channel. The
//! handoff races a [`CancellationToken`]: once the token fires the pending
//! send returns [`ApiError::Cancelled`], which unwinds the trampoline.
//!
//! Errors raised by the producer (transport, API, decode) are not yielded as
//! items; the stream simply ends. Call [`ItemStream::finish`] to learn why.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use pin_project_lite::pin_project;
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::client::EcwidClient;
use crate::api::error::{ApiError, ApiResult};
use crate::api::search::Filter;

/// Producer side of an [`ItemStream`].
#[derive(Debug, Clone)]
pub struct ItemSink<T> {
    tx: mpsc::Sender<T>,
    cancel: CancellationToken,
}

impl<T> ItemSink<T> {
    /// Hand one item to the consumer.
    ///
    /// Waits until the consumer has room for it. Fails with
    /// [`ApiError::Cancelled`] if the token fires first or the consumer is
    /// gone.
    pub async fn send(&self, item: T) -> ApiResult<()> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ApiError::Cancelled),
            res = self.tx.send(item) => res.map_err(|_| ApiError::Cancelled),
        }
    }

    /// Whether the consumer asked to stop.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled() || self.tx.is_closed()
    }
}

pin_project! {
    /// A lazily consumed, cancellable, order-preserving sequence of items.
    ///
    /// Dropping the stream cancels the producer.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use futures_util::StreamExt;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// let token = CancellationToken::new();
    /// let mut products = client.products(&token, &Filter::new());
    /// while let Some(product) = products.next().await {
    ///     println!("{:?}", product.name);
    /// }
    /// products.finish().await?;
    /// ```
    #[derive(Debug)]
    pub struct ItemStream<T> {
        rx: mpsc::Receiver<T>,
        cancel: CancellationToken,
        task: Option<JoinHandle<ApiResult<()>>>,
    }

    impl<T> PinnedDrop for ItemStream<T> {
        fn drop(this: Pin<&mut Self>) {
            this.cancel.cancel();
        }
    }
}

impl<T: Send + 'static> ItemStream<T> {
    /// Spawn `run` on the tokio runtime and stream what it sends.
    ///
    /// The stream watches a child of `cancel`, so cancelling the parent stops
    /// it while dropping the stream leaves the parent untouched.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F, Fut>(cancel: &CancellationToken, run: F) -> Self
    where
        F: FnOnce(ItemSink<T>) -> Fut,
        Fut: Future<Output = ApiResult<()>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);
        let cancel = cancel.child_token();
        let sink = ItemSink {
            tx,
            cancel: cancel.clone(),
        };
        let producer = run(sink);

        let task = tokio::spawn(async move {
            let result = producer.await;
            match &result {
                Ok(()) => tracing::debug!("Item stream exhausted"),
                Err(e) if e.is_cancelled() => tracing::debug!("Item stream cancelled"),
                Err(e) => tracing::warn!(error = %e, "Item stream terminated by error"),
            }
            result
        });

        Self {
            rx,
            cancel,
            task: Some(task),
        }
    }
}

impl<T> ItemStream<T> {
    /// Receive the next item, or `None` once the producer has stopped.
    pub async fn next_item(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Stop the producer. Items already buffered may still be received.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The token this stream observes.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Wait for the producer and return how it ended.
    ///
    /// Returns `Ok(())` when the collection was exhausted,
    /// `Err(ApiError::Cancelled)` after cancellation, or the error that
    /// stopped the pagination. Items not yet received are discarded and
    /// the producer is stopped at its next handoff.
    pub async fn finish(mut self) -> ApiResult<()> {
        self.rx.close();
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        match task.await {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Err(ApiError::Cancelled),
        }
    }
}

impl<T> Stream for ItemStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        this.rx.poll_recv(cx)
    }
}

impl EcwidClient {
    /// Stream every entity of the collection endpoint at `path`.
    ///
    /// Pagination runs on a background task against a clone of this client;
    /// `filter` is copied and never modified.
    pub fn stream<T>(
        &self,
        path: &'static str,
        cancel: &CancellationToken,
        filter: &Filter,
    ) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let filter = filter.clone();
        ItemStream::spawn(cancel, move |sink| async move {
            client
                .trampoline(path, &filter, |_, item| sink.send(item))
                .await
        })
    }
}
