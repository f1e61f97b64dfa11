// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zero-capacity rendezvous queue.
//!
//! `tokio::sync::mpsc` has no zero-capacity mode, so each value travels with a oneshot
//! acknowledgement: [`HandoffSender::send`] resolves only after a reader has taken the value.
//! A producer therefore never runs ahead of its consumer, and this is the only backpressure
//! in rivulet.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use tokio::sync::{mpsc, oneshot};

struct Handoff<T> {
    value: T,
    ack: oneshot::Sender<()>,
}

impl<T> Handoff<T> {
    fn accept(self) -> T {
        // The sender may have given up waiting; the value is still ours.
        let _ = self.ack.send(());
        self.value
    }
}

/// The value could not be handed to a reader: the receiving side is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undelivered;

/// Creates a connected sender/receiver pair.
pub fn rendezvous<T>() -> (HandoffSender<T>, HandoffReceiver<T>) {
    let (tx, rx) = mpsc::channel(1);
    (HandoffSender { tx }, HandoffReceiver { rx })
}

/// Sending half. Cloning it keeps the queue open until every clone is dropped.
pub struct HandoffSender<T> {
    tx: mpsc::Sender<Handoff<T>>,
}

impl<T> Clone for HandoffSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> HandoffSender<T> {
    /// Waits until a reader takes `value`.
    ///
    /// If this future is dropped after the value was queued but before it was taken, the
    /// value may still reach the reader later. That is the single in-flight value a
    /// cancellation can let through.
    pub async fn send(&self, value: T) -> Result<(), Undelivered> {
        let (ack, taken) = oneshot::channel();
        self.tx
            .send(Handoff { value, ack })
            .await
            .map_err(|_| Undelivered)?;
        taken.await.map_err(|_| Undelivered)
    }

    /// Resolves once the receiving half has been dropped.
    pub async fn closed(&self) {
        self.tx.closed().await;
    }
}

/// Receiving half. Yields `None` once every sender is dropped and nothing is queued.
pub struct HandoffReceiver<T> {
    rx: mpsc::Receiver<Handoff<T>>,
}

impl<T> HandoffReceiver<T> {
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await.map(Handoff::accept)
    }
}

impl<T> Stream for HandoffReceiver<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx).map(|handoff| handoff.map(Handoff::accept))
    }
}
