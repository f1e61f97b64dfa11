// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Materializing an observable: the subscribe/cancel protocol.
//!
//! [`Observable::subscribe`] spawns two workers:
//!
//! 1. a **cancellation watcher** that waits for the trigger and then completes the terminal
//!    emitter (which fires the whole hook chain), and exits early if the pipeline completes
//!    on its own;
//! 2. a **forwarder** that fires the on-subscribe chain (starting cold sources), then moves
//!    values from the terminal emitter to the output stream until end-of-stream or
//!    cancellation, and closes the output stream on exit.
//!
//! A cancellation racing with natural completion can let through at most one trailing value.
//! It never double-closes or panics.

use crate::handoff::{rendezvous, HandoffReceiver};
use crate::task::spawn_worker;
use crate::{CancellationToken, Observable};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;

/// The consumable output of a subscription.
///
/// Ends when the pipeline completes or the subscription is cancelled. Dropping it has the
/// same effect as cancelling.
pub struct Subscription<T> {
    values: HandoffReceiver<T>,
}

impl<T> Subscription<T> {
    /// Takes the next value, or `None` once the subscription has ended.
    pub async fn recv(&mut self) -> Option<T> {
        self.values.recv().await
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        Pin::new(&mut self.values).poll_next(cx)
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Cancellation trigger returned by [`Observable::subscribe`].
///
/// Calling [`cancel`](Self::cancel) more than once is a no-op. Dropping the trigger does not
/// cancel.
#[derive(Clone, Debug)]
pub struct Unsubscribe {
    token: CancellationToken,
}

impl Unsubscribe {
    pub fn cancel(&self) {
        if self.token.cancel() {
            debug!("subscription cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The underlying token, for callers that want to await cancellation.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Materializes the pipeline into an output stream plus a cancellation trigger.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe(&self) -> (Subscription<T>, Unsubscribe) {
        let token = CancellationToken::new();
        let (output, values) = rendezvous();

        let terminal = self.emitter().clone();
        let watcher_token = token.clone();
        spawn_worker("subscribe-cancel", async move {
            tokio::select! {
                _ = watcher_token.cancelled() => terminal.complete(),
                _ = terminal.completed() => {}
            }
        });

        let terminal = self.emitter().clone();
        let forward_token = token.clone();
        spawn_worker("subscribe-forward", async move {
            terminal.notify_subscribed();
            loop {
                let value = tokio::select! {
                    biased;
                    _ = forward_token.cancelled() => break,
                    _ = output.closed() => {
                        debug!("subscriber dropped its stream, cancelling");
                        forward_token.cancel();
                        break;
                    }
                    value = terminal.recv() => value,
                };
                let Some(value) = value else {
                    break;
                };
                let delivered = tokio::select! {
                    biased;
                    _ = forward_token.cancelled() => break,
                    result = output.send(value) => result.is_ok(),
                };
                if !delivered {
                    debug!("subscriber dropped its stream, cancelling");
                    forward_token.cancel();
                    break;
                }
            }
        });

        (Subscription { values }, Unsubscribe { token })
    }
}
