// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The value emitter: a rendezvous queue, a one-way completion flag and lifecycle hooks.
//!
//! An [`Emitter`] is the primitive every producer, transform stage and combinator writes into.
//! It carries values of a single type through a zero-capacity queue, so [`Emitter::next`]
//! suspends until a reader takes the value.
//!
//! # Lifecycle
//!
//! - **Open**: [`next`](Emitter::next) hands values to the reader.
//! - **Completed**: [`complete`](Emitter::complete) flips the flag exactly once, fires the
//!   on-complete chain, then closes the queue. Readers drain anything already handed over and
//!   then observe end-of-stream. Later `next` calls are silently dropped.
//!
//! # Hooks
//!
//! Hooks are fixed when the emitter is built ([`EmitterBuilder`]). Pipeline composition never
//! mutates them; it creates a new *view* of the same queue whose hook chain is prefixed with
//! the upstream stage's hooks (see [`Observable::lift`](crate::Observable::lift)).
//!
//! # Example
//!
//! ```
//! use rivulet_core::Emitter;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let completions = Arc::new(AtomicUsize::new(0));
//! let counter = completions.clone();
//! let emitter = Emitter::<i32>::builder()
//!     .on_complete(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .build();
//!
//! let reader = emitter.clone();
//! let consumer = tokio::spawn(async move { reader.recv().await });
//!
//! assert!(emitter.next(7).await);
//! assert_eq!(consumer.await.unwrap(), Some(7));
//!
//! emitter.complete();
//! emitter.complete();
//! assert_eq!(completions.load(Ordering::SeqCst), 1);
//! assert!(!emitter.next(8).await);
//! # }
//! ```

use crate::cancellation_token::Cancelled;
use crate::handoff::{rendezvous, HandoffReceiver, HandoffSender};
use crate::hook::{Hook, HookChain};
use crate::CancellationToken;
use std::fmt;
use std::sync::Arc;

/// Emitter shared state. Views (clones with different hook chains) all point here.
struct Shared<T> {
    sender: parking_lot::Mutex<Option<HandoffSender<T>>>,
    receiver: tokio::sync::Mutex<HandoffReceiver<T>>,
    emit_lock: tokio::sync::Mutex<()>,
    completed: CancellationToken,
}

struct NextHook<T> {
    callback: Arc<dyn Fn(&T) + Send + Sync>,
    snapshot: fn(&T) -> T,
}

impl<T> Clone for NextHook<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            snapshot: self.snapshot,
        }
    }
}

/// Hooks attached to one view of an emitter.
pub struct Hooks<T> {
    on_complete: HookChain,
    on_subscribe: HookChain,
    on_next: Option<NextHook<T>>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            on_complete: HookChain::new(),
            on_subscribe: HookChain::new(),
            on_next: None,
        }
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            on_complete: self.on_complete.clone(),
            on_subscribe: self.on_subscribe.clone(),
            on_next: self.on_next.clone(),
        }
    }
}

impl<T> Hooks<T> {
    pub fn on_complete(&self) -> &HookChain {
        &self.on_complete
    }

    pub fn on_subscribe(&self) -> &HookChain {
        &self.on_subscribe
    }
}

/// Builds an [`Emitter`] with its hooks installed up front.
pub struct EmitterBuilder<T> {
    hooks: Hooks<T>,
}

impl<T: Send + 'static> EmitterBuilder<T> {
    /// Adds a hook fired when the emitter completes, after any hook added before it.
    #[must_use]
    pub fn on_complete<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.hooks.on_complete = self.hooks.on_complete.with(Hook::new(hook));
        self
    }

    /// Adds a hook fired when a consumer first subscribes.
    ///
    /// Cold sources use this as a one-shot latch to start producing.
    #[must_use]
    pub fn on_subscribe<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.hooks.on_subscribe = self.hooks.on_subscribe.with(Hook::new(hook));
        self
    }

    pub fn build(self) -> Emitter<T> {
        let (sender, receiver) = rendezvous();
        Emitter {
            shared: Arc::new(Shared {
                sender: parking_lot::Mutex::new(Some(sender)),
                receiver: tokio::sync::Mutex::new(receiver),
                emit_lock: tokio::sync::Mutex::new(()),
                completed: CancellationToken::new(),
            }),
            hooks: self.hooks,
        }
    }
}

impl<T: Clone + Send + 'static> EmitterBuilder<T> {
    /// Sets the hook run after each value has been handed to a reader.
    ///
    /// The hook sees a copy of the delivered value, taken before the handoff.
    #[must_use]
    pub fn on_next<F>(mut self, hook: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.hooks.on_next = Some(NextHook {
            callback: Arc::new(hook),
            snapshot: T::clone,
        });
        self
    }
}

/// A single-slot, single-type value emitter with a one-way completion flag.
///
/// Cloning an `Emitter` yields another view of the same queue and flag with the same hooks.
/// Any number of views may emit; reads are competing (each value goes to exactly one
/// reader).
pub struct Emitter<T> {
    shared: Arc<Shared<T>>,
    hooks: Hooks<T>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            hooks: self.hooks.clone(),
        }
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("completed", &self.shared.completed.is_cancelled())
            .field("on_complete_hooks", &self.hooks.on_complete.len())
            .field("on_subscribe_hooks", &self.hooks.on_subscribe.len())
            .field("on_next_hook", &self.hooks.on_next.is_some())
            .finish()
    }
}

impl<T: Send + 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Emitter<T> {
    /// Creates an emitter with no hooks.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EmitterBuilder<T> {
        EmitterBuilder {
            hooks: Hooks::default(),
        }
    }

    /// Hands `value` to a reader, waiting until one takes it.
    ///
    /// Returns `false` without emitting when the emitter is already completed, and when it
    /// completes while this call is still waiting for a reader. Emits are serialized: a
    /// second `next` waits until the first one resolves.
    ///
    /// A `next` on an emitter that nobody reads and nobody completes never resolves.
    pub async fn next(&self, value: T) -> bool {
        let _serialized = self.shared.emit_lock.lock().await;
        if self.is_completed() {
            return false;
        }
        let Some(sender) = self.shared.sender.lock().clone() else {
            return false;
        };

        let snapshot = self
            .hooks
            .on_next
            .as_ref()
            .map(|hook| (hook.snapshot)(&value));

        let delivered = tokio::select! {
            biased;
            _ = self.shared.completed.cancelled() => false,
            result = sender.send(value) => result.is_ok(),
        };
        drop(sender);

        if delivered {
            if let (Some(hook), Some(snapshot)) = (&self.hooks.on_next, snapshot) {
                (hook.callback)(&snapshot);
            }
        }
        delivered
    }

    /// Completes the emitter. Idempotent.
    ///
    /// The first call sets the completion flag, releases any pending [`next`](Self::next),
    /// fires this view's on-complete chain and closes the queue. Later calls do nothing.
    pub fn complete(&self) {
        if !self.shared.completed.cancel() {
            return;
        }
        trace!("emitter completed");
        self.hooks.on_complete.fire();
        let sender = self.shared.sender.lock().take();
        drop(sender);
    }

    pub fn is_completed(&self) -> bool {
        self.shared.completed.is_cancelled()
    }

    /// Resolves once the emitter has completed.
    pub fn completed(&self) -> Cancelled<'_> {
        self.shared.completed.cancelled()
    }

    /// Takes the next value, or `None` once the emitter is completed and drained.
    ///
    /// Concurrent readers compete: each value is delivered to exactly one of them.
    pub async fn recv(&self) -> Option<T> {
        let mut receiver = self.shared.receiver.lock().await;
        receiver.recv().await
    }

    /// Fires this view's on-subscribe chain (once per hook).
    pub fn notify_subscribed(&self) {
        self.hooks.on_subscribe.fire();
    }

    pub fn hooks(&self) -> &Hooks<T> {
        &self.hooks
    }

    /// Returns a view of this emitter that sits downstream of `upstream` in a pipeline.
    ///
    /// The view's on-complete chain first completes `upstream` (which recursively fires the
    /// upstream stage's own chain), then fires this emitter's hooks. Its on-subscribe chain
    /// is the upstream chain followed by this emitter's own.
    pub(crate) fn downstream_of<U: Send + 'static>(&self, upstream: &Emitter<U>) -> Emitter<T> {
        let upstream_view = upstream.clone();
        let complete_upstream = Hook::new(move || upstream_view.complete());

        Emitter {
            shared: Arc::clone(&self.shared),
            hooks: Hooks {
                on_complete: HookChain::from(complete_upstream).then(&self.hooks.on_complete),
                on_subscribe: upstream.hooks.on_subscribe.then(&self.hooks.on_subscribe),
                on_next: self.hooks.on_next.clone(),
            },
        }
    }
}
