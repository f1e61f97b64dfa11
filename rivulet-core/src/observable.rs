// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The user-facing handle over an emitter, and pipeline composition.
//!
//! [`Observable::lift`] applies one transform and threads the hook chain through it;
//! [`Observable::pipe`] folds `lift` over an ordered list of same-typed transforms.
//!
//! Cancelling the final handle of a pipeline completes its emitter, whose composed
//! on-complete chain completes the stage before it, and so on up to the source. Hooks fire
//! upstream-to-downstream, each exactly once, and every stage's worker sees end-of-stream
//! and exits.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{boxed, stage, Emitter, Observable};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let double = boxed(stage(
//!     "double",
//!     |upstream: Emitter<i32>, downstream: Emitter<i32>| async move {
//!         while let Some(value) = upstream.recv().await {
//!             downstream.next(value * 2).await;
//!         }
//!         downstream.complete();
//!     },
//! ));
//!
//! let (values, _unsubscribe) = Observable::from_iter(vec![1, 2, 3])
//!     .pipe(vec![double])
//!     .subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec![2, 4, 6]);
//! # }
//! ```

use crate::Emitter;

/// A same-typed pipeline stage, as accepted by [`Observable::pipe`].
pub type BoxOperator<T> = Box<dyn FnOnce(Emitter<T>) -> Emitter<T> + Send>;

/// Boxes a transform so that it can sit in a [`pipe`](Observable::pipe) list.
pub fn boxed<T, F>(operator: F) -> BoxOperator<T>
where
    F: FnOnce(Emitter<T>) -> Emitter<T> + Send + 'static,
{
    Box::new(operator)
}

/// A handle over one pipeline stage's emitter.
///
/// Handles are cheap to clone. Clones share the emitter's queue, so subscribing twice to the
/// same handle makes the two subscriptions compete for values rather than each receiving
/// all of them; use an explicit broadcast for fan-out.
pub struct Observable<T> {
    emitter: Emitter<T>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            emitter: self.emitter.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("emitter", &self.emitter)
            .finish()
    }
}

impl<T: Send + 'static> Observable<T> {
    pub fn new(emitter: Emitter<T>) -> Self {
        Self { emitter }
    }

    pub fn emitter(&self) -> &Emitter<T> {
        &self.emitter
    }

    /// Applies a single transform, which may change the element type.
    ///
    /// The transform receives the current stage's emitter and returns the next stage's. The
    /// returned handle's hooks are the current stage's chain followed by the next stage's
    /// own hooks, so completing it propagates upstream.
    pub fn lift<U, F>(self, operator: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnOnce(Emitter<T>) -> Emitter<U>,
    {
        let upstream = self.emitter;
        let downstream = operator(upstream.clone());
        Observable::new(downstream.downstream_of(&upstream))
    }

    /// Chains `operators` left to right and returns a handle over the last stage.
    pub fn pipe<I>(self, operators: I) -> Self
    where
        I: IntoIterator<Item = BoxOperator<T>>,
    {
        operators
            .into_iter()
            .fold(self, |observable, operator| observable.lift(operator))
    }
}
