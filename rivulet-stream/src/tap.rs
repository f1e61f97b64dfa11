// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side effects with pass-through.
//!
//! Both operators are built on emitter hooks rather than on extra work in the forwarding loop:
//! [`tap`] installs an on-next hook, which runs once the downstream reader has taken the value,
//! and [`finally`] installs an on-complete hook, which fires on natural completion and on
//! cancellation alike.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::{finally, tap};
//! use futures::StreamExt;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//!
//! let pipeline = Observable::from_iter(vec![1, 2, 3]).pipe(vec![
//!     tap(move |_: &i32| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }),
//!     finally(|| println!("done")),
//! ]);
//!
//! let (values, _unsubscribe) = pipeline.subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec![1, 2, 3]);
//! assert_eq!(seen.load(Ordering::SeqCst), 3);
//! # }
//! ```

use rivulet_core::{boxed, stage_with, BoxOperator, Emitter};

async fn pass_through<T: Send + 'static>(upstream: Emitter<T>, downstream: Emitter<T>) {
    while let Some(value) = upstream.recv().await {
        downstream.next(value).await;
    }
    downstream.complete();
}

/// Runs `f` on every value after it has been delivered downstream.
pub fn tap<T, F>(f: F) -> BoxOperator<T>
where
    T: Clone + Send + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    boxed(stage_with(
        "tap",
        Emitter::builder().on_next(f),
        pass_through::<T>,
    ))
}

/// Runs `f` exactly once when this stage completes, whether naturally or by cancellation.
pub fn finally<T, F>(f: F) -> BoxOperator<T>
where
    T: Send + 'static,
    F: FnOnce() + Send + 'static,
{
    boxed(stage_with(
        "finally",
        Emitter::builder().on_complete(f),
        pass_through::<T>,
    ))
}
