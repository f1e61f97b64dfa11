// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Explicit fan-out of one source to several independent readers.
//!
//! A single worker drains the source. For each value it pushes a copy into every branch
//! concurrently and waits until all branches have accepted it before reading the next value,
//! so the slowest branch paces the whole fan-out. A branch that is never read therefore
//! stalls every other branch.
//!
//! Cancelling any branch cancels the shared source subscription; all branches then complete
//! together.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::broadcast;
//! use futures::future::join_all;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let branches = broadcast(Observable::from_iter(vec![1, 2, 3]), 2);
//!
//! // Branches must be read concurrently: each value waits for every branch.
//! let outputs = join_all(branches.iter().map(|branch| {
//!     let (values, _unsubscribe) = branch.subscribe();
//!     values.collect::<Vec<_>>()
//! }))
//! .await;
//! assert_eq!(outputs, vec![vec![1, 2, 3], vec![1, 2, 3]]);
//! # }
//! ```

use futures::future::join_all;
use futures::StreamExt;
use rivulet_core::{spawn_worker, Emitter, Observable};

/// Splits `source` into `branches` observables that each see every source value.
///
/// `broadcast(source, 0)` returns no branches and leaves `source` untouched. Otherwise the
/// source is subscribed immediately, so this must run inside a tokio runtime.
pub fn broadcast<T>(source: Observable<T>, branches: usize) -> Vec<Observable<T>>
where
    T: Clone + Send + 'static,
{
    if branches == 0 {
        return Vec::new();
    }

    let (mut values, trigger) = source.subscribe();
    let outputs: Vec<Emitter<T>> = (0..branches)
        .map(|_| {
            let trigger = trigger.clone();
            Emitter::builder()
                .on_complete(move || trigger.cancel())
                .build()
        })
        .collect();

    let fan_out = outputs.clone();
    spawn_worker("broadcast", async move {
        while let Some(value) = values.next().await {
            join_all(fan_out.iter().map(|branch| branch.next(value.clone()))).await;
        }
        for branch in &fan_out {
            branch.complete();
        }
    });

    outputs.into_iter().map(Observable::new).collect()
}
