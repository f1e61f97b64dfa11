// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-in of several sources into one observable.
//!
//! Every source is subscribed when [`merge`] is called and drained by its own worker. Values
//! from one source keep their relative order; how values from different sources interleave
//! is up to the scheduler.
//!
//! # Completion
//!
//! A supervisor worker waits for every drain worker to exit (a join barrier) and only then
//! completes the merged emitter, so the merged stream ends after the last source ends.
//!
//! # Cancellation
//!
//! Completing the merged emitter early (for example by cancelling its subscription) cancels a
//! shared stop token observed by every drain worker and cancels every source subscription.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::merge;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let merged = merge(vec![
//!     Observable::from_iter(vec![1, 2, 3, 7]),
//!     Observable::from_iter(vec![4, 5, 6]),
//! ]);
//!
//! let (values, _unsubscribe) = merged.subscribe();
//! let mut all = values.collect::<Vec<_>>().await;
//! all.sort_unstable();
//! assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7]);
//! # }
//! ```

use futures::future::join_all;
use futures::StreamExt;
use rivulet_core::{spawn_worker, CancellationToken, Emitter, Observable, Unsubscribe};

/// Merges `sources` into a single observable.
///
/// With no sources the result completes without emitting. Must be called from within a
/// tokio runtime.
pub fn merge<T, I>(sources: I) -> Observable<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Observable<T>>,
{
    let subscriptions: Vec<_> = sources
        .into_iter()
        .map(|source| source.subscribe())
        .collect();
    let triggers: Vec<Unsubscribe> = subscriptions
        .iter()
        .map(|(_, trigger)| trigger.clone())
        .collect();

    let stop = CancellationToken::new();
    let stop_all = stop.clone();
    let merged = Emitter::builder()
        .on_complete(move || {
            stop_all.cancel();
            for trigger in &triggers {
                trigger.cancel();
            }
        })
        .build();

    let drains: Vec<_> = subscriptions
        .into_iter()
        .map(|(mut values, _)| {
            let output = merged.clone();
            let stop = stop.clone();
            spawn_worker("merge-drain", async move {
                loop {
                    let value = tokio::select! {
                        biased;
                        _ = stop.cancelled() => break,
                        value = values.next() => value,
                    };
                    let Some(value) = value else {
                        break;
                    };
                    output.next(value).await;
                }
            })
        })
        .collect();

    let output = merged.clone();
    spawn_worker("merge", async move {
        for outcome in join_all(drains).await {
            if let Err(join_error) = outcome {
                warn!("merge drain worker ended abnormally: {}", join_error);
            }
        }
        output.complete();
    });

    Observable::new(merged)
}
