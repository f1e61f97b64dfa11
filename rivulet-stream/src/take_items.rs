// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-items operator: limits the output to the first n values.
//!
//! The source is never cancelled early. Once the limit is reached the stage keeps reading and
//! discarding upstream values until the source completes, so an upstream producer is never
//! left blocked on a send. This costs the upstream work that a short-circuiting take would
//! save.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::take;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (values, _unsubscribe) = Observable::from_iter(1..=6).pipe(vec![take(3)]).subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec![1, 2, 3]);
//! # }
//! ```

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Emits the first `n` values, then drains the rest of the source.
pub fn take<T: Send + 'static>(n: usize) -> BoxOperator<T> {
    boxed(stage(
        "take",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let mut taken = 0;
            while let Some(value) = upstream.recv().await {
                if taken < n {
                    taken += 1;
                    downstream.next(value).await;
                }
            }
            downstream.complete();
        },
    ))
}
