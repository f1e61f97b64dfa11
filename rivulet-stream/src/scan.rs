// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running accumulation.
//!
//! [`reduce`] is a scan: it emits the updated accumulator after every source value rather than
//! a single folded result at the end.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::reduce;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let digits = reduce(
//!     Observable::from_iter(1..=3),
//!     |acc: String, digit: i32| format!("{acc}{digit}"),
//!     String::new(),
//! );
//!
//! let (values, _unsubscribe) = digits.subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec!["1", "12", "123"]);
//! # }
//! ```

use rivulet_core::{stage, Emitter, Observable};

/// Folds each value into the accumulator with `f` and emits the new accumulator.
pub fn reduce<T, Acc, F>(source: Observable<T>, mut f: F, seed: Acc) -> Observable<Acc>
where
    T: Send + 'static,
    Acc: Clone + Send + 'static,
    F: FnMut(Acc, T) -> Acc + Send + 'static,
{
    source.lift(stage(
        "reduce",
        move |upstream: Emitter<T>, downstream: Emitter<Acc>| async move {
            let mut accumulator = seed;
            while let Some(value) = upstream.recv().await {
                accumulator = f(accumulator, value);
                downstream.next(accumulator.clone()).await;
            }
            downstream.complete();
        },
    ))
}
