// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-to-one value mapping.
//!
//! [`map`] keeps the element type, so it can sit in a [`pipe`](rivulet_core::Observable::pipe)
//! list. [`map_to`] changes it and is applied to an observable directly.
//!
//! # Examples
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::{map, map_to};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let squared = Observable::from_iter(vec![1, 2, 3]).pipe(vec![map(|x: i32| x * x)]);
//! let labels = map_to(squared, |x: i32| format!("#{x}"));
//!
//! let (values, _unsubscribe) = labels.subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec!["#1", "#4", "#9"]);
//! # }
//! ```

use rivulet_core::{boxed, stage, BoxOperator, Emitter, Observable};

/// Applies `f` to every value, preserving order.
pub fn map<T, F>(mut f: F) -> BoxOperator<T>
where
    T: Send + 'static,
    F: FnMut(T) -> T + Send + 'static,
{
    boxed(stage(
        "map",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            while let Some(value) = upstream.recv().await {
                downstream.next(f(value)).await;
            }
            downstream.complete();
        },
    ))
}

/// Applies a type-changing `f` to every value of `source`, preserving order.
pub fn map_to<T, U, F>(source: Observable<T>, mut f: F) -> Observable<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
{
    source.lift(stage(
        "map_to",
        move |upstream: Emitter<T>, downstream: Emitter<U>| async move {
            while let Some(value) = upstream.recv().await {
                downstream.next(f(value)).await;
            }
            downstream.complete();
        },
    ))
}
