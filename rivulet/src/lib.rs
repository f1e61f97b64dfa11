// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! A push-based reactive stream runtime on tokio.
//!
//! ## Overview
//!
//! A producer pushes values into an [`Emitter`], a zero-capacity rendezvous queue: every
//! send waits until a reader has taken the value, which is the only backpressure in the
//! system. An [`Observable`] wraps an emitter and composes transforms with
//! [`pipe`](Observable::pipe). [`subscribe`](Observable::subscribe) turns the end of the
//! chain into a `futures::Stream` plus an [`Unsubscribe`] trigger; cancelling it completes
//! every stage of the chain, upstream first.
//!
//! | Crate | Re-exported as | Contents |
//! |-------|----------------|----------|
//! | `rivulet-core` | crate root | emitter, observable, hooks, sources, errors |
//! | `rivulet-stream` | [`stream`] | transforms and multi-source combinators |
//! | `rivulet-time` | [`time`] | delay, debounce, initial delay, clock sources |
//!
//! With the default `http` feature, [`fetch`](fetch::fetch) turns one HTTP exchange into a
//! single-emission observable.
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let words = Observable::from_iter(vec!["a", "bb", "ccc"]);
//! let lengths = map_to(words, |word: &str| word.len())
//!     .pipe(vec![filter(|n: &usize| *n > 1), delay(Duration::from_millis(5))]);
//!
//! let (values, _unsubscribe) = reduce(lengths, |total, n| total + n, 0usize).subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec![2, 5]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(feature = "http")]
#[macro_use]
mod logging;

#[cfg(feature = "http")]
pub mod fetch;

pub use rivulet_core::{
    boxed, stage, stage_with, BoxOperator, CancellationToken, Emitter, EmitterBuilder, Hook,
    HookChain, Observable, Result, RivuletError, ScopedTask, Subscription, Unsubscribe,
};
pub use rivulet_stream as stream;
pub use rivulet_time as time;

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_core::{
        BoxOperator, CancellationToken, Emitter, Observable, Result, RivuletError, Subscription,
        Unsubscribe,
    };
    pub use rivulet_stream::prelude::*;
    pub use rivulet_time::prelude::*;

    #[cfg(feature = "http")]
    pub use crate::fetch::{fetch, fetch_url};
}
