// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transforms and combinators for rivulet observables.
//!
//! # Stateless transforms
//!
//! Same-typed operators return a [`BoxOperator`](rivulet_core::BoxOperator) and go into a
//! [`pipe`](rivulet_core::Observable::pipe) list. Each one runs a single forwarding worker
//! that reads its upstream to end-of-stream, pushes results downstream and then completes.
//!
//! | Operator | Output |
//! |----------|--------|
//! | [`map`], [`filter`], [`tap`] | one or zero values per input, in order |
//! | [`take`], [`skip`] | first n / all but the first n |
//! | [`first`], [`last`], [`element_at`], [`find`] | at most one value |
//! | [`distinct`], [`distinct_with`] | drops consecutive repeats |
//! | [`start_with`], [`end_with`], [`repeat`] | injected or repeated values |
//! | [`skip_until`], [`skip_until_token`], [`until_token`], [`after_token`] | gated values |
//! | [`finally`] | pass-through with a completion callback |
//!
//! # Type-changing operators and combinators
//!
//! These take their source(s) as arguments and return a new observable: [`map_to`],
//! [`reduce`], [`pairwise`], [`concat`], [`switch_map`], [`merge`], [`broadcast`] and
//! [`fork_join`].
//!
//! Multi-source combinators subscribe their sources when they are built and coordinate
//! their workers with join barriers and shared cancellation tokens.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::prelude::*;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let pipeline = Observable::from_iter(vec![1, 2, 2, 3, 4, 4])
//!     .pipe(vec![distinct(), filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 10)]);
//!
//! let (values, _unsubscribe) = pairwise(pipeline).subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec![(20, 40)]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod broadcast;
pub mod concat;
pub mod distinct_until_changed;
pub mod element_at;
pub mod filter;
pub mod fork_join;
pub mod map;
pub mod merge;
pub mod pairwise;
pub mod prelude;
pub mod repeat;
pub mod scan;
pub mod skip_items;
pub mod skip_until;
pub mod start_with;
pub mod switch_map;
pub mod take_items;
pub mod take_until;
pub mod tap;

pub use broadcast::broadcast;
pub use concat::concat;
pub use distinct_until_changed::{distinct, distinct_with};
pub use element_at::{element_at, first, last};
pub use filter::{filter, find};
pub use fork_join::fork_join;
pub use map::{map, map_to};
pub use merge::merge;
pub use pairwise::pairwise;
pub use repeat::repeat;
pub use scan::reduce;
pub use skip_items::skip;
pub use skip_until::{skip_until, skip_until_token};
pub use start_with::{end_with, start_with};
pub use switch_map::switch_map;
pub use take_items::take;
pub use take_until::{after_token, until_token};
pub use tap::{finally, tap};
