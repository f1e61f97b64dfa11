// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing operators and clock sources for rivulet observables.
//!
//! | Item | Kind | Behaviour |
//! |------|------|-----------|
//! | [`delay`] | operator | sleeps before forwarding each value, sequentially |
//! | [`debounce`] | operator | last value of each quiet window |
//! | [`initial_delay`] | operator | holds values back for a while after subscription |
//! | [`interval`] | source | periodic instants, cold |
//! | [`timer`] | source | one instant after a delay, cold |
//!
//! Every item waits on a [`Timer`]. The plain functions use [`TokioTimer`], so
//! `tokio::time::pause` gives deterministic tests; the `*_with_timer` variants take any
//! other implementation.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod debounce;
pub mod delay;
pub mod initial_delay;
pub mod interval;
pub mod prelude;
pub mod timer;

pub use self::debounce::{debounce, debounce_with_timer};
pub use self::delay::{delay, delay_with_timer};
pub use self::initial_delay::{initial_delay, initial_delay_with_timer};
pub use self::interval::{interval, interval_with_timer, timer, timer_with_timer};
pub use self::timer::{Timer, TokioTimer};
