// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core of the rivulet push-based reactive runtime.
//!
//! - **[`Emitter`]**: a zero-capacity rendezvous queue, a one-way completion flag and
//!   immutable lifecycle hooks. Sending blocks until a reader takes the value; this is the
//!   only backpressure mechanism.
//! - **[`Observable`]**: a handle over one emitter, with [`lift`](Observable::lift) /
//!   [`pipe`](Observable::pipe) composition and [`subscribe`](Observable::subscribe).
//! - **Hook chains**: composed at build time so that cancelling the end of a pipeline
//!   completes every stage, upstream first, each exactly once.
//! - **Sources**: static values, `empty`, `never`, and bridges from external streams and
//!   tokio channels.
//!
//! Workers are tokio tasks, one per stage, producer and combinator branch.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod cancellation_token;
pub mod emitter;
pub mod error;
pub mod handoff;
pub mod hook;
pub mod observable;
pub mod source;
pub mod stage;
pub mod subscription;
pub mod task;

pub use self::cancellation_token::CancellationToken;
pub use self::emitter::{Emitter, EmitterBuilder, Hooks};
pub use self::error::{Result, RivuletError};
pub use self::hook::{Hook, HookChain};
pub use self::observable::{boxed, BoxOperator, Observable};
pub use self::stage::{stage, stage_with};
pub use self::subscription::{Subscription, Unsubscribe};
pub use self::task::{spawn_worker, ScopedTask};
