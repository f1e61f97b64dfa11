// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the rivulet workspace.
//!
//! Pipelines under test are driven imperatively through [`test_channel`]: the test keeps the
//! sender and pushes values one at a time, while the pipeline consumes the observable side.
//! Dropping the sender completes the source.
//!
//! ```rust
//! use rivulet_test_utils::{test_channel, unwrap_stream, assert_stream_ended};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, source) = test_channel::<i32>();
//! let (mut values, _unsubscribe) = source.subscribe();
//!
//! tx.send(1).unwrap();
//! assert_eq!(unwrap_stream(&mut values, 500).await, 1);
//!
//! drop(tx);
//! assert_stream_ended(&mut values, 500).await;
//! # }
//! ```
//!
//! [`HookRecorder`] captures the order in which lifecycle hooks fire.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;

use rivulet_core::Observable;
use tokio::sync::mpsc;

pub use helpers::{assert_no_element_emitted, assert_stream_ended, collect_values, unwrap_stream};
pub use recorder::HookRecorder;

/// Creates an unbounded test channel whose receiving side is exposed as an [`Observable`].
///
/// Must be called from within a tokio runtime.
pub fn test_channel<T: Send + 'static>() -> (mpsc::UnboundedSender<T>, Observable<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, Observable::from_unbounded_receiver(rx))
}
