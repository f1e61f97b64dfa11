// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::{sleep, timeout};

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        state = stream.next() => match state {
            Some(_) => panic!("Unexpected element emitted, expected no output."),
            None => panic!("Stream ended, expected it to stay open."),
        },
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits for the next item, panicking if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected item but stream ended"),
        Err(_) => panic!("Timeout: No item received within {timeout_ms} ms"),
    }
}

pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end but it emitted an item"),
        Err(_) => panic!("Timeout: stream did not end within {timeout_ms} ms"),
    }
}

/// Drains the stream to its end, panicking if it is still open after `timeout_ms`.
pub async fn collect_values<S, T>(stream: &mut S, timeout_ms: u64) -> Vec<T>
where
    S: Stream<Item = T> + Unpin,
{
    let drain = async {
        let mut values = Vec::new();
        while let Some(value) = stream.next().await {
            values.push(value);
        }
        values
    };
    match timeout(Duration::from_millis(timeout_ms), drain).await {
        Ok(values) => values,
        Err(_) => panic!("Timeout: stream did not end within {timeout_ms} ms"),
    }
}
