// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::Observable;
use rivulet_stream::switch_map;
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_values, test_channel, unwrap_stream,
};
use std::time::Duration;

#[tokio::test]
async fn test_switch_map_forwards_each_inner_in_turn() -> anyhow::Result<()> {
    let switched = switch_map(Observable::from_iter(vec![1, 2, 3]), |x: i32| {
        Observable::from_iter(vec![x * 10, x * 10 + 1])
    });

    let (mut values, _unsubscribe) = switched.subscribe();

    assert_eq!(
        collect_values(&mut values, 1000).await,
        vec![10, 11, 20, 21, 30, 31]
    );
    Ok(())
}

#[tokio::test]
async fn test_switch_map_drains_inner_before_next_outer() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let (first_tx, first_inner) = test_channel();
    let mut inners = vec![Some(first_inner), Some(Observable::from_iter(vec!["b1"]))];
    let switched = switch_map(Observable::from_iter(vec![0usize, 1]), move |i: usize| {
        inners[i].take().unwrap_or_else(Observable::empty)
    });
    let (mut values, _unsubscribe) = switched.subscribe();

    // Act & Assert
    first_tx.send("a1")?;
    assert_eq!(unwrap_stream(&mut values, 500).await, "a1");

    // The second outer value is ready, but the first inner is still open.
    assert_no_element_emitted(&mut values, 100).await;

    first_tx.send("a2")?;
    assert_eq!(unwrap_stream(&mut values, 500).await, "a2");

    drop(first_tx);
    assert_eq!(collect_values(&mut values, 500).await, vec!["b1"]);
    Ok(())
}

#[tokio::test]
async fn test_switch_map_with_empty_inners() -> anyhow::Result<()> {
    let switched = switch_map(Observable::from_iter(1..=3), |_: i32| Observable::<i32>::empty());

    let (mut values, _unsubscribe) = switched.subscribe();

    assert_stream_ended(&mut values, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_cancel_fires_accumulated_inner_triggers() -> anyhow::Result<()> {
    // Arrange
    let inner = Observable::<i32>::never();
    let inner_handle = inner.clone();
    let switched = switch_map(Observable::of(1), move |_: i32| inner.clone());
    let (mut values, unsubscribe) = switched.subscribe();
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Act
    unsubscribe.cancel();

    // Assert
    assert_stream_ended(&mut values, 500).await;
    tokio::time::timeout(Duration::from_millis(500), inner_handle.emitter().completed()).await?;
    Ok(())
}
