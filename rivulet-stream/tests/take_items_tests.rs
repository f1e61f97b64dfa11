// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::Observable;
use rivulet_stream::{skip, take};
use rivulet_test_utils::{assert_no_element_emitted, collect_values, test_channel, unwrap_stream};

#[tokio::test]
async fn test_take_first_three() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = Observable::from_iter(vec![1, 2, 3, 4, 5, 6])
        .pipe(vec![take(3)])
        .subscribe();

    assert_eq!(collect_values(&mut values, 1000).await, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_take_drains_source_before_completing() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::from_iter(1..=100);

    // Act
    let (mut values, _unsubscribe) = source.clone().pipe(vec![take(2)]).subscribe();
    let taken = collect_values(&mut values, 1000).await;

    // Assert
    assert_eq!(taken, vec![1, 2]);
    assert!(source.emitter().is_completed());
    Ok(())
}

#[tokio::test]
async fn test_take_waits_for_source_completion() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let (tx, source) = test_channel();
    let (mut values, _unsubscribe) = source.pipe(vec![take(1)]).subscribe();

    // Act & Assert
    tx.send("a")?;
    assert_eq!(unwrap_stream(&mut values, 500).await, "a");

    tx.send("b")?;
    assert_no_element_emitted(&mut values, 100).await;

    drop(tx);
    assert!(collect_values(&mut values, 500).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_take_zero_emits_nothing() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = Observable::from_iter(1..=3).pipe(vec![take(0)]).subscribe();

    assert!(collect_values(&mut values, 1000).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_take_more_than_available() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = Observable::from_iter(1..=3).pipe(vec![take(10)]).subscribe();

    assert_eq!(collect_values(&mut values, 1000).await, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_skip_two() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = Observable::from_iter(vec![1, 2, 3])
        .pipe(vec![skip(2)])
        .subscribe();

    assert_eq!(collect_values(&mut values, 1000).await, vec![3]);
    Ok(())
}

#[tokio::test]
async fn test_skip_everything() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = Observable::from_iter(1..=3).pipe(vec![skip(5)]).subscribe();

    assert!(collect_values(&mut values, 1000).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_skip_then_take() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = Observable::from_iter(1..=10)
        .pipe(vec![skip(3), take(2)])
        .subscribe();

    assert_eq!(collect_values(&mut values, 1000).await, vec![4, 5]);
    Ok(())
}
