// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::Observable;
use rivulet_stream::{concat, pairwise, reduce};
use rivulet_test_utils::{collect_values, test_channel, unwrap_stream};

#[tokio::test]
async fn test_reduce_emits_running_accumulator() -> anyhow::Result<()> {
    // Arrange
    let digits = Observable::from_iter(1..=6);

    // Act
    let scanned = reduce(digits, |acc: String, digit: i32| format!("{acc}{digit}"), String::new());
    let (mut values, _unsubscribe) = scanned.subscribe();

    // Assert
    assert_eq!(
        collect_values(&mut values, 1000).await,
        vec!["1", "12", "123", "1234", "12345", "123456"]
    );
    Ok(())
}

#[tokio::test]
async fn test_reduce_emits_per_input() -> anyhow::Result<()> {
    tokio::time::pause();

    let (tx, source) = test_channel();
    let (mut values, _unsubscribe) = reduce(source, |sum: i64, x: i64| sum + x, 100).subscribe();

    tx.send(1)?;
    assert_eq!(unwrap_stream(&mut values, 500).await, 101);
    tx.send(10)?;
    assert_eq!(unwrap_stream(&mut values, 500).await, 111);
    Ok(())
}

#[tokio::test]
async fn test_reduce_on_empty_source_emits_nothing() -> anyhow::Result<()> {
    let scanned = reduce(Observable::<i32>::empty(), |acc: i32, x: i32| acc + x, 0);

    let (mut values, _unsubscribe) = scanned.subscribe();

    assert!(collect_values(&mut values, 1000).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_pairwise() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = pairwise(Observable::from_iter(1..=6)).subscribe();

    assert_eq!(
        collect_values(&mut values, 1000).await,
        vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]
    );
    Ok(())
}

#[tokio::test]
async fn test_pairwise_single_value_emits_nothing() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = pairwise(Observable::of("only")).subscribe();

    assert!(collect_values(&mut values, 1000).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_concat_emits_one_array() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = concat(Observable::from_iter(vec![3, 1, 2])).subscribe();

    assert_eq!(collect_values(&mut values, 1000).await, vec![vec![3, 1, 2]]);
    Ok(())
}

#[tokio::test]
async fn test_concat_of_empty_source() -> anyhow::Result<()> {
    let (mut values, _unsubscribe) = concat(Observable::<u8>::empty()).subscribe();

    assert_eq!(collect_values(&mut values, 1000).await, vec![Vec::<u8>::new()]);
    Ok(())
}
