// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{CancellationToken, Observable};
use rivulet_stream::{after_token, skip_until, skip_until_token, until_token};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_values, test_channel, unwrap_stream,
};
use std::time::Duration;

/// Lets every spawned worker run until the runtime is idle (time is paused).
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test]
async fn test_skip_until_drops_values_before_notifier() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let (tx, source) = test_channel();
    let (signal, notifier) = test_channel::<()>();
    let (mut values, _unsubscribe) = source.pipe(vec![skip_until(notifier)]).subscribe();

    // Act
    tx.send(1)?;
    settle().await;
    signal.send(())?;
    settle().await;
    tx.send(2)?;
    tx.send(3)?;
    drop(tx);

    // Assert
    assert_eq!(collect_values(&mut values, 1000).await, vec![2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_skip_until_completes_when_notifier_never_fires() -> anyhow::Result<()> {
    // Arrange
    let notifier = Observable::<()>::never();

    // Act
    let (mut values, _unsubscribe) = Observable::from_iter(vec![1, 2, 3])
        .pipe(vec![skip_until(notifier.clone())])
        .subscribe();

    // Assert
    assert!(collect_values(&mut values, 1000).await.is_empty());
    tokio::time::timeout(Duration::from_millis(500), notifier.emitter().completed()).await?;
    Ok(())
}

#[tokio::test]
async fn test_skip_until_releases_notifier_after_first_signal() -> anyhow::Result<()> {
    tokio::time::pause();

    let (signal, notifier) = test_channel::<()>();
    let notifier_handle = notifier.clone();
    let (_values, _unsubscribe) = Observable::<i32>::never()
        .pipe(vec![skip_until(notifier)])
        .subscribe();

    signal.send(())?;

    tokio::time::timeout(Duration::from_millis(500), notifier_handle.emitter().completed())
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_skip_until_token() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let token = CancellationToken::new();
    let (tx, source) = test_channel();
    let (mut values, _unsubscribe) = source
        .pipe(vec![skip_until_token(token.clone())])
        .subscribe();

    // Act
    tx.send("early")?;
    settle().await;
    token.cancel();
    tx.send("late")?;
    drop(tx);

    // Assert
    assert_eq!(collect_values(&mut values, 1000).await, vec!["late"]);
    Ok(())
}

#[tokio::test]
async fn test_until_token_completes_downstream_on_cancel() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let token = CancellationToken::new();
    let (tx, source) = test_channel();
    let (mut values, _unsubscribe) = source.pipe(vec![until_token(token.clone())]).subscribe();

    // Act & Assert
    tx.send(1)?;
    assert_eq!(unwrap_stream(&mut values, 500).await, 1);

    token.cancel();
    assert_stream_ended(&mut values, 500).await;

    // The source is still drained so its producer never blocks.
    tx.send(2)?;
    settle().await;
    Ok(())
}

#[tokio::test]
async fn test_until_token_already_cancelled() -> anyhow::Result<()> {
    let token = CancellationToken::new();
    token.cancel();

    let (mut values, _unsubscribe) = Observable::from_iter(1..=3)
        .pipe(vec![until_token(token)])
        .subscribe();

    assert!(collect_values(&mut values, 1000).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_after_token_holds_source_back() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let token = CancellationToken::new();
    let (tx, source) = test_channel();
    let (mut values, _unsubscribe) = source.pipe(vec![after_token(token.clone())]).subscribe();

    // Act & Assert
    tx.send(1)?;
    assert_no_element_emitted(&mut values, 100).await;

    token.cancel();
    assert_eq!(unwrap_stream(&mut values, 500).await, 1);

    tx.send(2)?;
    drop(tx);
    assert_eq!(collect_values(&mut values, 500).await, vec![2]);
    Ok(())
}

#[tokio::test]
async fn test_after_token_cancelled_subscription_ends() -> anyhow::Result<()> {
    let (mut values, unsubscribe) = Observable::<i32>::never()
        .pipe(vec![after_token(CancellationToken::new())])
        .subscribe();

    unsubscribe.cancel();

    assert_stream_ended(&mut values, 500).await;
    Ok(())
}
