// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::task::{Context, Poll};
use rivulet_core::CancellationToken;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_reports_only_the_first_transition() {
    let token = CancellationToken::new();

    assert!(token.cancel());
    assert!(!token.cancel());
    assert!(!token.cancel());
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token1 = CancellationToken::new();
    let token2 = token1.clone();

    token2.cancel();

    assert!(token1.is_cancelled());
    assert!(token2.is_cancelled());
}

#[test]
fn test_cancel_before_first_poll() {
    let token = CancellationToken::new();
    token.cancel();

    let mut future = Box::pin(token.cancelled());
    let waker = futures::task::noop_waker();
    let mut cx = Context::from_waker(&waker);

    assert_eq!(future.as_mut().poll(&mut cx), Poll::Ready(()));
}

#[tokio::test]
async fn test_cancelled_waits_until_cancel() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let token = CancellationToken::new();
    let waiter = token.clone();
    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
        true
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!handle.is_finished());

    // Act
    token.cancel();

    // Assert
    let woke = tokio::time::timeout(Duration::from_millis(100), handle).await??;
    assert!(woke);
    Ok(())
}

#[tokio::test]
async fn test_cancellation_propagates_to_all_clones() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let count = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let token = token.clone();
            let count = count.clone();
            tokio::spawn(async move {
                token.cancelled().await;
                count.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    // Act
    tokio::task::yield_now().await;
    token.cancel();

    // Assert
    for handle in handles {
        tokio::time::timeout(Duration::from_millis(100), handle).await??;
    }
    assert_eq!(count.load(Ordering::SeqCst), 20);
    Ok(())
}

#[tokio::test]
async fn test_late_waiters_see_cancellation() -> anyhow::Result<()> {
    let token = CancellationToken::new();
    token.cancel();

    let waiter = token.clone();
    let handle = tokio::spawn(async move { waiter.cancelled().await });

    tokio::time::timeout(Duration::from_millis(50), handle).await??;
    Ok(())
}

#[tokio::test]
async fn test_race_between_cancel_and_listen_registration() -> anyhow::Result<()> {
    for _ in 0..100 {
        let token = CancellationToken::new();
        let canceller = token.clone();

        let handle = tokio::spawn(async move {
            token.cancelled().await;
        });
        canceller.cancel();

        tokio::time::timeout(Duration::from_millis(100), handle).await??;
    }
    Ok(())
}

#[tokio::test]
async fn test_dropping_token_does_not_cancel() -> anyhow::Result<()> {
    tokio::time::pause();

    let token = CancellationToken::new();
    let waiter = token.clone();
    let handle = tokio::spawn(async move {
        tokio::time::timeout(Duration::from_millis(100), waiter.cancelled()).await
    });

    drop(token);

    assert!(handle.await?.is_err());
    Ok(())
}
