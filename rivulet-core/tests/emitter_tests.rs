// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rivulet_core::Emitter;
use rivulet_test_utils::HookRecorder;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_next_waits_for_a_reader() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let emitter = Emitter::<i32>::new();
    let producer = emitter.clone();
    let send = tokio::spawn(async move { producer.next(1).await });

    // Act
    tokio::time::sleep(Duration::from_millis(50)).await;
    let pending_before_read = !send.is_finished();
    let value = emitter.recv().await;

    // Assert
    assert!(pending_before_read);
    assert_eq!(value, Some(1));
    assert!(send.await?);
    Ok(())
}

#[tokio::test]
async fn test_values_arrive_in_emission_order() -> anyhow::Result<()> {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let producer = emitter.clone();
    tokio::spawn(async move {
        for value in 1..=5 {
            producer.next(value).await;
        }
        producer.complete();
    });

    // Act
    let mut received = Vec::new();
    while let Some(value) = emitter.recv().await {
        received.push(value);
    }

    // Assert
    assert_eq!(received, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn test_complete_twice_fires_hook_once() -> anyhow::Result<()> {
    // Arrange
    let recorder = HookRecorder::new();
    let emitter = Emitter::<i32>::builder()
        .on_complete(recorder.hook("complete"))
        .build();

    // Act
    emitter.complete();
    emitter.complete();

    // Assert
    assert!(emitter.is_completed());
    assert_eq!(recorder.count("complete"), 1);
    Ok(())
}

#[tokio::test]
async fn test_next_after_complete_is_dropped() -> anyhow::Result<()> {
    // Arrange
    let emitter = Emitter::<i32>::new();
    emitter.complete();

    // Act
    let delivered = emitter.next(1).await;

    // Assert
    assert!(!delivered);
    assert_eq!(emitter.recv().await, None);
    Ok(())
}

#[tokio::test]
async fn test_reads_after_complete_end_without_blocking() -> anyhow::Result<()> {
    tokio::time::pause();

    let emitter = Emitter::<i32>::new();
    emitter.complete();

    let ended = tokio::time::timeout(Duration::from_millis(10), emitter.recv()).await?;
    assert_eq!(ended, None);
    Ok(())
}

#[tokio::test]
async fn test_completed_resolves_on_complete() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let emitter = Emitter::<i32>::new();
    let watcher = emitter.clone();
    let wait = tokio::spawn(async move { watcher.completed().await });

    // Act
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!wait.is_finished());
    emitter.complete();

    // Assert
    tokio::time::timeout(Duration::from_millis(10), wait).await??;
    Ok(())
}

#[tokio::test]
async fn test_on_next_sees_each_delivered_value() -> anyhow::Result<()> {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let emitter = Emitter::<String>::builder()
        .on_next(move |value: &String| log.lock().push(value.clone()))
        .build();
    let producer = emitter.clone();
    tokio::spawn(async move {
        producer.next("a".to_string()).await;
        producer.next("b".to_string()).await;
        producer.complete();
    });

    // Act
    let mut received = Vec::new();
    while let Some(value) = emitter.recv().await {
        received.push(value);
    }

    // Assert
    assert_eq!(received, vec!["a", "b"]);
    assert_eq!(*seen.lock(), vec!["a", "b"]);
    Ok(())
}

#[tokio::test]
async fn test_on_next_skipped_when_emitter_already_completed() -> anyhow::Result<()> {
    let recorder = HookRecorder::new();
    let log = recorder.clone();
    let emitter = Emitter::<i32>::builder()
        .on_next(move |value: &i32| log.record(format!("next {value}")))
        .build();
    emitter.complete();

    assert!(!emitter.next(1).await);
    assert!(recorder.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_on_subscribe_fires_once() -> anyhow::Result<()> {
    let recorder = HookRecorder::new();
    let emitter = Emitter::<i32>::builder()
        .on_subscribe(recorder.hook("subscribed"))
        .build();

    emitter.notify_subscribed();
    emitter.notify_subscribed();

    assert_eq!(recorder.calls(), vec!["subscribed"]);
    Ok(())
}

#[tokio::test]
async fn test_clone_is_a_view_of_the_same_queue() -> anyhow::Result<()> {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let view = emitter.clone();

    // Act
    view.complete();

    // Assert
    assert!(emitter.is_completed());
    assert!(!emitter.next(1).await);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_readers_compete_for_values() -> anyhow::Result<()> {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let readers: Vec<_> = (0..2)
        .map(|_| {
            let reader = emitter.clone();
            tokio::spawn(async move {
                let mut taken = Vec::new();
                while let Some(value) = reader.recv().await {
                    taken.push(value);
                }
                taken
            })
        })
        .collect();

    // Act
    for value in 1..=6 {
        assert!(emitter.next(value).await);
    }
    emitter.complete();

    // Assert
    let mut all = Vec::new();
    for reader in readers {
        all.extend(reader.await?);
    }
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[tokio::test]
async fn test_complete_releases_a_blocked_next() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let emitter = Emitter::<i32>::new();
    let producer = emitter.clone();
    let send = tokio::spawn(async move { producer.next(1).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!send.is_finished());

    // Act
    emitter.complete();

    // Assert
    let delivered = tokio::time::timeout(Duration::from_millis(10), send).await??;
    assert!(!delivered);
    Ok(())
}

/// A producer writing into an emitter that nobody reads and nobody completes stays
/// suspended forever. Cancellation elsewhere in the pipeline does not reach it.
#[tokio::test]
async fn test_unread_uncompleted_emitter_blocks_its_producer() -> anyhow::Result<()> {
    tokio::time::pause();

    // Arrange
    let emitter = Emitter::<i32>::new();

    // Act
    let outcome = tokio::time::timeout(Duration::from_secs(3600), emitter.next(1)).await;

    // Assert
    assert!(outcome.is_err(), "next resolved without a reader");
    assert!(!emitter.is_completed());
    Ok(())
}
