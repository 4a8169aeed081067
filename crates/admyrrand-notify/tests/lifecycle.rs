//! Timing tests for the notification lifecycle.
//!
//! All tests run on a paused tokio clock, so `sleep` advances virtual time
//! deterministically and timers fire in deadline order.
//!
//! Run with: cargo test --package admyrrand-notify --test lifecycle

use admyrrand_core::{Notification, NotificationKind, NotificationsConfig};
use admyrrand_notify::{NotificationManager, Phase};
use std::time::Duration;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn manager() -> NotificationManager {
    NotificationManager::new(&NotificationsConfig::default()).expect("inside a runtime")
}

fn visible_title(m: &NotificationManager) -> Option<String> {
    m.snapshot()
        .filter(|s| s.phase == Phase::Visible)
        .map(|s| s.notification.title)
}

/// show() makes exactly the latest notification visible.
#[tokio::test(start_paused = true)]
async fn test_show_displays_latest() {
    let m = manager();
    m.show(Notification::info("First"));
    m.show(Notification::success("Second").with_message("body"));

    let snap = m.snapshot().unwrap();
    assert_eq!(snap.phase, Phase::Visible);
    assert_eq!(snap.notification.title, "Second");
    assert_eq!(snap.notification.kind, NotificationKind::Success);
    assert_eq!(snap.notification.message.as_deref(), Some("body"));
    assert_eq!(snap.generation, 2);
}

/// Visible until duration, Closing until duration + 200ms, then Hidden.
#[tokio::test(start_paused = true)]
async fn test_auto_dismiss_timing() {
    let m = manager();
    m.show(Notification::success("Saved").with_duration_ms(2000));

    sleep(ms(1999)).await;
    assert_eq!(m.phase(), Phase::Visible);

    sleep(ms(2)).await; // t = 2001
    assert_eq!(m.phase(), Phase::Closing);

    sleep(ms(198)).await; // t = 2199
    assert_eq!(m.phase(), Phase::Closing);

    sleep(ms(2)).await; // t = 2201
    assert_eq!(m.phase(), Phase::Hidden);
    assert!(m.snapshot().is_none());
}

/// The default duration applies when none is given.
#[tokio::test(start_paused = true)]
async fn test_default_duration_is_five_seconds() {
    let m = manager();
    m.show(Notification::info("Default"));

    sleep(ms(4999)).await;
    assert_eq!(m.phase(), Phase::Visible);
    sleep(ms(2)).await;
    assert_eq!(m.phase(), Phase::Closing);
    sleep(ms(200)).await;
    assert_eq!(m.phase(), Phase::Hidden);
}

/// Two dismiss() calls behave exactly like one.
#[tokio::test(start_paused = true)]
async fn test_dismiss_is_idempotent() {
    let once = manager();
    let twice = manager();
    once.show(Notification::info("x"));
    twice.show(Notification::info("x"));

    sleep(ms(100)).await;
    once.dismiss();
    twice.dismiss();
    twice.dismiss();
    assert_eq!(once.snapshot(), twice.snapshot());

    sleep(ms(150)).await; // 150ms into the exit animation
    assert_eq!(once.phase(), Phase::Closing);
    assert_eq!(twice.phase(), Phase::Closing);

    sleep(ms(51)).await; // 201ms after dismiss
    assert_eq!(once.phase(), Phase::Hidden);
    assert_eq!(twice.phase(), Phase::Hidden);
}

/// A second dismiss while Closing does not restart the exit animation.
#[tokio::test(start_paused = true)]
async fn test_dismiss_while_closing_does_not_extend() {
    let m = manager();
    m.show(Notification::info("x"));
    m.dismiss();
    sleep(ms(150)).await;
    m.dismiss();
    sleep(ms(51)).await;
    assert_eq!(m.phase(), Phase::Hidden);
}

/// "Saved" (2000ms) then "Failed" at 500ms: only "Failed" is ever visible
/// afterwards, and "Saved" never reaches its own dismiss timer.
#[tokio::test(start_paused = true)]
async fn test_later_show_supersedes_earlier() {
    let m = manager();
    m.show(Notification::new(NotificationKind::Success, "Saved").with_duration_ms(2000));

    sleep(ms(500)).await;
    m.show(Notification::new(NotificationKind::Error, "Failed"));

    sleep(ms(100)).await; // t = 600
    let snap = m.snapshot().unwrap();
    assert_eq!(snap.notification.title, "Failed");
    assert_eq!(snap.notification.kind, NotificationKind::Error);
    assert_eq!(snap.notification.duration_ms, 5000);
    assert_eq!(snap.phase, Phase::Visible);

    sleep(ms(1500)).await; // t = 2100, past Saved's timer
    assert_eq!(visible_title(&m).as_deref(), Some("Failed"));

    sleep(ms(3399)).await; // t = 5499
    assert_eq!(m.phase(), Phase::Visible);
    sleep(ms(2)).await; // t = 5501
    assert_eq!(m.phase(), Phase::Closing);
}

/// show() during Closing cancels the pending removal.
#[tokio::test(start_paused = true)]
async fn test_show_interrupts_closing() {
    let m = manager();
    m.show(Notification::info("Old").with_duration_ms(1000));

    sleep(ms(1100)).await;
    assert_eq!(m.phase(), Phase::Closing);

    m.show(Notification::info("New").with_duration_ms(3000));
    assert_eq!(visible_title(&m).as_deref(), Some("New"));

    sleep(ms(150)).await; // past Old's removal at t = 1200
    assert_eq!(visible_title(&m).as_deref(), Some("New"));

    sleep(ms(2900)).await; // t = 4150, New closes at 4100
    assert_eq!(m.phase(), Phase::Closing);
}

/// Deferred shows fire after their delay; a newer one replaces an older one.
#[tokio::test(start_paused = true)]
async fn test_show_after() {
    let m = manager();
    m.show_after(ms(1000), Notification::success("Documents Loaded").with_duration_ms(3000));
    assert!(m.has_pending());

    sleep(ms(999)).await;
    assert_eq!(m.phase(), Phase::Hidden);

    sleep(ms(2)).await;
    assert_eq!(visible_title(&m).as_deref(), Some("Documents Loaded"));
    assert!(!m.has_pending());

    m.show_after(ms(1000), Notification::info("Stale"));
    sleep(ms(500)).await;
    m.show_after(ms(1000), Notification::info("Fresh"));

    sleep(ms(600)).await; // Stale's deadline has passed
    assert_eq!(visible_title(&m).as_deref(), Some("Documents Loaded"));

    sleep(ms(401)).await;
    assert_eq!(visible_title(&m).as_deref(), Some("Fresh"));
}

/// An immediate show does not cancel a pending deferred one.
#[tokio::test(start_paused = true)]
async fn test_deferred_show_supersedes_immediate_show() {
    let m = manager();
    m.show_after(ms(1000), Notification::success("Welcome"));
    m.show(Notification::info("Report Generation"));

    sleep(ms(500)).await;
    assert_eq!(visible_title(&m).as_deref(), Some("Report Generation"));

    sleep(ms(501)).await;
    assert_eq!(visible_title(&m).as_deref(), Some("Welcome"));
}

/// The configured exit animation length is honored.
#[tokio::test(start_paused = true)]
async fn test_custom_exit_animation() {
    let config = NotificationsConfig {
        exit_animation_ms: 500,
        ..Default::default()
    };
    let m = NotificationManager::new(&config).unwrap();
    m.show(Notification::info("x"));
    m.dismiss();

    sleep(ms(499)).await;
    assert_eq!(m.phase(), Phase::Closing);
    sleep(ms(2)).await;
    assert_eq!(m.phase(), Phase::Hidden);
}
