//! Real-time updates feed for the dashboard home.
//!
//! While connected, a reading is due every [`TICK`] and lands
//! [`FETCH_DELAY`] later. Readings cycle through [`fixtures::LIVE_SAMPLES`]
//! and only the newest [`CAPACITY`] are kept, newest first. The feed advances
//! on read from elapsed time; polling more often adds no readings.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

use crate::fixtures::{self, LiveSample};

/// Interval between readings.
pub const TICK: Duration = Duration::from_secs(4);
/// Time a reading spends "updating" before it lands.
pub const FETCH_DELAY: Duration = Duration::from_millis(800);
/// Readings kept.
pub const CAPACITY: usize = 5;
/// How long a landed reading is highlighted.
const HIGHLIGHT: Duration = Duration::from_millis(500);

/// A landed reading, as rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveUpdate {
    /// 1-based position in the stream.
    pub seq: u64,
    pub sample: LiveSample,
    pub at: DateTime<Utc>,
    /// Landed within the highlight window.
    pub is_new: bool,
}

/// Point-in-time view of the feed.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub connected: bool,
    /// A reading is due and has not landed yet.
    pub updating: bool,
    /// Newest first, at most [`CAPACITY`].
    pub updates: Vec<LiveUpdate>,
    pub last_update: DateTime<Utc>,
}

/// Handle to the feed. Clones share the same stream.
#[derive(Clone, Debug, Default)]
pub struct LiveFeed {
    inner: Arc<Mutex<FeedState>>,
}

#[derive(Debug)]
struct FeedState {
    connected: bool,
    /// When the next reading starts updating.
    next_due: Instant,
    /// Readings landed so far.
    seq: u64,
    entries: VecDeque<Entry>,
    last_update: DateTime<Utc>,
}

#[derive(Debug)]
struct Entry {
    seq: u64,
    sample: LiveSample,
    at: DateTime<Utc>,
    landed: Instant,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            connected: true,
            next_due: Instant::now() + TICK,
            seq: 0,
            entries: VecDeque::with_capacity(CAPACITY),
            last_update: Utc::now(),
        }
    }
}

impl LiveFeed {
    /// A connected feed whose first reading is due one [`TICK`] from now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the current time and return what to render.
    pub fn snapshot(&self) -> FeedSnapshot {
        let now = Instant::now();
        let mut state = self.lock();
        state.advance(now);
        state.snapshot(now)
    }

    /// Flip between connected and paused. Returns the new state.
    ///
    /// Reconnecting restarts the cadence: the next reading is due one
    /// [`TICK`] later, and nothing accrues while paused.
    pub fn toggle(&self) -> bool {
        let now = Instant::now();
        let mut state = self.lock();
        state.advance(now);
        state.connected = !state.connected;
        if state.connected {
            state.next_due = now + TICK;
        }
        tracing::info!(connected = state.connected, "Live updates toggled");
        state.connected
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FeedState {
    fn advance(&mut self, now: Instant) {
        if !self.connected || now < self.next_due + FETCH_DELAY {
            return;
        }

        let since_first = now.saturating_duration_since(self.next_due + FETCH_DELAY);
        let landed = u32::try_from(since_first.as_millis() / TICK.as_millis() + 1).unwrap_or(u32::MAX);
        let wall = Utc::now();

        // Readings older than the newest CAPACITY would be evicted at once.
        let skipped = landed.saturating_sub(CAPACITY as u32);
        for i in skipped..landed {
            let landed_at = self.next_due + TICK.saturating_mul(i) + FETCH_DELAY;
            let seq = self.seq + u64::from(i) + 1;
            let age = TimeDelta::from_std(now.saturating_duration_since(landed_at))
                .unwrap_or(TimeDelta::zero());
            self.entries.push_front(Entry {
                seq,
                sample: sample_for(seq),
                at: wall - age,
                landed: landed_at,
            });
        }
        self.entries.truncate(CAPACITY);

        self.seq += u64::from(landed);
        self.next_due += TICK.saturating_mul(landed);
        if let Some(newest) = self.entries.front() {
            self.last_update = newest.at;
        }
        tracing::debug!(seq = self.seq, landed, "Live feed advanced");
    }

    fn snapshot(&self, now: Instant) -> FeedSnapshot {
        FeedSnapshot {
            connected: self.connected,
            updating: self.connected && now >= self.next_due,
            updates: self
                .entries
                .iter()
                .map(|e| LiveUpdate {
                    seq: e.seq,
                    sample: e.sample,
                    at: e.at,
                    is_new: now.saturating_duration_since(e.landed) < HIGHLIGHT,
                })
                .collect(),
            last_update: self.last_update,
        }
    }
}

/// The sample for the `seq`th reading.
fn sample_for(seq: u64) -> LiveSample {
    let samples = fixtures::LIVE_SAMPLES;
    let index = (seq.saturating_sub(1) % samples.len() as u64) as usize;
    samples[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(snap: &FeedSnapshot) -> Vec<u64> {
        snap.updates.iter().map(|u| u.seq).collect()
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_empty_and_connected() {
        let feed = LiveFeed::new();
        let snap = feed.snapshot();
        assert!(snap.connected);
        assert!(!snap.updating);
        assert!(snap.updates.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reading_updates_then_lands() {
        let feed = LiveFeed::new();

        sleep_ms(4_000).await;
        let snap = feed.snapshot();
        assert!(snap.updating);
        assert!(snap.updates.is_empty());

        sleep_ms(800).await;
        let snap = feed.snapshot();
        assert!(!snap.updating);
        assert_eq!(seqs(&snap), vec![1]);
        assert_eq!(snap.updates[0].sample, fixtures::LIVE_SAMPLES[0]);
        assert!(snap.updates[0].is_new);
        assert_eq!(snap.last_update, snap.updates[0].at);

        sleep_ms(600).await;
        assert!(!feed.snapshot().updates[0].is_new);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_newest_five() {
        let feed = LiveFeed::new();
        // Readings land at 4.8s, 8.8s, ... 28.8s.
        sleep_ms(30_000).await;
        let snap = feed.snapshot();
        assert_eq!(seqs(&snap), vec![7, 6, 5, 4, 3]);
        assert_eq!(snap.updates[0].sample, fixtures::LIVE_SAMPLES[6]);
        assert!(snap.updates.windows(2).all(|w| w[0].at >= w[1].at));
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_rate_does_not_change_pace() {
        let polled = LiveFeed::new();
        let idle = LiveFeed::new();
        for _ in 0..30 {
            sleep_ms(1_000).await;
            polled.snapshot();
        }
        assert_eq!(seqs(&polled.snapshot()), seqs(&idle.snapshot()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_idle_catches_up() {
        let feed = LiveFeed::new();
        sleep_ms(3_600_000).await;
        let snap = feed.snapshot();
        assert_eq!(snap.updates.len(), CAPACITY);
        let newest = snap.updates[0].seq;
        assert_eq!(seqs(&snap), (newest - 4..=newest).rev().collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_readings() {
        let feed = LiveFeed::new();
        sleep_ms(5_000).await;
        assert!(!feed.toggle());

        sleep_ms(60_000).await;
        let snap = feed.snapshot();
        assert!(!snap.connected);
        assert!(!snap.updating);
        assert_eq!(seqs(&snap), vec![1]);

        assert!(feed.toggle());
        sleep_ms(4_799).await;
        assert_eq!(seqs(&feed.snapshot()), vec![1]);
        sleep_ms(1).await;
        assert_eq!(seqs(&feed.snapshot()), vec![2, 1]);
    }

    #[test]
    fn test_samples_cycle() {
        let len = fixtures::LIVE_SAMPLES.len() as u64;
        assert_eq!(sample_for(1), fixtures::LIVE_SAMPLES[0]);
        assert_eq!(sample_for(len + 1), fixtures::LIVE_SAMPLES[0]);
        assert_eq!(sample_for(len), fixtures::LIVE_SAMPLES[len as usize - 1]);
    }
}
