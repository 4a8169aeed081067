//! Transient toast notifications.
//!
//! A [`Notification`] is pure data. Display, timing and replacement are the
//! job of the manager in `admyrrand-notify`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Display duration used when none is given or the given one is not positive.
pub const DEFAULT_DURATION_MS: i64 = 5000;

/// Visual variant of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Every kind, in display order.
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    /// Lowercase name as used on the wire and in CSS hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            "warning" => Ok(NotificationKind::Warning),
            "info" => Ok(NotificationKind::Info),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// One user-visible, transient message.
///
/// The title is not validated; an empty title is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Visual variant.
    #[serde(default)]
    pub kind: NotificationKind,
    /// Headline text.
    pub title: String,
    /// Optional body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// How long the notification stays visible before closing.
    ///
    /// Non-positive values fall back to a default; see
    /// [`Notification::display_duration`].
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,
}

impl Notification {
    /// Create a notification with the default duration and no message.
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Shorthand for an `info` notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    /// Shorthand for a `success` notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    /// Shorthand for a `warning` notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title)
    }

    /// Shorthand for an `error` notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    /// Set the body text.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the display duration in milliseconds.
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// The display duration, or `default` when `duration_ms` is not positive.
    pub fn display_duration(&self, default: Duration) -> Duration {
        u64::try_from(self.duration_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map_or(default, Duration::from_millis)
    }

    /// Return a copy whose `duration_ms` is the positive display duration.
    pub fn normalized(mut self, default: Duration) -> Self {
        let ms = self.display_duration(default).as_millis();
        self.duration_ms = i64::try_from(ms).unwrap_or(i64::MAX);
        self
    }
}

fn default_duration_ms() -> i64 {
    DEFAULT_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let n = Notification::info("Hello");
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.message, None);
        assert_eq!(n.duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn test_non_positive_duration_uses_default() {
        let default = Duration::from_millis(750);
        let shown = |ms: i64| Notification::info("a").with_duration_ms(ms).display_duration(default);
        assert_eq!(shown(0), default);
        assert_eq!(shown(-20), default);
        assert_eq!(shown(1), Duration::from_millis(1));
        assert_eq!(
            Notification::info("a").with_duration_ms(-1).normalized(default).duration_ms,
            750
        );
        assert_eq!(
            Notification::info("a").with_duration_ms(2000).normalized(default).duration_ms,
            2000
        );
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let n = Notification::error("");
        assert_eq!(n.title, "");
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let n: Notification = serde_json::from_str(r#"{"title": "Saved"}"#).unwrap();
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.duration_ms, 5000);

        let n: Notification = serde_json::from_str(
            r#"{"kind": "success", "title": "Saved", "message": "ok", "duration_ms": 2000}"#,
        )
        .unwrap();
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message.as_deref(), Some("ok"));
        assert_eq!(n.duration_ms, 2000);
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in NotificationKind::ALL {
            assert_eq!(kind.as_str().parse::<NotificationKind>().unwrap(), kind);
        }
        assert!("fatal".parse::<NotificationKind>().is_err());
    }
}
