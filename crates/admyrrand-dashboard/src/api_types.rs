//! API request and response types.

use admyrrand_core::{FilterCriteria, Notification, NotificationKind, PageRequest, SortDirection};
use admyrrand_notify::{Phase, ToastSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// List Query Parameters
// =============================================================================

/// Query parameters shared by every list page and fragment.
///
/// Each list reads the subset it understands; the category dimension comes
/// from `category`, `method` or `status` depending on the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Free-text search.
    pub q: Option<String>,
    /// Document or report category.
    pub category: Option<String>,
    /// HTTP method for the endpoint list.
    pub method: Option<String>,
    /// Transaction status.
    pub status: Option<String>,
    /// `grid` or `list` for documents.
    pub view: Option<String>,
    /// Selected endpoint or conversation id.
    pub selected: Option<String>,
    /// Sort column.
    pub sort: Option<String>,
    /// Sort direction (`asc` or `desc`).
    pub dir: Option<String>,
    /// One-based page number.
    pub page: Option<usize>,
}

impl ListQuery {
    /// Search text, or empty.
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// Criteria with the category dimension read from `category`.
    pub fn criteria(&self, category: Option<&str>) -> FilterCriteria {
        FilterCriteria::from_parts(self.q.as_deref(), category)
    }

    /// The selected record id, if it parses.
    pub fn selected_id(&self) -> Option<u32> {
        self.selected.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.dir
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default()
    }

    /// Zero-based page request; page numbers below 1 mean the first page.
    pub fn page_request(&self, size: usize) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1).saturating_sub(1), size)
    }
}

/// Query parameters for the analytics page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub range: Option<String>,
    pub metric: Option<String>,
}

/// Query parameters for the settings page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsQuery {
    pub tab: Option<String>,
}

// =============================================================================
// Notification Types
// =============================================================================

/// Body of `POST /api/notify`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyRequest {
    #[serde(default)]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Omitted or non-positive means the configured default.
    #[serde(default)]
    pub duration_ms: Option<i64>,
}

impl From<NotifyRequest> for Notification {
    fn from(req: NotifyRequest) -> Self {
        Notification {
            kind: req.kind,
            title: req.title,
            message: req.message,
            duration_ms: req.duration_ms.unwrap_or(0),
        }
    }
}

/// Form fields quick actions may carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    /// Text of a message being sent.
    pub message: Option<String>,
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub time: DateTime<Utc>,
    pub notification: Phase,
}

/// JSON view of the slot; `null` when hidden.
pub type NotificationResponse = Option<ToastSnapshot>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_request_defaults() {
        let req: NotifyRequest = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        let n = Notification::from(req);
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.duration_ms, 0);
        assert!(n.message.is_none());
    }

    #[test]
    fn test_notify_request_rejects_unknown_kind() {
        let res: Result<NotifyRequest, _> =
            serde_json::from_str(r#"{"title":"x","kind":"fatal"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_page_request_is_one_based() {
        let q = ListQuery {
            page: Some(3),
            ..Default::default()
        };
        assert_eq!(q.page_request(5), PageRequest::new(2, 5));
        assert_eq!(ListQuery::default().page_request(5).index, 0);

        let zero = ListQuery {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.page_request(5).index, 0);
    }

    #[test]
    fn test_selected_id_ignores_garbage() {
        let q = ListQuery {
            selected: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(q.selected_id(), None);
    }
}
