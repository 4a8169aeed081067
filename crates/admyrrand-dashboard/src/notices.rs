//! The notifications each page and quick action raises.

use admyrrand_core::Notification;
use std::fmt;
use std::str::FromStr;

/// Pages that announce themselves once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Dashboard,
    Analytics,
    ApiExplorer,
    Documents,
    Messages,
    Reports,
    Settings,
}

impl PageKind {
    /// The "loaded" notification for this page.
    pub fn loaded(self) -> Notification {
        let (title, message) = match self {
            PageKind::Dashboard => {
                return Notification::success("Welcome to Admyrrand Analytics!")
                    .with_message("Your dashboard is ready with real-time data and insights.")
                    .with_duration_ms(5000);
            }
            PageKind::Analytics => (
                "Analytics Loaded",
                "Your comprehensive analytics data is ready.",
            ),
            PageKind::ApiExplorer => (
                "API Documentation Loaded",
                "Your API endpoints and documentation are ready.",
            ),
            PageKind::Documents => (
                "Documents Loaded",
                "Your documents are ready for viewing and management.",
            ),
            PageKind::Messages => ("Messages Loaded", "Your conversations are ready."),
            PageKind::Reports => (
                "Reports Ready",
                "Your report templates and recent reports are loaded.",
            ),
            PageKind::Settings => (
                "Settings Loaded",
                "Your settings and preferences are ready.",
            ),
        };
        Notification::success(title)
            .with_message(message)
            .with_duration_ms(3000)
    }
}

/// Buttons that only raise a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    GenerateReport,
    ScheduleExport,
    ShareDashboard,
    SendMessage,
    SaveProfile,
}

impl QuickAction {
    pub const ALL: [QuickAction; 5] = [
        QuickAction::GenerateReport,
        QuickAction::ScheduleExport,
        QuickAction::ShareDashboard,
        QuickAction::SendMessage,
        QuickAction::SaveProfile,
    ];

    /// Route segment under `/api/actions/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickAction::GenerateReport => "generate-report",
            QuickAction::ScheduleExport => "schedule-export",
            QuickAction::ShareDashboard => "share-dashboard",
            QuickAction::SendMessage => "send-message",
            QuickAction::SaveProfile => "save-profile",
        }
    }

    /// The notification raised by this action.
    ///
    /// `send-message` raises nothing for a blank message.
    pub fn notification(self, message: Option<&str>) -> Option<Notification> {
        let n = match self {
            QuickAction::GenerateReport => Notification::info("Report Generation")
                .with_message("Your comprehensive analytics report is being generated...")
                .with_duration_ms(3000),
            QuickAction::ScheduleExport => Notification::success("Export Scheduled")
                .with_message("Daily data export has been scheduled successfully.")
                .with_duration_ms(3000),
            QuickAction::ShareDashboard => Notification::warning("Share Dashboard")
                .with_message("Dashboard sharing feature is coming soon!")
                .with_duration_ms(3000),
            QuickAction::SendMessage => {
                if message.is_none_or(|m| m.trim().is_empty()) {
                    return None;
                }
                Notification::success("Message Sent")
                    .with_message("Your message has been delivered.")
                    .with_duration_ms(2000)
            }
            QuickAction::SaveProfile => Notification::success("Profile Updated")
                .with_message("Your profile information has been saved.")
                .with_duration_ms(3000),
        };
        Some(n)
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown action '{s}'"))
    }
}
