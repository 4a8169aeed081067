//! # admyrrand-core
//!
//! Shared building blocks for the Admyrrand analytics dashboard:
//!
//! - [`notification`]: the transient toast message model
//! - [`filter`]: the generic search/category narrowing applied to every
//!   list view, plus stable sorting and pagination
//! - [`config`]: configuration types and file loading
//!
//! Nothing in this crate is async; timers live in `admyrrand-notify`.

pub mod config;
pub mod filter;
pub mod notification;

pub use config::{
    AdmyrrandConfig, ConfigError, DashboardConfig, LoggingConfig, NotificationsConfig,
};
pub use filter::{
    filter, paginate, sort_records, FieldAccessor, FilterCriteria, ListFilter, PageRequest,
    Paged, SortDirection, SortKey, ALL,
};
pub use notification::{Notification, NotificationKind, DEFAULT_DURATION_MS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates_against_schema() {
        let instance = serde_json::to_value(AdmyrrandConfig::default())
            .expect("config must serialize");
        let schema: serde_json::Value =
            serde_json::from_str(include_str!("../../../schemas/AdmyrrandConfig.schema.json"))
                .expect("schema must parse");

        let validator = jsonschema::draft202012::options()
            .build(&schema)
            .expect("schema must compile");

        if !validator.is_valid(&instance) {
            let mut msgs = Vec::new();
            for (idx, err) in validator.iter_errors(&instance).take(20).enumerate() {
                msgs.push(format!("{}: {}", idx + 1, err));
            }
            panic!("default config did not validate: {}", msgs.join("; "));
        }
    }

    #[test]
    fn notification_serializes_with_snake_case_kind() {
        let n = Notification::new(NotificationKind::Warning, "Share Dashboard");
        let v = serde_json::to_value(&n).expect("notification must serialize");
        assert_eq!(v["kind"], "warning");
        assert_eq!(v["duration_ms"], DEFAULT_DURATION_MS);
    }
}
