//! Request handlers for the dashboard.

use axum::extract::{Query, State};
use axum::response::Html;

use crate::api_types::{AnalyticsQuery, ListQuery, SettingsQuery};
use crate::notices::PageKind;
use crate::pages;
use crate::pages_extra;
use crate::state::AppState;

// =============================================================================
// Page Handlers (HTML responses)
// =============================================================================

/// Handler for the dashboard home page.
pub async fn home(State(state): State<AppState>, Query(params): Query<ListQuery>) -> Html<String> {
    state.announce(PageKind::Dashboard.loaded());
    Html(pages::dashboard_page(
        state.brand(),
        &params,
        state.page_size(),
        &state.live_feed().snapshot(),
    ))
}

/// Handler for the analytics page.
pub async fn analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsQuery>,
) -> Html<String> {
    state.announce(PageKind::Analytics.loaded());
    Html(pages::analytics_page(state.brand(), &params))
}

/// Handler for the API explorer page.
pub async fn api_explorer(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Html<String> {
    state.announce(PageKind::ApiExplorer.loaded());
    Html(pages::api_explorer_page(state.brand(), &params))
}

/// Handler for the documents page.
pub async fn documents(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Html<String> {
    state.announce(PageKind::Documents.loaded());
    Html(pages_extra::documents_page(state.brand(), &params))
}

/// Handler for the messages page.
pub async fn messages(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Html<String> {
    state.announce(PageKind::Messages.loaded());
    Html(pages_extra::messages_page(state.brand(), &params))
}

/// Handler for the reports page.
pub async fn reports(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Html<String> {
    state.announce(PageKind::Reports.loaded());
    Html(pages_extra::reports_page(state.brand(), &params))
}

/// Handler for the settings page.
pub async fn settings(
    State(state): State<AppState>,
    Query(params): Query<SettingsQuery>,
) -> Html<String> {
    state.announce(PageKind::Settings.loaded());
    Html(pages_extra::settings_page(state.brand(), params.tab.as_deref()))
}

// =============================================================================
// API Handlers (JSON/HTMX responses)
// =============================================================================

pub mod api {
    use super::*;
    use axum::body::Body;
    use axum::extract::rejection::{FormRejection, JsonRejection};
    use axum::extract::{FromRequest, Path, Request};
    use axum::http::header;
    use axum::response::{IntoResponse, Response};
    use axum::{Form, Json};

    use crate::api_types::*;
    use crate::error::DashboardError;
    use crate::fixtures::Transaction;
    use crate::notices::QuickAction;
    use crate::templates::toast_fragment;

    // -------------------------------------------------------------------------
    // Fragments
    // -------------------------------------------------------------------------

    /// Re-render one filtered list for an HTMX swap.
    pub async fn fragment(
        State(state): State<AppState>,
        Path(list): Path<String>,
        Query(params): Query<ListQuery>,
    ) -> Result<Html<String>, DashboardError> {
        let html = match list.as_str() {
            "transactions" => pages::transactions_fragment(&params, state.page_size()),
            "endpoints" => pages::endpoints_fragment(&params),
            "documents" => pages_extra::documents_fragment(&params),
            "conversations" => pages_extra::conversations_fragment(&params),
            "reports" => pages_extra::reports_fragment(&params),
            "updates" => pages::live_updates_fragment(&state.live_feed().snapshot()),
            other => return Err(DashboardError::NotFound(format!("fragment '{other}'"))),
        };
        Ok(Html(html))
    }

    /// Connect or pause the live updates feed; returns the re-rendered card.
    pub async fn toggle_updates(State(state): State<AppState>) -> Html<String> {
        let feed = state.live_feed();
        feed.toggle();
        Html(pages::live_updates_fragment(&feed.snapshot()))
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Current toast as an HTML fragment; empty when hidden.
    pub async fn notification(State(state): State<AppState>) -> Html<String> {
        Html(toast_fragment(state.notifications().snapshot().as_ref()))
    }

    /// Current toast as JSON; `null` when hidden.
    pub async fn notification_json(State(state): State<AppState>) -> Json<NotificationResponse> {
        Json(state.notifications().snapshot())
    }

    /// User close affordance. Returns the re-rendered slot.
    pub async fn dismiss(State(state): State<AppState>) -> Html<String> {
        let manager = state.notifications();
        manager.dismiss();
        Html(toast_fragment(manager.snapshot().as_ref()))
    }

    /// Show a notification described by a JSON body.
    pub async fn notify(
        State(state): State<AppState>,
        body: Result<Json<NotifyRequest>, JsonRejection>,
    ) -> Result<Json<NotificationResponse>, DashboardError> {
        let Json(req) = body.map_err(|e| DashboardError::InvalidRequest(e.body_text()))?;
        let manager = state.notifications();
        manager.show(req.into());
        Ok(Json(manager.snapshot()))
    }

    /// Run a quick action and return the slot it updated.
    pub async fn action(
        State(state): State<AppState>,
        Path(name): Path<String>,
        request: Request,
    ) -> Result<Html<String>, DashboardError> {
        let action: QuickAction = name.parse().map_err(DashboardError::NotFound)?;
        let form = action_form(request).await?;

        let manager = state.notifications();
        match action.notification(form.message.as_deref()) {
            Some(n) => {
                tracing::info!(action = %action, "Quick action");
                manager.show(n);
            }
            None => tracing::debug!(action = %action, "Quick action had nothing to announce"),
        }
        Ok(Html(toast_fragment(manager.snapshot().as_ref())))
    }

    /// Largest quick-action body accepted.
    const MAX_FORM_BYTES: usize = 16 * 1024;

    /// Buttons post no fields, so an empty body is an empty form. Anything
    /// else must be a valid urlencoded form.
    async fn action_form(request: Request) -> Result<ActionForm, DashboardError> {
        let (parts, body) = request.into_parts();
        let bytes = axum::body::to_bytes(body, MAX_FORM_BYTES)
            .await
            .map_err(|e| DashboardError::InvalidRequest(format!("unreadable body: {e}")))?;
        if bytes.is_empty() {
            return Ok(ActionForm::default());
        }

        let request = Request::from_parts(parts, Body::from(bytes));
        let Form(form) = Form::<ActionForm>::from_request(request, &())
            .await
            .map_err(|e: FormRejection| DashboardError::InvalidRequest(e.body_text()))?;
        Ok(form)
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Transactions as CSV, honoring the table's search, status and sort.
    pub async fn transactions_csv(Query(params): Query<ListQuery>) -> Response {
        let rows = pages::sorted_transactions(&params);
        (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, r#"attachment; filename="transactions.csv""#),
            ],
            transactions_to_csv(&rows),
        )
            .into_response()
    }

    pub(crate) fn transactions_to_csv(rows: &[&Transaction]) -> String {
        let mut out = String::from("Customer,Email,Amount,Status,Date,Payment Method,Category\n");
        for t in rows {
            let fields = [
                csv_field(t.customer),
                csv_field(t.email),
                format!("{:.2}", t.amount),
                csv_field(t.status),
                csv_field(t.date),
                csv_field(t.payment_method),
                csv_field(t.category),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        out
    }

    /// Quote a field when it contains a delimiter, quote or line break.
    fn csv_field(value: &str) -> String {
        if value.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    // -------------------------------------------------------------------------
    // Assets & health
    // -------------------------------------------------------------------------

    pub async fn asset(Path(path): Path<String>) -> Result<Response, DashboardError> {
        crate::assets::serve(&path)
    }

    pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            time: chrono::Utc::now(),
            notification: state.notifications().phase(),
        })
    }

}
