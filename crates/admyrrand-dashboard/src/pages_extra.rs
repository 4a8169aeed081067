//! Page templates for documents, messages, reports and settings.

use admyrrand_core::ALL;

use crate::api_types::ListQuery;
use crate::fixtures::{self, Conversation, Document, ReportTemplate};
use crate::pages::capitalize;
use crate::templates::*;

// =============================================================================
// Documents Page
// =============================================================================

pub fn documents_page(brand: &str, query: &ListQuery) -> String {
    let category = query.category.as_deref().unwrap_or(ALL);
    let view = document_view(query);

    let categories: String = fixtures::DOCUMENT_CATEGORIES
        .iter()
        .map(|(key, label, count)| {
            let class = if *key == category {
                "bg-primary-50 dark:bg-primary-900/50 text-primary-600 dark:text-primary-400"
            } else {
                "text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700/50"
            };
            format!(
                r##"<a href="/documents?{params}" class="flex items-center justify-between px-3 py-2 rounded-lg text-sm {class}">
                    <span>{label}</span>
                    <span class="text-xs text-gray-500 dark:text-gray-400">{count}</span>
                </a>"##,
                params = document_params(query.q.as_deref(), Some(*key), Some(view)),
            )
        })
        .collect();

    let view_toggle = |mode: &str, icon: &str| -> String {
        let class = if mode == view {
            "bg-primary-600 text-white"
        } else {
            "text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-600"
        };
        format!(
            r##"<a href="/documents?{params}" class="px-3 py-2 rounded-md {class}" title="{mode} view"><i class="fas fa-{icon}"></i></a>"##,
            params = document_params(query.q.as_deref(), Some(category), Some(mode)),
        )
    };

    let content = format!(
        r##"{header}

        <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
            <aside class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-4 space-y-1 h-fit">
                <h3 class="px-3 pb-2 text-xs font-semibold text-gray-400 uppercase tracking-wider">Categories</h3>
                {categories}
            </aside>

            <div class="lg:col-span-3 space-y-4">
                <form id="document-filters" class="flex items-center gap-3">
                    <input type="hidden" name="category" value="{category}">
                    <input type="hidden" name="view" value="{view}">
                    {search}
                    <div class="flex bg-gray-100 dark:bg-gray-700 rounded-lg p-1">
                        {grid_toggle}
                        {list_toggle}
                    </div>
                </form>
                <div id="documents-list">
                    {documents}
                </div>
            </div>
        </div>"##,
        header = page_header(
            "Documents",
            "Manage and organize your files.",
            &button(r#"<i class="fas fa-upload mr-2"></i>Upload"#, "primary", ""),
        ),
        category = html_escape(category),
        search = search_box(
            "/fragments/documents",
            "#documents-list",
            query.search(),
            "Search documents...",
            "#document-filters",
        ),
        grid_toggle = view_toggle("grid", "table-cells-large"),
        list_toggle = view_toggle("list", "list"),
        documents = documents_fragment(query),
    );

    layout(brand, "/documents", "Documents", &content)
}

/// `grid` unless `list` was asked for.
fn document_view(query: &ListQuery) -> &'static str {
    match query.view.as_deref() {
        Some("list") => "list",
        _ => "grid",
    }
}

fn document_params(q: Option<&str>, category: Option<&str>, view: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if let Some(c) = category.filter(|c| !c.is_empty()) {
        params.push(format!("category={}", urlencoding::encode(c)));
    }
    if let Some(v) = view {
        params.push(format!("view={v}"));
    }
    params.join("&")
}

/// The filtered document grid or list.
pub fn documents_fragment(query: &ListQuery) -> String {
    let docs = fixtures::document_filter()
        .apply(fixtures::DOCUMENTS, &query.criteria(query.category.as_deref()));
    if docs.is_empty() {
        return empty_state(
            "folder-open",
            "No documents found",
            "Try adjusting your search or category.",
            Some(("Show all documents", "/documents")),
        );
    }

    if document_view(query) == "list" {
        let rows: Vec<Vec<String>> = docs
            .iter()
            .map(|d| {
                vec![
                    format!(
                        r#"<span class="flex items-center gap-2"><i class="fas fa-{} text-gray-400"></i>{}{}</span>"#,
                        fixtures::file_icon(d.file_type),
                        html_escape(d.name),
                        star(d),
                    ),
                    d.category.to_string(),
                    d.size.to_string(),
                    d.owner.to_string(),
                    format_date(d.modified_at),
                    d.downloads.to_string(),
                ]
            })
            .collect();
        return table(&["Name", "Category", "Size", "Owner", "Modified", "Downloads"], &rows);
    }

    let cards: String = docs.iter().map(|d| document_card(d)).collect();
    format!(r#"<div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">{cards}</div>"#)
}

fn document_card(d: &Document) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-5 hover:shadow-md transition-shadow">
            <div class="flex items-start justify-between">
                <div class="w-12 h-12 rounded-lg bg-primary-50 dark:bg-primary-900/30 flex items-center justify-center">
                    <i class="fas fa-{icon} text-primary-600 text-xl"></i>
                </div>
                {star}
            </div>
            <h4 class="mt-4 font-medium text-gray-900 dark:text-white truncate" title="{name}">{name}</h4>
            <p class="text-sm text-gray-500 dark:text-gray-400">{size} · {category}</p>
            <div class="mt-4 flex items-center justify-between text-xs text-gray-500 dark:text-gray-400">
                <span>{owner}</span>
                <span><i class="fas fa-download mr-1"></i>{downloads}</span>
            </div>
            <p class="mt-1 text-xs text-gray-400">Uploaded {uploaded}</p>
        </div>"##,
        icon = fixtures::file_icon(d.file_type),
        star = star(d),
        name = html_escape(d.name),
        size = d.size,
        category = d.category,
        owner = html_escape(d.owner),
        downloads = d.downloads,
        uploaded = format_date(d.uploaded_at),
    )
}

fn star(d: &Document) -> &'static str {
    if d.starred {
        r#"<i class="fas fa-star text-yellow-400 ml-2" title="Starred"></i>"#
    } else {
        ""
    }
}

// =============================================================================
// Messages Page
// =============================================================================

pub fn messages_page(brand: &str, query: &ListQuery) -> String {
    let selected = query
        .selected_id()
        .and_then(|id| fixtures::CONVERSATIONS.iter().find(|c| c.id == id))
        .or_else(|| fixtures::CONVERSATIONS.first());

    let thread: String = fixtures::MESSAGES
        .iter()
        .map(|m| {
            let (align, bubble) = if m.outgoing {
                ("justify-end", "bg-primary-600 text-white")
            } else {
                ("justify-start", "bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white")
            };
            let receipt = if m.outgoing {
                let icon = if m.status == "read" { "check-double" } else { "check" };
                format!(r#" <i class="fas fa-{icon} ml-1"></i>"#)
            } else {
                String::new()
            };
            format!(
                r##"<div class="flex {align}">
                    <div class="max-w-md px-4 py-2 rounded-2xl {bubble}">
                        <p class="text-sm">{text}</p>
                        <p class="text-xs opacity-70 mt-1">{time}{receipt}</p>
                    </div>
                </div>"##,
                text = html_escape(m.text),
                time = m.time,
            )
        })
        .collect();

    let header_html = selected.map_or(String::new(), |c| {
        format!(
            r##"<div class="flex items-center gap-3">
                {avatar}
                <div>
                    <p class="font-semibold text-gray-900 dark:text-white">{name}</p>
                    <p class="text-xs text-gray-500 dark:text-gray-400">{presence}</p>
                </div>
            </div>"##,
            avatar = avatar(c),
            name = html_escape(c.name),
            presence = if c.online { "Online" } else { "Offline" },
        )
    });

    let content = format!(
        r##"{header}

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 h-[calc(100vh-220px)] min-h-[480px]">
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 flex flex-col overflow-hidden">
                <form id="conversation-filters" class="p-4 border-b border-gray-200 dark:border-gray-700">
                    <input type="hidden" name="selected" value="{selected_id}">
                    {search}
                </form>
                <div id="conversations-list" class="flex-1 overflow-y-auto divide-y divide-gray-100 dark:divide-gray-700">
                    {conversations}
                </div>
            </div>

            <div class="lg:col-span-2 bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 flex flex-col overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">{header_html}</div>
                <div class="flex-1 overflow-y-auto p-6 space-y-4">{thread}</div>
                <form class="p-4 border-t border-gray-200 dark:border-gray-700 flex gap-3"
                      hx-post="/api/actions/send-message" hx-target="#toast-slot" hx-swap="innerHTML"
                      hx-on::after-request="if (event.detail.successful) this.reset()">
                    <input type="text" name="message" placeholder="Type a message..." autocomplete="off"
                           class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500">
                    {send}
                </form>
            </div>
        </div>"##,
        header = page_header("Messages", "Stay in touch with your team.", ""),
        selected_id = selected.map_or(String::new(), |c| c.id.to_string()),
        search = search_box(
            "/fragments/conversations",
            "#conversations-list",
            query.search(),
            "Search conversations...",
            "#conversation-filters",
        ),
        conversations = conversations_fragment(query),
        send = button(r#"<i class="fas fa-paper-plane"></i>"#, "primary", r#"type="submit""#),
    );

    layout(brand, "/messages", "Messages", &content)
}

fn avatar(c: &Conversation) -> String {
    let dot = if c.online {
        r#"<span class="absolute bottom-0 right-0 w-3 h-3 bg-green-400 border-2 border-white dark:border-gray-800 rounded-full"></span>"#
    } else {
        ""
    };
    format!(
        r##"<div class="relative w-10 h-10 rounded-full bg-primary-100 dark:bg-primary-900/40 text-primary-700 dark:text-primary-300 flex items-center justify-center text-sm font-semibold">{initials}{dot}</div>"##,
        initials = c.avatar,
    )
}

/// The filtered conversation list.
pub fn conversations_fragment(query: &ListQuery) -> String {
    let conversations = fixtures::conversation_filter()
        .apply(fixtures::CONVERSATIONS, &query.criteria(None));
    if conversations.is_empty() {
        return empty_state("comments", "No conversations", "No conversation matches your search.", None);
    }

    let selected = query.selected_id().unwrap_or(1);
    let q_param = query
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .map_or(String::new(), |q| format!("&q={}", urlencoding::encode(q)));

    conversations
        .iter()
        .map(|c| {
            let highlight = if c.id == selected { "bg-primary-50 dark:bg-primary-900/30" } else { "" };
            let unread = if c.unread > 0 {
                format!(
                    r#"<span class="ml-auto bg-primary-600 text-white text-xs px-2 py-0.5 rounded-full">{}</span>"#,
                    c.unread
                )
            } else {
                String::new()
            };
            format!(
                r##"<a href="/messages?selected={id}{q_param}" class="flex items-center gap-3 px-4 py-3 hover:bg-gray-50 dark:hover:bg-gray-700/50 {highlight}">
                    {avatar}
                    <div class="flex-1 min-w-0">
                        <div class="flex items-center gap-2">
                            <p class="text-sm font-medium text-gray-900 dark:text-white truncate">{name}</p>
                            <span class="text-xs text-gray-400 whitespace-nowrap">{time}</span>
                            {unread}
                        </div>
                        <p class="text-sm text-gray-500 dark:text-gray-400 truncate">{last}</p>
                    </div>
                </a>"##,
                id = c.id,
                avatar = avatar(c),
                name = html_escape(c.name),
                time = c.time,
                last = html_escape(c.last_message),
            )
        })
        .collect()
}

// =============================================================================
// Reports Page
// =============================================================================

pub fn reports_page(brand: &str, query: &ListQuery) -> String {
    let category = query.category.as_deref().unwrap_or(ALL);
    let category_options: Vec<(String, String, bool)> = fixtures::REPORT_CATEGORIES
        .iter()
        .map(|c| {
            let label = if *c == ALL { "All categories" } else { *c };
            (c.to_string(), label.to_string(), *c == category)
        })
        .collect();

    let recent_rows: Vec<Vec<String>> = fixtures::RECENT_REPORTS
        .iter()
        .map(|r| {
            vec![
                format!(r#"<span class="font-medium">{}</span>"#, html_escape(r.name)),
                badge(&capitalize(r.status), status_color(r.status)),
                format_date(r.created_at),
                format!("{} · {}", r.format, r.size),
                r.downloads.to_string(),
            ]
        })
        .collect();

    let content = format!(
        r##"{header}

        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6 mb-8">
            <div class="flex flex-col md:flex-row md:items-center gap-4 mb-6">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white flex-1">Report Templates</h3>
                <form id="report-filters" class="flex flex-col md:flex-row gap-3 md:items-end">
                    {search}
                    <div class="w-48">{category_select}</div>
                </form>
            </div>
            <div id="reports-list">
                {templates}
            </div>
        </div>

        {recent}"##,
        header = page_header(
            "Reports",
            "Generate and manage your analytics reports.",
            &action_button("generate-report", "New Report", "plus", "primary"),
        ),
        search = search_box(
            "/fragments/reports",
            "#reports-list",
            query.search(),
            "Search templates...",
            "#report-filters",
        ),
        category_select = select(
            "category",
            "Category",
            &category_options,
            r##"hx-get="/fragments/reports" hx-trigger="change" hx-target="#reports-list" hx-include="#report-filters""##,
        ),
        templates = reports_fragment(query),
        recent = card(
            "Recent Reports",
            &table(&["Report", "Status", "Created", "Format", "Downloads"], &recent_rows),
        ),
    );

    layout(brand, "/reports", "Reports", &content)
}

/// The filtered report template grid.
pub fn reports_fragment(query: &ListQuery) -> String {
    let templates = fixtures::report_filter()
        .apply(fixtures::REPORT_TEMPLATES, &query.criteria(query.category.as_deref()));
    if templates.is_empty() {
        return empty_state(
            "chart-pie",
            "No templates found",
            "Try a different search or category.",
            Some(("Show all templates", "/reports")),
        );
    }

    let cards: String = templates.iter().map(|t| report_card(t)).collect();
    format!(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-4">{cards}</div>"#)
}

fn report_card(t: &ReportTemplate) -> String {
    format!(
        r##"<div class="border border-gray-200 dark:border-gray-700 rounded-lg p-5 hover:border-primary-300 transition-colors">
            <div class="flex items-start justify-between gap-3">
                <h4 class="font-medium text-gray-900 dark:text-white">{name}</h4>
                {category}
            </div>
            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{description}</p>
            <div class="mt-4 flex items-center justify-between">
                <span class="text-xs text-gray-400">Used {usage} times · Last {last_used}</span>
                {generate}
            </div>
        </div>"##,
        name = html_escape(t.name),
        category = badge(t.category, "blue"),
        description = html_escape(t.description),
        usage = t.usage_count,
        last_used = format_date(t.last_used),
        generate = action_button("generate-report", "Generate", "play", "secondary"),
    )
}

// =============================================================================
// Settings Page
// =============================================================================

pub fn settings_page(brand: &str, tab: Option<&str>) -> String {
    let active = tab
        .filter(|t| fixtures::SETTINGS_TABS.iter().any(|(key, _, _)| key == t))
        .unwrap_or("profile");

    let body = match active {
        "security" => security_settings(),
        "preferences" => preference_settings(),
        "notifications" => notification_settings(),
        "billing" => billing_settings(),
        "integrations" => integration_settings(),
        _ => profile_settings(),
    };

    let content = format!(
        r##"{header}
        {tabs}"##,
        header = page_header("Settings", "Manage your account settings and preferences.", ""),
        tabs = tabs("/settings", fixtures::SETTINGS_TABS, active, &body),
    );

    layout(brand, "/settings", "Settings", &content)
}

fn profile_settings() -> String {
    let p = &fixtures::PROFILE;
    card(
        "Profile Information",
        &format!(
            r##"<div class="flex items-center gap-4 mb-6">
                <div class="w-16 h-16 rounded-full bg-primary-600 text-white flex items-center justify-center text-xl font-semibold">{avatar}</div>
                <div>
                    <p class="font-semibold text-gray-900 dark:text-white">{name}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{role}</p>
                </div>
            </div>
            <form id="profile-form" class="grid grid-cols-1 md:grid-cols-2 gap-4"
                  hx-post="/api/actions/save-profile" hx-target="#toast-slot" hx-swap="innerHTML">
                {name_input}
                {email_input}
                {phone_input}
                {location_input}
                {timezone_input}
                {language_input}
                {currency_input}
                <div class="md:col-span-2 flex justify-end">
                    {save}
                </div>
            </form>"##,
            avatar = p.avatar,
            name = html_escape(p.name),
            role = p.role,
            name_input = input("name", "Full name", "text", p.name, ""),
            email_input = input("email", "Email", "email", p.email, ""),
            phone_input = input("phone", "Phone", "tel", p.phone, ""),
            location_input = input("location", "Location", "text", p.location, ""),
            timezone_input = input("timezone", "Timezone", "text", p.timezone, ""),
            language_input = input("language", "Language", "text", p.language, ""),
            currency_input = input("currency", "Currency", "text", p.currency, ""),
            save = button(r#"<i class="fas fa-floppy-disk mr-2"></i>Save Changes"#, "primary", r#"type="submit""#),
        ),
    )
}

fn security_settings() -> String {
    let s = &fixtures::SECURITY;
    let history: Vec<Vec<String>> = s
        .login_history
        .iter()
        .map(|l| vec![format_date(l.at), l.device.to_string(), l.location.to_string()])
        .collect();

    format!(
        r##"<div class="space-y-6">
            {overview}
            {history}
        </div>"##,
        overview = card(
            "Security",
            &format!(
                r##"<div class="space-y-4">
                    {two_factor}
                    {password}
                    {last_login}
                </div>"##,
                two_factor = setting_row(
                    "Two-Factor Authentication",
                    "Add an extra layer of security to your account",
                    &enabled_badge(s.two_factor_enabled),
                ),
                password = setting_row("Password", &format!("Last changed {}", format_date(s.last_password_change)), ""),
                last_login = setting_row("Last Login", &format_date(s.last_login), ""),
            ),
        ),
        history = card("Login History", &table(&["Time", "Device", "Location"], &history)),
    )
}

fn preference_settings() -> String {
    let p = &fixtures::PREFERENCES;
    let options = |choices: &[(&str, &str)], current: &str| -> Vec<(String, String, bool)> {
        choices
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string(), *value == current))
            .collect()
    };
    let refresh = p.refresh_interval_secs.to_string();

    card(
        "Preferences",
        &format!(
            r##"<div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                {theme}
                {default_view}
                {refresh_select}
            </div>
            {real_time}"##,
            theme = select(
                "theme",
                "Theme",
                &options(&[("light", "Light"), ("dark", "Dark"), ("system", "System")], p.theme),
                "",
            ),
            default_view = select(
                "default_view",
                "Default Dashboard View",
                &options(
                    &[("analytics", "Analytics"), ("reports", "Reports"), ("documents", "Documents")],
                    p.default_view,
                ),
                "",
            ),
            refresh_select = select(
                "refresh_interval",
                "Data Refresh Interval (seconds)",
                &options(
                    &[("15", "15 seconds"), ("30", "30 seconds"), ("60", "1 minute"), ("300", "5 minutes")],
                    &refresh,
                ),
                "",
            ),
            real_time = setting_row(
                "Real-time Updates",
                "Show live data updates on dashboard",
                &enabled_badge(p.real_time_updates),
            ),
        ),
    )
}

fn notification_settings() -> String {
    let p = &fixtures::PREFERENCES;
    card(
        "Notification Channels",
        &format!(
            r##"<div class="space-y-4">{email}{push}{sms}</div>"##,
            email = setting_row("Email Notifications", "Receive updates via email", &enabled_badge(p.email_notifications)),
            push = setting_row("Push Notifications", "Receive browser notifications", &enabled_badge(p.push_notifications)),
            sms = setting_row("SMS Notifications", "Receive updates via SMS", &enabled_badge(p.sms_notifications)),
        ),
    )
}

fn billing_settings() -> String {
    let b = &fixtures::BILLING;
    card(
        "Billing",
        &format!(
            r##"<div class="space-y-4">{plan}{next}{method}</div>"##,
            plan = setting_row("Current Plan", b.plan, &badge("Active", "green")),
            next = setting_row("Next Billing Date", &format_date(b.next_billing_date), ""),
            method = setting_row("Payment Method", b.payment_method, ""),
        ),
    )
}

fn integration_settings() -> String {
    let rows: String = fixtures::INTEGRATIONS
        .iter()
        .map(|i| {
            let status = if i.connected {
                badge("Connected", "green")
            } else {
                button("Connect", "secondary", "")
            };
            format!(
                r##"<div class="flex items-center gap-4">
                    <i class="fas fa-{icon} text-gray-400 w-5"></i>
                    <div class="flex-1">{row}</div>
                </div>"##,
                icon = i.icon,
                row = setting_row(i.name, i.description, &status),
            )
        })
        .collect();

    card("Integrations", &format!(r#"<div class="space-y-4">{rows}</div>"#))
}

fn setting_row(title: &str, description: &str, control: &str) -> String {
    format!(
        r##"<div class="flex items-center justify-between gap-4 py-2">
            <div>
                <p class="font-medium text-gray-900 dark:text-white">{title}</p>
                <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
            </div>
            <div>{control}</div>
        </div>"##
    )
}

fn enabled_badge(enabled: bool) -> String {
    if enabled {
        badge("Enabled", "green")
    } else {
        badge("Disabled", "gray")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(q: &str) -> ListQuery {
        ListQuery {
            q: Some(q.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_documents_fragment_search() {
        let html = documents_fragment(&search("report"));
        assert!(html.contains("Q4 Financial Report.pdf"));
        assert!(!html.contains("Marketing Strategy.docx"));
    }

    #[test]
    fn test_documents_fragment_list_view() {
        let query = ListQuery {
            view: Some("list".into()),
            category: Some("Videos".into()),
            ..Default::default()
        };
        let html = documents_fragment(&query);
        assert!(html.contains("<table"));
        assert!(html.contains("Product Demo.mp4"));
        assert!(!html.contains("Backup Data.zip"));
    }

    #[test]
    fn test_documents_favorites_is_a_plain_category() {
        let query = ListQuery {
            category: Some("Favorites".into()),
            ..Default::default()
        };
        assert!(documents_fragment(&query).contains("No documents found"));
    }

    #[test]
    fn test_document_params_encode() {
        assert_eq!(
            document_params(Some("q4 report"), Some("all"), Some("grid")),
            "q=q4%20report&category=all&view=grid"
        );
        assert_eq!(document_params(None, None, None), "");
    }

    #[test]
    fn test_conversations_fragment_search() {
        let html = conversations_fragment(&search("team"));
        assert!(html.contains("Marketing Team"));
        assert!(html.contains("Development Team"));
        assert!(!html.contains("Sarah Wilson"));
    }

    #[test]
    fn test_messages_page_selected_conversation() {
        let query = ListQuery {
            selected: Some("3".into()),
            ..Default::default()
        };
        let html = messages_page("Admyrrand", &query);
        assert!(html.contains(r#"name="selected" value="3""#));
        assert!(html.contains("Mike Johnson"));
    }

    #[test]
    fn test_reports_fragment_category() {
        let query = ListQuery {
            category: Some("Users".into()),
            ..Default::default()
        };
        let html = reports_fragment(&query);
        assert!(html.contains("User Growth Analysis"));
        assert!(!html.contains("Campaign Performance"));
    }

    #[test]
    fn test_settings_tabs() {
        let html = settings_page("Admyrrand", None);
        assert!(html.contains("jonathan.deo@admyrrand.com"));

        let html = settings_page("Admyrrand", Some("security"));
        assert!(html.contains("Chrome on MacBook Pro"));

        let html = settings_page("Admyrrand", Some("billing"));
        assert!(html.contains("Visa ending in 4242"));

        let html = settings_page("Admyrrand", Some("nonsense"));
        assert!(html.contains("Profile Information"));
    }
}
