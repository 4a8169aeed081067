//! Page templates for the dashboard home, analytics and API explorer.

use admyrrand_core::{ALL, paginate, sort_records};

use crate::api_types::{AnalyticsQuery, ListQuery};
use crate::fixtures::{self, Endpoint, Transaction};
use crate::live::FeedSnapshot;
use crate::templates::*;

// =============================================================================
// Dashboard Home
// =============================================================================

pub fn dashboard_page(
    brand: &str,
    query: &ListQuery,
    page_size: usize,
    live: &FeedSnapshot,
) -> String {
    let m = &fixtures::KEY_METRICS;

    let actions = [
        action_button("generate-report", "Generate Report", "file-export", "primary"),
        action_button("schedule-export", "Schedule Export", "clock", "secondary"),
        action_button("share-dashboard", "Share", "share-nodes", "secondary"),
    ]
    .concat();

    let revenue_chart = bar_chart(fixtures::REVENUE_BY_MONTH, "primary", format_compact_currency);

    let sources: String = fixtures::CONVERSION_SOURCES
        .iter()
        .map(|s| share_bar(s.name, s.percent, s.color, ""))
        .collect();

    let status_options: Vec<(String, String, bool)> = fixtures::TRANSACTION_STATUSES
        .iter()
        .map(|s| {
            let label = if *s == ALL { "All statuses".to_string() } else { capitalize(s) };
            (s.to_string(), label, query.status.as_deref().unwrap_or(ALL) == *s)
        })
        .collect();

    let content = format!(
        r##"{header}

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {revenue}
            {roas}
            {campaigns}
            {conversion}
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
            <div class="lg:col-span-2">{revenue_card}</div>
            <div class="space-y-6">
                {sources_card}
                <div id="live-updates" hx-get="/fragments/updates" hx-trigger="every 1s" hx-swap="innerHTML">
                    {live_updates}
                </div>
            </div>
        </div>

        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700 flex flex-col md:flex-row md:items-center gap-4">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white flex-1">Recent Transactions</h3>
                <form id="transaction-filters" class="flex flex-col md:flex-row gap-3 md:items-end">
                    {search}
                    <div class="w-48">{status_select}</div>
                </form>
                <a href="/api/transactions.csv?{export_params}"
                   class="inline-flex items-center gap-2 px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-200 bg-gray-100 dark:bg-gray-700 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-600">
                    <i class="fas fa-download"></i> Export CSV
                </a>
            </div>
            <div id="transactions-list">
                {transactions}
            </div>
        </div>"##,
        header = page_header(
            "Dashboard",
            "Welcome back, Jonathan! Here's what's happening with your campaigns.",
            &actions,
        ),
        revenue = stats_card("Total Revenue", &format_currency(m.total_revenue), "dollar-sign", "green"),
        roas = stats_card("ROAS", &format!("{:.1}x", m.roas), "bullseye", "blue"),
        campaigns = stats_card("Active Campaigns", &m.active_campaigns.to_string(), "bullhorn", "purple"),
        conversion = stats_card("Conversion Rate", &format!("{:.1}%", m.conversion_rate), "percent", "yellow"),
        revenue_card = card("Revenue Overview", &revenue_chart),
        sources_card = card("Conversion Sources", &format!(r#"<div class="space-y-4">{sources}</div>"#)),
        search = search_box(
            "/fragments/transactions",
            "#transactions-list",
            query.search(),
            "Search customers...",
            "#transaction-filters",
        ),
        status_select = select(
            "status",
            "Status",
            &status_options,
            r##"hx-get="/fragments/transactions" hx-trigger="change" hx-target="#transactions-list" hx-include="#transaction-filters""##,
        ),
        export_params = transaction_params(query),
        live_updates = live_updates_fragment(live),
        transactions = transactions_fragment(query, page_size),
    );

    layout(brand, "/", "Dashboard", &content)
}

/// The real-time updates card. Polled into `#live-updates`.
pub fn live_updates_fragment(feed: &FeedSnapshot) -> String {
    let (status, toggle_label, wifi) = if feed.connected {
        (badge("Live", "green"), "Disconnect", "text-green-500")
    } else {
        (badge("Offline", "red"), "Connect", "text-red-500 opacity-50")
    };
    let activity = if feed.updating {
        r#"<i class="fas fa-spinner animate-spin text-primary-500" title="Updating"></i>"#
    } else {
        ""
    };

    let rows: String = if feed.updates.is_empty() {
        r#"<div class="text-center py-8 text-gray-500 dark:text-gray-400">
                <i class="fas fa-clock text-2xl mb-2 opacity-50"></i>
                <p class="text-sm">Waiting for updates...</p>
            </div>"#
            .to_string()
    } else {
        feed.updates
            .iter()
            .map(|u| {
                let change_class = match u.sample.change {
                    c if c > 0 => "text-green-600 dark:text-green-400",
                    c if c < 0 => "text-red-600 dark:text-red-400",
                    _ => "text-gray-500 dark:text-gray-400",
                };
                let sign = if u.sample.change > 0 { "+" } else { "" };
                let highlight = if u.is_new {
                    "bg-primary-50 dark:bg-primary-900/20 border-primary-200 dark:border-primary-800"
                } else {
                    "bg-gray-50 dark:bg-gray-700/50 border-transparent"
                };
                format!(
                    r##"<div class="flex items-center justify-between p-3 rounded-lg border {highlight}" data-seq="{seq}">
                        <div class="flex items-center gap-3">
                            <span class="text-lg">{icon}</span>
                            <div>
                                <p class="text-sm font-medium text-gray-900 dark:text-white">{metric}</p>
                                <p class="text-xs text-gray-500 dark:text-gray-400">{time}</p>
                            </div>
                        </div>
                        <div class="text-right">
                            <p class="text-sm font-semibold text-gray-900 dark:text-white">{value}</p>
                            <p class="text-xs font-medium {change_class}">{sign}{change}%</p>
                        </div>
                    </div>"##,
                    seq = u.seq,
                    icon = fixtures::live_icon(u.sample.metric),
                    metric = capitalize(u.sample.metric),
                    time = u.at.format("%H:%M:%S"),
                    value = format_number(u64::from(u.sample.value)),
                    change = u.sample.change,
                )
            })
            .collect()
    };

    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6" data-connected="{connected}">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-2">
                    <i class="fas fa-wifi {wifi}"></i>
                    <h3 class="text-lg font-semibold text-gray-900 dark:text-white">Real-time Updates</h3>
                    {status}
                    {activity}
                </div>
                <button hx-post="/api/updates/toggle" hx-target="#live-updates" hx-swap="innerHTML"
                        class="text-sm font-medium text-primary-600 dark:text-primary-400 hover:underline">
                    {toggle_label}
                </button>
            </div>
            <div class="space-y-3">{rows}</div>
            <div class="mt-4 pt-3 border-t border-gray-200 dark:border-gray-700 flex justify-between text-xs text-gray-500 dark:text-gray-400">
                <span>Last update: {last}</span>
                <span>{count} recent updates</span>
            </div>
        </div>"##,
        connected = feed.connected,
        last = feed.last_update.format("%H:%M:%S"),
        count = feed.updates.len(),
    )
}

/// The transactions table with sorting and pagination.
pub fn transactions_fragment(query: &ListQuery, page_size: usize) -> String {
    let rows = sorted_transactions(query);
    let total_unpaged = rows.len();
    if rows.is_empty() {
        return empty_state(
            "receipt",
            "No transactions found",
            "Try a different search or status.",
            Some(("Clear filters", "/")),
        );
    }

    let sort = transaction_sort_column(query).unwrap_or("");
    let dir = query.sort_direction();
    let page = paginate(&rows, query.page_request(page_size));
    let base_params = transaction_params(query);

    let sort_header = |field: &str, label: &str| -> String {
        let is_current = sort == field;
        let next_dir = if is_current { dir.toggled() } else { dir };
        let icon = match (is_current, dir.as_str()) {
            (true, "desc") => r#"<i class="fas fa-sort-down ml-1"></i>"#,
            (true, _) => r#"<i class="fas fa-sort-up ml-1"></i>"#,
            _ => r#"<i class="fas fa-sort ml-1 opacity-30"></i>"#,
        };
        format!(
            r##"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase cursor-pointer hover:text-gray-700 dark:hover:text-gray-200"
                hx-get="/fragments/transactions?{base_params}&sort={field}&dir={next}&page=1"
                hx-target="#transactions-list" hx-swap="innerHTML">
                {label}{icon}
            </th>"##,
            next = next_dir.as_str(),
        )
    };

    let body: String = page.items.iter().map(|t| transaction_row(t)).collect();

    let first = page.index * page.size + 1;
    let last = first + page.items.len() - 1;
    let page_link = |index: usize, label: &str, enabled: bool| -> String {
        if enabled {
            format!(
                r##"<button class="px-3 py-1 text-sm border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-700"
                    hx-get="/fragments/transactions?{base_params}&sort={sort}&dir={dir}&page={number}"
                    hx-target="#transactions-list" hx-swap="innerHTML">{label}</button>"##,
                sort = urlencoding::encode(sort),
                dir = dir.as_str(),
                number = index + 1,
            )
        } else {
            format!(
                r##"<span class="px-3 py-1 text-sm border border-gray-200 dark:border-gray-700 rounded-lg text-gray-400 cursor-not-allowed">{label}</span>"##
            )
        }
    };

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-800">
                    <tr>{th_customer}{th_amount}{th_status}{th_date}{th_method}{th_category}</tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-900 divide-y divide-gray-200 dark:divide-gray-700">
                    {body}
                </tbody>
            </table>
        </div>
        <div class="px-6 py-4 flex items-center justify-between border-t border-gray-200 dark:border-gray-700">
            <p class="text-sm text-gray-500 dark:text-gray-400">Showing {first} to {last} of {total_unpaged} transactions</p>
            <div class="flex items-center gap-2">
                {prev}
                <span class="text-sm text-gray-500 dark:text-gray-400">Page {current} of {pages}</span>
                {next}
            </div>
        </div>"##,
        th_customer = sort_header("customer", "Customer"),
        th_amount = sort_header("amount", "Amount"),
        th_status = sort_header("status", "Status"),
        th_date = sort_header("date", "Date"),
        th_method = sort_header("payment_method", "Payment Method"),
        th_category = sort_header("category", "Category"),
        prev = page_link(page.index.saturating_sub(1), "Previous", page.has_previous()),
        next = page_link(page.index + 1, "Next", page.has_next()),
        current = page.index + 1,
        pages = page.total_pages,
    )
}

fn transaction_row(t: &Transaction) -> String {
    format!(
        r##"<tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900 dark:text-white">{customer}</div>
                <div class="text-sm text-gray-500 dark:text-gray-400">{email}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100">{amount}</td>
            <td class="px-6 py-4 whitespace-nowrap">{status}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{date}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{method}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{category}</td>
        </tr>"##,
        customer = html_escape(t.customer),
        email = html_escape(t.email),
        amount = format_currency(t.amount),
        status = badge(&capitalize(t.status), status_color(t.status)),
        date = format_date(t.date),
        method = t.payment_method,
        category = t.category,
    )
}

/// Transactions after search and status narrowing, before sorting.
pub fn filtered_transactions(query: &ListQuery) -> Vec<&'static Transaction> {
    fixtures::transaction_filter().apply(fixtures::TRANSACTIONS, &query.criteria(query.status.as_deref()))
}

/// Transactions in table order: filtered then sorted, all pages.
pub fn sorted_transactions(query: &ListQuery) -> Vec<&'static Transaction> {
    let mut rows = filtered_transactions(query);
    if let Some(sort) = transaction_sort_column(query) {
        sort_records(&mut rows, fixtures::transaction_sort_key(sort), query.sort_direction());
    }
    rows
}

/// The requested sort column; unknown columns sort by date.
fn transaction_sort_column(query: &ListQuery) -> Option<&'static str> {
    let requested = query.sort.as_deref().filter(|s| !s.is_empty())?;
    let column = fixtures::TRANSACTION_SORT_COLUMNS
        .iter()
        .copied()
        .find(|c| *c == requested)
        .unwrap_or("date");
    Some(column)
}

/// Build query params string from filters (excluding pagination/sort).
fn transaction_params(query: &ListQuery) -> String {
    let mut params = Vec::new();
    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if let Some(s) = query.status.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("status={}", urlencoding::encode(s)));
    }
    params.join("&")
}

// =============================================================================
// Analytics
// =============================================================================

pub fn analytics_page(brand: &str, query: &AnalyticsQuery) -> String {
    let o = &fixtures::ANALYTICS_OVERVIEW;
    let range = query
        .range
        .as_deref()
        .filter(|r| fixtures::TIME_RANGES.iter().any(|(key, _)| key == r))
        .unwrap_or("12m");
    let metric = query
        .metric
        .as_deref()
        .filter(|m| fixtures::METRICS.iter().any(|(key, _)| key == m))
        .unwrap_or("revenue");

    let series = fixtures::series_for_range(range);
    let points: Vec<(&str, f64)> = series.iter().map(|p| (p.month, p.value(metric))).collect();
    let total: f64 = points.iter().map(|(_, v)| v).sum();
    let formatter: fn(f64) -> String = match metric {
        "revenue" => format_compact_currency,
        _ => format_count,
    };
    let metric_label = fixtures::METRICS
        .iter()
        .find(|(key, _)| *key == metric)
        .map_or("Revenue", |(_, label)| *label);

    let range_options: Vec<(String, String, bool)> = fixtures::TIME_RANGES
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string(), *key == range))
        .collect();
    let metric_options: Vec<(String, String, bool)> = fixtures::METRICS
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string(), *key == metric))
        .collect();

    let channel_rows: Vec<Vec<String>> = fixtures::CHANNELS
        .iter()
        .map(|c| {
            vec![
                c.name.to_string(),
                format_currency(c.revenue),
                format_number(u64::from(c.users)),
                format!("{:.1}%", c.conversion),
            ]
        })
        .collect();

    let demographics: String = fixtures::DEMOGRAPHICS
        .iter()
        .map(|d| {
            share_bar(
                d.age_group,
                d.percent,
                "#3B82F6",
                &format!(" · {}", format_currency(d.revenue)),
            )
        })
        .collect();

    let content = format!(
        r##"{header}

        <form method="get" action="/analytics" class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-8 max-w-xl">
            {range_select}
            {metric_select}
        </form>

        <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-8">
            {s_revenue}
            {s_users}
            {s_conversion}
            {s_aov}
            {s_growth}
            {s_churn}
        </div>

        <div class="mb-8">
            {trend_card}
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            {channels_card}
            {demographics_card}
        </div>"##,
        header = page_header(
            "Analytics",
            "Deep dive into your performance metrics and trends.",
            &action_button("generate-report", "Export Report", "file-export", "primary"),
        ),
        range_select = select("range", "Time range", &range_options, r#"onchange="this.form.submit()""#),
        metric_select = select("metric", "Metric", &metric_options, r#"onchange="this.form.submit()""#),
        s_revenue = stats_card("Total Revenue", &format_currency(o.total_revenue), "dollar-sign", "green"),
        s_users = stats_card("Total Users", &format_number(u64::from(o.total_users)), "users", "blue"),
        s_conversion = stats_card("Conversion", &format!("{:.1}%", o.conversion_rate), "percent", "purple"),
        s_aov = stats_card("Avg Order", &format_currency(o.avg_order_value), "cart-shopping", "indigo"),
        s_growth = stats_card("Growth", &format!("{:.1}%", o.growth_rate), "arrow-trend-up", "green"),
        s_churn = stats_card("Churn", &format!("{:.1}%", o.churn_rate), "arrow-trend-down", "red"),
        trend_card = card(
            &format!("{metric_label} Trend"),
            &format!(
                r##"<p class="text-sm text-gray-500 dark:text-gray-400 mb-4">Total for period: <span class="font-semibold text-gray-900 dark:text-white">{}</span></p>{}"##,
                formatter(total),
                bar_chart(&points, "primary", formatter),
            ),
        ),
        channels_card = card(
            "Channel Performance",
            &table(&["Channel", "Revenue", "Users", "Conversion"], &channel_rows),
        ),
        demographics_card = card(
            "Audience Demographics",
            &format!(r#"<div class="space-y-4">{demographics}</div>"#),
        ),
    );

    layout(brand, "/analytics", "Analytics", &content)
}

// =============================================================================
// API Explorer
// =============================================================================

pub fn api_explorer_page(brand: &str, query: &ListQuery) -> String {
    let usage = &fixtures::API_USAGE;
    let docs = &fixtures::API_DOCS;

    let method = query.method.as_deref().unwrap_or(ALL);
    let method_options: Vec<(String, String, bool)> = fixtures::HTTP_METHODS
        .iter()
        .map(|m| {
            let label = if *m == ALL { "All methods" } else { *m };
            (m.to_string(), label.to_string(), *m == method)
        })
        .collect();

    let selected = query
        .selected_id()
        .and_then(|id| fixtures::ENDPOINTS.iter().find(|e| e.id == id))
        .or_else(|| fixtures::ENDPOINTS.first());

    let detail = selected.map_or_else(
        || empty_state("code", "No endpoint selected", "Pick an endpoint to see its details.", None),
        endpoint_detail,
    );

    let content = format!(
        r##"{header}

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4 mb-8">
            {s_total}
            {s_latency}
            {s_success}
            {s_users}
            {s_peak}
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
            <div class="lg:col-span-2 bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                    <form id="endpoint-filters" class="flex flex-col md:flex-row gap-3 md:items-end">
                        {search}
                        <div class="w-48">{method_select}</div>
                    </form>
                </div>
                <div id="endpoints-list" class="divide-y divide-gray-200 dark:divide-gray-700">
                    {endpoints}
                </div>
            </div>
            <div>{docs_card}</div>
        </div>

        {detail}"##,
        header = page_header(
            "API Explorer",
            "Browse, test and monitor your API endpoints.",
            &action_button("generate-report", "Usage Report", "file-export", "secondary"),
        ),
        s_total = stats_card("Total Requests", &format_number(u64::from(usage.total_requests)), "server", "blue"),
        s_latency = stats_card("Avg Response", &format!("{}ms", usage.avg_response_ms), "stopwatch", "purple"),
        s_success = stats_card("Success Rate", &format!("{:.1}%", usage.success_rate), "circle-check", "green"),
        s_users = stats_card("Active Users", &usage.active_users.to_string(), "users", "indigo"),
        s_peak = stats_card("Peak / hour", &format_number(u64::from(usage.peak_requests_per_hour)), "bolt", "yellow"),
        search = search_box(
            "/fragments/endpoints",
            "#endpoints-list",
            query.search(),
            "Search endpoints...",
            "#endpoint-filters",
        ),
        method_select = select(
            "method",
            "Method",
            &method_options,
            r##"hx-get="/fragments/endpoints" hx-trigger="change" hx-target="#endpoints-list" hx-include="#endpoint-filters""##,
        ),
        endpoints = endpoints_fragment(query),
        docs_card = card(
            "Documentation",
            &format!(
                r##"<dl class="space-y-3 text-sm">
                    <div><dt class="text-gray-500 dark:text-gray-400">Base URL</dt><dd class="font-mono text-gray-900 dark:text-white">{}</dd></div>
                    <div><dt class="text-gray-500 dark:text-gray-400">Authentication</dt><dd class="text-gray-900 dark:text-white">{}</dd></div>
                    <div><dt class="text-gray-500 dark:text-gray-400">Rate limit</dt><dd class="text-gray-900 dark:text-white">{}</dd></div>
                    <div><dt class="text-gray-500 dark:text-gray-400">Version</dt><dd class="text-gray-900 dark:text-white">{}</dd></div>
                </dl>"##,
                docs.base_url, docs.authentication, docs.rate_limit, docs.version,
            ),
        ),
    );

    layout(brand, "/api-explorer", "API Explorer", &content)
}

/// The filtered endpoint list.
pub fn endpoints_fragment(query: &ListQuery) -> String {
    let endpoints = fixtures::endpoint_filter()
        .apply(fixtures::ENDPOINTS, &query.criteria(query.method.as_deref()));
    if endpoints.is_empty() {
        return empty_state(
            "magnifying-glass",
            "No endpoints found",
            "Try a different search or method.",
            Some(("Clear filters", "/api-explorer")),
        );
    }

    let mut params = Vec::new();
    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if let Some(m) = query.method.as_deref().filter(|m| !m.is_empty()) {
        params.push(format!("method={}", urlencoding::encode(m)));
    }
    let base_params = params.join("&");
    let selected = query.selected_id();

    endpoints
        .iter()
        .map(|e| {
            let highlight = if Some(e.id) == selected { "bg-primary-50 dark:bg-primary-900/30" } else { "" };
            format!(
                r##"<a href="/api-explorer?{base_params}&selected={id}" class="block px-6 py-4 hover:bg-gray-50 dark:hover:bg-gray-700/50 {highlight}">
                    <div class="flex items-center gap-3">
                        {method}
                        <span class="font-mono text-sm text-gray-900 dark:text-white">{path}</span>
                        <span class="ml-auto">{status}</span>
                    </div>
                    <p class="mt-1 text-sm font-medium text-gray-900 dark:text-white">{name}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
                </a>"##,
                id = e.id,
                method = badge(e.method, method_color(e.method)),
                path = html_escape(e.path),
                status = badge(&capitalize(e.status), status_color(e.status)),
                name = html_escape(e.name),
                description = html_escape(e.description),
            )
        })
        .collect()
}

fn endpoint_detail(e: &Endpoint) -> String {
    let curl = format!(
        "curl -X {} \"{}{}\" \\\n  -H \"Authorization: Bearer $TOKEN\"",
        e.method,
        fixtures::API_DOCS.base_url,
        e.path.trim_start_matches("/api/v1"),
    );

    card(
        &format!("{} {}", e.method, html_escape(e.path)),
        &format!(
            r##"<p class="text-gray-600 dark:text-gray-300 mb-6">{description}</p>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                <div><p class="text-sm text-gray-500 dark:text-gray-400">Requests</p><p class="text-lg font-semibold text-gray-900 dark:text-white">{requests}</p></div>
                <div><p class="text-sm text-gray-500 dark:text-gray-400">Avg response</p><p class="text-lg font-semibold text-gray-900 dark:text-white">{latency}ms</p></div>
                <div><p class="text-sm text-gray-500 dark:text-gray-400">Success rate</p><p class="text-lg font-semibold text-gray-900 dark:text-white">{success:.1}%</p></div>
                <div><p class="text-sm text-gray-500 dark:text-gray-400">Last used</p><p class="text-lg font-semibold text-gray-900 dark:text-white">{last_used}</p></div>
            </div>
            <pre class="bg-gray-900 text-gray-100 p-4 rounded-lg overflow-x-auto text-sm"><code>{curl}</code></pre>"##,
            description = html_escape(e.description),
            requests = format_number(u64::from(e.requests)),
            latency = e.avg_response_ms,
            success = e.success_rate,
            last_used = e.last_used,
            curl = html_escape(&curl),
        ),
    )
}

/// Uppercase the first letter.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
