//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and HTMX.

use admyrrand_core::NotificationKind;
use admyrrand_notify::{Phase, ToastSnapshot};
use chrono::{DateTime, NaiveDate};

/// Sidebar entries: path, label, icon, badge.
const NAV_ITEMS: &[(&str, &str, &str, Option<u32>)] = &[
    ("/", "Dashboard", "chart-column", None),
    ("/analytics", "Analytics", "arrow-trend-up", Some(3)),
    ("/reports", "Reports", "chart-pie", None),
    ("/documents", "Documents", "file-lines", None),
    ("/messages", "Messages", "envelope", Some(5)),
    ("/api-explorer", "API", "code", None),
    ("/settings", "Settings", "gear", None),
];

/// Base HTML layout wrapper.
///
/// `active` is the sidebar path to highlight.
pub fn layout(brand: &str, active: &str, title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{
    darkMode: localStorage.getItem('darkMode') === 'true',
    sidebarOpen: true
}}" :class="{{ 'dark': darkMode }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {brand}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            darkMode: 'class',
            theme: {{
                extend: {{
                    colors: {{
                        primary: {{
                            50: '#eff6ff',
                            100: '#dbeafe',
                            200: '#bfdbfe',
                            300: '#93c5fd',
                            400: '#60a5fa',
                            500: '#3b82f6',
                            600: '#2563eb',
                            700: '#1d4ed8',
                            800: '#1e40af',
                            900: '#1e3a8a',
                        }}
                    }}
                }}
            }}
        }}
    </script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        [x-cloak] {{ display: none !important; }}
        .htmx-indicator {{ display: none; }}
        .htmx-request .htmx-indicator {{ display: inline-block; }}
        .htmx-request.htmx-indicator {{ display: inline-block; }}
    </style>
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {nav}

    <div class="flex">
        {sidebar}

        <main class="flex-1 p-6 lg:p-8">
            <div class="max-w-7xl mx-auto">
                {content}
            </div>
        </main>
    </div>

    {toast}

    <script src="/assets/toast.js"></script>
</body>
</html>"##,
        title = html_escape(title),
        brand = html_escape(brand),
        nav = nav_template(brand),
        sidebar = sidebar_template(active),
        toast = toast_slot(),
    )
}

fn nav_template(brand: &str) -> String {
    format!(
        r##"<nav class="bg-primary-600 dark:bg-primary-900 text-white px-4 py-3 sticky top-0 z-40 shadow-lg">
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-4">
                <button @click="sidebarOpen = !sidebarOpen" class="p-2 hover:bg-primary-700 rounded-lg lg:hidden">
                    <i class="fas fa-bars"></i>
                </button>
                <a href="/" class="flex items-center gap-2">
                    <i class="fas fa-chart-line text-xl"></i>
                    <span class="font-semibold">{brand}</span>
                </a>
            </div>
            <div class="flex items-center gap-4">
                <div class="hidden md:flex items-center gap-2 text-sm">
                    <span class="flex items-center gap-1">
                        <span class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></span>
                        Live
                    </span>
                </div>
                <button @click="darkMode = !darkMode; localStorage.setItem('darkMode', darkMode)"
                        class="p-2 hover:bg-primary-700 rounded-lg">
                    <i class="fas" :class="darkMode ? 'fa-sun' : 'fa-moon'"></i>
                </button>
                <div class="w-8 h-8 rounded-full bg-primary-500 flex items-center justify-center text-sm font-semibold">JD</div>
            </div>
        </div>
    </nav>"##,
        brand = html_escape(brand),
    )
}

fn sidebar_template(active: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(path, label, icon, badge)| {
            let state = if *path == active {
                "bg-primary-50 dark:bg-primary-900/50 text-primary-600 dark:text-primary-400"
            } else {
                "text-gray-700 dark:text-gray-200"
            };
            let badge_html = badge.map_or(String::new(), |n| {
                format!(r#"<span class="ml-auto bg-primary-600 text-white text-xs px-2 py-0.5 rounded-full">{n}</span>"#)
            });
            format!(
                r##"<a href="{path}" class="flex items-center gap-3 px-4 py-3 {state} hover:bg-primary-50 dark:hover:bg-primary-900/50 rounded-lg transition-colors">
                    <i class="fas fa-{icon} w-5"></i>
                    <span>{label}</span>
                    {badge_html}
                </a>"##
            )
        })
        .collect();

    format!(
        r##"<aside class="w-64 bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 min-h-[calc(100vh-56px)] transition-all duration-300"
              :class="{{ '-ml-64': !sidebarOpen }}"
              x-cloak>
            <nav class="p-4 space-y-2">
                {links}
            </nav>
        </aside>"##
    )
}

/// The polled container the current notification is swapped into.
fn toast_slot() -> &'static str {
    r##"<div id="toast-slot" class="fixed top-4 right-4 z-50 w-96 max-w-[calc(100vw-2rem)]"
         hx-get="/api/notification" hx-trigger="load, every 1s, toast-refresh from:body" hx-swap="innerHTML">
    </div>"##
}

/// Tailwind color and Font Awesome icon for a notification kind.
pub fn kind_style(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Success => ("green", "circle-check"),
        NotificationKind::Error => ("red", "circle-exclamation"),
        NotificationKind::Warning => ("yellow", "triangle-exclamation"),
        NotificationKind::Info => ("blue", "circle-info"),
    }
}

/// Render the notification slot content. Hidden renders as empty.
pub fn toast_fragment(snapshot: Option<&ToastSnapshot>) -> String {
    let Some(toast) = snapshot else {
        return String::new();
    };

    let n = &toast.notification;
    let (color, icon) = kind_style(n.kind);
    let motion = match toast.phase {
        Phase::Closing => "opacity-0 translate-x-full",
        _ => "opacity-100 translate-x-0",
    };
    let message_html = n.message.as_deref().map_or(String::new(), |m| {
        format!(
            r#"<p class="mt-1 text-sm text-gray-600 dark:text-gray-300">{}</p>"#,
            html_escape(m)
        )
    });

    format!(
        r##"<div class="toast bg-white dark:bg-gray-800 border-l-4 border-{color}-500 rounded-lg shadow-lg p-4 transform transition-all duration-200 {motion}"
             role="status" data-kind="{kind}" data-phase="{phase}" data-generation="{generation}">
            <div class="flex items-start gap-3">
                <i class="fas fa-{icon} text-{color}-500 mt-0.5"></i>
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-semibold text-gray-900 dark:text-white">{title}</p>
                    {message_html}
                </div>
                <button class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200" aria-label="Dismiss"
                        hx-post="/api/notification/dismiss" hx-target="#toast-slot" hx-swap="innerHTML">
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
            <div class="mt-3 h-1 bg-{color}-100 dark:bg-{color}-900/30 rounded overflow-hidden">
                <div class="toast-progress h-full bg-{color}-500" style="animation-duration: {duration}ms"></div>
            </div>
        </div>"##,
        kind = n.kind,
        phase = phase_name(toast.phase),
        generation = toast.generation,
        title = html_escape(&n.title),
        duration = n.duration_ms,
    )
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Hidden => "hidden",
        Phase::Visible => "visible",
        Phase::Closing => "closing",
    }
}

/// Page header with an optional action area on the right.
pub fn page_header(title: &str, subtitle: &str, actions: &str) -> String {
    format!(
        r##"<div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
                <p class="text-gray-500 dark:text-gray-400 mt-1">{subtitle}</p>
            </div>
            <div class="flex items-center gap-2">{actions}</div>
        </div>"##
    )
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##
    )
}

/// Stats card component.
pub fn stats_card(title: &str, value: &str, icon: &str, color: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="text-2xl font-bold text-gray-900 dark:text-white mt-1">{value}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-{color}-100 dark:bg-{color}-900/30 flex items-center justify-center">
                    <i class="fas fa-{icon} text-{color}-500 text-xl"></i>
                </div>
            </div>
        </div>"##
    )
}

/// Button component.
pub fn button(text: &str, variant: &str, attrs: &str) -> String {
    let (bg, hover, text_color) = match variant {
        "primary" => ("bg-primary-600", "hover:bg-primary-700", "text-white"),
        "secondary" => ("bg-gray-200 dark:bg-gray-700", "hover:bg-gray-300 dark:hover:bg-gray-600", "text-gray-700 dark:text-gray-200"),
        "danger" => ("bg-red-600", "hover:bg-red-700", "text-white"),
        "success" => ("bg-green-600", "hover:bg-green-700", "text-white"),
        _ => ("bg-gray-200", "hover:bg-gray-300", "text-gray-700"),
    };

    format!(
        r##"<button class="{bg} {hover} {text_color} px-4 py-2 rounded-lg font-medium transition-colors disabled:opacity-50" {attrs}>{text}</button>"##
    )
}

/// Button that fires a quick action and swaps the returned toast into the slot.
pub fn action_button(action: &str, text: &str, icon: &str, variant: &str) -> String {
    button(
        &format!(r#"<i class="fas fa-{icon} mr-2"></i>{text}"#),
        variant,
        &format!(r##"hx-post="/api/actions/{action}" hx-target="#toast-slot" hx-swap="innerHTML""##),
    )
}

/// Input field component.
pub fn input(name: &str, label: &str, input_type: &str, value: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <input type="{input_type}" name="{name}" id="{name}" value="{value}" placeholder="{placeholder}"
                   class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
        </div>"##,
        value = html_escape(value),
    )
}

/// Select field component.
pub fn select(name: &str, label: &str, options: &[(String, String, bool)], attrs: &str) -> String {
    let options_html: String = options
        .iter()
        .map(|(value, text, selected)| {
            if *selected {
                format!(r#"<option value="{value}" selected>{text}</option>"#)
            } else {
                format!(r#"<option value="{value}">{text}</option>"#)
            }
        })
        .collect();

    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <select name="{name}" id="{name}" {attrs}
                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
                {options_html}
            </select>
        </div>"##
    )
}

/// Search box that re-fetches `fragment_url` into `target` as the user types.
///
/// `include` names the other controls whose values travel with the request.
pub fn search_box(fragment_url: &str, target: &str, value: &str, placeholder: &str, include: &str) -> String {
    format!(
        r##"<div class="relative flex-1">
            <i class="fas fa-magnifying-glass absolute left-3 top-1/2 -translate-y-1/2 text-gray-400"></i>
            <input type="search" name="q" value="{value}" placeholder="{placeholder}"
                   hx-get="{fragment_url}" hx-trigger="input changed delay:300ms, search" hx-target="{target}"
                   hx-include="{include}" hx-swap="innerHTML"
                   class="w-full pl-10 pr-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
        </div>"##,
        value = html_escape(value),
    )
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 dark:bg-{color}-900/30 text-{color}-800 dark:text-{color}-300">{text}</span>"##
    )
}

/// Badge color for a record status.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "completed" | "active" | "read" => "green",
        "pending" | "processing" | "away" => "yellow",
        "failed" | "deprecated" => "red",
        "group" => "purple",
        _ => "gray",
    }
}

/// Badge color for an HTTP method.
pub fn method_color(method: &str) -> &'static str {
    match method {
        "GET" => "green",
        "POST" => "blue",
        "PUT" => "yellow",
        "DELETE" => "red",
        _ => "gray",
    }
}

/// Table component.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{h}</th>"#))
        .collect();

    let rows_html: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!(r#"<td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100">{cell}</td>"#))
                .collect();
            format!(r#"<tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50">{cells}</tr>"#)
        })
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-800">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-900 divide-y divide-gray-200 dark:divide-gray-700">
                    {rows_html}
                </tbody>
            </table>
        </div>"##
    )
}

/// Empty state component.
pub fn empty_state(icon: &str, title: &str, description: &str, action: Option<(&str, &str)>) -> String {
    let action_html = action.map_or(String::new(), |(text, href)| {
        format!(r##"<a href="{href}" class="mt-4 inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium transition-colors">
            <i class="fas fa-rotate-left"></i> {text}
        </a>"##)
    });

    format!(
        r##"<div class="text-center py-12">
            <i class="fas fa-{icon} text-4xl text-gray-400 dark:text-gray-600 mb-4"></i>
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
            <p class="mt-1 text-gray-500 dark:text-gray-400">{description}</p>
            {action_html}
        </div>"##
    )
}

/// Tab strip whose buttons navigate to `base_url?tab=<key>`.
///
/// The selected tab is decided server-side, so only its content is passed in.
pub fn tabs(base_url: &str, tabs: &[(&str, &str, &str)], active: &str, content: &str) -> String {
    let tab_buttons: String = tabs
        .iter()
        .map(|(key, label, icon)| {
            let class = if *key == active {
                "border-primary-600 text-primary-600 dark:text-primary-400"
            } else {
                "border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
            };
            format!(
                r##"<a href="{base_url}?tab={key}" class="flex items-center gap-2 px-4 py-2 border-b-2 font-medium text-sm transition-colors {class}">
                    <i class="fas fa-{icon}"></i>{label}
                </a>"##
            )
        })
        .collect();

    format!(
        r##"<div>
            <div class="border-b border-gray-200 dark:border-gray-700 mb-6">
                <nav class="flex flex-wrap gap-2">
                    {tab_buttons}
                </nav>
            </div>
            <div>
                {content}
            </div>
        </div>"##
    )
}

/// Vertical bar chart drawn with plain divs, scaled to the largest value.
pub fn bar_chart(points: &[(&str, f64)], color: &str, format_value: fn(f64) -> String) -> String {
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let bars: String = points
        .iter()
        .map(|(label, value)| {
            let height = if max > 0.0 { value / max * 100.0 } else { 0.0 };
            format!(
                r##"<div class="flex-1 flex flex-col items-center gap-2 h-full justify-end" title="{label}: {shown}">
                    <div class="w-full bg-{color}-500 rounded-t hover:bg-{color}-600 transition-colors" style="height: {height:.1}%"></div>
                    <span class="text-xs text-gray-500 dark:text-gray-400">{label}</span>
                </div>"##,
                shown = format_value(*value),
            )
        })
        .collect();

    format!(r##"<div class="flex items-end gap-3 h-64">{bars}</div>"##)
}

/// Horizontal share bar with a label and percentage.
pub fn share_bar(label: &str, percent: u32, color: &str, detail: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <div class="flex justify-between text-sm">
                <span class="text-gray-700 dark:text-gray-300">{label}</span>
                <span class="text-gray-500 dark:text-gray-400">{percent}%{detail}</span>
            </div>
            <div class="h-2 bg-gray-100 dark:bg-gray-700 rounded-full overflow-hidden">
                <div class="h-full rounded-full" style="width: {percent}%; background-color: {color}"></div>
            </div>
        </div>"##
    )
}

/// HTML escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Group the integer digits of `n` in thousands.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234` for whole amounts, `$1,234.50` otherwise.
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let whole = format_number(cents / 100);
    match cents % 100 {
        0 => format!("${whole}"),
        frac => format!("${whole}.{frac:02}"),
    }
}

/// Compact currency for chart labels: `$65.9K`, `$1.2M`.
pub fn format_compact_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

/// Plain grouped number for chart labels.
pub fn format_count(value: f64) -> String {
    format_number(value.round() as u64)
}

/// Human date for fixture timestamps (`2024-01-15T10:30:00Z` or `2024-01-15`).
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y %H:%M").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
