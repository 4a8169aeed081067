//! Fixture data compiled into the binary.
//!
//! Every page renders from these tables. Records use `&'static str` fields so
//! the list filter can borrow them through plain `fn` accessors.

use admyrrand_core::{ALL, ListFilter, SortKey};

// =============================================================================
// Dashboard
// =============================================================================

/// Headline numbers on the dashboard home page.
#[derive(Debug, Clone, Copy)]
pub struct KeyMetrics {
    pub total_revenue: f64,
    pub roas: f64,
    pub active_campaigns: u32,
    pub conversion_rate: f64,
}

pub static KEY_METRICS: KeyMetrics = KeyMetrics {
    total_revenue: 275_900.0,
    roas: 4.5,
    active_campaigns: 12,
    conversion_rate: 2.3,
};

/// Revenue per month for the home page bar chart.
pub static REVENUE_BY_MONTH: &[(&str, f64)] = &[
    ("Jan", 18_000.0),
    ("Feb", 22_000.0),
    ("Mar", 25_000.0),
    ("Apr", 23_000.0),
    ("May", 31_000.0),
    ("Jun", 42_000.0),
    ("Jul", 47_000.0),
    ("Aug", 65_900.0),
];

/// A slice of the conversion-source breakdown.
#[derive(Debug, Clone, Copy)]
pub struct ConversionSource {
    pub name: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

pub static CONVERSION_SOURCES: &[ConversionSource] = &[
    ConversionSource { name: "Organic Search", percent: 40, color: "#3B82F6" },
    ConversionSource { name: "Paid Social", percent: 30, color: "#8B5CF6" },
    ConversionSource { name: "Referral", percent: 20, color: "#10B981" },
    ConversionSource { name: "Direct", percent: 10, color: "#F59E0B" },
];

/// One reading in the live updates feed. `change` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveSample {
    pub metric: &'static str,
    pub value: u32,
    pub change: i32,
}

/// Readings the live feed cycles through, in order.
pub static LIVE_SAMPLES: &[LiveSample] = &[
    LiveSample { metric: "revenue", value: 842, change: 7 },
    LiveSample { metric: "users", value: 315, change: 3 },
    LiveSample { metric: "conversion", value: 128, change: -2 },
    LiveSample { metric: "campaign", value: 560, change: 0 },
    LiveSample { metric: "revenue", value: 1_020, change: 9 },
    LiveSample { metric: "users", value: 276, change: -4 },
    LiveSample { metric: "conversion", value: 193, change: 5 },
    LiveSample { metric: "campaign", value: 411, change: -8 },
];

pub fn live_icon(metric: &str) -> &'static str {
    match metric {
        "revenue" => "💰",
        "users" => "👥",
        "conversion" => "📈",
        "campaign" => "🎯",
        _ => "📊",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    pub id: u32,
    pub customer: &'static str,
    pub email: &'static str,
    pub amount: f64,
    pub status: &'static str,
    pub date: &'static str,
    pub payment_method: &'static str,
    pub category: &'static str,
}

pub static TRANSACTIONS: &[Transaction] = &[
    Transaction { id: 1, customer: "John Smith", email: "john@example.com", amount: 1250.00, status: "completed", date: "2024-01-15", payment_method: "Credit Card", category: "Marketing" },
    Transaction { id: 2, customer: "Sarah Johnson", email: "sarah@example.com", amount: 850.50, status: "pending", date: "2024-01-14", payment_method: "PayPal", category: "Development" },
    Transaction { id: 3, customer: "Mike Davis", email: "mike@example.com", amount: 2100.00, status: "completed", date: "2024-01-13", payment_method: "Bank Transfer", category: "Consulting" },
    Transaction { id: 4, customer: "Emily Wilson", email: "emily@example.com", amount: 750.25, status: "failed", date: "2024-01-12", payment_method: "Credit Card", category: "Marketing" },
    Transaction { id: 5, customer: "David Brown", email: "david@example.com", amount: 1800.00, status: "completed", date: "2024-01-11", payment_method: "PayPal", category: "Development" },
    Transaction { id: 6, customer: "Lisa Anderson", email: "lisa@example.com", amount: 950.75, status: "pending", date: "2024-01-10", payment_method: "Bank Transfer", category: "Consulting" },
    Transaction { id: 7, customer: "Tom Martinez", email: "tom@example.com", amount: 3200.00, status: "completed", date: "2024-01-09", payment_method: "Credit Card", category: "Marketing" },
    Transaction { id: 8, customer: "Anna Garcia", email: "anna@example.com", amount: 1400.50, status: "completed", date: "2024-01-08", payment_method: "PayPal", category: "Development" },
];

pub const TRANSACTION_STATUSES: &[&str] = &[ALL, "completed", "pending", "failed"];

/// Transactions are searched by customer and email, narrowed by status.
pub fn transaction_filter() -> ListFilter<Transaction> {
    ListFilter::by_category(|t: &Transaction| t.status)
        .search(|t: &Transaction| t.customer)
        .search(|t: &Transaction| t.email)
}

/// Sortable transaction columns. Unknown names fall back to the date.
pub fn transaction_sort_key(column: &str) -> fn(&Transaction) -> SortKey<'_> {
    match column {
        "customer" => |t| SortKey::Text(t.customer),
        "amount" => |t| SortKey::Number(t.amount),
        "status" => |t| SortKey::Text(t.status),
        "category" => |t| SortKey::Text(t.category),
        "payment_method" => |t| SortKey::Text(t.payment_method),
        _ => |t| SortKey::Text(t.date),
    }
}

pub const TRANSACTION_SORT_COLUMNS: &[&str] =
    &["customer", "amount", "status", "date", "payment_method", "category"];

// =============================================================================
// Analytics
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AnalyticsOverview {
    pub total_revenue: f64,
    pub total_users: u32,
    pub conversion_rate: f64,
    pub avg_order_value: f64,
    pub growth_rate: f64,
    pub churn_rate: f64,
}

pub static ANALYTICS_OVERVIEW: AnalyticsOverview = AnalyticsOverview {
    total_revenue: 1_245_000.0,
    total_users: 45_678,
    conversion_rate: 3.2,
    avg_order_value: 89.50,
    growth_rate: 12.5,
    churn_rate: 2.1,
};

#[derive(Debug, Clone, Copy)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub revenue: f64,
    pub users: u32,
    pub conversions: u32,
}

impl MonthlyPoint {
    /// The value plotted for `metric`; anything unknown plots revenue.
    pub fn value(&self, metric: &str) -> f64 {
        match metric {
            "users" => f64::from(self.users),
            "conversions" => f64::from(self.conversions),
            _ => self.revenue,
        }
    }
}

pub static TIME_SERIES: &[MonthlyPoint] = &[
    MonthlyPoint { month: "Jan", revenue: 85_000.0, users: 12_000, conversions: 384 },
    MonthlyPoint { month: "Feb", revenue: 92_000.0, users: 13_500, conversions: 432 },
    MonthlyPoint { month: "Mar", revenue: 105_000.0, users: 15_200, conversions: 504 },
    MonthlyPoint { month: "Apr", revenue: 98_000.0, users: 14_800, conversions: 470 },
    MonthlyPoint { month: "May", revenue: 115_000.0, users: 16_800, conversions: 552 },
    MonthlyPoint { month: "Jun", revenue: 132_000.0, users: 18_900, conversions: 648 },
    MonthlyPoint { month: "Jul", revenue: 145_000.0, users: 21_000, conversions: 720 },
    MonthlyPoint { month: "Aug", revenue: 158_000.0, users: 23_500, conversions: 792 },
    MonthlyPoint { month: "Sep", revenue: 142_000.0, users: 22_800, conversions: 684 },
    MonthlyPoint { month: "Oct", revenue: 168_000.0, users: 25_200, conversions: 864 },
    MonthlyPoint { month: "Nov", revenue: 185_000.0, users: 27_800, conversions: 936 },
    MonthlyPoint { month: "Dec", revenue: 210_000.0, users: 31_500, conversions: 1_080 },
];

/// Time range selector values and labels, shortest first.
pub const TIME_RANGES: &[(&str, &str)] = &[
    ("7d", "Last 7 days"),
    ("30d", "Last 30 days"),
    ("3m", "Last 3 months"),
    ("6m", "Last 6 months"),
    ("12m", "Last 12 months"),
];

pub const METRICS: &[(&str, &str)] = &[
    ("revenue", "Revenue"),
    ("users", "Users"),
    ("conversions", "Conversions"),
];

/// The tail of the time series covered by `range`.
///
/// The series is monthly, so ranges shorter than a month show the latest
/// month. Unknown ranges show the whole year.
pub fn series_for_range(range: &str) -> &'static [MonthlyPoint] {
    let months = match range {
        "7d" | "30d" => 1,
        "3m" => 3,
        "6m" => 6,
        _ => TIME_SERIES.len(),
    };
    &TIME_SERIES[TIME_SERIES.len() - months..]
}

#[derive(Debug, Clone, Copy)]
pub struct Channel {
    pub name: &'static str,
    pub revenue: f64,
    pub users: u32,
    pub conversion: f64,
}

pub static CHANNELS: &[Channel] = &[
    Channel { name: "Organic Search", revenue: 450_000.0, users: 18_000, conversion: 4.2 },
    Channel { name: "Paid Social", revenue: 320_000.0, users: 12_000, conversion: 3.8 },
    Channel { name: "Direct", revenue: 280_000.0, users: 8_000, conversion: 5.1 },
    Channel { name: "Referral", revenue: 195_000.0, users: 7_680, conversion: 3.1 },
];

#[derive(Debug, Clone, Copy)]
pub struct Demographic {
    pub age_group: &'static str,
    pub percent: u32,
    pub revenue: f64,
}

pub static DEMOGRAPHICS: &[Demographic] = &[
    Demographic { age_group: "18-24", percent: 15, revenue: 186_750.0 },
    Demographic { age_group: "25-34", percent: 35, revenue: 435_750.0 },
    Demographic { age_group: "35-44", percent: 28, revenue: 348_600.0 },
    Demographic { age_group: "45-54", percent: 15, revenue: 186_750.0 },
    Demographic { age_group: "55+", percent: 7, revenue: 87_150.0 },
];

// =============================================================================
// API Explorer
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub id: u32,
    pub name: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub requests: u32,
    pub avg_response_ms: u32,
    pub success_rate: f64,
    pub last_used: &'static str,
}

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint { id: 1, name: "Get Analytics Data", method: "GET", path: "/api/v1/analytics", description: "Retrieve analytics data for the dashboard", status: "active", requests: 12_450, avg_response_ms: 245, success_rate: 99.2, last_used: "2 minutes ago" },
    Endpoint { id: 2, name: "Create Report", method: "POST", path: "/api/v1/reports", description: "Generate a new analytics report", status: "active", requests: 8_920, avg_response_ms: 1_200, success_rate: 98.5, last_used: "5 minutes ago" },
    Endpoint { id: 3, name: "Update User", method: "PUT", path: "/api/v1/users/{id}", description: "Update user information", status: "active", requests: 5_670, avg_response_ms: 180, success_rate: 99.8, last_used: "1 hour ago" },
    Endpoint { id: 4, name: "Delete Document", method: "DELETE", path: "/api/v1/documents/{id}", description: "Remove a document from the system", status: "deprecated", requests: 2_340, avg_response_ms: 320, success_rate: 97.1, last_used: "3 hours ago" },
];

pub const HTTP_METHODS: &[&str] = &[ALL, "GET", "POST", "PUT", "DELETE"];

/// Endpoints are searched by name, path and description, narrowed by method.
pub fn endpoint_filter() -> ListFilter<Endpoint> {
    ListFilter::by_category(|e: &Endpoint| e.method)
        .search(|e: &Endpoint| e.name)
        .search(|e: &Endpoint| e.path)
        .search(|e: &Endpoint| e.description)
}

#[derive(Debug, Clone, Copy)]
pub struct ApiUsage {
    pub total_requests: u32,
    pub avg_response_ms: u32,
    pub success_rate: f64,
    pub active_users: u32,
    pub peak_requests_per_hour: u32,
}

pub static API_USAGE: ApiUsage = ApiUsage {
    total_requests: 29_480,
    avg_response_ms: 436,
    success_rate: 98.9,
    active_users: 156,
    peak_requests_per_hour: 1_250,
};

#[derive(Debug, Clone, Copy)]
pub struct ApiDocs {
    pub base_url: &'static str,
    pub authentication: &'static str,
    pub rate_limit: &'static str,
    pub version: &'static str,
}

pub static API_DOCS: ApiDocs = ApiDocs {
    base_url: "https://api.admyrrand.com/v1",
    authentication: "Bearer Token",
    rate_limit: "1000 requests/hour",
    version: "1.2.0",
};

// =============================================================================
// Documents
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Document {
    pub id: u32,
    pub name: &'static str,
    pub file_type: &'static str,
    pub size: &'static str,
    pub category: &'static str,
    pub owner: &'static str,
    pub uploaded_at: &'static str,
    pub modified_at: &'static str,
    pub downloads: u32,
    pub starred: bool,
}

pub static DOCUMENTS: &[Document] = &[
    Document { id: 1, name: "Q4 Financial Report.pdf", file_type: "pdf", size: "2.4 MB", category: "Reports", owner: "Jonathan Deo", uploaded_at: "2024-01-15T10:30:00Z", modified_at: "2024-01-15T10:30:00Z", downloads: 12, starred: true },
    Document { id: 2, name: "Marketing Strategy.docx", file_type: "docx", size: "1.8 MB", category: "Reports", owner: "Sarah Wilson", uploaded_at: "2024-01-14T14:20:00Z", modified_at: "2024-01-14T16:45:00Z", downloads: 8, starred: false },
    Document { id: 3, name: "Product Screenshots.png", file_type: "png", size: "3.1 MB", category: "Images", owner: "Mike Johnson", uploaded_at: "2024-01-15T09:15:00Z", modified_at: "2024-01-15T09:15:00Z", downloads: 5, starred: true },
    Document { id: 4, name: "Company Logo.svg", file_type: "svg", size: "156 KB", category: "Images", owner: "Design Team", uploaded_at: "2024-01-13T16:45:00Z", modified_at: "2024-01-13T16:45:00Z", downloads: 23, starred: false },
    Document { id: 5, name: "Product Demo.mp4", file_type: "mp4", size: "15.2 MB", category: "Videos", owner: "Video Team", uploaded_at: "2024-01-12T11:30:00Z", modified_at: "2024-01-12T11:30:00Z", downloads: 18, starred: false },
    Document { id: 6, name: "Backup Data.zip", file_type: "zip", size: "45.6 MB", category: "Archives", owner: "IT Team", uploaded_at: "2024-01-11T08:00:00Z", modified_at: "2024-01-11T08:00:00Z", downloads: 3, starred: false },
];

/// Sidebar categories with their advertised counts.
pub const DOCUMENT_CATEGORIES: &[(&str, &str, u32)] = &[
    (ALL, "All Documents", 156),
    ("Reports", "Reports", 23),
    ("Images", "Images", 45),
    ("Videos", "Videos", 12),
    ("Archives", "Archives", 8),
    ("Favorites", "Favorites", 15),
];

/// Documents are searched by name, narrowed by category.
pub fn document_filter() -> ListFilter<Document> {
    ListFilter::by_category(|d: &Document| d.category).search(|d: &Document| d.name)
}

/// Font Awesome icon for a file extension.
pub fn file_icon(file_type: &str) -> &'static str {
    match file_type {
        "pdf" => "file-pdf",
        "doc" | "docx" => "file-word",
        "png" | "jpg" | "svg" => "file-image",
        "mp4" | "mov" => "file-video",
        "zip" | "tar" => "file-zipper",
        _ => "file",
    }
}

// =============================================================================
// Messages
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Conversation {
    pub id: u32,
    pub name: &'static str,
    pub avatar: &'static str,
    pub last_message: &'static str,
    pub time: &'static str,
    pub unread: u32,
    pub online: bool,
    pub status: &'static str,
}

pub static CONVERSATIONS: &[Conversation] = &[
    Conversation { id: 1, name: "Sarah Wilson", avatar: "SW", last_message: "The quarterly report is ready for review", time: "2 min ago", unread: 2, online: true, status: "active" },
    Conversation { id: 2, name: "Marketing Team", avatar: "MT", last_message: "New campaign performance data uploaded", time: "15 min ago", unread: 0, online: false, status: "group" },
    Conversation { id: 3, name: "Mike Johnson", avatar: "MJ", last_message: "Can you review the latest design mockups?", time: "1 hour ago", unread: 1, online: true, status: "active" },
    Conversation { id: 4, name: "Development Team", avatar: "DT", last_message: "API integration completed successfully", time: "2 hours ago", unread: 0, online: false, status: "group" },
    Conversation { id: 5, name: "Emily Davis", avatar: "ED", last_message: "Meeting scheduled for tomorrow at 10 AM", time: "3 hours ago", unread: 0, online: false, status: "away" },
];

/// Conversations have no enumerated field; search covers name and preview.
pub fn conversation_filter() -> ListFilter<Conversation> {
    ListFilter::search_only()
        .search(|c: &Conversation| c.name)
        .search(|c: &Conversation| c.last_message)
}

#[derive(Debug, Clone, Copy)]
pub struct Message {
    pub id: u32,
    pub sender: &'static str,
    pub text: &'static str,
    pub time: &'static str,
    pub status: &'static str,
    pub outgoing: bool,
}

pub static MESSAGES: &[Message] = &[
    Message { id: 1, sender: "Sarah Wilson", text: "Hi Jonathan! The quarterly report is ready for review. Can you take a look when you have time?", time: "10:30 AM", status: "read", outgoing: false },
    Message { id: 2, sender: "You", text: "Perfect! I'll review it this afternoon. Thanks for getting it done early.", time: "10:32 AM", status: "read", outgoing: true },
    Message { id: 3, sender: "Sarah Wilson", text: "Great! I've highlighted the key metrics and trends. Let me know if you need any clarification.", time: "10:33 AM", status: "read", outgoing: false },
    Message { id: 4, sender: "You", text: "Will do. I'll send you my feedback by end of day.", time: "10:35 AM", status: "sent", outgoing: true },
    Message { id: 5, sender: "Sarah Wilson", text: "Sounds good! Looking forward to your insights.", time: "10:36 AM", status: "sent", outgoing: false },
];

// =============================================================================
// Reports
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ReportTemplate {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub last_used: &'static str,
    pub usage_count: u32,
}

pub static REPORT_TEMPLATES: &[ReportTemplate] = &[
    ReportTemplate { id: 1, name: "Monthly Revenue Report", description: "Comprehensive monthly revenue analysis with trends and insights", category: "Revenue", last_used: "2024-01-15", usage_count: 24 },
    ReportTemplate { id: 2, name: "User Growth Analysis", description: "Detailed user acquisition and retention metrics", category: "Users", last_used: "2024-01-10", usage_count: 18 },
    ReportTemplate { id: 3, name: "Campaign Performance", description: "Marketing campaign effectiveness and ROI analysis", category: "Marketing", last_used: "2024-01-12", usage_count: 31 },
    ReportTemplate { id: 4, name: "Conversion Funnel", description: "Step-by-step conversion analysis and optimization", category: "Analytics", last_used: "2024-01-08", usage_count: 15 },
];

pub const REPORT_CATEGORIES: &[&str] = &[ALL, "Revenue", "Users", "Marketing", "Analytics"];

/// Templates are searched by name and description, narrowed by category.
pub fn report_filter() -> ListFilter<ReportTemplate> {
    ListFilter::by_category(|r: &ReportTemplate| r.category)
        .search(|r: &ReportTemplate| r.name)
        .search(|r: &ReportTemplate| r.description)
}

#[derive(Debug, Clone, Copy)]
pub struct RecentReport {
    pub id: u32,
    pub name: &'static str,
    pub status: &'static str,
    pub created_at: &'static str,
    pub size: &'static str,
    pub format: &'static str,
    pub downloads: u32,
}

pub static RECENT_REPORTS: &[RecentReport] = &[
    RecentReport { id: 1, name: "Q4 2023 Revenue Report", status: "completed", created_at: "2024-01-15T10:30:00Z", size: "2.4 MB", format: "PDF", downloads: 12 },
    RecentReport { id: 2, name: "December User Analytics", status: "completed", created_at: "2024-01-14T14:20:00Z", size: "1.8 MB", format: "PDF", downloads: 8 },
    RecentReport { id: 3, name: "Holiday Campaign Report", status: "processing", created_at: "2024-01-15T09:15:00Z", size: "3.1 MB", format: "PDF", downloads: 0 },
    RecentReport { id: 4, name: "Annual Performance Summary", status: "failed", created_at: "2024-01-13T16:45:00Z", size: "0 MB", format: "PDF", downloads: 0 },
];

// =============================================================================
// Settings
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub timezone: &'static str,
    pub language: &'static str,
    pub currency: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Jonathan Deo",
    email: "jonathan.deo@admyrrand.com",
    role: "Administrator",
    avatar: "JD",
    phone: "+1 (555) 123-4567",
    location: "San Francisco, CA",
    timezone: "America/Los_Angeles",
    language: "English",
    currency: "USD",
};

#[derive(Debug, Clone, Copy)]
pub struct LoginRecord {
    pub at: &'static str,
    pub device: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Security {
    pub two_factor_enabled: bool,
    pub last_password_change: &'static str,
    pub last_login: &'static str,
    pub login_history: &'static [LoginRecord],
}

pub static SECURITY: Security = Security {
    two_factor_enabled: true,
    last_password_change: "2024-01-10",
    last_login: "2024-01-15T10:30:00Z",
    login_history: &[
        LoginRecord { at: "2024-01-15T10:30:00Z", device: "Chrome on MacBook Pro", location: "San Francisco, CA" },
        LoginRecord { at: "2024-01-14T15:20:00Z", device: "Safari on iPhone", location: "San Francisco, CA" },
        LoginRecord { at: "2024-01-13T09:15:00Z", device: "Chrome on Windows", location: "New York, NY" },
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct Preferences {
    pub theme: &'static str,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub default_view: &'static str,
    pub refresh_interval_secs: u32,
    pub real_time_updates: bool,
}

pub static PREFERENCES: Preferences = Preferences {
    theme: "system",
    email_notifications: true,
    push_notifications: true,
    sms_notifications: false,
    default_view: "analytics",
    refresh_interval_secs: 30,
    real_time_updates: true,
};

#[derive(Debug, Clone, Copy)]
pub struct Billing {
    pub plan: &'static str,
    pub next_billing_date: &'static str,
    pub payment_method: &'static str,
}

pub static BILLING: Billing = Billing {
    plan: "Professional Plan - $99/month",
    next_billing_date: "2024-02-15",
    payment_method: "Visa ending in 4242",
};

#[derive(Debug, Clone, Copy)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub connected: bool,
}

pub static INTEGRATIONS: &[Integration] = &[
    Integration { name: "Google Analytics", description: "Connected for data insights", icon: "database", connected: true },
    Integration { name: "Slack", description: "Send notifications to Slack", icon: "globe", connected: true },
    Integration { name: "Mailchimp", description: "Email marketing integration", icon: "envelope", connected: false },
];

/// Settings tabs in display order: key, label, icon.
pub const SETTINGS_TABS: &[(&str, &str, &str)] = &[
    ("profile", "Profile", "user"),
    ("security", "Security", "shield-halved"),
    ("preferences", "Preferences", "sliders"),
    ("notifications", "Notifications", "bell"),
    ("billing", "Billing", "credit-card"),
    ("integrations", "Integrations", "plug"),
];
