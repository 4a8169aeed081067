//! Client-side list filtering.
//!
//! Every list view in the dashboard (documents, API endpoints, report
//! templates, conversations, transactions) narrows a fixed in-memory array
//! the same way: a case-insensitive substring search over one or more text
//! fields, AND-ed with an exact match on one enumerated field. The sentinel
//! [`ALL`] disables the second dimension and an empty search disables the
//! first.
//!
//! Results borrow from the input slice; the source is never mutated.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel category value meaning "no restriction on this dimension".
pub const ALL: &str = "all";

/// Reads one text field from a record.
pub type FieldAccessor<T> = fn(&T) -> &str;

/// The active narrowing state for a list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring; empty matches everything.
    #[serde(default)]
    pub search_text: String,
    /// Exact, case-sensitive value of the category field, or [`ALL`].
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: default_category(),
        }
    }
}

impl FilterCriteria {
    /// Criteria matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build criteria from optional query parameters.
    ///
    /// A missing or blank category is treated as [`ALL`].
    pub fn from_parts(search_text: Option<&str>, category: Option<&str>) -> Self {
        let category = match category.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => default_category(),
        };
        Self {
            search_text: search_text.unwrap_or_default().to_string(),
            category,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Whether the search dimension restricts anything.
    pub fn has_search(&self) -> bool {
        !self.search_text.is_empty()
    }

    /// Whether the category dimension restricts anything.
    pub fn has_category(&self) -> bool {
        self.category != ALL
    }

    /// Whether these criteria are the identity filter.
    pub fn is_unrestricted(&self) -> bool {
        !self.has_search() && !self.has_category()
    }
}

fn default_category() -> String {
    ALL.to_string()
}

/// Narrow `records` by `criteria`.
///
/// A record passes the search dimension when any of `search_fields` contains
/// the search text case-insensitively, and the category dimension when
/// `category_field` equals the category exactly. Relative order is kept.
pub fn filter<'a, T>(
    records: &'a [T],
    criteria: &FilterCriteria,
    search_fields: &[FieldAccessor<T>],
    category_field: FieldAccessor<T>,
) -> Vec<&'a T> {
    let needle = criteria.search_text.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let matches_search = needle.is_empty()
                || search_fields
                    .iter()
                    .any(|field| field(*record).to_lowercase().contains(&needle));
            let matches_category =
                !criteria.has_category() || category_field(*record) == criteria.category;
            matches_search && matches_category
        })
        .collect()
}

/// A reusable set of accessors for one record type.
///
/// Pages declare one `ListFilter` per list instead of repeating the
/// predicate inline.
pub struct ListFilter<T> {
    search_fields: Vec<FieldAccessor<T>>,
    category_field: FieldAccessor<T>,
}

impl<T> ListFilter<T> {
    /// Start a filter whose category dimension reads `category_field`.
    pub fn by_category(category_field: FieldAccessor<T>) -> Self {
        Self {
            search_fields: Vec::new(),
            category_field,
        }
    }

    /// A filter over record types without an enumerated field.
    ///
    /// Any category other than [`ALL`] matches nothing.
    pub fn search_only() -> Self {
        Self::by_category(|_| ALL)
    }

    /// Add a text field to the search dimension.
    pub fn search(mut self, field: FieldAccessor<T>) -> Self {
        self.search_fields.push(field);
        self
    }

    /// Apply `criteria` to `records`.
    pub fn apply<'a>(&self, records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
        filter(records, criteria, &self.search_fields, self.category_field)
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse `"asc"`/`"desc"`; anything else is ascending.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// A comparable column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            // Numbers before text when a column mixes both.
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Stable sort of already-filtered records by `key`.
///
/// Records with equal keys keep their relative order in both directions.
pub fn sort_records<'a, T, K>(records: &mut [&'a T], key: K, direction: SortDirection)
where
    K: Fn(&T) -> SortKey<'_>,
{
    records.sort_by(|a, b| {
        let ord = key(*a).compare(&key(*b));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Which page of a list to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    #[serde(default)]
    pub index: usize,
    /// Rows per page; zero is treated as [`PageRequest::DEFAULT_SIZE`].
    #[serde(default = "default_page_size")]
    pub size: usize,
}

impl PageRequest {
    pub const DEFAULT_SIZE: usize = 10;

    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    fn effective_size(&self) -> usize {
        if self.size == 0 {
            Self::DEFAULT_SIZE
        } else {
            self.size
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

fn default_page_size() -> usize {
    PageRequest::DEFAULT_SIZE
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<'a, T> {
    pub items: Vec<&'a T>,
    /// Page index actually shown, after clamping.
    pub index: usize,
    pub size: usize,
    pub total_items: usize,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
}

impl<T> Paged<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }
}

/// Slice one page out of `records`, clamping the index to the last page.
pub fn paginate<'a, T>(records: &[&'a T], page: PageRequest) -> Paged<'a, T> {
    let size = page.effective_size();
    let total_items = records.len();
    let total_pages = total_items.div_ceil(size).max(1);
    let index = page.index.min(total_pages - 1);
    let start = index * size;
    let end = (start + size).min(total_items);

    Paged {
        items: records[start.min(end)..end].to_vec(),
        index,
        size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Doc {
        name: &'static str,
        category: &'static str,
        size: f64,
    }

    fn docs() -> Vec<Doc> {
        vec![
            Doc { name: "Q4 Report.pdf", category: "Reports", size: 2.4 },
            Doc { name: "Logo.svg", category: "Images", size: 0.1 },
            Doc { name: "Marketing Report.docx", category: "Reports", size: 1.8 },
            Doc { name: "Demo.mp4", category: "Videos", size: 15.2 },
        ]
    }

    fn doc_filter() -> ListFilter<Doc> {
        ListFilter::by_category(|d: &Doc| d.category).search(|d| d.name)
    }

    fn names<'a>(docs: &[&'a Doc]) -> Vec<&'a str> {
        docs.iter().map(|d| d.name).collect()
    }

    #[test]
    fn test_identity_filter() {
        let docs = docs();
        let result = doc_filter().apply(&docs, &FilterCriteria::all());
        assert_eq!(result.len(), docs.len());
        assert!(result.iter().zip(docs.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_empty_records() {
        let docs: Vec<Doc> = Vec::new();
        let criteria = FilterCriteria::all().with_search("x").with_category("Reports");
        assert!(doc_filter().apply(&docs, &criteria).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let docs = vec![Doc { name: "Report.pdf", category: "Reports", size: 1.0 }];
        for needle in ["report", "REPORT", "RePoRt.PDF"] {
            let criteria = FilterCriteria::all().with_search(needle);
            assert_eq!(names(&doc_filter().apply(&docs, &criteria)), vec!["Report.pdf"]);
        }
    }

    fn doc_name(d: &Doc) -> &str {
        d.name
    }

    fn doc_category(d: &Doc) -> &str {
        d.category
    }

    #[test]
    fn test_documents_scenario() {
        let docs = vec![
            Doc { name: "Q4 Report.pdf", category: "Reports", size: 2.4 },
            Doc { name: "Logo.svg", category: "Images", size: 0.1 },
        ];
        let criteria = FilterCriteria::all().with_search("report");
        let result = filter(&docs, &criteria, &[doc_name], doc_category);
        assert_eq!(names(&result), vec!["Q4 Report.pdf"]);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let docs = docs();
        let exact = FilterCriteria::all().with_category("Reports");
        assert_eq!(
            names(&doc_filter().apply(&docs, &exact)),
            vec!["Q4 Report.pdf", "Marketing Report.docx"]
        );

        let lower = FilterCriteria::all().with_category("reports");
        assert!(doc_filter().apply(&docs, &lower).is_empty());

        let partial = FilterCriteria::all().with_category("Report");
        assert!(doc_filter().apply(&docs, &partial).is_empty());
    }

    #[test]
    fn test_dimensions_are_anded() {
        let docs = docs();
        let criteria = FilterCriteria::all().with_search("report").with_category("Images");
        assert!(doc_filter().apply(&docs, &criteria).is_empty());

        let criteria = FilterCriteria::all().with_search("marketing").with_category("Reports");
        assert_eq!(names(&doc_filter().apply(&docs, &criteria)), vec!["Marketing Report.docx"]);
    }

    #[test]
    fn test_any_search_field_matches() {
        struct Endpoint {
            name: &'static str,
            path: &'static str,
            method: &'static str,
        }
        let endpoints = vec![
            Endpoint { name: "Get Analytics Data", path: "/api/v1/analytics", method: "GET" },
            Endpoint { name: "Update User", path: "/api/v1/users/{id}", method: "PUT" },
        ];
        let by_name_or_path = ListFilter::by_category(|e: &Endpoint| e.method)
            .search(|e| e.name)
            .search(|e| e.path);

        let hits = by_name_or_path.apply(&endpoints, &FilterCriteria::all().with_search("users"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Update User");

        let hits = by_name_or_path.apply(&endpoints, &FilterCriteria::all().with_category("GET"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "/api/v1/analytics");
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let docs = docs();
        let criteria = FilterCriteria::all().with_search("o");
        let once = doc_filter().apply(&docs, &criteria);
        let twice = doc_filter().apply(&docs, &criteria);
        assert_eq!(once, twice);

        let positions: Vec<usize> = once
            .iter()
            .map(|d| docs.iter().position(|x| std::ptr::eq(x, *d)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_only_filter() {
        let docs = docs();
        let f = ListFilter::<Doc>::search_only().search(|d| d.name);
        assert_eq!(f.apply(&docs, &FilterCriteria::all().with_search("demo")).len(), 1);
        assert!(f.apply(&docs, &FilterCriteria::all().with_category("Videos")).is_empty());
    }

    #[test]
    fn test_from_parts() {
        let c = FilterCriteria::from_parts(None, None);
        assert!(c.is_unrestricted());

        let c = FilterCriteria::from_parts(Some("abc"), Some("  "));
        assert_eq!(c.search_text, "abc");
        assert_eq!(c.category, ALL);

        let c = FilterCriteria::from_parts(None, Some("POST"));
        assert!(c.has_category());
    }

    #[test]
    fn test_sort_is_stable() {
        let docs = docs();
        let mut rows = doc_filter().apply(&docs, &FilterCriteria::all());
        sort_records(&mut rows, |d| SortKey::Text(d.category), SortDirection::Asc);
        assert_eq!(
            names(&rows),
            vec!["Logo.svg", "Q4 Report.pdf", "Marketing Report.docx", "Demo.mp4"]
        );

        sort_records(&mut rows, |d| SortKey::Number(d.size), SortDirection::Desc);
        assert_eq!(names(&rows)[0], "Demo.mp4");
        assert_eq!(names(&rows)[3], "Logo.svg");
    }

    #[test]
    fn test_sort_desc_keeps_ties_in_order() {
        let docs = docs();
        let mut rows = doc_filter().apply(&docs, &FilterCriteria::all().with_category("Reports"));
        sort_records(&mut rows, |d| SortKey::Text(d.category), SortDirection::Desc);
        assert_eq!(names(&rows), vec!["Q4 Report.pdf", "Marketing Report.docx"]);
    }

    #[test]
    fn test_paginate() {
        let values: Vec<u32> = (0..23).collect();
        let refs: Vec<&u32> = values.iter().collect();

        let first = paginate(&refs, PageRequest::default());
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&refs, PageRequest::new(2, 10));
        assert_eq!(last.items, vec![&20, &21, &22]);
        assert!(!last.has_next());

        let clamped = paginate(&refs, PageRequest::new(99, 10));
        assert_eq!(clamped.index, 2);

        let zero_size = paginate(&refs, PageRequest::new(0, 0));
        assert_eq!(zero_size.size, PageRequest::DEFAULT_SIZE);
    }

    #[test]
    fn test_paginate_empty() {
        let refs: Vec<&u32> = Vec::new();
        let page = paginate(&refs, PageRequest::new(4, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.index, 0);
    }
}
