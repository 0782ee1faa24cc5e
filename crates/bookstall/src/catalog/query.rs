//! Collection-level queries the catalog answers: filtered listing, substring
//! search, and the distinct classification list.
//!
//! All evaluation is pure and synchronous over the in-memory document map.
//! Results are sorted before pagination so pages are deterministic even
//! though the underlying map is not.

use crate::model::{Book, BookId};
use serde::Serialize;
use std::collections::HashMap;

/// Default page size when a request does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper bound on the page size a single request can ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sortable fields for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSort {
    #[default]
    Title,
    Price,
    Publisher,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter, sort, and pagination settings for a catalog listing.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub class: Option<String>,
    pub publisher: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: BookSort,
    pub order: SortOrder,
    /// 1-based page number. Zero is treated as the first page.
    pub page: u32,
    /// Page size; zero means the default, values above the cap are clamped.
    pub limit: u32,
}

/// Queries the catalog collection answers.
#[derive(Debug, Clone)]
pub enum BookQuery {
    List(BookFilter),
    Search {
        query: String,
        page: u32,
        limit: u32,
    },
    Classes,
}

/// Results, matching `BookQuery` variant for variant.
#[derive(Debug, Clone)]
pub enum BookQueryResult {
    Page(BookPage),
    Classes(Vec<String>),
}

/// One page of books plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub pagination: Pagination,
}

/// Pagination metadata attached to every paged response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u32,
}

/// Evaluate a query against the full catalog map.
pub(crate) fn run(docs: &HashMap<BookId, Book>, query: BookQuery) -> BookQueryResult {
    match query {
        BookQuery::List(filter) => BookQueryResult::Page(list(docs, &filter)),
        BookQuery::Search { query, page, limit } => {
            BookQueryResult::Page(search(docs, &query, page, limit))
        }
        BookQuery::Classes => BookQueryResult::Classes(classes(docs)),
    }
}

fn list(docs: &HashMap<BookId, Book>, filter: &BookFilter) -> BookPage {
    let mut books: Vec<Book> = docs
        .values()
        .filter(|b| match &filter.class {
            Some(class) => b.class.as_deref() == Some(class.as_str()),
            None => true,
        })
        .filter(|b| match &filter.publisher {
            Some(publisher) => b.publisher.eq_ignore_ascii_case(publisher),
            None => true,
        })
        .filter(|b| filter.min_price.is_none_or(|min| b.price >= min))
        .filter(|b| filter.max_price.is_none_or(|max| b.price <= max))
        .cloned()
        .collect();

    books.sort_by(|a, b| {
        let ordering = match filter.sort_by {
            BookSort::Title => a.title.cmp(&b.title),
            BookSort::Publisher => a.publisher.cmp(&b.publisher),
            BookSort::Price => a
                .price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match filter.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    paginate(books, filter.page, filter.limit)
}

fn search(docs: &HashMap<BookId, Book>, query: &str, page: u32, limit: u32) -> BookPage {
    let needle = query.trim().to_lowercase();
    let mut books: Vec<Book> = docs
        .values()
        .filter(|b| {
            !needle.is_empty()
                && (b.title.to_lowercase().contains(&needle)
                    || b.publisher.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    books.sort_by(|a, b| a.title.cmp(&b.title));
    paginate(books, page, limit)
}

fn classes(docs: &HashMap<BookId, Book>) -> Vec<String> {
    let mut classes: Vec<String> = docs.values().filter_map(|b| b.class.clone()).collect();
    classes.sort();
    classes.dedup();
    classes
}

fn paginate(books: Vec<Book>, page: u32, limit: u32) -> BookPage {
    let limit = match limit {
        0 => DEFAULT_PAGE_SIZE,
        l => l.min(MAX_PAGE_SIZE),
    };
    let page = page.max(1);

    let total_items = books.len() as u32;
    let total_pages = total_items.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit) as usize;
    let books: Vec<Book> = books.into_iter().skip(start).take(limit as usize).collect();

    BookPage {
        books,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_items,
            has_next_page: page < total_pages,
            has_prev_page: page > 1 && total_items > 0,
            limit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> HashMap<BookId, Book> {
        let entries = [
            ("book_1", "Compilers at Dusk", "Northlight", 39.50, Some("systems")),
            ("book_2", "A Field Guide to Rivers", "Meadow Press", 18.00, Some("nature")),
            ("book_3", "Bread, Daily", "Meadow Press", 24.99, Some("cooking")),
            ("book_4", "Compact Gardens", "Northlight", 12.50, Some("nature")),
            ("book_5", "Unindexed", "Smallhouse", 9.99, None),
        ];
        entries
            .into_iter()
            .map(|(id, title, publisher, price, class)| {
                (
                    BookId(id.to_string()),
                    Book {
                        id: BookId(id.to_string()),
                        title: title.to_string(),
                        publisher: publisher.to_string(),
                        image: format!("/covers/{id}.jpg"),
                        price,
                        class: class.map(str::to_string),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn list_filters_by_class_and_publisher() {
        let docs = shelf();
        let page = list(
            &docs,
            &BookFilter {
                class: Some("nature".to_string()),
                publisher: Some("Northlight".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(page.books.len(), 1);
        assert_eq!(page.books[0].title, "Compact Gardens");
    }

    #[test]
    fn list_filters_by_price_range() {
        let docs = shelf();
        let page = list(
            &docs,
            &BookFilter {
                min_price: Some(10.0),
                max_price: Some(25.0),
                ..Default::default()
            },
        );
        let titles: Vec<&str> = page.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["A Field Guide to Rivers", "Bread, Daily", "Compact Gardens"]
        );
    }

    #[test]
    fn list_sorts_by_price_descending() {
        let docs = shelf();
        let page = list(
            &docs,
            &BookFilter {
                sort_by: BookSort::Price,
                order: SortOrder::Desc,
                ..Default::default()
            },
        );
        let prices: Vec<f64> = page.books.iter().map(|b| b.price).collect();
        assert_eq!(prices, vec![39.50, 24.99, 18.00, 12.50, 9.99]);
    }

    #[test]
    fn pagination_metadata_at_boundaries() {
        let docs = shelf();
        let page = list(
            &docs,
            &BookFilter {
                limit: 2,
                page: 1,
                ..Default::default()
            },
        );
        assert_eq!(page.books.len(), 2);
        assert_eq!(page.pagination.total_items, 5);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);

        let last = list(
            &docs,
            &BookFilter {
                limit: 2,
                page: 3,
                ..Default::default()
            },
        );
        assert_eq!(last.books.len(), 1);
        assert!(!last.pagination.has_next_page);
        assert!(last.pagination.has_prev_page);
    }

    #[test]
    fn page_past_the_end_is_empty_but_well_formed() {
        let docs = shelf();
        let page = list(
            &docs,
            &BookFilter {
                limit: 2,
                page: 9,
                ..Default::default()
            },
        );
        assert!(page.books.is_empty());
        assert_eq!(page.pagination.current_page, 9);
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn limit_zero_uses_default_and_large_limits_clamp() {
        let docs = shelf();
        let page = list(&docs, &BookFilter::default());
        assert_eq!(page.pagination.limit, DEFAULT_PAGE_SIZE);

        let clamped = list(
            &docs,
            &BookFilter {
                limit: 10_000,
                ..Default::default()
            },
        );
        assert_eq!(clamped.pagination.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_publisher() {
        let docs = shelf();
        let by_title = search(&docs, "COMPACT", 1, 10);
        assert_eq!(by_title.books.len(), 1);

        let by_publisher = search(&docs, "meadow", 1, 10);
        assert_eq!(by_publisher.books.len(), 2);
    }

    #[test]
    fn blank_search_matches_nothing() {
        let docs = shelf();
        let page = search(&docs, "   ", 1, 10);
        assert!(page.books.is_empty());
        assert_eq!(page.pagination.total_items, 0);
    }

    #[test]
    fn classes_are_distinct_and_sorted() {
        let docs = shelf();
        assert_eq!(classes(&docs), vec!["cooking", "nature", "systems"]);
    }
}
