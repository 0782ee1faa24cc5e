//! # Catalog Client
//!
//! High-level API over the catalog collection: seeding, lookups, and the
//! three browse queries. Wraps a `CollectionClient<Book>` and hides the
//! query/result enum plumbing behind typed methods.

use crate::catalog::{BookFilter, BookPage, BookQuery, BookQueryResult, CatalogError};
use crate::model::{Book, BookDraft, BookId, BookPatch};
use async_trait::async_trait;
use docstore::{CollectionClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for the catalog collection.
#[derive(Clone)]
pub struct CatalogClient {
    inner: CollectionClient<Book>,
}

impl CatalogClient {
    pub fn new(inner: CollectionClient<Book>) -> Self {
        Self { inner }
    }

    /// Add a book to the catalog, returning its generated id.
    #[instrument(skip(self, draft))]
    pub async fn add_book(&self, draft: BookDraft) -> Result<BookId, CatalogError> {
        debug!(title = %draft.title, "Adding book");
        self.inner.insert(draft).await.map_err(Self::map_error)
    }

    /// Update price or image of an existing book.
    #[instrument(skip(self, patch))]
    pub async fn update_book(&self, id: BookId, patch: BookPatch) -> Result<Book, CatalogError> {
        debug!(%id, "Patching book");
        self.inner.patch(id, patch).await.map_err(Self::map_error)
    }

    /// Filtered, sorted, paginated listing.
    #[instrument(skip(self, filter))]
    pub async fn list(&self, filter: BookFilter) -> Result<BookPage, CatalogError> {
        match self.inner.query(BookQuery::List(filter)).await {
            Ok(BookQueryResult::Page(page)) => Ok(page),
            Ok(_) => unreachable!("List query must return a Page result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Case-insensitive substring search over title and publisher.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: String,
        page: u32,
        limit: u32,
    ) -> Result<BookPage, CatalogError> {
        match self
            .inner
            .query(BookQuery::Search { query, page, limit })
            .await
        {
            Ok(BookQueryResult::Page(result)) => Ok(result),
            Ok(_) => unreachable!("Search query must return a Page result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Distinct, sorted classification list.
    #[instrument(skip(self))]
    pub async fn classes(&self) -> Result<Vec<String>, CatalogError> {
        match self.inner.query(BookQuery::Classes).await {
            Ok(BookQueryResult::Classes(classes)) => Ok(classes),
            Ok(_) => unreachable!("Classes query must return a Classes result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl StoreClient<Book> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &CollectionClient<Book> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        if let Some(domain) = e.document_error::<CatalogError>() {
            return domain.clone();
        }
        match e {
            StoreError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BookQueryResult, Pagination};
    use docstore::mock::{mock_collection, take_find, take_query, MockCollection};

    fn book(id: &str, title: &str, price: f64) -> Book {
        Book {
            id: BookId(id.to_string()),
            title: title.to_string(),
            publisher: "Meadow Press".to_string(),
            image: format!("/covers/{id}.jpg"),
            price,
            class: None,
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_the_book() {
        let mut mock = MockCollection::<Book>::new();
        mock.expect_find(BookId("book_1".to_string()))
            .return_ok(Some(book("book_1", "Bread, Daily", 24.99)));

        let client = CatalogClient::new(mock.client());
        let found = client
            .find_by_id(BookId("book_1".to_string()))
            .await
            .unwrap();
        assert_eq!(found.unwrap().title, "Bread, Daily");
        mock.verify();
    }

    #[tokio::test]
    async fn list_unwraps_the_page_variant() {
        let mut mock = MockCollection::<Book>::new();
        mock.expect_query()
            .return_ok(BookQueryResult::Page(BookPage {
                books: vec![book("book_1", "Bread, Daily", 24.99)],
                pagination: Pagination {
                    current_page: 1,
                    total_pages: 1,
                    total_items: 1,
                    has_next_page: false,
                    has_prev_page: false,
                    limit: 10,
                },
            }));

        let client = CatalogClient::new(mock.client());
        let page = client.list(BookFilter::default()).await.unwrap();
        assert_eq!(page.books.len(), 1);
        assert_eq!(page.pagination.total_items, 1);
        mock.verify();
    }

    #[tokio::test]
    async fn store_failures_surface_as_catalog_errors() {
        let (client, mut receiver) = mock_collection::<Book>(10);
        let catalog = CatalogClient::new(client);

        let task =
            tokio::spawn(async move { catalog.find_by_id(BookId("book_9".to_string())).await });

        let (id, responder) = take_find(&mut receiver).await.expect("expected a find");
        assert_eq!(id, BookId("book_9".to_string()));
        responder.send(Err(StoreError::ChannelClosed)).unwrap();

        let result = task.await.unwrap();
        assert!(matches!(result, Err(CatalogError::Store(_))));
    }

    #[tokio::test]
    async fn classes_round_trip_through_the_query_channel() {
        let (client, mut receiver) = mock_collection::<Book>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.classes().await });

        let (query, responder) = take_query(&mut receiver).await.expect("expected a query");
        assert!(matches!(query, BookQuery::Classes));
        responder
            .send(Ok(BookQueryResult::Classes(vec!["nature".to_string()])))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), vec!["nature".to_string()]);
    }
}
