//! [`Document`] implementation for [`Book`].
//!
//! The catalog has no dependencies on other collections, so its context is
//! `()`. Validation is shape-only: a book needs a title and a positive,
//! finite price before it can be sold.

use super::error::CatalogError;
use super::query::{self, BookQuery, BookQueryResult};
use crate::model::{Book, BookDraft, BookId, BookPatch};
use async_trait::async_trait;
use docstore::Document;
use std::collections::HashMap;

#[async_trait]
impl Document for Book {
    type Id = BookId;
    type Insert = BookDraft;
    type Patch = BookPatch;
    type Query = BookQuery;
    type QueryResult = BookQueryResult;
    type Context = ();
    type Error = CatalogError;

    fn from_insert(id: BookId, draft: BookDraft) -> Result<Self, Self::Error> {
        if draft.title.trim().is_empty() {
            return Err(CatalogError::InvalidBook("title must not be empty".into()));
        }
        if !draft.price.is_finite() || draft.price <= 0.0 {
            return Err(CatalogError::InvalidBook(format!(
                "price must be positive, got {}",
                draft.price
            )));
        }
        Ok(Self {
            id,
            title: draft.title,
            publisher: draft.publisher,
            image: draft.image,
            price: draft.price,
            class: draft.class,
        })
    }

    async fn apply_patch(&mut self, patch: BookPatch, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = patch.price {
            if !price.is_finite() || price <= 0.0 {
                return Err(CatalogError::InvalidBook(format!(
                    "price must be positive, got {price}"
                )));
            }
            self.price = price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        Ok(())
    }

    fn evaluate_query(docs: &HashMap<BookId, Self>, query: BookQuery) -> BookQueryResult {
        query::run(docs, query)
    }
}
