use async_trait::async_trait;
use docstore::{CollectionActor, Document, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Document ---

#[derive(Clone, Debug, PartialEq)]
struct Memo {
    id: u32,
    text: String,
    pinned: bool,
}

#[derive(Debug)]
struct MemoDraft {
    text: String,
}

#[derive(Debug)]
struct MemoPatch {
    text: Option<String>,
    pinned: Option<bool>,
}

#[derive(Debug)]
enum MemoQuery {
    CountPinned,
}

#[derive(Debug, thiserror::Error)]
enum MemoError {
    #[error("Memo text must not be empty")]
    EmptyText,
}

#[async_trait]
impl Document for Memo {
    type Id = u32;
    type Insert = MemoDraft;
    type Patch = MemoPatch;
    type Query = MemoQuery;
    type QueryResult = usize;
    type Context = ();
    type Error = MemoError;

    fn from_insert(id: u32, draft: MemoDraft) -> Result<Self, Self::Error> {
        if draft.text.trim().is_empty() {
            return Err(MemoError::EmptyText);
        }
        Ok(Self {
            id,
            text: draft.text,
            pinned: false,
        })
    }

    async fn apply_patch(&mut self, patch: MemoPatch, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(text) = patch.text {
            if text.trim().is_empty() {
                return Err(MemoError::EmptyText);
            }
            self.text = text;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
        Ok(())
    }

    fn evaluate_query(docs: &HashMap<u32, Self>, query: MemoQuery) -> usize {
        match query {
            MemoQuery::CountPinned => docs.values().filter(|m| m.pinned).count(),
        }
    }
}

fn sequential_ids() -> impl Fn() -> u32 + Send + Sync {
    let seq = Arc::new(AtomicU32::new(1));
    move || seq.fetch_add(1, Ordering::SeqCst)
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (actor, client) = CollectionActor::<Memo>::new(10, sequential_ids());
    tokio::spawn(actor.run(()));

    // 1. Insert
    let id = client
        .insert(MemoDraft {
            text: "buy milk".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // 2. Find
    let memo = client.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(memo.text, "buy milk");
    assert!(!memo.pinned);

    // 3. Patch
    let updated = client
        .patch(
            id,
            MemoPatch {
                text: None,
                pinned: Some(true),
            },
        )
        .await
        .unwrap();
    assert!(updated.pinned);

    // 4. Query over the whole collection
    let pinned = client.query(MemoQuery::CountPinned).await.unwrap();
    assert_eq!(pinned, 1);

    // 5. Remove
    client.remove(id).await.unwrap();
    assert!(client.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rejected_insert_stores_nothing() {
    let (actor, client) = CollectionActor::<Memo>::new(10, sequential_ids());
    tokio::spawn(actor.run(()));

    let result = client.insert(MemoDraft { text: "   ".into() }).await;
    match result {
        Err(StoreError::DocumentError(e)) => {
            assert!(e.to_string().contains("must not be empty"));
        }
        other => panic!("Expected DocumentError, got {:?}", other),
    }

    // The id for the failed insert was consumed but the document never landed.
    assert!(client.find_by_id(1).await.unwrap().is_none());

    // A later insert succeeds independently.
    let id = client
        .insert(MemoDraft {
            text: "next".into(),
        })
        .await
        .unwrap();
    assert!(client.find_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = CollectionActor::<Memo>::new(10, sequential_ids());
    tokio::spawn(actor.run(()));

    assert!(client.find_by_id(99).await.unwrap().is_none());

    let patched = client
        .patch(
            99,
            MemoPatch {
                text: None,
                pinned: Some(true),
            },
        )
        .await;
    assert!(matches!(patched, Err(StoreError::NotFound(_))));

    let removed = client.remove(99).await;
    assert!(matches!(removed, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_duplicate_ids_are_rejected_not_overwritten() {
    // A generator stuck on one id: the first insert wins, the second is
    // refused and the stored document is untouched.
    let (actor, client) = CollectionActor::<Memo>::new(10, || 7u32);
    tokio::spawn(actor.run(()));

    client
        .insert(MemoDraft {
            text: "original".into(),
        })
        .await
        .unwrap();

    let second = client
        .insert(MemoDraft {
            text: "usurper".into(),
        })
        .await;
    assert!(matches!(second, Err(StoreError::DuplicateId(_))));

    let stored = client.find_by_id(7).await.unwrap().unwrap();
    assert_eq!(stored.text, "original");
}

#[tokio::test]
async fn test_domain_error_downcast() {
    let (actor, client) = CollectionActor::<Memo>::new(10, sequential_ids());
    tokio::spawn(actor.run(()));

    let err = client
        .insert(MemoDraft { text: "".into() })
        .await
        .unwrap_err();
    let memo_err: Option<&MemoError> = err.document_error::<MemoError>();
    assert!(matches!(memo_err, Some(MemoError::EmptyText)));
}

#[tokio::test]
async fn test_shutdown_on_client_drop() {
    let (actor, client) = CollectionActor::<Memo>::new(10, sequential_ids());
    let handle = tokio::spawn(actor.run(()));

    client
        .insert(MemoDraft {
            text: "last".into(),
        })
        .await
        .unwrap();

    drop(client);
    handle.await.unwrap();
}
