//! Order placement against a real orders collection with a mocked catalog.
//! This isolates the integrity-checking insert hook from catalog behavior.

use bookstall::clients::{CatalogClient, OrdersClient};
use bookstall::model::{
    Book, BookId, CustomerInfo, OrderItemRequest, OrderRequest, OrderStatus, PaymentStatus,
};
use bookstall::notify::Notifier;
use bookstall::orders::{self, OrderError};
use docstore::mock::MockCollection;
use std::sync::Arc;

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Alice".to_string(),
        organization: None,
        phone: "+1-555-123-4567".to_string(),
        email: "alice@example.com".to_string(),
        address: "1 Long Street, Springfield".to_string(),
    }
}

fn catalog_book(id: &str, price: f64) -> Book {
    Book {
        id: BookId(id.to_string()),
        title: "A Field Guide to Rivers".to_string(),
        publisher: "Meadow Press".to_string(),
        image: "/covers/field-guide-rivers.jpg".to_string(),
        price,
        class: Some("nature".to_string()),
    }
}

fn request(book_id: &str, quantity: u32, total_price: f64) -> OrderRequest {
    OrderRequest {
        customer: customer(),
        items: vec![OrderItemRequest {
            book_id: book_id.to_string(),
            quantity,
        }],
        total_price,
        notes: None,
    }
}

/// Spawn a real orders collection whose catalog context is the given mock.
fn orders_over(catalog: CatalogClient) -> OrdersClient {
    let (orders_actor, orders_generic) = orders::new();
    tokio::spawn(orders_actor.run(catalog));
    OrdersClient::new(orders_generic, Arc::new(Notifier::new()))
}

#[tokio::test]
async fn valid_order_snapshots_server_values() {
    let mut catalog_mock = MockCollection::<Book>::new();
    catalog_mock
        .expect_find(BookId("book_1".to_string()))
        .return_ok(Some(catalog_book("book_1", 12.99)));

    let orders = orders_over(CatalogClient::new(catalog_mock.client()));

    let order = orders
        .place_order(request("book_1", 2, 25.98))
        .await
        .expect("order should be accepted");

    assert!(order.id.as_str().starts_with("ORD-"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);

    // Line items are the server's snapshot, not anything client-supplied.
    assert_eq!(order.lines.len(), 1);
    let line = &order.lines[0];
    assert_eq!(line.title, "A Field Guide to Rivers");
    assert_eq!(line.publisher, "Meadow Press");
    assert_eq!(line.image, "/covers/field-guide-rivers.jpg");
    assert_eq!(line.price, 12.99);
    assert_eq!(line.quantity, 2);
    assert!((order.total_price - 25.98).abs() < 1e-9);

    catalog_mock.verify();
}

#[tokio::test]
async fn total_mismatch_rejects_with_both_values() {
    let mut catalog_mock = MockCollection::<Book>::new();
    catalog_mock
        .expect_find(BookId("book_1".to_string()))
        .return_ok(Some(catalog_book("book_1", 12.99)));

    let orders = orders_over(CatalogClient::new(catalog_mock.client()));

    let result = orders.place_order(request("book_1", 2, 19.98)).await;

    match result {
        Err(OrderError::TotalMismatch {
            claimed,
            calculated,
        }) => {
            assert!((claimed - 19.98).abs() < 1e-9);
            assert!((calculated - 25.98).abs() < 1e-9);
        }
        other => panic!("Expected TotalMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn mismatch_within_a_cent_is_tolerated() {
    let mut catalog_mock = MockCollection::<Book>::new();
    catalog_mock
        .expect_find(BookId("book_1".to_string()))
        .return_ok(Some(catalog_book("book_1", 12.50)));

    let orders = orders_over(CatalogClient::new(catalog_mock.client()));

    // Calculated total is 25.00; a claimed 25.01 is inside tolerance.
    let order = orders
        .place_order(request("book_1", 2, 25.01))
        .await
        .expect("a one-cent divergence is accepted");

    // The persisted total is the calculated one, not the claim.
    assert!((order.total_price - 25.00).abs() < 1e-9);
}

#[tokio::test]
async fn unknown_book_rejects_the_whole_order() {
    let mut catalog_mock = MockCollection::<Book>::new();
    // First line resolves, second does not.
    catalog_mock
        .expect_find(BookId("book_1".to_string()))
        .return_ok(Some(catalog_book("book_1", 10.00)));
    catalog_mock
        .expect_find(BookId("book_9".to_string()))
        .return_ok(None);

    let orders = orders_over(CatalogClient::new(catalog_mock.client()));

    let request = OrderRequest {
        customer: customer(),
        items: vec![
            OrderItemRequest {
                book_id: "book_1".to_string(),
                quantity: 1,
            },
            OrderItemRequest {
                book_id: "book_9".to_string(),
                quantity: 1,
            },
        ],
        total_price: 20.00,
        notes: None,
    };

    let result = orders.place_order(request).await;
    assert_eq!(result, Err(OrderError::BookNotFound("book_9".to_string())));
}

#[tokio::test]
async fn shape_checks_reject_before_touching_the_catalog() {
    // No expectations queued: a catalog lookup would panic the mock task and
    // the request would hang, so passing proves the catalog was never asked.
    let catalog_mock = MockCollection::<Book>::new();
    let orders = orders_over(CatalogClient::new(catalog_mock.client()));

    let empty = OrderRequest {
        customer: customer(),
        items: Vec::new(),
        total_price: 10.0,
        notes: None,
    };
    assert_eq!(orders.place_order(empty).await, Err(OrderError::Empty));

    let result = orders.place_order(request("book_1", 2, 0.0)).await;
    assert!(matches!(result, Err(OrderError::InvalidTotal(_))));

    let result = orders.place_order(request("book_1", 0, 10.0)).await;
    assert_eq!(
        result,
        Err(OrderError::InvalidQuantity {
            book_id: "book_1".to_string()
        })
    );

    let long_notes = OrderRequest {
        notes: Some("x".repeat(501)),
        ..request("book_1", 1, 10.0)
    };
    assert!(matches!(
        orders.place_order(long_notes).await,
        Err(OrderError::Validation(_))
    ));
}

#[tokio::test]
async fn persisted_orders_are_readable_by_id() {
    let mut catalog_mock = MockCollection::<Book>::new();
    catalog_mock
        .expect_find(BookId("book_1".to_string()))
        .return_ok(Some(catalog_book("book_1", 12.99)));

    let orders = orders_over(CatalogClient::new(catalog_mock.client()));

    let placed = orders.place_order(request("book_1", 1, 12.99)).await.unwrap();
    let fetched = orders
        .get_order(placed.id.clone())
        .await
        .unwrap()
        .expect("order should be retrievable");

    assert_eq!(fetched, placed);
}
