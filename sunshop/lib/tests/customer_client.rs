//! Integration tests for the storefront customer client.

use std::sync::Arc;

use serde_json::{json, Value};
use sunshop_lib::{
    ApiClient, ApiError, AuthError, ClientError, CustomerClient, ListQuery, MemoryStore,
    SessionStore, StorageKey,
};
use url::Url;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn customer(server: &MockServer, store: Arc<MemoryStore>) -> CustomerClient {
    ApiClient::builder(Url::parse(&server.uri()).unwrap())
        .store(store)
        .customer()
        .unwrap()
}

fn signed_in() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_value(StorageKey::CustomerToken, "cust-token"))
}

// ===========================================
// Authentication
// ===========================================

#[tokio::test]
async fn test_login_stores_token_and_user() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "cust-login-token",
            "user": {"id": 88, "name": "Amara Okafor", "email": "amara@example.com"}
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = customer(&mock_server, store.clone());

    client
        .auth()
        .login("amara@example.com", "sunny-day")
        .await
        .unwrap();

    assert_eq!(
        store.get(StorageKey::CustomerToken).unwrap().as_deref(),
        Some("cust-login-token")
    );
    assert_eq!(store.get(StorageKey::AdminToken).unwrap(), None);

    let user = client.auth().current_user().unwrap().unwrap();
    assert_eq!(user["name"], "Amara Okafor");
}

#[tokio::test]
async fn test_login_without_user_drops_previous_cached_user() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-b"})))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store
        .set(StorageKey::CustomerUser, r#"{"id":1,"name":"Alice"}"#)
        .unwrap();
    let client = customer(&mock_server, store.clone());

    client.auth().login("bob@example.com", "pw").await.unwrap();

    assert_eq!(
        store.get(StorageKey::CustomerToken).unwrap().as_deref(),
        Some("tok-b")
    );
    assert_eq!(client.auth().current_user().unwrap(), None);
}

#[tokio::test]
async fn test_register_returning_token_signs_in() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/register"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Ken", "email": "ken@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "new-cust-token",
            "user": {"id": 90, "name": "Ken"}
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = customer(&mock_server, store.clone());

    let response = client
        .auth()
        .register(json!({"name": "Ken", "email": "ken@example.com", "password": "pw"}))
        .await
        .unwrap();

    assert!(response.is_complete());
    assert!(client.auth().is_authenticated().unwrap());
}

#[tokio::test]
async fn test_verify_with_otp() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/verify"))
        .and(body_json(json!({"user_id": "u-42", "otp": "1234"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "verified-token",
            "user": {"id": 42}
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = customer(&mock_server, store.clone());
    client.auth().verify("u-42", "1234").await.unwrap();

    assert_eq!(
        store.get(StorageKey::CustomerUser).unwrap().as_deref(),
        Some(r#"{"id":42}"#)
    );
}

#[tokio::test]
async fn test_logout_removes_token_and_user_without_request() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = signed_in();
    store.set(StorageKey::CustomerUser, r#"{"id":1}"#).unwrap();
    let client = customer(&mock_server, store.clone());

    client.auth().logout().unwrap();

    assert_eq!(store.get(StorageKey::CustomerToken).unwrap(), None);
    assert_eq!(store.get(StorageKey::CustomerUser).unwrap(), None);
    assert_eq!(client.auth().current_user().unwrap(), None);
}

// ===========================================
// Cart
// ===========================================

#[tokio::test]
async fn test_cart_add_without_token_fails_before_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, Arc::new(MemoryStore::new()));
    let result: Result<Value, _> = client.cart().add(42, 1).await;

    assert!(matches!(
        result,
        Err(ApiError::Auth(AuthError::MissingToken {
            key: StorageKey::CustomerToken
        }))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_add_sends_json_with_bearer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/cart"))
        .and(header("authorization", "Bearer cust-token"))
        .and(body_json(json!({"product_id": 42, "quantity": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": 1})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let cart: Value = client.cart().add(42, 2).await.unwrap();
    assert_eq!(cart["items"], 1);
}

#[tokio::test]
async fn test_cart_add_server_error_is_reported_separately() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/cart"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Cart service down"})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let result: Result<Value, _> = client.cart().add(42, 1).await;

    match result {
        Err(ApiError::ServerError { message }) => assert_eq!(message, "Cart service down"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_cart_add_rejection_stays_http_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/cart"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "Out of stock"})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let err = client.cart().add::<Value>(42, 1).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Client(ClientError::HttpStatus { status: 422, .. })
    ));
    assert_eq!(err.to_string(), "HTTP 422: Out of stock");
}

#[tokio::test]
async fn test_cart_update_remove_and_clear() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/customer/cart/5"))
        .and(body_json(json!({"quantity": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"quantity": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/customer/cart/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/customer/cart"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let updated: Value = client.cart().update(5, 3).await.unwrap();
    let removed: Value = client.cart().remove(5).await.unwrap();
    let cleared: Option<Value> = client.cart().clear().await.unwrap();

    assert_eq!(updated["quantity"], 3);
    assert_eq!(removed, Value::Null);
    assert_eq!(cleared, None);
}

// ===========================================
// Catalog, orders, checkout
// ===========================================

#[tokio::test]
async fn test_anonymous_product_search() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("search", "hybrid inverter"))
        .and(query_param("category_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, Arc::new(MemoryStore::new()));
    let result: Value = client
        .products()
        .list(&ListQuery::new().search("hybrid inverter").filter("category_id", "3"))
        .await
        .unwrap();

    assert_eq!(result["data"][0]["id"], 1);
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_order_cancel_is_bodiless_post() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/orders/77/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "cancelled"})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let result: Value = client.orders().cancel(77).await.unwrap();
    assert_eq!(result["status"], "cancelled");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_checkout_and_coupon_apply() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/coupons/apply"))
        .and(body_json(json!({"code": "SUN10", "subtotal": 250.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"discount": 25.0})))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/customer/checkout"))
        .and(body_json(json!({"payment_method": "card", "coupon": "SUN10"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"order_id": 501})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let discount: Value = client.coupons().apply("SUN10", 250.0).await.unwrap();
    let order: Value = client
        .checkout()
        .place_order(json!({"payment_method": "card", "coupon": "SUN10"}))
        .await
        .unwrap();

    assert_eq!(discount["discount"], 25.0);
    assert_eq!(order["order_id"], 501);
}

// ===========================================
// Wishlist
// ===========================================

#[tokio::test]
async fn test_wishlist_list_error_propagates() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customer/wishlist"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "Maintenance"})))
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let result: Result<Vec<Value>, _> = client.wishlist().list().await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_wishlist_add_and_remove() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/wishlist"))
        .and(body_json(json!({"product_id": 12})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/customer/wishlist/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"removed": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = customer(&mock_server, signed_in());
    let _: Value = client.wishlist().add(12).await.unwrap();
    let removed: Value = client.wishlist().remove(12).await.unwrap();
    assert_eq!(removed["removed"], true);
}
