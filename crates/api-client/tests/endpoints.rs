//! Wire-level tests for the endpoint catalog
//!
//! Every test mounts the exact method + path it expects with `.expect(1)`;
//! anything else hits wiremock's default 404 and fails the call.

use serde_json::{json, Value};
use std::sync::Arc;
use storefront_api_client::prelude::*;
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StorefrontClient {
    let config = ClientConfig::default().with_base_url(format!("{}/api", server.uri()));
    StorefrontClient::with_config(config).unwrap()
}

fn authed_client_for(server: &MockServer, token: &str) -> StorefrontClient {
    client_for(server).with_credentials(Arc::new(StaticToken::new(token)))
}

async fn expect_call(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_product_by_slug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/abc/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "slug": "abc",
            "title": "Kettle"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client_for(&server).products().get("abc").await.unwrap();
    assert_eq!(product["title"], "Kettle");
}

#[tokio::test]
async fn test_list_products_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .and(query_param("search", "phone"))
        .and(query_param("category__slug", "electronics"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "next": null,
            "previous": null,
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListProductsParams::new()
        .with_search("phone")
        .with_category("electronics")
        .with_page(2);
    let page = client_for(&server).products().list(&params).await.unwrap();
    assert_eq!(page["results"], json!([]));

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("ordering"), "unset params must be omitted: {query}");
}

#[tokio::test]
async fn test_catalog_read_routes() {
    let server = MockServer::start().await;
    for (verb, route) in [
        ("GET", "/api/categories/"),
        ("GET", "/api/products/mug/reviews/"),
        ("GET", "/api/cart/"),
        ("GET", "/api/orders/"),
        ("GET", "/api/seller/products/"),
        ("GET", "/api/seller/products/42/"),
        ("GET", "/api/seller/orders/"),
        ("GET", "/api/seller/register/"),
        ("GET", "/api/vouchers/"),
        ("GET", "/api/profile/"),
        ("GET", "/api/notifications/"),
        ("GET", "/api/home/"),
        ("GET", "/api/about/"),
    ] {
        expect_call(&server, verb, route).await;
    }

    let client = client_for(&server);
    client.products().categories().await.unwrap();
    client.products().reviews("mug").await.unwrap();
    client.cart().get().await.unwrap();
    client.orders().list().await.unwrap();
    client.seller().products().await.unwrap();
    client.seller().product(42).await.unwrap();
    client.seller().orders().await.unwrap();
    client.seller().registration().await.unwrap();
    client.vouchers().list().await.unwrap();
    client.auth().profile().await.unwrap();
    client.account().notifications().await.unwrap();
    client.account().home().await.unwrap();
    client.account().about().await.unwrap();
}

#[tokio::test]
async fn test_catalog_write_routes_carry_bodies() {
    let server = MockServer::start().await;
    let cases = [
        ("POST", "/api/cart/add/", json!({"product_id": 12, "qty": 2})),
        ("PATCH", "/api/cart/update_item/", json!({"item_id": 3, "qty": 0})),
        ("POST", "/api/payment/initiate/", json!({"order_id": 7, "payment_gateway": "payu"})),
        ("POST", "/api/seller/products/", json!({"title": "Lamp", "price": "10.00"})),
        ("POST", "/api/vouchers/purchase/", json!({"value": "500.00"})),
        ("POST", "/api/login/", json!({"phone_number": "9000000000", "password": "pw"})),
        ("POST", "/api/signup/", json!({"name": "A", "phone_number": "9", "password": "pw"})),
        ("POST", "/api/token/refresh/", json!({"refresh": "r.r.r"})),
        ("POST", "/api/products/mug/reviews/", json!({"rating": 5, "comment": "Great"})),
        ("POST", "/api/seller/register/", json!({"shop_name": "Lamps & Co"})),
        ("PATCH", "/api/profile/", json!({"email": "asha@example.com"})),
    ];
    for (verb, route, body) in &cases {
        Mock::given(method(*verb))
            .and(path(*route))
            .and(body_json(body))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    client
        .cart()
        .add(&AddToCartRequest { product_id: 12, qty: 2 })
        .await
        .unwrap();
    client
        .cart()
        .update_item(&UpdateCartItemRequest { item_id: 3, qty: 0 })
        .await
        .unwrap();
    client
        .payments()
        .initiate(&InitiatePaymentRequest {
            order_id: 7,
            payment_gateway: PaymentGateway::Payu,
        })
        .await
        .unwrap();
    client
        .seller()
        .create_product(&json!({"title": "Lamp", "price": "10.00"}))
        .await
        .unwrap();
    client
        .vouchers()
        .purchase(&json!({"value": "500.00"}))
        .await
        .unwrap();
    client
        .auth()
        .login(&LoginRequest {
            phone_number: "9000000000".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    client
        .auth()
        .signup(&json!({"name": "A", "phone_number": "9", "password": "pw"}))
        .await
        .unwrap();
    client
        .auth()
        .refresh_token(&json!({"refresh": "r.r.r"}))
        .await
        .unwrap();
    client
        .products()
        .add_review("mug", &json!({"rating": 5, "comment": "Great"}))
        .await
        .unwrap();
    client
        .seller()
        .register(&json!({"shop_name": "Lamps & Co"}))
        .await
        .unwrap();
    client
        .auth()
        .update_profile(&json!({"email": "asha@example.com"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_seller_product() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/seller/products/42/"))
        .and(body_json(json!({"price": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42, "price": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .seller()
        .update_product(42, &json!({"price": 10}))
        .await
        .unwrap();
    assert_eq!(updated["id"], 42);
}

#[tokio::test]
async fn test_payment_status_has_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payment/status/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "initiated"})))
        .expect(1)
        .mount(&server)
        .await;

    let status = client_for(&server).payments().status(7).await.unwrap();
    assert_eq!(status["status"], "initiated");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_bodiless_mutations() {
    let server = MockServer::start().await;
    expect_call(&server, "DELETE", "/api/cart/clear/").await;
    expect_call(&server, "POST", "/api/orders/create/").await;
    expect_call(&server, "DELETE", "/api/seller/products/9/").await;
    expect_call(&server, "POST", "/api/notifications/4/read/").await;

    let client = client_for(&server);
    client.cart().clear().await.unwrap();
    client.orders().create().await.unwrap();
    client.seller().delete_product(9).await.unwrap();
    client.account().mark_notification_read(4).await.unwrap();

    for request in server.received_requests().await.unwrap() {
        assert!(request.body.is_empty(), "{} sent a body", request.url.path());
    }
}

#[tokio::test]
async fn test_no_content_response_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/seller/products/9/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server).seller().delete_product(9).await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/"))
        .and(header("authorization", "Bearer abc.def.ghi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    authed_client_for(&server, "abc.def.ghi")
        .auth()
        .profile()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    expect_call(&server, "GET", "/api/products/abc/").await;

    client_for(&server).products().get("abc").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_token_store_changes_apply_to_next_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(2)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server).with_credentials(store.clone());

    client.cart().get().await.unwrap();
    store
        .set(storefront_api_client::credentials::ACCESS_TOKEN_KEY, "late")
        .unwrap();
    client.cart().get().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").unwrap(),
        "Bearer late"
    );
}

#[tokio::test]
async fn test_upload_images_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/seller/upload-image/"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(header("authorization", "Bearer seller-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 1, "image": "/media/a.png"},
            {"id": 2, "image": "/media/b.jpg"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let upload = ImageUpload::new(3)
        .with_image(ImagePart::new("a.png", vec![0x89, b'P', b'N', b'G']))
        .with_image(ImagePart::new("b.jpg", vec![0xFF, 0xD8, 0xFF]));

    let images = authed_client_for(&server, "seller-token")
        .seller()
        .upload_images(upload)
        .await
        .unwrap();
    assert_eq!(images.as_array().map(Vec::len), Some(2));

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="product""#));
    assert!(body.contains(r#"name="images"; filename="a.png""#));
    assert!(body.contains(r#"name="images"; filename="b.jpg""#));
    assert!(!requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("application/json"));
}

#[tokio::test]
async fn test_server_error_propagates_verbatim() {
    let server = MockServer::start().await;
    let detail = r#"{"non_field_errors":["Insufficient stock."]}"#;
    Mock::given(method("POST"))
        .and(path("/api/cart/add/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(detail))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .cart()
        .add(&AddToCartRequest { product_id: 1, qty: 99 })
        .await
        .unwrap_err();

    match err {
        ApiError::ApiResponse { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, detail);
        }
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Given token not valid for any token type"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = authed_client_for(&server, "expired")
        .orders()
        .list()
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_connection_refused_surfaces_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = ClientConfig::default().with_base_url(format!("http://{addr}/api"));
    let client = StorefrontClient::with_config(config).unwrap();

    let err = client.vouchers().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    assert!(err.is_connect());
}

#[tokio::test]
async fn test_extra_interceptor_runs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/home/"))
        .and(header("x-storefront-channel", "cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sections": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_interceptor(|request: reqwest::RequestBuilder| {
        request.header("X-Storefront-Channel", "cli")
    });
    client.account().home().await.unwrap();
}
