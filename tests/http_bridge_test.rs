use httpmock::prelude::*;
use rabbit_bridge::{format_cnpj, ConfigApi, HttpInvoker, ProductsApi, ProductsView};
use serde_json::json;
use std::time::Duration;

fn product(id: i64, code: &str, name: &str, balance: f64) -> serde_json::Value {
    json!({
        "id": id,
        "code": code,
        "name": name,
        "active": 1,
        "balance": balance,
        "created_at": "2024-06-01T12:00:00Z",
        "updated_at": "2024-06-01T12:00:00Z"
    })
}

#[tokio::test]
async fn test_view_create_then_refresh_over_http() {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(POST).path("/invoke/get_all_products");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([product(1, "A1", "Arroz", 3.0)]));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/invoke/create_product")
            .json_body(json!({"code": "F1", "name": "Feijão"}));
        then.status(200).json_body(product(2, "F1", "Feijão", 0.0));
    });

    let invoker = HttpInvoker::new(server.base_url(), Duration::from_secs(5)).unwrap();
    let mut view = ProductsView::new(ProductsApi::new(invoker));

    view.mount().await;
    assert_eq!(view.products().len(), 1);

    view.set_code("F1");
    view.set_name("Feijão");
    view.handle_create().await;

    create_mock.assert();
    // mount plus the refresh after create
    list_mock.assert_hits(2);
    assert_eq!(view.code(), "");

    let rendered = view.render();
    assert!(rendered.contains("Arroz"));
    assert!(rendered.contains("3.0000"));
}

#[tokio::test]
async fn test_failed_action_skips_refresh() {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(POST).path("/invoke/get_all_products");
        then.status(200).json_body(json!([product(1, "A1", "Arroz", 3.0)]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/invoke/decrement_product_balance");
        then.status(400)
            .json_body(json!({"error": "Failed to decrement balance: disk I/O error"}));
    });

    let invoker = HttpInvoker::new(server.base_url(), Duration::from_secs(5)).unwrap();
    let mut view = ProductsView::new(ProductsApi::new(invoker));
    view.mount().await;

    view.handle_decrement(1, 5.0).await;

    list_mock.assert_hits(1);
    assert_eq!(view.products()[0].balance, 3.0);
}

#[tokio::test]
async fn test_first_config_over_http() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/invoke/get_first_config");
        then.status(200).json_body(
            serde_json::to_value(rabbit_bridge::core::ConfigEntity::default()).unwrap(),
        );
    });

    let invoker = HttpInvoker::new(server.base_url(), Duration::from_secs(5)).unwrap();
    let api = ConfigApi::new(invoker);

    let config = api.get_first_config().await.unwrap().unwrap();
    assert_eq!(format_cnpj(&config.cnpj), "28.095.955/0001-99");
}
