mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_value_is_exact_decimal_number() {
    let app = app().await;
    let tea = create_product(&app, "Tea", json!("19.99")).await;
    assert_eq!(tea["value"], json!(19.99));

    let coffee = create_product(&app, "Coffee", json!(2.5)).await;
    let id = coffee["productId"].as_str().unwrap();
    let (status, one) = send(&app, Method::GET, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["value"], json!(2.5));
    assert_eq!(one["links"], json!([{"rel": "Products List", "href": "/products"}]));
}

#[tokio::test]
async fn test_long_value_round_trips_digit_for_digit() {
    let app = app().await;
    let (status, created) = send_raw(
        &app,
        Method::POST,
        "/products",
        r#"{"name":"Gold","value":12345678901234567.89}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["value"].to_string(), "12345678901234567.89");

    let uri = format!("/products/{}", created["productId"].as_str().unwrap());
    let response = request(&app, Method::GET, &uri, None).await;
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#""value":12345678901234567.89"#), "{text}");

    let tiny = create_product(&app, "Dust", json!("0.1234567890123456789")).await;
    assert_eq!(tiny["value"].to_string(), "0.1234567890123456789");
}

#[tokio::test]
async fn test_list_has_self_links() {
    let app = app().await;
    let tea = create_product(&app, "Tea", json!(1)).await;
    let (status, list) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        list[0]["links"][0]["href"],
        format!("/products/{}", tea["productId"].as_str().unwrap())
    );
    assert_eq!(list[0]["links"][0]["rel"], "self");
}

#[tokio::test]
async fn test_invalid_payloads() {
    let app = app().await;
    let (status, json) = send(&app, Method::POST, "/products", Some(json!({"name": "Tea"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&json, StatusCode::BAD_REQUEST);

    let (status, json) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "", "value": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"]["name"], json!(["must not be blank"]));
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = app().await;
    let tea = create_product(&app, "Tea", json!(1)).await;
    let uri = format!("/products/{}", tea["productId"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"name": "Green Tea", "value": "3.40"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Green Tea");
    assert_eq!(updated["value"].to_string(), "3.40");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, json) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(assert_error_body(&json, StatusCode::NOT_FOUND).starts_with("Product not found: "));
}
