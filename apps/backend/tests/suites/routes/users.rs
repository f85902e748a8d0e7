use actix_web::http::StatusCode;
use actix_web::test;
use backend::AppError;
use serde_json::{json, Value};

use crate::common::{assert_problem_details_structure, read_json};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn create_then_get_user_round_trips() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/")
        .set_json(json!({"email": "a@x.com", "full_name": "A"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = read_json(resp).await;
    assert_eq!(
        created,
        json!({"id": 1, "email": "a@x.com", "full_name": "A"})
    );

    let req = test::TestRequest::get().uri("/api/v1/users/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = read_json(resp).await;
    assert_eq!(fetched, created);

    Ok(())
}

#[actix_web::test]
async fn get_unknown_user_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/v1/users/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "USER_NOT_FOUND", "User not found").await;

    Ok(())
}

#[actix_web::test]
async fn full_name_is_optional_and_null() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/")
        .set_json(json!({"email": "solo@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = read_json(resp).await;
    assert_eq!(created["email"], "solo@x.com");
    assert!(created["full_name"].is_null());
    assert!(created["id"].as_i64().is_some());

    Ok(())
}

#[actix_web::test]
async fn duplicate_email_is_accepted() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/users/")
            .set_json(json!({"email": "same@x.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = read_json(resp).await;
        ids.push(created["id"].as_i64().expect("id"));
    }
    assert_ne!(ids[0], ids[1]);

    Ok(())
}

#[actix_web::test]
async fn list_users_with_and_without_trailing_slash() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/v1/users/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let empty: Value = read_json(resp).await;
    assert_eq!(empty, json!([]));

    for email in ["one@x.com", "two@x.com"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"email": email}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    for uri in ["/api/v1/users", "/api/v1/users/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let users: Vec<Value> = read_json(resp).await;
        let mut emails: Vec<&str> = users.iter().filter_map(|u| u["email"].as_str()).collect();
        emails.sort_unstable();
        assert_eq!(emails, vec!["one@x.com", "two@x.com"], "{uri}");
    }

    Ok(())
}

#[actix_web::test]
async fn create_user_validation_failures_are_422() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/")
        .set_json(json!({"full_name": "No Email"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        422,
        "VALIDATION_ERROR",
        "Missing required field: email",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/")
        .set_json(json!({"email": 42}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        422,
        "VALIDATION_ERROR",
        "Invalid JSON: wrong types for one or more fields",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        422,
        "VALIDATION_ERROR",
        "Invalid JSON: unexpected end of input",
    )
    .await;

    // nothing was written
    let req = test::TestRequest::get().uri("/api/v1/users/").to_request();
    let users: Vec<Value> = read_json(test::call_service(&app, req).await).await;
    assert!(users.is_empty());

    Ok(())
}

#[actix_web::test]
async fn non_integer_user_id_is_422() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/v1/users/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        422,
        "VALIDATION_ERROR",
        "Invalid id: expected an integer, got 'abc'",
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn wide_integer_user_id_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in ["/api/v1/users/2147483648", "/api/v1/users/-2147483649"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 404, "USER_NOT_FOUND", "User not found").await;
    }

    Ok(())
}

#[actix_web::test]
async fn id_beyond_i64_is_422() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/99999999999999999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        422,
        "VALIDATION_ERROR",
        "Invalid id: '99999999999999999999' is out of range",
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn oversized_body_is_413() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let padding = "x".repeat(backend::extractors::validated_json::DEFAULT_BODY_LIMIT);
    let req = test::TestRequest::post()
        .uri("/api/v1/users/")
        .insert_header(("content-type", "application/json"))
        .set_payload(format!(r#"{{"email": "{padding}@x.com"}}"#))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        413,
        "PAYLOAD_TOO_LARGE",
        &format!(
            "Request body exceeds {} bytes",
            backend::extractors::validated_json::DEFAULT_BODY_LIMIT
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    let users: Vec<Value> = read_json(test::call_service(&app, req).await).await;
    assert!(users.is_empty());

    Ok(())
}
