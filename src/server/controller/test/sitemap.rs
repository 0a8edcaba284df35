use super::*;

/// Tests that the sitemap lists every API route with its method.
///
/// Expected: 200 with all ten endpoints
#[tokio::test]
async fn lists_registered_routes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);

    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 10);
    assert!(routes.contains(&json!({"method": "GET", "path": "/planets"})));
    assert!(routes.contains(&json!({"method": "GET", "path": "/users/{user_id}/favorites"})));
    assert!(routes.contains(
        &json!({"method": "DELETE", "path": "/users/{user_id}/favorites/people/{people_id}"})
    ));

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with a `paths` object containing the planet routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::GET, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/planets/{planet_id}"]["get"].is_object());

    Ok(())
}
