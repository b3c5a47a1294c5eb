//! Cross-company access tests: every read, write and reference to another
//! company's data is refused, and unknown ids are reported before foreign ones.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, create_resource, delete_auth, get_auth, id_of, post_json_auth,
    put_json_auth, register,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_project_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = register(&app, "owner@a.test", "A").await;
    let intruder = register(&app, "intruder@b.test", "B").await;
    let project = create_project(&app, &owner, "A-1", 1000.0).await;
    let uri = format!("/api/v1/projects/{}", id_of(&project));

    let read = get_auth(app.clone(), &uri, &intruder).await;
    assert_eq!(read.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(read).await["code"], "FORBIDDEN");

    let update = put_json_auth(app.clone(), &uri, serde_json::json!({ "name": "Hijacked" }), &intruder).await;
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    let delete = delete_auth(app.clone(), &uri, &intruder).await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    // Still intact for the owner.
    let read = get_auth(app, &uri, &owner).await;
    assert_eq!(read.status(), StatusCode::OK);
    assert_eq!(body_json(read).await["name"], "Project A-1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_id_is_not_found_not_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(&app, "solo@a.test", "A").await;

    let response = get_auth(
        app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000000",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lists_only_show_own_company(pool: PgPool) {
    let app = common::build_test_app(pool);
    let a = register(&app, "a@a.test", "A").await;
    let b = register(&app, "b@b.test", "B").await;
    create_project(&app, &a, "A-1", 100.0).await;
    create_project(&app, &b, "B-1", 100.0).await;
    create_resource(&app, &b, "Bob", 300.0).await;

    let projects = body_json(get_auth(app.clone(), "/api/v1/projects", &a).await).await;
    let codes: Vec<&str> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["A-1"]);

    let resources = body_json(get_auth(app, "/api/v1/resources", &a).await).await;
    assert!(resources.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn allocation_to_foreign_resource_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let a = register(&app, "a@a.test", "A").await;
    let b = register(&app, "b@b.test", "B").await;
    let project = create_project(&app, &a, "A-1", 100.0).await;
    let foreign_resource = create_resource(&app, &b, "Bea", 400.0).await;

    let response = post_json_auth(
        app,
        "/api/v1/allocations",
        serde_json::json!({
            "projectId": id_of(&project),
            "resourceId": id_of(&foreign_resource),
            "fromDate": "2025-01-01",
            "toDate": "2025-03-31",
            "allocationPct": 50,
            "plannedDays": 30,
        }),
        &a,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM allocations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn allocation_to_foreign_project_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let x = register(&app, "x@x.test", "X").await;
    let y = register(&app, "y@y.test", "Y").await;
    let foreign_project = create_project(&app, &x, "X-1", 100.0).await;
    let own_resource = create_resource(&app, &y, "Yan", 250.0).await;

    let response = post_json_auth(
        app,
        "/api/v1/allocations",
        serde_json::json!({
            "projectId": id_of(&foreign_project),
            "resourceId": id_of(&own_resource),
            "fromDate": "2025-01-01",
            "toDate": "2025-01-31",
            "allocationPct": 20,
            "plannedDays": 4,
        }),
        &y,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM allocations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn child_of_foreign_project_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let a = register(&app, "a@a.test", "A").await;
    let b = register(&app, "b@b.test", "B").await;
    let project = create_project(&app, &a, "A-1", 100.0).await;
    let project_id = id_of(&project);

    let sprint = post_json_auth(
        app.clone(),
        "/api/v1/sprints",
        serde_json::json!({
            "projectId": project_id,
            "name": "Sprint 1",
            "startDate": "2025-01-06",
            "endDate": "2025-01-17",
        }),
        &a,
    )
    .await;
    assert_eq!(sprint.status(), StatusCode::CREATED);
    let sprint = body_json(sprint).await;

    // Reading the child goes through its project.
    let read = get_auth(app.clone(), &format!("/api/v1/sprints/{}", id_of(&sprint)), &b).await;
    assert_eq!(read.status(), StatusCode::FORBIDDEN);

    // Listing by a foreign project is refused rather than returning empty.
    let list = get_auth(app.clone(), &format!("/api/v1/features?projectId={project_id}"), &b).await;
    assert_eq!(list.status(), StatusCode::FORBIDDEN);

    // Creating under a foreign project is refused.
    let create = post_json_auth(
        app,
        "/api/v1/cost-items",
        serde_json::json!({
            "projectId": project_id,
            "type": "license",
            "description": "IDE seats",
            "amount": 120.0,
            "dateIncurred": "2025-02-01",
        }),
        &b,
    )
    .await;
    assert_eq!(create.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_parent_on_create_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(&app, "a@a.test", "A").await;

    let response = post_json_auth(
        app,
        "/api/v1/absences",
        serde_json::json!({
            "resourceId": "00000000-0000-0000-0000-000000000000",
            "fromDate": "2025-08-01",
            "toDate": "2025-08-05",
            "type": "holiday",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

/// Create one row of `collection` as `token` and return its id.
async fn seed_one(app: &axum::Router, token: &str, collection: &str, body: serde_json::Value) -> String {
    let response = post_json_auth(app.clone(), &format!("/api/v1/{collection}"), body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "seeding {collection}");
    id_of(&body_json(response).await)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn every_entity_is_hidden_from_other_companies(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = register(&app, "owner@a.test", "A").await;
    let intruder = register(&app, "intruder@b.test", "B").await;
    let project_id = id_of(&create_project(&app, &owner, "A-1", 1000.0).await);
    let resource_id = id_of(&create_resource(&app, &owner, "Ada", 300.0).await);

    // (collection, create body, update body)
    let cases = [
        (
            "sprints",
            serde_json::json!({
                "projectId": project_id,
                "name": "Sprint 1",
                "startDate": "2025-01-06",
                "endDate": "2025-01-17",
            }),
            serde_json::json!({ "name": "Renamed" }),
        ),
        (
            "features",
            serde_json::json!({ "projectId": project_id, "title": "Login", "storyPoints": 3 }),
            serde_json::json!({ "title": "Renamed" }),
        ),
        (
            "allocations",
            serde_json::json!({
                "projectId": project_id,
                "resourceId": resource_id,
                "fromDate": "2025-01-01",
                "toDate": "2025-01-31",
                "allocationPct": 50,
                "plannedDays": 10,
            }),
            serde_json::json!({ "allocationPct": 10 }),
        ),
        (
            "cost-items",
            serde_json::json!({
                "projectId": project_id,
                "type": "license",
                "description": "IDE seats",
                "amount": 120,
                "dateIncurred": "2025-01-10",
            }),
            serde_json::json!({ "description": "Renamed" }),
        ),
        (
            "monthly-records",
            serde_json::json!({
                "projectId": project_id,
                "resourceId": resource_id,
                "period": "2025-01",
                "forecastDays": 10,
                "actualCost": 2500,
            }),
            serde_json::json!({ "forecastDays": 1 }),
        ),
        (
            "absences",
            serde_json::json!({
                "resourceId": resource_id,
                "fromDate": "2025-02-03",
                "toDate": "2025-02-07",
                "type": "holiday",
            }),
            serde_json::json!({ "note": "Renamed" }),
        ),
    ];

    let mut seeded = vec![
        ("projects".to_string(), project_id.clone(), serde_json::json!({ "name": "Renamed" })),
        ("resources".to_string(), resource_id.clone(), serde_json::json!({ "name": "Renamed" })),
    ];
    for (collection, create, update) in cases {
        let id = seed_one(&app, &owner, collection, create).await;
        seeded.push((collection.to_string(), id, update));
    }

    for (collection, id, update) in &seeded {
        let uri = format!("/api/v1/{collection}/{id}");

        let read = get_auth(app.clone(), &uri, &intruder).await;
        assert_eq!(read.status(), StatusCode::FORBIDDEN, "GET {collection}");

        let write = put_json_auth(app.clone(), &uri, update.clone(), &intruder).await;
        assert_eq!(write.status(), StatusCode::FORBIDDEN, "PUT {collection}");

        let delete = delete_auth(app.clone(), &uri, &intruder).await;
        assert_eq!(delete.status(), StatusCode::FORBIDDEN, "DELETE {collection}");

        let still_there = get_auth(app.clone(), &uri, &owner).await;
        assert_eq!(still_there.status(), StatusCode::OK, "owner GET {collection}");
    }

    // Sprints can only be listed per project, so they are covered above.
    for collection in [
        "projects",
        "resources",
        "features",
        "allocations",
        "cost-items",
        "monthly-records",
        "absences",
    ] {
        let list = get_auth(app.clone(), &format!("/api/v1/{collection}"), &intruder).await;
        assert_eq!(list.status(), StatusCode::OK, "list {collection}");
        let rows = body_json(list).await;
        assert!(rows.as_array().unwrap().is_empty(), "{collection} leaked: {rows}");

        let own = get_auth(app.clone(), &format!("/api/v1/{collection}"), &owner).await;
        assert_eq!(body_json(own).await.as_array().unwrap().len(), 1, "owner {collection}");
    }
}
