//! Financial rollup, period breakdown and portfolio endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, create_resource, get_auth, id_of, post_json_auth, register};
use sqlx::PgPool;

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-6
}

/// One project (budget 5000) with a 100/day resource: June forecast 10 days,
/// actual 900; a 500 licence cost item; two features.
async fn seed(app: &axum::Router, token: &str) -> String {
    let project_id = id_of(&create_project(app, token, "FIN", 5000.0).await);
    let resource_id = id_of(&create_resource(app, token, "Ada", 100.0).await);

    let record = post_json_auth(
        app.clone(),
        "/api/v1/monthly-records",
        serde_json::json!({
            "projectId": project_id,
            "resourceId": resource_id,
            "period": "2025-06",
            "forecastDays": 10,
            "actualCost": 900,
        }),
        token,
    )
    .await;
    assert_eq!(record.status(), StatusCode::CREATED);

    let cost = post_json_auth(
        app.clone(),
        "/api/v1/cost-items",
        serde_json::json!({
            "projectId": project_id,
            "type": "license",
            "description": "CI minutes",
            "amount": 500,
            "dateIncurred": "2025-06-15",
        }),
        token,
    )
    .await;
    assert_eq!(cost.status(), StatusCode::CREATED);

    for (title, points, done, status) in [("A", 8, 8, "done"), ("B", 2, 0, "backlog")] {
        let feature = post_json_auth(
            app.clone(),
            "/api/v1/features",
            serde_json::json!({
                "projectId": project_id,
                "title": title,
                "storyPoints": points,
                "completedPoints": done,
                "status": status,
            }),
            token,
        )
        .await;
        assert_eq!(feature.status(), StatusCode::CREATED);
    }

    project_id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn project_financials_roll_up_labour_and_costs(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(&app, "pm@a.test", "A").await;
    let project_id = seed(&app, &token).await;

    let response = get_auth(app, &format!("/api/v1/projects/{project_id}/financials"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["currencyCode"], "GBP");
    let june = &json["periods"][0];
    assert_eq!(june["period"], "2025-06");
    assert!(approx(&june["forecastCost"], 1000.0));
    assert!(approx(&june["actualCost"], 900.0));
    assert!(approx(&june["diffCost"], -100.0));
    assert!(approx(&june["pctDiff"], -10.0));

    assert!(approx(&json["nonPersonnel"], 500.0));
    assert!(approx(&json["totalActual"], 1400.0));
    assert!(approx(&json["remainingBudget"], 3600.0));
    assert!(approx(&json["budgetUtilisationPct"], 28.0));

    assert_eq!(json["delivery"]["totalPoints"], 10);
    assert_eq!(json["delivery"]["completedPoints"], 8);
    assert!(approx(&json["delivery"]["completionPct"], 80.0));
    assert_eq!(json["delivery"]["statusCounts"]["done"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn period_breakdown_lists_resources(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(&app, "pm@a.test", "A").await;
    let project_id = seed(&app, &token).await;

    let response = get_auth(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/financials/2025-06"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["daysInMonth"], 30);
    let line = &json["lines"][0];
    assert_eq!(line["name"], "Ada");
    assert!(approx(&line["actualDays"], 9.0));
    assert!(approx(&line["forecastMonthPct"], 100.0 / 3.0));
    assert!(approx(&line["actualMonthPct"], 30.0));

    let bad = get_auth(
        app,
        &format!("/api/v1/projects/{project_id}/financials/2025-6"),
        &token,
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn portfolio_covers_every_company_project(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(&app, "pm@a.test", "A").await;
    let other = register(&app, "other@b.test", "B").await;
    seed(&app, &token).await;
    create_project(&app, &token, "EMPTY", 0.0).await;
    create_project(&app, &other, "THEIRS", 100.0).await;

    let response = get_auth(app, "/api/v1/dashboard/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let fin = rows.iter().find(|r| r["code"] == "FIN").unwrap();
    assert!(approx(&fin["labourForecast"], 1000.0));
    assert!(approx(&fin["forecastVariancePct"], -10.0));
    // Cost items are listed but left out of the budget figures.
    assert!(approx(&fin["nonPersonnel"], 500.0));
    assert!(approx(&fin["budgetVariancePct"], -82.0));
    assert!(approx(&fin["budgetUtilisationPct"], 18.0));
    assert_eq!(fin["trend"][0]["period"], "2025-06");
    assert!(approx(&fin["trend"][0]["diffCost"], -100.0));

    let empty = rows.iter().find(|r| r["code"] == "EMPTY").unwrap();
    assert!(approx(&empty["budgetUtilisationPct"], 0.0));
    assert!(empty["trend"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn financials_of_foreign_project_are_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = register(&app, "pm@a.test", "A").await;
    let intruder = register(&app, "x@b.test", "B").await;
    let project_id = seed(&app, &owner).await;

    let response = get_auth(app, &format!("/api/v1/projects/{project_id}/financials"), &intruder).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
