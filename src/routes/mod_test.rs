use crate::state::test_helpers::{spawn_app, test_app_state};
use serde_json::{Value, json};

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_app(test_app_state()).await;
    let resp = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn api_routes_allow_cross_origin_requests() {
    let base = spawn_app(test_app_state()).await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/svgs"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn wrong_method_on_api_route_is_json_not_found() {
    let base = spawn_app(test_app_state()).await;
    let client = reqwest::Client::new();
    let name = crate::store::file_name_for(uuid::Uuid::new_v4());
    let requests = [
        client.put(format!("{base}/api/svgs")),
        client.delete(format!("{base}/api/svgs")),
        client.post(format!("{base}/api/svgs/{name}")),
        client.post(format!("{base}/api/health")),
    ];
    for request in requests {
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Not found" }));
    }
}
