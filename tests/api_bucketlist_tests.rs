//! Bucketlist API 集成测试

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{json_request, login_user, register_user, setup_test_app};

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_create_bucketlist() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (status, body) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "Career"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Career");
    assert!(body["id"].is_number());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_create_bucketlist_blank_name() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (status, _) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_duplicate_bucketlist_name() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (status, _) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "Career"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "Career"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "bucketlist name already taken");
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_same_name_allowed_for_different_users() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    register_user(&app, "c@d.com", "pw").await;
    let token_a = login_user(&app, "a@b.com", "pw").await;
    let token_b = login_user(&app, "c@d.com", "pw").await;

    let (status, _) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token_a),
        Some(json!({"name": "Career"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // 名称唯一性只在单个用户范围内生效
    let (status, _) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token_b),
        Some(json!({"name": "Career"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_get_bucketlist() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (_, created) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "Lifestyle"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = json_request(
        &app,
        "GET",
        &format!("/bucketlists/{}", id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Lifestyle");
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_get_unknown_bucketlist_returns_404() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (status, _) = json_request(&app, "GET", "/bucketlists/9999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_update_bucketlist() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (_, created) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "Career"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = json_request(
        &app,
        "PUT",
        &format!("/bucketlists/{}", id),
        Some(&token),
        Some(json!({"name": "New Career"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bucketlist"]["name"], "New Career");

    // 未知 ID → 404
    let (status, _) = json_request(
        &app,
        "PUT",
        "/bucketlists/9999",
        Some(&token),
        Some(json!({"name": "whatever"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_delete_bucketlist() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let (_, created) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token),
        Some(json!({"name": "Career"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = json_request(
        &app,
        "DELETE",
        &format!("/bucketlists/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 删除后不可见
    let (status, _) = json_request(
        &app,
        "GET",
        &format!("/bucketlists/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 再次删除 → 404
    let (status, _) = json_request(
        &app,
        "DELETE",
        &format!("/bucketlists/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_bucketlists_are_scoped_to_owner() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    register_user(&app, "c@d.com", "pw").await;
    let token_a = login_user(&app, "a@b.com", "pw").await;
    let token_b = login_user(&app, "c@d.com", "pw").await;

    let (_, created) = json_request(
        &app,
        "POST",
        "/bucketlists/",
        Some(&token_a),
        Some(json!({"name": "Private"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // 其他用户访问表现为 404，而不是 403，避免泄露资源存在性
    let (status, _) = json_request(
        &app,
        "GET",
        &format!("/bucketlists/{}", id),
        Some(&token_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = json_request(
        &app,
        "DELETE",
        &format!("/bucketlists/{}", id),
        Some(&token_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 列表互不可见
    let (status, body) = json_request(&app, "GET", "/bucketlists/", Some(&token_b), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_bucketlist_pagination() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    let names = ["one", "two", "three", "four", "five", "six"];
    for name in names {
        let (status, _) = json_request(
            &app,
            "POST",
            "/bucketlists/",
            Some(&token),
            Some(json!({"name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // 默认每页 5 条，第一页
    let (status, body) = json_request(&app, "GET", "/bucketlists/?page=1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bucketlists"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], 6);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 5);

    // 第二页剩一条
    let (status, body) = json_request(&app, "GET", "/bucketlists/?page=2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bucketlists"].as_array().unwrap().len(), 1);
    assert_eq!(body["bucketlists"][0]["name"], "six");
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_bucketlist_search() {
    let app = setup_test_app().await;
    register_user(&app, "a@b.com", "pw").await;
    let token = login_user(&app, "a@b.com", "pw").await;

    for name in ["Career goals", "Travel", "career change"] {
        let (status, _) = json_request(
            &app,
            "POST",
            "/bucketlists/",
            Some(&token),
            Some(json!({"name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // 搜索不区分大小写
    let (status, body) =
        json_request(&app, "GET", "/bucketlists/?q=career", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (status, body) =
        json_request(&app, "GET", "/bucketlists/?q=nomatch", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}
