use serde_json::{Value, json};
use uuid::Uuid;

mod unit;

const API_BASE_URL: &str = "http://127.0.0.1:8000/api";

async fn post_json(client: &reqwest::Client, path: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}{}", API_BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Request failed")
}

async fn put_json(client: &reqwest::Client, path: &str, body: Value) -> reqwest::Response {
    client
        .put(format!("{}{}", API_BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Request failed")
}

async fn get(client: &reqwest::Client, path: &str) -> reqwest::Response {
    client
        .get(format!("{}{}", API_BASE_URL, path))
        .send()
        .await
        .expect("Request failed")
}

async fn data(response: reqwest::Response) -> Value {
    let body: Value = response.json().await.expect("Invalid JSON body");
    body["data"].clone()
}

async fn create_test_user(client: &reqwest::Client) -> Value {
    let response = post_json(
        client,
        "/users",
        json!({
            "name": "Test User",
            "email": format!("user-{}@example.com", Uuid::new_v4()),
            "role": "member",
            "user_type": "developer"
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    data(response).await
}

async fn create_test_epic(client: &reqwest::Client, created_by: &str) -> Value {
    let response = post_json(
        client,
        "/epics",
        json!({
            "title": "Authentication System",
            "description": "Implement biometric authentication",
            "estimation": 14,
            "capability_category": "security",
            "created_by": created_by
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    data(response).await
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_user_create_get_round_trip() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let user_id = user["id"].as_str().unwrap();

    let fetched = data(get(&client, &format!("/users/{}", user_id)).await).await;
    assert_eq!(fetched["name"], user["name"]);
    assert_eq!(fetched["email"], user["email"]);
    assert_eq!(fetched["role"], "member");
    assert_eq!(fetched["user_type"], "developer");
    assert_eq!(fetched["created_at"], user["created_at"]);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_unknown_ids_return_not_found() {
    let client = reqwest::Client::new();
    let missing = Uuid::new_v4();

    for path in [
        format!("/users/{}", missing),
        format!("/epics/{}", missing),
        format!("/tasks/{}", missing),
        format!("/product-ideas/{}", missing),
    ] {
        let response = get(&client, &path).await;
        assert_eq!(response.status(), 404, "expected 404 for {}", path);
    }
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_epic_create_writes_change_log() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let epic = create_test_epic(&client, user["id"].as_str().unwrap()).await;
    let epic_id = epic["id"].as_str().unwrap();

    assert_eq!(epic["status"], "planning");
    assert_eq!(epic["owner_id"], user["id"]);

    let logs = data(get(&client, &format!("/change-logs/epic/{}", epic_id)).await).await;
    let logs = logs.as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["operation"], "create");
    assert_eq!(logs[0]["entity_type"], "epic");
    assert_eq!(logs[0]["entity_id"].as_str().unwrap(), epic_id);
    assert_eq!(logs[0]["user_id"], user["id"]);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_sparse_update_keeps_absent_fields() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let epic = create_test_epic(&client, user["id"].as_str().unwrap()).await;
    let epic_id = epic["id"].as_str().unwrap();

    let updated = data(
        put_json(
            &client,
            &format!("/epics/{}", epic_id),
            json!({"estimation": 21}),
        )
        .await,
    )
    .await;

    assert_eq!(updated["estimation"], 21);
    assert_eq!(updated["title"], epic["title"]);
    assert_eq!(updated["description"], epic["description"]);
    assert_eq!(updated["capability_category"], epic["capability_category"]);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_create_rejects_unknown_references() {
    let client = reqwest::Client::new();

    let response = post_json(
        &client,
        "/epics",
        json!({
            "title": "Orphan epic",
            "description": "",
            "estimation": 1,
            "capability_category": "other",
            "created_by": Uuid::new_v4()
        }),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_task_status_workflow_dates() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;

    let task = data(
        post_json(
            &client,
            "/tasks",
            json!({
                "title": "Build login form",
                "description": "Wire it up",
                "estimation": 3,
                "priority": "medium",
                "created_by": user["id"]
            }),
        )
        .await,
    )
    .await;
    let task_id = task["id"].as_str().unwrap();
    assert_eq!(task["status"], "ready");

    let rejected = put_json(
        &client,
        &format!("/tasks/{}/status", task_id),
        json!({"status": "archived"}),
    )
    .await;
    assert!(rejected.status().is_client_error());

    let in_progress = data(
        put_json(
            &client,
            &format!("/tasks/{}/status", task_id),
            json!({"status": "in_progress"}),
        )
        .await,
    )
    .await;
    assert!(in_progress["assigned_date"].is_string());
    assert!(in_progress["completion_date"].is_null());

    let done = data(
        put_json(
            &client,
            &format!("/tasks/{}/status", task_id),
            json!({"status": "done"}),
        )
        .await,
    )
    .await;
    assert!(done["completion_date"].is_string());

    let reopened = data(
        put_json(
            &client,
            &format!("/tasks/{}/status", task_id),
            json!({"status": "review"}),
        )
        .await,
    )
    .await;
    assert!(reopened["completion_date"].is_null());
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_delete_then_get_returns_not_found() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let epic = create_test_epic(&client, user["id"].as_str().unwrap()).await;
    let epic_id = epic["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/epics/{}", API_BASE_URL, epic_id))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 200);

    let response = get(&client, &format!("/epics/{}", epic_id)).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_epic_delete_detaches_tasks() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let epic = create_test_epic(&client, user["id"].as_str().unwrap()).await;
    let epic_id = epic["id"].as_str().unwrap();

    let task = data(
        post_json(
            &client,
            "/tasks",
            json!({
                "title": "Child task",
                "description": "",
                "epic_id": epic_id,
                "estimation": 2,
                "priority": "low",
                "created_by": user["id"]
            }),
        )
        .await,
    )
    .await;
    let task_id = task["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/epics/{}", API_BASE_URL, epic_id))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 200);

    let orphan = data(get(&client, &format!("/tasks/{}", task_id)).await).await;
    assert!(orphan["epic_id"].is_null());
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_link_is_idempotent_and_progress_aggregates() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let user_id = user["id"].as_str().unwrap();
    let epic = create_test_epic(&client, user_id).await;
    let epic_id = epic["id"].as_str().unwrap();

    let idea = data(
        post_json(
            &client,
            "/product-ideas",
            json!({
                "title": "Mobile App Redesign",
                "description": "Redesign for better UX",
                "estimation": 45,
                "priority": "high",
                "created_by": user_id
            }),
        )
        .await,
    )
    .await;
    let idea_id = idea["id"].as_str().unwrap();
    assert_eq!(idea["status"], "proposed");

    // Linking the same pair twice must not create a second link.
    for _ in 0..2 {
        let response = post_json(
            &client,
            &format!("/product-ideas/{}/epics/{}", idea_id, epic_id),
            json!({}),
        )
        .await;
        assert_eq!(response.status(), 200);
    }

    let linked = data(get(&client, &format!("/product-ideas/{}/epics", idea_id)).await).await;
    assert_eq!(linked.as_array().unwrap().len(), 1);

    // Four tasks on the epic, two of them done.
    for i in 0..4 {
        let task = data(
            post_json(
                &client,
                "/tasks",
                json!({
                    "title": format!("Task {}", i),
                    "description": "",
                    "epic_id": epic_id,
                    "estimation": 2,
                    "priority": "medium",
                    "created_by": user_id
                }),
            )
            .await,
        )
        .await;
        if i < 2 {
            let response = put_json(
                &client,
                &format!("/tasks/{}/status", task["id"].as_str().unwrap()),
                json!({"status": "done"}),
            )
            .await;
            assert_eq!(response.status(), 200);
        }
    }

    let epics_with_tasks = data(get(&client, "/epics/with-tasks").await).await;
    let projection = epics_with_tasks
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"].as_str() == Some(epic_id))
        .expect("epic missing from projection");
    assert_eq!(projection["completion_percentage"], 50);
    assert_eq!(projection["completed_tasks_count"], 2);
    assert_eq!(projection["total_tasks_count"], 4);
    assert_eq!(projection["total_estimation"], 8);

    let ideas_with_epics = data(get(&client, "/product-ideas/with-epics").await).await;
    let projection = ideas_with_epics
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"].as_str() == Some(idea_id))
        .expect("idea missing from projection");
    assert_eq!(projection["implementation_status"], 50);
    assert_eq!(projection["completed_tasks_count"], 2);
    assert_eq!(projection["total_tasks_count"], 4);

    // Unlink works once, then the link is gone.
    let response = client
        .delete(format!(
            "{}/product-ideas/{}/epics/{}",
            API_BASE_URL, idea_id, epic_id
        ))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(format!(
            "{}/product-ideas/{}/epics/{}",
            API_BASE_URL, idea_id, epic_id
        ))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_task_update_clears_epic_with_explicit_null() {
    let client = reqwest::Client::new();
    let user = create_test_user(&client).await;
    let user_id = user["id"].as_str().unwrap();
    let epic = create_test_epic(&client, user_id).await;

    let task = data(
        post_json(
            &client,
            "/tasks",
            json!({
                "title": "Attached task",
                "description": "",
                "epic_id": epic["id"],
                "estimation": 1,
                "priority": "low",
                "created_by": user_id
            }),
        )
        .await,
    )
    .await;
    let task_id = task["id"].as_str().unwrap();
    assert_eq!(task["epic_id"], epic["id"]);

    // An update that does not mention epic_id keeps it.
    let renamed = data(
        put_json(
            &client,
            &format!("/tasks/{}", task_id),
            json!({"title": "Renamed task"}),
        )
        .await,
    )
    .await;
    assert_eq!(renamed["epic_id"], epic["id"]);

    // An explicit null clears it.
    let cleared = data(
        put_json(
            &client,
            &format!("/tasks/{}", task_id),
            json!({"epic_id": null}),
        )
        .await,
    )
    .await;
    assert!(cleared["epic_id"].is_null());
}
