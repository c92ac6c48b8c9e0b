use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use storage::MemoryWorkoutStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use web::middleware::auth::AccessTokens;
use web::{build_router, AppState};

const TOKEN: &str = "test-token";
const OTHER_TOKEN: &str = "other-token";

fn test_state(store: MemoryWorkoutStore) -> AppState {
    AppState {
        store: Arc::new(store),
        tokens: AccessTokens::from_comma_separated("test-token:user-1,other-token:user-2"),
        database: "WorkoutTrackerDB".to_string(),
        container: "workouts".to_string(),
        allowed_origins: vec!["http://localhost:5173".to_string()],
    }
}

async fn spawn_app_with(store: MemoryWorkoutStore) -> SocketAddr {
    let app = build_router(test_state(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn spawn_app() -> SocketAddr {
    spawn_app_with(MemoryWorkoutStore::seeded()).await
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> (u16, Value) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let payload = body.map(Value::to_string).unwrap_or_default();
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(token) = token {
        req.push_str(&format!("Authorization: Bearer {token}\r\n"));
    }
    if body.is_some() {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    }
    req.push_str("\r\n");
    req.push_str(&payload);
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_service_metadata() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(addr, "GET", "/health", None, None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "WorkoutTrackerDB");
    assert_eq!(body["container"], "workouts");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn workout_day_lookup_and_validation() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(addr, "GET", "/api/workout-days/9", None, None).await;
    assert_eq!(status, 200);
    assert_eq!(body["workoutDay"]["dayNumber"], 9);
    assert_eq!(body["workoutDay"]["name"], "Compound: Push");

    let (status, body) = send_raw(addr, "GET", "/api/workout-days/8", None, None).await;
    assert_eq!(status, 200);
    assert!(body["workoutDay"]["warning"].is_string());

    for bad in ["0", "13", "abc", "-2"] {
        let (status, body) =
            send_raw(addr, "GET", &format!("/api/workout-days/{bad}"), None, None).await;
        assert_eq!(status, 400, "accepted day {bad:?}");
        assert_eq!(body["error"], "Invalid day number. Must be between 1 and 12.");
    }

    // An in-range day that is absent from the store is a 404, not a 400.
    let empty = spawn_app_with(MemoryWorkoutStore::new()).await;
    let (status, body) = send_raw(empty, "GET", "/api/workout-days/5", None, None).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Workout day not found");
}

#[tokio::test]
async fn exercises_are_public_and_day_scoped() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(addr, "GET", "/api/exercises/day/12", None, None).await;
    assert_eq!(status, 200);
    let exercises = body["exercises"].as_array().expect("exercises array");
    assert_eq!(exercises.len(), 5);
    assert!(exercises.iter().all(|e| e["dayNumber"] == 12));

    // Assisted dips keep their negative target weight.
    let (status, body) = send_raw(addr, "GET", "/api/exercises/day/9", None, None).await;
    assert_eq!(status, 200);
    let dips = body["exercises"]
        .as_array()
        .expect("exercises array")
        .iter()
        .find(|e| e["name"] == "Dips")
        .cloned()
        .expect("dips present");
    assert_eq!(dips["targetWeight"], -90.0);

    let (status, _) = send_raw(addr, "GET", "/api/exercises/day/99", None, None).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn protected_routes_reject_missing_and_unknown_tokens() {
    let addr = spawn_app().await;

    let protected = [
        ("GET", "/api/logged-workouts"),
        ("POST", "/api/log-workout"),
        ("GET", "/api/workouts"),
        ("GET", "/api/workouts/day/3"),
        ("POST", "/api/workouts"),
        ("POST", "/api/workouts/bulk"),
        ("DELETE", "/api/workouts/some-id"),
        ("GET", "/api/current-day"),
        ("PUT", "/api/current-day"),
        ("POST", "/api/admin/init-database"),
    ];

    for (method, path) in protected {
        let (status, body) = send_raw(addr, method, path, None, None).await;
        assert_eq!(status, 401, "{method} {path} without token");
        assert_eq!(body["error"], "Unauthorized");

        let (status, _) = send_raw(addr, method, path, Some("bogus"), None).await;
        assert_eq!(status, 401, "{method} {path} with unknown token");
    }
}

#[tokio::test]
async fn quick_log_round_trips_through_history() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/log-workout",
        Some(TOKEN),
        Some(&json!({ "dayNumber": 9, "mode": "quick" })),
    )
    .await;
    assert_eq!(status, 201);
    let workout = &body["workout"];
    assert_eq!(workout["dayNumber"], 9);
    assert_eq!(workout["mode"], "quick");
    assert_eq!(workout["userId"], "user-1");
    // The day's catalog name is snapshotted onto the record.
    assert_eq!(workout["dayName"], "Compound: Push");
    assert_eq!(workout["exercises"], json!([]));
    let id = workout["id"].as_str().expect("workout id").to_string();

    let (status, body) = send_raw(addr, "GET", "/api/logged-workouts", Some(TOKEN), None).await;
    assert_eq!(status, 200);
    let workouts = body["workouts"].as_array().expect("workouts array");
    assert!(workouts.iter().any(|w| w["id"] == id.as_str()));

    let (status, body) = send_raw(addr, "GET", "/api/workouts/day/9", Some(TOKEN), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["workouts"].as_array().expect("array").len(), 1);

    // Another user's history stays empty.
    let (status, body) = send_raw(addr, "GET", "/api/logged-workouts", Some(OTHER_TOKEN), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["workouts"], json!([]));
}

#[tokio::test]
async fn detailed_log_preserves_exercise_order() {
    let addr = spawn_app().await;

    let exercises = json!([
        { "name": "Dips", "weight": -90.0, "reps": "15-20", "sets": 3 },
        { "name": "Dumbbell Bench Press", "weight": 20.0, "reps": 12, "sets": 3 }
    ]);
    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/log-workout",
        Some(TOKEN),
        Some(&json!({ "dayNumber": 9, "mode": "detailed", "exercises": exercises })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["workout"]["mode"], "detailed");
    assert_eq!(body["workout"]["exercises"], exercises);
}

#[tokio::test]
async fn log_workout_requires_a_valid_day() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/log-workout",
        Some(TOKEN),
        Some(&json!({ "mode": "quick" })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required field: dayNumber");

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/log-workout",
        Some(TOKEN),
        Some(&json!({ "dayNumber": 13 })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid day number. Must be between 1 and 12.");
}

#[tokio::test]
async fn current_day_defaults_updates_and_rejects_out_of_range() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(addr, "GET", "/api/current-day", Some(TOKEN), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["currentDay"], 1);

    let (status, body) = send_raw(
        addr,
        "PUT",
        "/api/current-day",
        Some(TOKEN),
        Some(&json!({ "currentDay": 5 })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["currentDay"], 5);

    for bad in [json!({ "currentDay": 0 }), json!({ "currentDay": 13 }), json!({})] {
        let (status, body) =
            send_raw(addr, "PUT", "/api/current-day", Some(TOKEN), Some(&bad)).await;
        assert_eq!(status, 400, "accepted {bad}");
        assert_eq!(body["error"], "Invalid day number. Must be between 1 and 12.");
    }

    // The rejected writes left the pointer alone.
    let (_, body) = send_raw(addr, "GET", "/api/current-day", Some(TOKEN), None).await;
    assert_eq!(body["currentDay"], 5);

    // The pointer is per user.
    let (_, body) = send_raw(addr, "GET", "/api/current-day", Some(OTHER_TOKEN), None).await;
    assert_eq!(body["currentDay"], 1);
}

#[tokio::test]
async fn delete_is_scoped_to_the_owner() {
    let addr = spawn_app().await;

    let (_, body) = send_raw(
        addr,
        "POST",
        "/api/log-workout",
        Some(TOKEN),
        Some(&json!({ "dayNumber": 7 })),
    )
    .await;
    let id = body["workout"]["id"].as_str().expect("workout id").to_string();

    // Another user cannot delete the record.
    let (status, body) = send_raw(
        addr,
        "DELETE",
        &format!("/api/workouts/{id}"),
        Some(OTHER_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Workout not found");

    let (status, body) = send_raw(
        addr,
        "DELETE",
        &format!("/api/workouts/{id}"),
        Some(TOKEN),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Workout deleted successfully");
    assert_eq!(body["id"], id.as_str());

    let (status, _) = send_raw(
        addr,
        "DELETE",
        &format!("/api/workouts/{id}"),
        Some(TOKEN),
        None,
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn bulk_import_is_best_effort() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/workouts/bulk",
        Some(TOKEN),
        Some(&json!({ "workouts": "not-an-array" })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Request body must contain an array of workouts");

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/workouts/bulk",
        Some(TOKEN),
        Some(&json!({
            "workouts": [
                { "dayNumber": 5, "date": "2025-11-24", "dayName": "Compound: Pulls" },
                { "name": "no day number here" }
            ]
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["success"], 1);
    assert_eq!(body["failed"], 1);
    assert_eq!(body["workouts"].as_array().expect("created array").len(), 1);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["workout"]["name"], "no day number here");

    // The valid draft is independently retrievable.
    let (_, body) = send_raw(addr, "GET", "/api/logged-workouts", Some(TOKEN), None).await;
    let workouts = body["workouts"].as_array().expect("workouts array");
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["date"], "2025-11-24");
    assert_eq!(workouts[0]["dayNumber"], 5);
}

#[tokio::test]
async fn legacy_views_share_the_logged_workout_entity() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/workouts",
        Some(TOKEN),
        Some(&json!({
            "dayNumber": 9,
            "exercise": "Dips",
            "weight": -90.0,
            "reps": "15-20",
            "sets": 3
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["workout"]["mode"], "detailed");
    assert_eq!(body["workout"]["exercises"][0]["name"], "Dips");
    assert_eq!(body["workout"]["exercises"][0]["weight"], -90.0);

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/workouts",
        Some(TOKEN),
        Some(&json!({ "dayNumber": 9 })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required fields: dayNumber and exercise");

    let (status, body) = send_raw(addr, "GET", "/api/workouts", Some(TOKEN), None).await;
    assert_eq!(status, 200);
    let workouts = body["workouts"].as_array().expect("workouts array");
    assert_eq!(workouts.len(), 1);
    let legacy = &workouts[0];
    assert_eq!(legacy["day"], 9);
    assert!(legacy["id"].is_string());
    assert!(legacy["date"].is_string());
    assert_eq!(legacy["exercises"][0]["name"], "Dips");
    // The legacy view renames dayNumber to day.
    assert!(legacy.get("dayNumber").is_none());
}

#[tokio::test]
async fn admin_seeding_restores_the_catalog() {
    let addr = spawn_app_with(MemoryWorkoutStore::new()).await;

    let (status, _) = send_raw(addr, "GET", "/api/workout-days/1", None, None).await;
    assert_eq!(status, 404);

    let (status, body) = send_raw(
        addr,
        "POST",
        "/api/admin/init-database",
        Some(TOKEN),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["seeded"]["workoutDays"], 12);
    assert_eq!(body["seeded"]["exercises"], 43);

    let (status, body) = send_raw(addr, "GET", "/api/workout-days/1", None, None).await;
    assert_eq!(status, 200);
    assert_eq!(body["workoutDay"]["name"], "Compound: Legs");
}

#[tokio::test]
async fn unknown_routes_fall_back_to_a_json_404() {
    let addr = spawn_app().await;

    let (status, body) = send_raw(addr, "GET", "/api/nope", None, None).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not found");
}
