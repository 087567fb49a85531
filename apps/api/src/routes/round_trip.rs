//! End-to-end checks against a real PostgreSQL. Run with
//! `DATABASE_URL=... cargo test -- --ignored`.

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::PgPool;

use super::build_router;
use crate::config::Config;
use crate::state::AppState;

const CHILD_SEGMENTS: &[&str] = &[
    "progress",
    "documents",
    "evaluations",
    "messages",
    "japanese-proficiency",
    "skill-training",
    "japanese-learning",
    "pre-departure-support",
    "digital-evidence",
    "career-goals",
    "career-paths",
    "milestones",
    "integrated-growth",
    "specific-skill-transition",
    "simulator-training",
    "training-menu-assignments",
    "calendar",
    "notifications",
    "reports",
    "training-sessions",
];

fn server(db: PgPool) -> TestServer {
    let config = Config {
        database_url: String::new(),
        port: 0,
        rust_log: "info".into(),
        db_max_connections: 5,
        db_acquire_timeout_secs: 5,
        run_migrations: false,
        max_upload_bytes: 1024 * 1024,
    };
    TestServer::new(build_router(AppState { db, config })).unwrap()
}

async fn create_worker(server: &TestServer, email: &str) -> i64 {
    let response = server
        .post("/api/workers")
        .json(&json!({
            "name": "Nguyen Van A",
            "email": email,
            "nationality": "Vietnam",
            "birthDate": "1998-04-12"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"].as_i64().unwrap()
}

async fn count(pool: &PgPool, table: &str, worker_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table} WHERE worker_id = $1"))
        .bind(worker_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_created_worker_reads_back(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "a@example.com").await;

    let body: Value = server.get(&format!("/api/workers/{id}")).await.json();
    assert_eq!(body["data"]["name"], "Nguyen Van A");
    assert_eq!(body["data"]["email"], "a@example.com");
    assert_eq!(body["data"]["birthDate"], "1998-04-12");
    assert_eq!(body["data"]["experienceYears"], 0);
    assert_eq!(body["data"]["currentStatus"], "登録中");

    let goal: Value = server
        .post(&format!("/api/workers/{id}/career-goals"))
        .json(&json!({"title": "Crane licence", "targetDate": "2026-03-31"}))
        .await
        .json();
    let goal_id = goal["data"]["id"].as_i64().unwrap();
    let fetched: Value = server
        .get(&format!("/api/workers/{id}/career-goals/{goal_id}"))
        .await
        .json();
    assert_eq!(fetched["data"], goal["data"]);
    assert_eq!(fetched["data"]["status"], "設定済み");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_partial_update_keeps_omitted_fields(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "b@example.com").await;
    let goal: Value = server
        .post(&format!("/api/workers/{id}/career-goals"))
        .json(&json!({"title": "Crane licence", "targetDate": "2026-03-31", "notes": "keep"}))
        .await
        .json();
    let goal_id = goal["data"]["id"].as_i64().unwrap();

    let updated: Value = server
        .put(&format!("/api/workers/{id}/career-goals/{goal_id}"))
        .json(&json!({"status": "達成"}))
        .await
        .json();
    assert_eq!(updated["data"]["status"], "達成");
    assert_eq!(updated["data"]["title"], "Crane licence");
    assert_eq!(updated["data"]["notes"], "keep");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_missing_worker_is_not_found_for_every_child(pool: PgPool) {
    let server = server(pool);
    for segment in CHILD_SEGMENTS {
        let response = server.get(&format!("/api/workers/987654/{segment}")).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{segment}");
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Worker not found");
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_deleted_worker_is_gone(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "c@example.com").await;

    let body: Value = server.delete(&format!("/api/workers/{id}")).await.json();
    assert_eq!(body["message"], "Worker deleted successfully");

    let response = server.get(&format!("/api/workers/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let response = server.delete(&format!("/api/workers/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_worker_delete_cascades(pool: PgPool) {
    let server = server(pool.clone());
    let id = create_worker(&server, "d@example.com").await;

    server
        .post(&format!("/api/workers/{id}/progress"))
        .json(&json!({"progressDate": "2025-06-01", "progressType": "面談"}))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post(&format!("/api/workers/{id}/career-goals"))
        .json(&json!({"title": "N2", "targetDate": "2026-07-01"}))
        .await
        .assert_status(StatusCode::CREATED);
    let unity: Value = server
        .post("/api/unity/training-session")
        .json(&json!({
            "workerId": id,
            "durationSeconds": 120,
            "kpiScores": {"safetyScore": 88.5, "overallScore": 80.0},
            "operationLogs": [
                {"timestamp": "2025-06-01T09:00:00", "operationType": "lift"},
                {"timestamp": "2025-06-01T09:00:05", "operationType": "rotate"}
            ]
        }))
        .await
        .json();
    let session_id = unity["data"]["sessionId"].as_str().unwrap().to_string();

    let replay: Value = server.get(&format!("/api/replay/{session_id}")).await.json();
    assert_eq!(replay["data"]["operationLogs"][0]["operationType"], "lift");
    assert_eq!(replay["data"]["kpiScores"][0]["safetyScore"], 88.5);

    server
        .delete(&format!("/api/workers/{id}"))
        .await
        .assert_status_ok();

    for table in ["worker_progress", "career_goals", "training_sessions"] {
        assert_eq!(count(&pool, table, id).await, 0, "{table}");
    }
    let kpis = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM kpi_scores")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(kpis, 0);
    server
        .get(&format!("/api/replay/{session_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_login_and_duplicate_user(pool: PgPool) {
    let server = server(pool);
    let user = json!({"username": "tanaka", "password": "pw-123", "email": "t@example.com"});

    let created: Value = server.post("/api/users").json(&user).await.json();
    assert_eq!(created["data"]["role"], "trainee");
    assert!(created["data"].get("passwordHash").is_none());

    let response = server.post("/api/users").json(&user).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username already exists");

    let body: Value = server
        .post("/api/auth/login")
        .json(&json!({"username": "tanaka", "password": "not-the-password"}))
        .await
        .json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["username"], "tanaka");
    assert_eq!(body["data"]["mfaEnabled"], false);

    let response = server
        .post("/api/auth/login")
        .json(&json!({"username": "suzuki", "password": "pw-123"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid username or password");

    let user_id = created["data"]["id"].as_i64().unwrap();
    server
        .put(&format!("/api/users/{user_id}"))
        .json(&json!({"isActive": false}))
        .await
        .assert_status_ok();
    let response = server
        .post("/api/auth/login")
        .json(&json!({"username": "tanaka", "password": "pw-123"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "User account is inactive");
}

async fn post_created(server: &TestServer, path: &str, body: Value) -> Value {
    let response = server.post(path).json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{path}");
    let body: Value = response.json();
    body["data"].clone()
}

async fn create_menu(server: &TestServer, name: &str, level: &str, active: bool) -> i64 {
    let menu = post_created(
        server,
        "/api/training-menus",
        json!({
            "menuName": name,
            "scenarioId": format!("scn-{name}"),
            "equipmentType": "油圧ショベル",
            "difficultyLevel": level,
            "isActive": active
        }),
    )
    .await;
    menu["id"].as_i64().unwrap()
}

/// One row for every record type a worker owns.
async fn populate_worker(server: &TestServer, id: i64) {
    let base = format!("/api/workers/{id}");
    let menu_id = create_menu(server, "basic", "初級", true).await;
    let rows = [
        ("progress", json!({"progressDate": "2025-06-01", "progressType": "面談"})),
        ("documents", json!({"documentType": "passport", "title": "Passport"})),
        ("evaluations", json!({"evaluator": "Sato", "evaluationType": "月次", "evaluationDate": "2025-06-02"})),
        ("messages", json!({"sender": "Sato", "recipient": "Nguyen", "message": "Welcome"})),
        ("japanese-proficiency", json!({"testDate": "2025-07-06", "testType": "JLPT", "level": "N3", "totalScore": 120, "passed": true})),
        ("skill-training", json!({"skillCategory": "建設", "skillName": "玉掛け", "trainingStartDate": "2025-06-10"})),
        ("japanese-learning", json!({"learningDate": "2025-06-03", "learningType": "会話", "learningContent": "敬語"})),
        ("pre-departure-support", json!({"supportType": "visa", "supportDate": "2025-05-01", "supportContent": "COE application"})),
        ("digital-evidence", json!({"title": "Crane log", "evidenceType": "video"})),
        ("career-goals", json!({"title": "N2", "targetDate": "2026-07-01"})),
        ("career-paths", json!({"title": "Operator", "startDate": "2025-04-01"})),
        ("milestones", json!({"title": "First lift", "targetDate": "2025-09-01"})),
        ("integrated-growth", json!({"recordDate": "2025-06-30"})),
        ("specific-skill-transition", json!({"transitionDate": "2027-04-01", "fromSkill": "技能実習", "toSkill": "特定技能1号"})),
        ("simulator-training", json!({"trainingDate": "2025-06-15", "equipmentType": "クレーン", "trainingMenuId": menu_id})),
        ("training-menu-assignments", json!({"trainingMenuId": menu_id, "assignedDate": "2025-06-01"})),
        ("calendar", json!({"title": "Interview", "eventType": "面談", "startDatetime": "2025-06-05T10:00:00", "endDatetime": "2025-06-05T11:00:00"})),
        ("notifications", json!({"title": "Reminder", "message": "Bring passport", "notificationType": "info"})),
        ("reports", json!({"reportType": "monthly", "title": "June"})),
    ];
    for (segment, body) in rows {
        post_created(server, &format!("{base}/{segment}"), body).await;
    }

    let training = post_created(server, "/api/trainings", json!({"title": "Safety basics"})).await;
    let training_id = training["id"].as_i64().unwrap();
    post_created(
        server,
        &format!("/api/trainings/{training_id}/enrollments"),
        json!({"workerId": id, "enrollmentDate": "2025-06-01"}),
    )
    .await;

    server
        .post("/api/unity/training-session")
        .json(&json!({
            "workerId": id,
            "menuId": menu_id,
            "kpiScores": {"safetyScore": 90.0, "overallScore": 85.0},
            "operationLogs": [{"timestamp": "2025-06-15T09:00:00", "operationType": "lift"}]
        }))
        .await
        .assert_status_ok();
}

async fn worker_owned_tables(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT table_name::text FROM information_schema.columns
        WHERE table_schema = 'public' AND column_name = 'worker_id' AND table_name <> 'users'
        ORDER BY table_name
        "#,
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

async fn total(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_worker_delete_empties_every_owned_table(pool: PgPool) {
    let server = server(pool.clone());
    let id = create_worker(&server, "e@example.com").await;
    populate_worker(&server, id).await;
    let user: Value = server
        .post("/api/users")
        .json(&json!({"username": "nguyen", "password": "pw", "email": "n@example.com", "workerId": id}))
        .await
        .json();

    let tables = worker_owned_tables(&pool).await;
    assert!(tables.len() >= 21, "{tables:?}");
    for table in &tables {
        assert_eq!(count(&pool, table, id).await, 1, "{table} before delete");
    }

    server
        .delete(&format!("/api/workers/{id}"))
        .await
        .assert_status_ok();

    for table in &tables {
        assert_eq!(count(&pool, table, id).await, 0, "{table}");
    }
    assert_eq!(total(&pool, "kpi_scores").await, 0);
    assert_eq!(total(&pool, "operation_logs").await, 0);

    let user_id = user["data"]["id"].as_i64().unwrap();
    let account: Value = server.get(&format!("/api/users/{user_id}")).await.json();
    assert!(account["data"]["workerId"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_deleted_child_is_gone(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "f@example.com").await;
    let base = format!("/api/workers/{id}/progress");
    let progress = post_created(
        &server,
        &base,
        json!({"progressDate": "2025-06-01", "progressType": "面談"}),
    )
    .await;
    let progress_id = progress["id"].as_i64().unwrap();

    let body: Value = server.delete(&format!("{base}/{progress_id}")).await.json();
    assert_eq!(body["message"], "Progress deleted successfully");

    let response = server.get(&format!("{base}/{progress_id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Progress not found");
    server
        .delete(&format!("{base}/{progress_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let other = create_worker(&server, "g@example.com").await;
    let progress = post_created(
        &server,
        &base,
        json!({"progressDate": "2025-06-02", "progressType": "面談"}),
    )
    .await;
    let progress_id = progress["id"].as_i64().unwrap();
    server
        .get(&format!("/api/workers/{other}/progress/{progress_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_document_upload_stores_metadata(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "h@example.com").await;

    let form = MultipartForm::new()
        .add_text("documentType", "certificate")
        .add_text("title", "Crane licence")
        .add_part(
            "file",
            Part::bytes(b"%PDF-1.4 licence".to_vec())
                .file_name("licence.pdf")
                .mime_type("application/pdf"),
        );
    let response = server
        .post(&format!("/api/workers/{id}/documents/upload"))
        .multipart(form)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Document uploaded successfully");
    assert_eq!(body["data"]["fileName"], "licence.pdf");
    assert_eq!(body["data"]["fileSize"], 16);
    let document_id = body["data"]["documentId"].as_i64().unwrap();

    let stored: Value = server
        .get(&format!("/api/workers/{id}/documents/{document_id}"))
        .await
        .json();
    assert_eq!(stored["data"]["documentType"], "certificate");
    assert_eq!(stored["data"]["title"], "Crane licence");
    assert_eq!(stored["data"]["mimeType"], "application/pdf");

    let form = MultipartForm::new()
        .add_text("workerId", id)
        .add_part("file", Part::bytes(Vec::new()).file_name("blank.png"));
    let response = server.post("/api/workers/screenshot").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "File is empty");

    let form = MultipartForm::new()
        .add_text("workerId", id)
        .add_part("file", Part::bytes(vec![0x89, 0x50, 0x4e, 0x47]).file_name("site.png"));
    let body: Value = server.post("/api/workers/screenshot").multipart(form).await.json();
    assert_eq!(body["message"], "File uploaded successfully");
    let documents: Value = server.get(&format!("/api/workers/{id}/documents")).await.json();
    assert_eq!(documents["data"].as_array().unwrap().len(), 2);
    assert_eq!(documents["data"][0]["documentType"], "screenshot");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_list_filters(pool: PgPool) {
    let server = server(pool);
    create_worker(&server, "i@example.com").await;
    post_created(
        &server,
        "/api/workers",
        json!({"name": "Maria Santos", "email": "m@example.com", "nationality": "Philippines", "currentStatus": "就労中"}),
    )
    .await;

    let by_name: Value = server.get("/api/workers?name=nguyen").await.json();
    assert_eq!(by_name["data"].as_array().unwrap().len(), 1);
    assert_eq!(by_name["data"][0]["name"], "Nguyen Van A");

    let by_nationality: Value = server.get("/api/workers?nationality=Philippines").await.json();
    assert_eq!(by_nationality["data"].as_array().unwrap().len(), 1);
    assert_eq!(by_nationality["data"][0]["name"], "Maria Santos");

    let by_status: Value = server
        .get("/api/workers")
        .add_query_param("status", "登録中")
        .await
        .json();
    assert_eq!(by_status["data"].as_array().unwrap().len(), 1);
    assert_eq!(by_status["data"][0]["email"], "i@example.com");

    create_menu(&server, "intro", "初級", true).await;
    create_menu(&server, "advanced", "上級", true).await;
    create_menu(&server, "retired", "上級", false).await;

    let all: Value = server.get("/api/training-menus").await.json();
    assert_eq!(all["data"].as_array().unwrap().len(), 3);
    let active: Value = server.get("/api/training-menus?active_only=true").await.json();
    assert_eq!(active["data"].as_array().unwrap().len(), 2);
    let hard: Value = server
        .get("/api/training-menus")
        .add_query_param("difficultyLevel", "上級")
        .await
        .json();
    assert_eq!(hard["data"].as_array().unwrap().len(), 2);
    let hard_active: Value = server
        .get("/api/training-menus")
        .add_query_param("active_only", true)
        .add_query_param("difficultyLevel", "上級")
        .await
        .json();
    assert_eq!(hard_active["data"].as_array().unwrap().len(), 1);
    assert_eq!(hard_active["data"][0]["menuName"], "advanced");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_parentless_calendar_and_notifications(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "j@example.com").await;
    let event = json!({
        "title": "Orientation",
        "eventType": "研修",
        "startDatetime": "2025-06-05T10:00:00",
        "endDatetime": "2025-06-05T12:00:00"
    });
    let notice = json!({"title": "Holiday", "message": "Office closed", "notificationType": "info"});

    post_created(&server, "/api/calendar", event.clone()).await;
    post_created(&server, &format!("/api/workers/{id}/calendar"), event).await;
    post_created(&server, "/api/notifications", notice.clone()).await;
    post_created(&server, &format!("/api/workers/{id}/notifications"), notice).await;

    for path in ["/api/calendar", "/api/notifications"] {
        let body: Value = server.get(path).await.json();
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1, "{path}");
        assert!(rows[0]["workerId"].is_null(), "{path}");
    }
    let owned: Value = server.get(&format!("/api/workers/{id}/calendar")).await.json();
    assert_eq!(owned["data"].as_array().unwrap().len(), 1);
    assert_eq!(owned["data"][0]["workerId"], id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_reports_and_enrollments(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "k@example.com").await;

    let report = post_created(&server, "/api/reports", json!({"reportType": "monthly", "title": "June"})).await;
    let report_id = report["id"].as_i64().unwrap();
    let fetched: Value = server.get(&format!("/api/reports/{report_id}")).await.json();
    assert_eq!(fetched["data"]["title"], "June");
    assert!(fetched["data"]["workerId"].is_null());
    server
        .delete(&format!("/api/reports/{report_id}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/api/reports/{report_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let training = post_created(&server, "/api/trainings", json!({"title": "Safety basics"})).await;
    let training_id = training["id"].as_i64().unwrap();
    let base = format!("/api/trainings/{training_id}/enrollments");
    let enrollment = post_created(&server, &base, json!({"workerId": id, "enrollmentDate": "2025-06-01"})).await;
    assert_eq!(enrollment["workerId"], id);

    let listed: Value = server.get(&base).await.json();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let response = server
        .post(&base)
        .json(&json!({"workerId": 987654, "enrollmentDate": "2025-06-01"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Worker not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_dashboard_evidence_and_admin_summary(pool: PgPool) {
    let server = server(pool);
    let id = create_worker(&server, "l@example.com").await;
    populate_worker(&server, id).await;
    create_menu(&server, "retired", "上級", false).await;

    let dashboard: Value = server
        .get(&format!("/api/workers/{id}/dashboard/integrated"))
        .await
        .json();
    let data = &dashboard["data"];
    assert_eq!(data["workerName"], "Nguyen Van A");
    for key in [
        "japaneseProficiencyCount",
        "skillTrainingCount",
        "simulatorTrainingCount",
        "trainingSessionCount",
        "integratedGrowthCount",
        "milestoneCount",
        "careerGoalCount",
        "progressCount",
    ] {
        assert_eq!(data[key], 1, "{key}");
    }
    assert_eq!(data["kpiTimeline"][0]["overallScore"], 85.0);
    assert_eq!(data["japaneseProficiency"][0]["level"], "N3");

    let report: Value = server
        .get(&format!("/api/workers/{id}/evidence-report"))
        .await
        .json();
    assert_eq!(report["data"]["workerId"], id);
    assert_eq!(report["data"]["digitalEvidences"][0]["title"], "Crane log");
    assert_eq!(report["data"]["skillTrainingCount"], 1);

    server
        .get("/api/workers/987654/dashboard/integrated")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let summary: Value = server.get("/api/admin/summary").await.json();
    assert_eq!(
        summary["data"],
        json!({
            "totalWorkers": 1,
            "totalTrainingSessions": 1,
            "totalTrainingMenus": 2,
            "activeTrainingMenus": 1
        })
    );
}
