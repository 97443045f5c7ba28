use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

async fn seed_topic(
    pool: &sqlx::PgPool,
    email: &str,
    subject: &str,
    topic: &str,
    questions: usize,
    score: i32,
) {
    let quiz_service = tutor_backend::services::quiz_service::QuizService::new(pool.clone());
    let question_docs: Vec<JsonValue> = (0..questions)
        .map(|i| {
            json!({
                "question": format!("{} question {}", topic, i + 1),
                "type": "TF",
                "options": [],
                "answer": "True"
            })
        })
        .collect();
    let questions: Vec<tutor_backend::models::quiz::Question> =
        serde_json::from_value(JsonValue::Array(question_docs)).expect("questions");
    quiz_service
        .put_quiz(subject, topic, &questions)
        .await
        .expect("seed quiz");

    let records: Vec<tutor_backend::models::attempt::AnswerRecord> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| tutor_backend::models::attempt::AnswerRecord {
            question: q.text.clone(),
            selected_answer: if (i as i32) < score {
                "True".to_string()
            } else {
                "False".to_string()
            },
            correct_answer: q.correct_answer.clone(),
        })
        .collect();
    tutor_backend::services::attempt_service::AttemptService::new(pool.clone())
        .upsert_attempt(email, subject, topic, score, &records)
        .await
        .expect("seed attempt");
}

#[tokio::test]
async fn global_overview_uses_mean_of_means() {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping performance API test");
        return;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("GEMINI_API_KEY", "test-key");
    env::set_var("PUBLIC_RPS", "100");
    env::set_var("ADMIN_RPS", "100");

    tutor_backend::config::init_config().expect("init config");
    let pool = tutor_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let run_id = Uuid::new_v4();
    let email = format!("bob_{}@example.com", run_id);
    let subject_x = format!("Algebra-{}", run_id);
    let subject_y = format!("Geometry-{}", run_id);
    let subject_z = format!("Calculus-{}", run_id);

    // Subject X: topic percents [100, 0] -> average 50.
    seed_topic(&pool, &email, &subject_x, "Linear equations", 1, 1).await;
    seed_topic(&pool, &email, &subject_x, "Quadratic equations", 1, 0).await;
    // Subject Y: [80] -> average 80.
    seed_topic(&pool, &email, &subject_y, "Triangles", 5, 4).await;
    // Subject Z stays unfinished and must not count.
    seed_topic(&pool, &email, &subject_z, "Limits", 1, 1).await;

    let subject_service =
        tutor_backend::services::subject_service::SubjectService::new(pool.clone());
    for subject in [&subject_x, &subject_y, &subject_z] {
        let payload: tutor_backend::dto::subject_dto::CreateSubjectRequest =
            serde_json::from_value(json!({
                "name": subject,
                "introduction": { "overview": "", "why_learn": "", "purpose": "" },
                "topics": []
            }))
            .expect("subject payload");
        subject_service.create(payload).await.expect("seed subject");
    }

    let app_state = tutor_backend::AppState::new(pool.clone());
    let app = Router::new()
        .route(
            "/api/mycourses",
            post(tutor_backend::routes::course::add_course),
        )
        .route(
            "/api/mycourses/finish",
            post(tutor_backend::routes::course::finish_course),
        )
        .route(
            "/api/mycourses/:email",
            get(tutor_backend::routes::course::list_courses),
        )
        .route(
            "/api/user/performance/:email/:subject",
            get(tutor_backend::routes::performance::subject_performance),
        )
        .route(
            "/api/user/performance/:email",
            get(tutor_backend::routes::performance::performance_overview),
        )
        .layer(axum::middleware::from_fn_with_state(
            tutor_backend::middleware::rate_limit::new_rps_state(100),
            tutor_backend::middleware::rate_limit::rps_middleware,
        ))
        .with_state(app_state);

    for subject in [&subject_x, &subject_y, &subject_z] {
        let req = Request::builder()
            .method("POST")
            .uri("/api/mycourses")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "userEmail": email, "subjectName": subject }).to_string(),
            ))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Adding an already-tracked subject is a no-op, not a second entry.
    let req = Request::builder()
        .method("POST")
        .uri("/api/mycourses")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "userEmail": email, "subjectName": subject_x }).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/mycourses/{}", email))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["courses"].as_array().unwrap().len(), 3);

    // Finish X and Y; finishing X twice must change nothing.
    for subject in [&subject_x, &subject_y] {
        let req = Request::builder()
            .method("POST")
            .uri("/api/mycourses/finish")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "userEmail": email, "subjectName": subject }).to_string(),
            ))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = Request::builder()
        .method("POST")
        .uri("/api/mycourses/finish")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "userEmail": email, "subjectName": subject_x }).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let second_finish: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(second_finish["status"], "finished");

    let enrollment_service =
        tutor_backend::services::enrollment_service::EnrollmentService::new(pool.clone());
    let courses = enrollment_service.list_courses(&email).await.unwrap();
    let x_entry = courses
        .iter()
        .find(|c| c.subject_name == subject_x)
        .expect("x enrollment");
    assert_eq!(x_entry.status, "finished");
    assert_eq!(
        x_entry.finished_at.unwrap().timestamp_millis(),
        second_finish["finishedAt"]
            .as_str()
            .map(|s| chrono::DateTime::parse_from_rfc3339(s).unwrap().timestamp_millis())
            .unwrap()
    );

    // Subject view: X averages 50 with one weak topic.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/user/performance/{}/{}", email, subject_x))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["averageScorePercent"], 50.0);
    assert_eq!(body["perTopic"].as_array().unwrap().len(), 2);
    assert_eq!(body["weakTopics"].as_array().unwrap().len(), 1);
    assert_eq!(body["weakTopics"][0]["topicTitle"], "Quadratic equations");

    // Global: mean(50, 80) = 65, not mean(100, 0, 80) = 60; Z is excluded.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/user/performance/{}", email))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["globalAveragePercent"], 65.0);
    assert_eq!(body["subjects"].as_array().unwrap().len(), 2);

    // A user with no enrollments gets the zero state, not an error.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/user/performance/nobody_{}@example.com", run_id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["globalAveragePercent"], 0.0);
    assert_eq!(body["subjects"].as_array().unwrap().len(), 0);
}
