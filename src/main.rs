use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tutor_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/subjects", get(routes::subject::list_subjects))
        .route("/api/subjects/:name", get(routes::subject::get_subject))
        .route("/api/quiz/:subject/:topic", get(routes::quiz::get_quiz))
        .route("/api/quiz/submit", post(routes::quiz::submit_quiz))
        .route(
            "/api/quiz/attempts/:email/:subject/:topic",
            get(routes::quiz::get_attempt),
        )
        .route(
            "/api/quiz/attempts/:email/:subject",
            get(routes::quiz::list_attempts),
        )
        .route(
            "/api/user/performance/:email/:subject",
            get(routes::performance::subject_performance),
        )
        .route(
            "/api/user/performance/:email",
            get(routes::performance::performance_overview),
        )
        .route("/api/mycourses", post(routes::course::add_course))
        .route("/api/mycourses/finish", post(routes::course::finish_course))
        .route("/api/mycourses/:email", get(routes::course::list_courses))
        .route(
            "/api/profile/:email",
            get(routes::profile::get_profile).put(routes::profile::update_profile),
        )
        .route("/api/create-profile", post(routes::profile::create_profile))
        .route("/api/chat", post(routes::chat::chat))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route(
            "/api/admin/subjects",
            get(routes::subject::list_all_subjects).post(routes::subject::create_subject),
        )
        .route(
            "/api/admin/subjects/:name",
            put(routes::subject::update_subject).delete(routes::subject::delete_subject),
        )
        .route("/api/admin/quiz", post(routes::quiz::put_quiz))
        .route("/api/admin/roles", get(routes::role::list_users))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::require_admin,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.admin_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let superadmin_api = Router::new()
        .route("/api/admin/roles/promote", post(routes::role::promote))
        .route("/api/admin/roles/demote", post(routes::role::demote))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::require_superadmin,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.admin_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(admin_api)
        .merge(superadmin_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
