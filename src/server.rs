//! HTTP surface: state wiring, router and the serve loop
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::{
    course::{routes::list_courses_handler, CourseRepository, CourseRepositoryImpl, CourseService},
    student::{
        routes::{get_student_handler, search_students_handler},
        GetStudentSummaryHandler, SearchStudentsHandler, StudentRepository, StudentRepositoryImpl,
    },
};
use crate::shared::config::Settings;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::{DatabaseHealthMonitor, DatabaseState, SharedDatabaseState};
use crate::{log_error, log_info, log_warn};

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub db_state: SharedDatabaseState,
    pub student_summary: Arc<GetStudentSummaryHandler>,
    pub student_search: Arc<SearchStudentsHandler>,
    pub course_service: Arc<CourseService>,
}

impl AppState {
    pub fn new(
        db_state: SharedDatabaseState,
        student_repo: Arc<dyn StudentRepository>,
        course_repo: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            db_state,
            student_summary: Arc::new(GetStudentSummaryHandler::new(Arc::clone(&student_repo))),
            student_search: Arc::new(SearchStudentsHandler::new(student_repo)),
            course_service: Arc::new(CourseService::new(course_repo)),
        }
    }

    /// Wire the diesel repositories over `db_state`
    pub fn from_database(db_state: SharedDatabaseState) -> Self {
        let student_repo: Arc<dyn StudentRepository> =
            Arc::new(StudentRepositoryImpl::new(Arc::clone(&db_state)));
        let course_repo: Arc<dyn CourseRepository> =
            Arc::new(CourseRepositoryImpl::new(Arc::clone(&db_state)));

        Self::new(db_state, student_repo, course_repo)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: String,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_state = state.db_state.read().await;
    Json(HealthResponse {
        status: if db_state.is_available() { "ok" } else { "degraded" },
        database: db_state.status_message(),
    })
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/students", get(search_students_handler))
        .route("/api/students/{id}", get(get_student_handler))
        .route("/api/courses", get(list_courses_handler))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!("request", method = %request.method(), path = %request.uri().path())
            }),
        )
        .with_state(state)
}

/// Connect (or start degraded), migrate, and serve until Ctrl+C / SIGTERM
pub async fn start_server(settings: Settings) -> AppResult<()> {
    let database_settings = settings.database.clone();
    let db_state = tokio::task::spawn_blocking(move || {
        let state = DatabaseState::initialize(&database_settings);

        // Run migrations if database is available, otherwise continue degraded
        match state.get_database().and_then(|db| db.run_migrations()) {
            Ok(_) => log_info!("Database migrations completed successfully"),
            Err(e) if e.is_unavailable() => {
                log_warn!("Starting without a database; requests will get 503 until it is reachable")
            }
            Err(e) => log_error!("Failed to run database migrations: {}", e),
        }
        state
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Database initialization panicked: {}", e)))?
    .into_shared();

    let monitor = DatabaseHealthMonitor::new(Arc::clone(&db_state), settings.database.clone());
    let monitor_handle = monitor.start_monitoring();

    let app = build_router(AppState::from_database(db_state));

    let address = format!("0.0.0.0:{}", settings.server_port);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", address, e)))?;
    log_info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    monitor_handle.abort();
    log_info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log_error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        log_info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log_info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log_error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
