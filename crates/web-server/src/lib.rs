use axum::{routing::get, Router};
use configuration::Settings;
use database::{StudentRepository, StudentStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The store is injected at startup rather than held as ambient global
/// state, so tests can wire the router to a substitute backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

/// Builds the application router with the five student routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/:id",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .with_state(state)
}

/// The main function to configure and run the web server.
///
/// Connects to the database first; a connection failure propagates out and
/// terminates the process. On success the repository is wired into the
/// router and the server runs until the process exits.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings).await?;
    let store = StudentRepository::new(db_pool);

    let app_state = Arc::new(AppState {
        store: Arc::new(store),
    });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    let app = router(app_state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.listen_port()?));
    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
