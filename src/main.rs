use axum::{
    routing::{get, post},
    Router,
};
use registration_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);
    app_state
        .admin_service
        .ensure_default_admin(&config.admin_default_password)
        .await?;

    let base_routes = Router::new().route("/health", get(routes::health::health));

    // stricter limiter stacked on the payment-submission path
    let transaction_api = Router::new()
        .route("/submit-transaction", post(routes::officer::submit_transaction))
        .layer(axum::middleware::from_fn_with_state(
            registration_backend::middleware::rate_limit::new_rps_state(config.transaction_rps),
            registration_backend::middleware::rate_limit::rps_middleware,
        ));

    let api = Router::new()
        .route("/admin/login", post(routes::admin::login))
        .route("/admin/officers", get(routes::admin::list_officers))
        .route("/admin/activate", post(routes::admin::activate_subscription))
        .route("/admin/reset-password", post(routes::admin::reset_password))
        .route("/login", post(routes::officer::login))
        .route("/signup", post(routes::officer::signup))
        .route("/officer/status", post(routes::officer::status))
        .route("/officer/reset-password", post(routes::officer::reset_password))
        .route("/submit-result", post(routes::results::submit_result))
        .route("/get-results", get(routes::results::get_results));

    let app = base_routes
        .merge(api.merge(transaction_api).layer(axum::middleware::from_fn_with_state(
            registration_backend::middleware::rate_limit::new_rps_state(config.public_rps),
            registration_backend::middleware::rate_limit::rps_middleware,
        )))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
