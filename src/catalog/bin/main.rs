use std::net::SocketAddr;
use books_api::books::factory::create_book_repository;
use books_api::catalog::controller::routes;
use books_api::core::controller::AppState;
use books_api::core::domain::Configuration;
use books_api::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = routes(AppState::new(config.clone(), create_book_repository()));

    let server = axum::Server::try_bind(&addr)?
        .serve(app.into_make_service());
    tracing::info!(environment = config.environment.as_str(),
        "Books REST API Server is running on http://localhost:{}", server.local_addr().port());

    server.with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal {:?}", err);
        std::future::pending::<()>().await;
    }
}
