use std::{net::SocketAddr, process::ExitCode, sync::Arc};

use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use models::Resource;
use service::{MongoRepository, ResourceRepository, ResourceService};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    openapi::ApiDocumented,
    routes::{build_router, AppState},
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(event = "signal_handler_failed", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Connect to the store, build the app and serve until Ctrl+C.
///
/// Store connection failures after the configured attempts are returned as errors
/// before the listener is bound.
pub async fn run<R: Resource + ApiDocumented>(cfg: AppConfig) -> anyhow::Result<()> {
    let client = models::db::connect(&cfg.database).await?;
    let repo: Arc<dyn ResourceRepository<R>> = Arc::new(MongoRepository::<R>::new(&client));
    let service = ResourceService::new(repo).with_max_limit(cfg.pagination.max_limit);
    let app = build_router(AppState::new(service), build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, resource = R::COLLECTION, "starting resource service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Process entry shared by the service binaries: logging, panic hook, config,
/// runtime, then [`run`]. Returns the process exit code.
pub fn launch<R: Resource + ApiDocumented>(service: &'static str, version: &'static str) -> ExitCode {
    dotenv().ok();
    init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");

    let service_id = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "service starting"
    );

    match rt.block_on(run::<R>(cfg)) {
        Ok(()) => {
            info!(service, event = "stop", %service_id, pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", error = %e, "service exited with error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_combines_host_and_port() {
        let cfg = ServerConfig { host: "127.0.0.1".into(), port: 8123, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:8123".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bind_addr_rejects_garbage() {
        let cfg = ServerConfig { host: "not a host".into(), port: 80, worker_threads: None };
        assert!(bind_addr(&cfg).is_err());
    }
}
