use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    db::{ConnectionManager, dao::TodoDao},
    middleware::catch_panic_layer,
    routes::router,
    state::AppState,
};

/// A connected, bound server that has not started accepting requests yet.
pub struct Server {
    connection: ConnectionManager,
    listener: TcpListener,
    app: Router,
}

impl Server {
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves until `shutdown` resolves, then releases the MongoDB pool.
    /// The pool is released even when serving fails.
    pub async fn run_until<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let served = axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error");
        tracing::info!("server stopped");
        release(&self.connection).await;
        served
    }
}

/// Connects to MongoDB, then binds the HTTP listener. The port is only
/// bound once the database has answered its health check.
pub async fn startup(cfg: &AppConfig) -> anyhow::Result<Server> {
    let db_cfg = cfg.database();
    let connection = ConnectionManager::connect_with(&db_cfg)
        .await
        .context("failed to set up MongoDB")?;

    match bind(cfg, &connection).await {
        Ok((listener, app)) => Ok(Server {
            connection,
            listener,
            app,
        }),
        Err(err) => {
            release(&connection).await;
            Err(err)
        }
    }
}

async fn bind(
    cfg: &AppConfig,
    connection: &ConnectionManager,
) -> anyhow::Result<(TcpListener, Router)> {
    let database = connection.database(&cfg.mongo_database)?;
    let store = Arc::new(TodoDao::new(&database, &cfg.mongo_collection));
    let state = AppState::new(cfg.clone(), store);

    let app = router(state)
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .context("invalid host/port")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{}", addr);

    Ok((listener, app))
}

async fn release(connection: &ConnectionManager) {
    if let Err(err) = connection.disconnect().await {
        tracing::warn!("disconnect failed: {err}");
    }
}

/// Resolves on ctrl-c, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
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
    tracing::info!("shutdown signal received");
}
