use todoify::{
    config::{AppConfig, defaults::DEFAULT_RUST_LOG},
    logging::init_tracing,
    server::{shutdown_signal, startup},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env();
    init_tracing(
        cfg.as_ref()
            .map(|cfg| cfg.rust_log.as_str())
            .unwrap_or(DEFAULT_RUST_LOG),
    );
    let cfg = cfg?;

    startup(&cfg).await?.run_until(shutdown_signal()).await
}
