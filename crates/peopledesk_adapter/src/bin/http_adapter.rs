#![forbid(unsafe_code)]

use std::sync::{Arc, Mutex};

use peopledesk_adapter::{build_router, AdapterConfig, AdapterRuntime};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdapterConfig::from_env()?;
    init_tracing(config.log_json);

    let runtime = Arc::new(Mutex::new(AdapterRuntime::new(&config)?));
    let app = build_router(runtime);

    info!(
        addr = %config.bind,
        notice_ttl_ms = config.portal.notice_ttl_ms,
        signed_in = config.portal.employee_name.is_some(),
        "peopledesk_http listening"
    );
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("peopledesk_http stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}
