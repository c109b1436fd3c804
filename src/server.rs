//! Server lifecycle: startup, dual-transport serving, graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::apollo::ApolloClient;
use crate::auth::CredentialResolver;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::registry::Registry;
use crate::transport::{self, AppState, SseSessions};

/// Initialize tracing with environment-based filtering layered over the
/// configured default level. Logs go to stderr; set `LOG_FORMAT=json` for
/// structured output.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let directive = format!("apollo_mcp={}", log_level.to_ascii_lowercase());
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Build the shared application state from configuration.
///
/// Fails only on startup invariants: a duplicate tool registration or an
/// unusable HTTP client.
pub fn build_state(config: &Config, shutdown: CancellationToken) -> anyhow::Result<AppState> {
    let registry = Arc::new(Registry::new()?);
    tracing::info!(tools = registry.len(), "tool registry initialized");

    let client = ApolloClient::new(&config.api_base)?;
    let credentials = CredentialResolver::new(config.api_key.clone());
    let dispatcher = Arc::new(Dispatcher::new(registry.clone(), client, credentials));

    Ok(AppState {
        registry,
        dispatcher,
        sessions: Arc::new(SseSessions::default()),
        shutdown,
        json_response: config.json_response,
    })
}

/// Run the server until a shutdown signal arrives and in-flight work drains.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let state = build_state(&config, shutdown.clone())?;
    let app = transport::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server starting on port {} with dual transports:", config.port);
    tracing::info!("  - SSE endpoint: http://localhost:{}/sse", config.port);
    tracing::info!(
        "  - StreamableHTTP endpoint: http://localhost:{}/mcp",
        config.port
    );

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutdown signal received, draining in-flight requests");
        // Entered once; there is no way back to the running state.
        signal_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
