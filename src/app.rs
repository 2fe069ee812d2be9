use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, endpoint_summary, AppState};
use crate::config::Config;
use crate::services::{ConditionsService, DeveloperService, SpotService};

/// Running HTTP server
pub struct Application {
    pub port: u16,
    pub server_handle: JoinHandle<Result<(), std::io::Error>>,
}

impl Application {
    /// Build the services, bind the listener and spawn the server
    ///
    /// Binding happens before this returns, so `port` is the real port even
    /// when the configuration asked for port 0.
    pub async fn build(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing application components");

        let app_state = AppState {
            spot_service: SpotService::default(),
            conditions_service: ConditionsService::new(),
            developer_service: DeveloperService::new(),
        };
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let addr = config.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!("🌊 API de Surf para Desarrolladores escuchando en http://localhost:{}", port);
        info!("📚 Endpoints disponibles:");
        for (method, path, description) in endpoint_summary() {
            info!("   {} {} - {}", method, path, description);
        }

        let server_handle = tokio::spawn(async move { axum::serve(listener, app).await });

        Ok(Self {
            port,
            server_handle,
        })
    }

    /// Run until the server stops (which runs indefinitely unless error)
    pub async fn run_until_stopped(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server_handle.await??;
        Ok(())
    }
}
