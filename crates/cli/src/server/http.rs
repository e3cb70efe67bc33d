use std::net::SocketAddr;
use tracing::info;
use warden_dns_api::{create_api_routes, AppState};
use warden_dns_domain::Config;

pub async fn start_http_server(config: Config, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = config.server.http_bind.parse()?;
    let app = create_api_routes(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(bind = %addr, "Control plane listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
