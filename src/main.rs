use std::net::TcpListener;

use anyhow::Context;

use roster::app;
use roster::settings::Settings;
use roster::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load()?;

    let pool = settings.database.pool();
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app::run(listener, pool)?.await.context("Failed to run app")
}
