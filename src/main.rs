use actix_web::HttpServer;
use tracing::info;
use tracing_actix_web::TracingLogger;

use midnight_backend::{app, connect_and_migrate, cors, init_tracing, load_dotenv, AppConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let config = AppConfig::from_env()?;
    info!("Starting Midnight backend server...");

    let store = connect_and_migrate(&config).await?;

    let bind = (config.host.clone(), config.port);
    info!(host = %bind.0, port = bind.1, "listening");

    HttpServer::new(move || {
        app(store.clone(), config.clone())
            .wrap(cors(&config))
            .wrap(TracingLogger::default())
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
