mod telemetry;

use barbershop_api::Application;
use barbershop_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the environment might already be set
    dotenvy::dotenv().ok();
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("barbershop_server".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = match setup_context().await {
        Ok(context) => context,
        Err(e) => {
            error!("Unable to start the server: {:?}", e);
            return Err(e);
        }
    };

    let app = Application::new(context.clone()).await?;
    app.start().await?;

    info!("Server stopped, closing the store connection");
    context.shutdown().await;
    Ok(())
}
