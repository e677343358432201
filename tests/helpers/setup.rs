use barbershop_api::Application;
use barbershop_infra::{BarberContext, Config};
use barbershop_sdk::BarbershopSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, BarbershopSDK, String) {
    let mut ctx = BarberContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = BarbershopSDK::new(address.clone());
    (app, sdk, address)
}
