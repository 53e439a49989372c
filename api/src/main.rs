use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use cc_api::app::create_app;
use cc_api::routes::AppState;
use cc_api::telemetry::init_tracing;
use cc_core::{
    InMemoryOtpStore, OtpRegistry, OtpSweeper, OutreachService, PasswordResetConfig,
    PasswordResetService, SystemClock,
};
use cc_infra::{create_email_service, create_identity_provider};
use cc_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        "Starting CareerCatalyst password reset server"
    );

    if let Err(problems) = config.validate() {
        for problem in &problems {
            tracing::error!("Configuration problem: {}", problem);
        }
        anyhow::bail!("invalid configuration ({} problems)", problems.len());
    }

    let reset_config = PasswordResetConfig::from(&config.reset);

    let email_service = create_email_service(&config.mail, reset_config.code_ttl_minutes)
        .context("failed to initialize email service")?;
    let identity_provider = create_identity_provider(&config.identity)
        .context("failed to initialize identity provider")?;

    let registry = Arc::new(OtpRegistry::new(
        Arc::new(InMemoryOtpStore::new()),
        Arc::new(SystemClock),
        reset_config.code_ttl(),
    ));

    let sweeper = Arc::new(OtpSweeper::new(
        registry.clone(),
        reset_config.sweep_interval(),
    ))
    .start();

    let outreach_service = Arc::new(OutreachService::new(email_service.clone()));
    let reset_service = Arc::new(PasswordResetService::new(
        registry,
        email_service,
        identity_provider,
        reset_config,
    ));
    let app_state = web::Data::new(AppState::new(reset_service, outreach_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let server_config = config.server.clone();
    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &server_config, &cors_config)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await;

    sweeper.stop().await;
    tracing::info!("Server stopped");

    result.context("server error")
}
