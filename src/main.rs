use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use unesverse::application::LoginCoordinator;
use unesverse::domain::{AccountStoragePort, LoginStatus};
use unesverse::infrastructure::{AppConfig, KeyringAccountStorage, UnesAuthClient};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    init_logging(&config)?;

    info!(version = unesverse::VERSION, "Starting unesverse");

    let storage = Arc::new(KeyringAccountStorage::new());

    if config.forget_account {
        storage.delete_account().await?;
        println!("Stored account removed.");
        return Ok(());
    }

    if let Some(account) = config.account() {
        storage.store_account(&account).await?;
        info!(username = account.username(), "Portal account stored");
    }

    let client = match &config.base_url {
        Some(url) => UnesAuthClient::with_base_url(url, storage)?,
        None => UnesAuthClient::new(storage)?,
    };

    let coordinator = LoginCoordinator::new(Arc::new(client));
    let mut in_progress = coordinator.login_in_progress();

    coordinator.request_login();

    while *in_progress.borrow_and_update() {
        in_progress.changed().await?;
    }

    if let Some(event) = coordinator.notifications().borrow().clone() {
        if let Some(message) = event.consume() {
            println!("{message}");
        }
    }

    match coordinator.attempt().last_result {
        Some(LoginStatus::Success(token)) => {
            println!("Access token: {token}");
            Ok(())
        }
        Some(LoginStatus::Error { message, .. }) => Err(eyre!(message)),
        _ => Err(eyre!("login did not produce a result")),
    }
}
