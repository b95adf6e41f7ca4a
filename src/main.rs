//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use expert_consult::adapters::ai::OpenAiAdapter;
use expert_consult::adapters::ui::tui::TuiInputPort;
use expert_consult::ports::{CompletionPort, InputPort};
use expert_consult::shared::config::AppConfig;
use expert_consult::usecases::ConsultationService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    // The key is read again on every request; a missing key is reported per answer.
    if cfg.is_api_key_configured() {
        info!("API key is set");
    } else {
        warn!("OPENAI_API_KEY is not set; consultations will fail until it is");
    }
    info!(
        model = %cfg.model_or_default(),
        url = %cfg.api_url_or_default(),
        "completion endpoint"
    );

    expert_consult::adapters::ui::init_ui();

    let completion: Arc<dyn CompletionPort> = Arc::new(OpenAiAdapter::new(Arc::new(cfg)));
    let service = Arc::new(ConsultationService::new(completion));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(service));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
