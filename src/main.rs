use clap::Parser;
use doc2audiobook::cli::Cli;
use doc2audiobook::domain::batch::{BatchService, BatchServiceApi, InputTarget};
use doc2audiobook::domain::synthesis::{AudioEncoding, SynthesisPipeline};
use doc2audiobook::domain::voice::{VoiceCatalogApi, VoiceCatalogService};
use doc2audiobook::error::{AppError, AppResult};
use doc2audiobook::infrastructure::config::{Config, LogFormat};
use doc2audiobook::infrastructure::repositories::{
    DocumentTextExtractor, GoogleTtsConfig, GoogleTtsRepository, TtsRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(&config);

    if let Err(e) = run(cli, config).await {
        tracing::error!(error = %e, "Run failed");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<()> {
    tracing::info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "Starting doc2audiobook"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let tts_config = GoogleTtsConfig::new(config.google_tts_api_key.clone())
        .with_base_url(config.tts_base_url.clone())
        .with_timeout(config.tts_timeout_secs);
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(
        GoogleTtsRepository::new(tts_config)
            .map_err(|e| AppError::ExternalService(e.to_string()))?,
    );

    // 2. Instantiate services (inject repositories)
    let voice_catalog = VoiceCatalogService::new(tts_repo.clone());

    if cli.list_voices {
        let voices = voice_catalog.list_voices().await?;
        for voice in &voices {
            println!("{}", voice);
        }
        return Ok(());
    }

    let voice_name = cli.voice.ok_or_else(|| {
        AppError::Config("--voice is required unless --list-voices is set".to_string())
    })?;

    // Validation is the gate for the whole run: no file is touched before it
    let voice = voice_catalog.validate(&voice_name).await?;
    tracing::info!(voice = %voice.name, language = %voice.language_code, "Using voice");

    let input_path = match &cli.input {
        Some(relative) => config.input_dir.join(relative),
        None => config.input_dir.clone(),
    };
    let target = InputTarget::resolve(&input_path)?;

    let extractor = Arc::new(DocumentTextExtractor::new());
    let pipeline = Arc::new(SynthesisPipeline::new(tts_repo));
    let batch = BatchService::new(extractor, pipeline);

    let result = batch
        .run_batch(&target, &config.output_dir, &voice, AudioEncoding::Mp3)
        .await?;

    tracing::info!(
        files_processed = result.files_processed,
        files_with_chunk_failures = result.files_with_chunk_failures,
        files_failed = result.files_failed,
        "Batch complete"
    );

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "doc2audiobook=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "doc2audiobook=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
