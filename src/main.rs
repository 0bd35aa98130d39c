use anyhow::Context;
use clap::Parser;
use vacation_calendar::adapters::build_sources;
use vacation_calendar::core::ConfigProvider;
use vacation_calendar::http::{bind_listener, create_router, AppState};
use vacation_calendar::utils::{error::Result, logger, validation::Validate};
use vacation_calendar::{CliConfig, HolidayService, TomlConfig};

enum LoadedConfig {
    Cli(CliConfig),
    Toml(TomlConfig),
}

impl LoadedConfig {
    fn provider(&self) -> &dyn ConfigProvider {
        match self {
            LoadedConfig::Cli(config) => config,
            LoadedConfig::Toml(config) => config,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            LoadedConfig::Cli(config) => config.validate(),
            LoadedConfig::Toml(config) => config.validate(),
        }
    }
}

fn load_config(cli: &CliConfig) -> anyhow::Result<LoadedConfig> {
    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            Ok(LoadedConfig::Toml(config))
        }
        None => Ok(LoadedConfig::Cli(cli.clone())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let loaded = load_config(&cli)?;

    let (verbose, json_logs) = match &loaded {
        LoadedConfig::Toml(config) => (cli.verbose || config.verbose(), cli.json_logs || config.json_logs()),
        LoadedConfig::Cli(_) => (cli.verbose, cli.json_logs),
    };

    // 初始化日誌
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    // 驗證配置
    if let Err(e) = loaded.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    let config = loaded.provider();

    tracing::info!("Starting vacation-calendar server");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let sources = build_sources(config)?;
    let service = HolidayService::new(sources);
    tracing::info!("Holiday sources (in fallback order): {}", service.source_names().join(", "));

    let app = create_router(AppState::new(service));

    let listener = bind_listener(config)
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
