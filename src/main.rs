use bookworms::utils::{logger, validation::Validate};
use bookworms::{CliConfig, CommonBooksPipeline, EtlEngine, LocalStorage, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)
    let mut log_level = None;
    if let Some(path) = config.config.clone() {
        let toml = match TomlConfig::from_file(&path).and_then(|toml| toml.validate().map(|_| toml)) {
            Ok(toml) => toml,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        };
        log_level = toml.log_level().map(str::to_string);
        config = config.merge_toml(toml);
    }

    // 初始化日誌
    logger::init_cli_logger(config.verbose, log_level.as_deref());

    tracing::info!("Starting bookworms CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CommonBooksPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("✅ Done, result written to {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
