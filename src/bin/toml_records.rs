use clap::Parser;
use json_records::core::ConfigProvider;
use json_records::utils::logger::{self, LogFormat};
use json_records::utils::validation::Validate;
use json_records::{Engine, LocalStorage, RecordPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml_records")]
#[command(about = "Record processing driven by a TOML job file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "records.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the filter threshold from config
    #[arg(long, allow_hyphen_values = true)]
    min_value: Option<f64>,

    /// Dry run - show what would be processed without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    let verbose = args.verbose || config.verbose_logging();
    logger::init_logger(LogFormat::from_json_flag(config.json_logging()), verbose);

    tracing::info!("🚀 Starting TOML-based record job");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(min_value) = args.min_value {
        config.set_min_value(min_value);
        tracing::info!("🔧 Threshold overridden to: {}", min_value);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        return Ok(());
    }

    let pipeline = RecordPipeline::new(LocalStorage::default(), config);
    let engine = Engine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Job completed: {} loaded, {} filtered, {} groups",
                report.loaded_records,
                report.filtered_records,
                report.group_count
            );
            for path in &report.output_paths {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Job failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("   Input: {}", config.input_path());
    tracing::info!("   Threshold: value >= {}", config.min_value());
    tracing::info!(
        "   Outputs: {}/{{{}, {}, {}}}",
        config.output_dir(),
        config.filtered_file(),
        config.sorted_file(),
        config.grouped_file()
    );
}
