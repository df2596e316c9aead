use clap::Parser;
use json_records::utils::logger::{self, LogFormat};
use json_records::utils::validation::Validate;
use json_records::{CliConfig, Engine, LocalStorage, RecordPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_json_flag(config.json_logs), config.verbose);

    tracing::info!("Starting json-records CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let storage = LocalStorage::default();
    let pipeline = RecordPipeline::new(storage, config);
    let engine = Engine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            let stats = &report.statistics;
            println!("✅ Processed {} records", report.loaded_records);
            println!("Filtered records: {}", report.filtered_records);
            println!("Groups: {}", report.group_count);
            println!("Average value: {}", stats.average);
            match (stats.min, stats.max) {
                (Some(min), Some(max)) => {
                    println!("Min value: {}", min);
                    println!("Max value: {}", max);
                }
                _ => println!("Min/Max value: n/a (no records)"),
            }
            for path in &report.output_paths {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

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
