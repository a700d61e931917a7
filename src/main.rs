use anyhow::Context;
use tag_restructurer::utils::{logger, validation::Validate};
use tag_restructurer::{exit_code, process_comments, RunConfig, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = RunConfig::load().context("failed to load tag-restructurer.toml")?;

    // 初始化日誌
    logger::init_cli_logger(config.logging.verbose, config.logging.format);

    tracing::info!("Starting tag-restructurer");
    tracing::debug!("Run config: {:?}", config);

    // 驗證配置
    config.validate().context("invalid configuration")?;

    if config.monitoring.enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let outcome = process_comments(&config).await;
    match &outcome {
        RunOutcome::Completed {
            output_path,
            summary,
        } => {
            tracing::info!(
                "✅ Done: {} records processed, {} restructured",
                summary.total_records,
                summary.restructured_records
            );
            println!("✅ Processing complete! Restructured data saved to {}", output_path);
        }
        RunOutcome::Failed(e) => eprintln!("❌ {}", e.user_friendly_message()),
    }

    let code = exit_code(&outcome, &config.run);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
