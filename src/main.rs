use clap::Parser;
use morse::utils::{logger, validation::Validate};
use morse::{CliConfig, LocalInput, LocalOutput, MorseEngine, MorseError, SymbolTable, TomlConfig};

// 日誌尚未初始化時只能寫到 stderr
fn fail_early(e: &MorseError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn fail(e: &MorseError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 設定檔要先載入，日誌層級可能來自設定檔
    let file_config = cli
        .config
        .as_deref()
        .map(TomlConfig::from_file)
        .transpose()
        .unwrap_or_else(|e| fail_early(&e));
    if let Err(e) = cli.validate() {
        fail_early(&e);
    }

    let settings = cli.into_settings(file_config.as_ref());

    let log_level = settings.log_level.as_deref();
    if settings.log_json {
        logger::init_json_logger(settings.verbose, log_level);
    } else {
        logger::init_cli_logger(settings.verbose, log_level);
    }
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            fail(&e);
        }
    }
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    if settings.show_programmer_info {
        let info = settings
            .programmer
            .to_pretty_json()
            .unwrap_or_else(|e| fail(&e));
        println!("{}", info);
        return Ok(());
    }

    let source = LocalInput::new(settings.input_files.clone());
    let sink = LocalOutput::from_path(settings.output_file.clone());
    let engine = MorseEngine::new(SymbolTable::standard(), source, sink, &settings);

    tracing::debug!("Starting {:?} run", engine.mode());
    match engine.run().await {
        Ok(target) => {
            tracing::debug!("✅ Output written to {}", target);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
