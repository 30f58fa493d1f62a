use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌一律寫到 stderr，stdout 只留給轉換結果
pub fn init_cli_logger(verbose: bool, fallback_level: Option<&str>) {
    let filter = build_filter(verbose, fallback_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, fallback_level: Option<&str>) {
    let filter = build_filter(verbose, fallback_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

fn build_filter(verbose: bool, fallback_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, fallback_level)))
}

// RUST_LOG 未設定時：--verbose 優先於設定檔的 level，兩者皆無則為 info
fn filter_directive(verbose: bool, fallback_level: Option<&str>) -> String {
    if verbose {
        return "morse=debug,info".to_string();
    }
    match fallback_level {
        Some(level) => format!("morse={}", level),
        None => "morse=info".to_string(),
    }
}
