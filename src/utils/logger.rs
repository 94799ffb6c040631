use crate::codec::EnumCodec;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

crate::described_enum! {
    pub enum LogFormat {
        Compact => "compact",
        Json => "json",
    }
}

impl LogFormat {
    pub fn from_config(format: Option<&str>) -> Self {
        format
            .map(|text| LogFormat::from_unknown(LogFormat::Compact, &[text.trim()]))
            .unwrap_or(LogFormat::Compact)
    }
}

/// RUST_LOG 未設定時使用的 filter：--verbose 優先，其次是設定檔的 level
pub fn filter_directive(level: Option<&str>, verbose: bool) -> String {
    match (verbose, level) {
        (true, _) => "extkit=debug,info".to_string(),
        (false, Some(level)) => format!("extkit={},info", level.trim().to_ascii_lowercase()),
        (false, None) => "extkit=info".to_string(),
    }
}

fn layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_logger(format: LogFormat, level: Option<&str>, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)));

    // 只會啟用其中一個 layer
    let (compact, json) = match format {
        LogFormat::Compact => (Some(layer().compact()), None),
        LogFormat::Json => (None, Some(layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
