use log::LevelFilter;
use std::sync::Once;

/// Logger configuration.
///
/// `RUST_LOG` takes precedence when set (`env_logger` filter syntax, e.g.
/// "pwa_icon_gen=debug"). Otherwise `verbosity` picks the level: 0 is
/// warnings only, 1 adds info, 2 and above add debug.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub verbosity: u8,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(level_for_verbosity(config.verbosity));
        }

        // Progress goes to stdout; keep diagnostics on stderr
        builder.target(env_logger::Target::Stderr);
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
