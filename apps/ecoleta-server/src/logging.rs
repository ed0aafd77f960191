use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// `-v` flags override the configured filter (`-v` debug, `-vv` trace);
/// without them the `logging.filter` directive from the config applies.
pub fn init(cfg: &LoggingConfig, verbose: u8) {
    let directive = directive(cfg, verbose);

    let filter = EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn directive(cfg: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => cfg.filter.as_str(),
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags_override_configured_filter() {
        let cfg = LoggingConfig {
            filter: "warn".to_owned(),
            json: false,
        };
        assert_eq!(directive(&cfg, 0), "warn");
        assert_eq!(directive(&cfg, 1), "debug");
        assert_eq!(directive(&cfg, 2), "trace");
        assert_eq!(directive(&cfg, 9), "trace");
    }
}
