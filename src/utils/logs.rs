use tracing::Level;
use crate::core::domain::Configuration;

// Logs go to stderr so they never interleave with the menu on stdout.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder
            .with_ansi(false)
            .json()
            .init();
    } else {
        builder.init();
    }
}

pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::WARN)
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logs::parse_level;

    #[test]
    fn test_should_parse_levels() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::INFO, parse_level("INFO"));
        assert_eq!(Level::ERROR, parse_level(" error "));
    }

    #[test]
    fn test_should_default_unknown_level_to_warn() {
        assert_eq!(Level::WARN, parse_level("chatty"));
        assert_eq!(Level::WARN, parse_level(""));
    }
}
