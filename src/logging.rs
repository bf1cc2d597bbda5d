#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

/// Installs the global subscriber used by the command-line tools. Logs go
/// to stderr so rendered terms on stdout stay machine readable.
pub fn init_tracing(verbosity: Verbosity, colour: bool) {
    let level: tracing::Level = verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_orders_levels() {
        let silent: tracing::Level = Verbosity::Silent.into();
        let debug: tracing::Level = Verbosity::Debug.into();
        assert!(silent < debug);
        assert_eq!(tracing::Level::from(Verbosity::Normal), tracing::Level::INFO);
    }
}
