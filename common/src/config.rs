use tracing::Level;

pub struct Config {
    /// Most verbose level the terminal logger lets through.
    ///
    /// Logs go to stderr, which must stay silent on a normal run.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
        }
    }
}
