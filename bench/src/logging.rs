use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    layer::{Layer, SubscriberExt},
    EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "info";

pub(crate) struct Logging {
    file_guard: Option<WorkerGuard>,
}

impl Logging {
    pub(crate) fn new() -> Self {
        Logging { file_guard: None }
    }

    /// Diagnostics go to stderr, stdout is reserved for the report itself.
    pub(crate) fn init(&mut self, ansi: bool, debug: &Option<PathBuf>) -> Result<&mut Self> {
        let mut layers = vec![];

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let stderr_layer = fmt::layer()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed();
        layers.push(stderr_layer);

        if let Some(file_path) = debug {
            let _ = std::fs::remove_file(file_path);
            let directory = file_path.parent().unwrap_or(Path::new(""));
            let file_name = file_path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid debug log path {}", file_path.display()))?;
            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking_file)
                .with_filter(LevelFilter::TRACE)
                .boxed();
            self.file_guard = Some(file_guard);

            layers.push(file_layer);
        }

        let subscriber = tracing_subscriber::registry().with(layers);
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(self)
    }
}
