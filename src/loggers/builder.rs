use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::core::error::NasaError;
use crate::loggers::core::{LogLevel, LogRecord};
use crate::loggers::worker::LogWorker;

pub struct LoggerConfig {
    pub level: LogLevel,
    pub component: String,
}

/// Cloneable handle that queues records for whoever owns the receiving end.
#[derive(Clone)]
pub struct Logger {
    pub sender: mpsc::Sender<LogRecord>,
    pub config: Arc<ArcSwap<LoggerConfig>>,
}

impl Logger {
    /// Changes the minimum level for every clone of this logger.
    pub fn set_level(&self, level: LogLevel) {
        let current = self.config.load();
        self.config.store(Arc::new(LoggerConfig {
            level,
            component: current.component.clone(),
        }));
    }

    pub fn level(&self) -> LogLevel {
        self.config.load().level
    }
}

pub struct LoggerBuilder {
    component: String,
    level: LogLevel,
    buffer_size: usize,
    sys_info: bool,
}

impl LoggerBuilder {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            level: LogLevel::Info,
            buffer_size: 1024,
            sys_info: false,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Attach host CPU/memory/load figures to every written record.
    pub fn with_sys_info(mut self, enabled: bool) -> Self {
        self.sys_info = enabled;
        self
    }

    /// Builds the logger and spawns a [`LogWorker`] writing JSON lines.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Logger, NasaError> {
        let sys_info = self.sys_info;
        let (logger, rx) = self.build_detached()?;

        let worker = LogWorker::new(rx, sys_info);
        tokio::spawn(async move {
            worker.run().await;
        });

        Ok(logger)
    }

    /// Builds the logger and hands back the receiving end instead of spawning a worker.
    pub fn build_detached(self) -> Result<(Logger, mpsc::Receiver<LogRecord>), NasaError> {
        if self.buffer_size == 0 {
            return Err(NasaError::ConfigError("logger buffer size must be positive".into()));
        }
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let config = Arc::new(ArcSwap::from_pointee(LoggerConfig {
            level: self.level,
            component: self.component,
        }));

        Ok((Logger { sender: tx, config }, rx))
    }
}
