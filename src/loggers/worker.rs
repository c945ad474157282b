use std::io::Write;
use sysinfo::System;
use tokio::sync::mpsc;

use crate::loggers::core::{LogLevel, LogRecord, SysInfo};

/// Drains the logger channel and writes one JSON document per line.
///
/// Warn and above go to stderr, the rest to stdout.
pub struct LogWorker {
    receiver: mpsc::Receiver<LogRecord>,
    sys: Option<System>,
}

impl LogWorker {
    pub fn new(receiver: mpsc::Receiver<LogRecord>, sys_info: bool) -> Self {
        let sys = sys_info.then(|| {
            let mut sys = System::new();
            sys.refresh_cpu();
            sys.refresh_memory();
            sys
        });
        Self { receiver, sys }
    }

    pub async fn run(mut self) {
        while let Some(mut record) = self.receiver.recv().await {
            if let Some(sys) = self.sys.as_mut() {
                sys.refresh_cpu();
                sys.refresh_memory();
                let load = System::load_average();
                record.sys = Some(SysInfo {
                    cpu_usage: sys.global_cpu_info().cpu_usage(),
                    mem_used_kb: sys.used_memory() / 1024,
                    load_avg: vec![load.one, load.five, load.fifteen],
                    uptime_secs: System::uptime(),
                });
            }

            let Ok(json) = serde_json::to_string(&record) else {
                continue;
            };
            if record.level >= LogLevel::Warn {
                let _ = writeln!(std::io::stderr().lock(), "{}", json);
            } else {
                let _ = writeln!(std::io::stdout().lock(), "{}", json);
            }
        }
    }
}
