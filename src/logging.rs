// Copyright (C) Brian G. Milnes 2025

//! Logging infrastructure for javadoc2metadata
//!
//! Stdout carries the generated records, so progress goes to stderr and,
//! optionally, to a log file organized by tool and date:
//! - logs/<tool-name>/<date>/run-<timestamp>.log

pub mod logging {
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use chrono::{Local, DateTime};
    use anyhow::Result;

    /// Logger for one run of the tool
    pub struct ToolLogger {
        log_file: Option<fs::File>,
        log_path: Option<PathBuf>,
        echo: bool,
        start_time: DateTime<Local>,
    }

    impl ToolLogger {
        /// Create a logger with no file and no echo
        pub fn new_disabled() -> Self {
            ToolLogger {
                log_file: None,
                log_path: None,
                echo: false,
                start_time: Local::now(),
            }
        }

        /// Create a logger that only echoes to stderr (when `echo` is set)
        pub fn new_console(echo: bool) -> Self {
            ToolLogger {
                log_file: None,
                log_path: None,
                echo,
                start_time: Local::now(),
            }
        }

        /// Create a new file-backed logger for a tool
        ///
        /// Creates log directory structure: logs/<tool-name>/<YYYY-MM-DD>/run-<HH-MM-SS>.log
        /// If log creation fails, continues without a log file
        pub fn new(tool_name: &str, echo: bool) -> Self {
            let start_time = Local::now();

            let (log_file, log_path) = match Self::create_log_file(tool_name, &start_time) {
                Ok((file, path)) => (Some(file), Some(path)),
                Err(e) => {
                    eprintln!("Warning: Could not create log file: {e}");
                    eprintln!("Continuing without logging...");
                    (None, None)
                }
            };

            ToolLogger {
                log_file,
                log_path,
                echo,
                start_time,
            }
        }

        fn create_log_file(tool_name: &str, start_time: &DateTime<Local>) -> Result<(fs::File, PathBuf)> {
            let date_str = start_time.format("%Y-%m-%d").to_string();
            let time_str = start_time.format("%H-%M-%S").to_string();

            let log_dir = PathBuf::from("logs")
                .join(tool_name)
                .join(&date_str);

            fs::create_dir_all(&log_dir)?;

            let log_path = log_dir.join(format!("run-{time_str}.log"));
            let log_file = fs::File::create(&log_path)?;

            Ok((log_file, log_path))
        }

        /// Log a progress message to stderr (if echoing) and the log file
        pub fn log(&mut self, message: &str) {
            if self.echo {
                eprintln!("{message}");
            }
            self.log_silent(message);
        }

        /// Log a warning; always reaches stderr
        pub fn warn(&mut self, message: &str) {
            eprintln!("Warning: {message}");
            self.log_silent(&format!("Warning: {message}"));
        }

        /// Log to the log file only
        pub fn log_silent(&mut self, message: &str) {
            if let Some(ref mut file) = self.log_file {
                let _ = writeln!(file, "{message}");
            }
        }

        /// Finalize the log with summary information
        pub fn finalize(&mut self, summary: &str) {
            let end_time = Local::now();
            let duration = end_time.signed_duration_since(self.start_time);

            self.log_silent("");
            self.log_silent("=== Run Summary ===");
            self.log_silent(summary);
            self.log_silent(&format!("Started: {}", self.start_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Ended: {}", end_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Duration: {}ms", duration.num_milliseconds()));

            if let Some(path) = self.log_path.clone() {
                self.log(&format!("Log saved to: {}", path.display()));
            }
        }
    }

    impl Drop for ToolLogger {
        fn drop(&mut self) {
            if let Some(ref mut file) = self.log_file {
                let _ = file.flush();
            }
        }
    }
}
