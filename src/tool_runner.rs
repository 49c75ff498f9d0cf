// Copyright (C) Brian G. Milnes 2025

//! Tool runner infrastructure
//!
//! Wraps a run with timing, the directory banner, optional file logging and
//! a final summary. All of it goes through the logger, never stdout.

pub mod tool_runner {
    use std::time::Instant;
    use std::path::PathBuf;
    use anyhow::Result;
    use crate::logging::logging::ToolLogger;

    /// Configuration for a tool run
    pub struct ToolConfig {
        /// Name of the tool (for logging directory)
        pub tool_name: String,
        /// Directory being scanned
        pub base_dir: PathBuf,
        /// Whether to write a log file
        pub enable_logging: bool,
        /// Whether to echo progress on stderr
        pub verbose: bool,
    }

    impl ToolConfig {
        pub fn new(tool_name: &str, base_dir: PathBuf) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                base_dir,
                enable_logging: false,
                verbose: false,
            }
        }
    }

    /// Run a tool with timing, context, and optional logging
    ///
    /// The closure returns the summary line logged at the end of the run.
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> Result<()>
    where
        F: FnOnce(&mut ToolLogger) -> Result<String>,
    {
        let start = Instant::now();

        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.tool_name, config.verbose)
        } else {
            ToolLogger::new_console(config.verbose)
        };

        logger.log(&format!("Scanning directory '{}'", config.base_dir.display()));

        let summary = tool_fn(&mut logger)?;

        logger.log(&summary);
        logger.log(&format!("Completed in {}ms", start.elapsed().as_millis()));

        if config.enable_logging {
            logger.finalize(&summary);
        }

        Ok(())
    }
}
