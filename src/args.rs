// Copyright (C) Brian G. Milnes 2025

//! Command-line arguments
//!
//! Argument errors are not fatal: they turn into help text (plus an
//! `Error:` line) that the binary prints on stdout before exiting normally.

pub mod args {
    use std::ffi::OsString;
    use std::path::PathBuf;
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    use crate::driver::driver::RunConfig;
    use crate::record::record::OutputFormat;

    #[derive(Parser, Debug, Clone)]
    #[command(name = "javadoc2metadata")]
    #[command(about = "JavaDoc2Metadata - parses Javadoc HTML and exports metadata attr nodes with the Java parameter names", long_about = None)]
    #[command(arg_required_else_help = true)]
    pub struct CommandArgs {
        /// Path to the javadoc HTML containing parameter names (searched recursively)
        #[arg(short, long)]
        pub javadoc_path: PathBuf,

        /// The java package name
        #[arg(short, long)]
        pub package_name: String,

        /// Write records to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<PathBuf>,

        /// Output format (attr, json)
        #[arg(short, long, default_value = "attr")]
        pub format: OutputFormat,

        /// Warn and continue when a document cannot be loaded
        #[arg(short, long)]
        pub keep_going: bool,

        /// Echo progress and the run summary on stderr
        #[arg(short, long)]
        pub verbose: bool,

        /// Also log progress to logs/javadoc2metadata/<date>/
        #[arg(short, long)]
        pub log: bool,
    }

    impl CommandArgs {
        pub fn run_config(&self) -> RunConfig {
            RunConfig {
                javadoc_path: self.javadoc_path.clone(),
                format: self.format,
                keep_going: self.keep_going,
            }
        }
    }

    /// Outcome of argument parsing
    #[derive(Debug)]
    pub enum ParsedArgs {
        Run(CommandArgs),
        /// Text to print instead of running
        Help(String),
    }

    /// Parse arguments, folding every argument error into help text
    pub fn parse_args<I, T>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match CommandArgs::try_parse_from(args) {
            Ok(args) if !args.javadoc_path.is_dir() => ParsedArgs::Help(help_with_error(&format!(
                "Javadoc path is not a directory: {}",
                args.javadoc_path.display()
            ))),
            Ok(args) => ParsedArgs::Run(args),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParsedArgs::Help(e.render().to_string()),
                _ => {
                    let rendered = e.render().to_string();
                    let reason: Vec<&str> = rendered.lines()
                        .take_while(|line| !line.trim().is_empty())
                        .collect();
                    let reason = reason.join("\n");
                    ParsedArgs::Help(help_with_error(reason.trim_start_matches("error: ")))
                }
            },
        }
    }

    /// Full help text followed by an error line
    pub fn help_with_error(message: &str) -> String {
        format!("{}\nError: {message}", CommandArgs::command().render_help())
    }
}
