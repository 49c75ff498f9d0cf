// Copyright (C) Brian G. Milnes 2025

//! Parse Javadoc HTML and print metadata attr nodes renaming method parameters
//!
//! Binary: javadoc2metadata

use anyhow::{Context, Result};
use javadoc2metadata::{parse_args, run, run_tool, ParsedArgs, ToolConfig, TransformConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    let args = match parse_args(std::env::args_os()) {
        ParsedArgs::Run(args) => args,
        ParsedArgs::Help(text) => {
            println!("{text}");
            return Ok(());
        }
    };

    let transform = TransformConfig::new(&args.package_name)?;
    let run_config = args.run_config();

    let mut tool = ToolConfig::new("javadoc2metadata", args.javadoc_path.clone());
    tool.enable_logging = args.log;
    tool.verbose = args.verbose;

    run_tool(tool, |logger| {
        let summary = match &args.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let mut out = BufWriter::new(file);
                let summary = run(&run_config, &transform, &mut out, logger)?;
                out.flush()?;
                summary
            }
            None => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                run(&run_config, &transform, &mut out, logger)?
            }
        };
        Ok(summary.to_string())
    })
}
