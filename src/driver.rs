// Copyright (C) Brian G. Milnes 2025

//! Directory driver
//!
//! Finds every `.html` file under the javadoc root and walks each one.
//! Documents are transformed in parallel, then written in enumeration order
//! so the output matches a sequential run.

pub mod driver {
    use std::fmt;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use anyhow::{Context, Result};
    use rayon::prelude::*;
    use walkdir::WalkDir;

    use crate::document::document::{walk_document, DocumentOutput, TransformConfig, WalkStats};
    use crate::logging::logging::ToolLogger;
    use crate::record::record::OutputFormat;

    /// Per-run settings that are not part of the per-document transform
    #[derive(Debug, Clone)]
    pub struct RunConfig {
        pub javadoc_path: PathBuf,
        pub format: OutputFormat,
        /// Warn and continue past documents that fail to load
        pub keep_going: bool,
    }

    /// Totals for a whole run
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct RunSummary {
        pub documents: usize,
        pub failed: usize,
        pub stats: WalkStats,
    }

    impl fmt::Display for RunSummary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "Summary: {} documents, {} rows, {} rows skipped, {} records, {} documents failed",
                self.documents, self.stats.rows, self.stats.skipped, self.stats.records, self.failed
            )
        }
    }

    /// All `*.html` files under `root`, recursively, sorted by file name per directory
    pub fn find_html_files(root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
            // Symlinks count too; a dangling one fails later as a load error.
            if !entry.path().is_dir()
                && entry.path().extension().map_or(false, |ext| ext == "html")
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Transform every document under the javadoc root and write the records
    pub fn run(
        config: &RunConfig,
        transform: &TransformConfig,
        out: &mut dyn Write,
        logger: &mut ToolLogger,
    ) -> Result<RunSummary> {
        config.format.write_header(out)?;

        let files = find_html_files(&config.javadoc_path)?;
        logger.log(&format!("Found {} HTML files", files.len()));

        let results: Vec<Result<DocumentOutput>> = files
            .par_iter()
            .map(|file| walk_document(file, transform))
            .collect();

        let mut summary = RunSummary::default();
        for (file, result) in files.iter().zip(results) {
            summary.documents += 1;
            match result {
                Ok(output) => {
                    config.format.write_records(&output.records, out)?;
                    logger.log_silent(&format!(
                        "{}: {} rows, {} skipped, {} records",
                        file.display(), output.stats.rows, output.stats.skipped, output.stats.records
                    ));
                    summary.stats.add(&output.stats);
                }
                Err(e) if config.keep_going => {
                    logger.warn(&format!("Skipping {}: {e:#}", file.display()));
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        out.flush()?;
        Ok(summary)
    }
}
