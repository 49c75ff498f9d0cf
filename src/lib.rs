// Copyright (C) Brian G. Milnes 2025

//! JavaDoc2Metadata - Javadoc HTML to binding-generator metadata
//!
//! Reads the constructor and method summary tables of generated Javadoc
//! pages and emits `<attr>` nodes that give each method parameter its Java
//! name, addressed by package, class, method name, arity, overload index
//! and parameter position.
//!
//! Inherited methods are not listed on a class page, so they get no nodes.

pub mod signature;
pub mod overloads;
pub mod record;
pub mod document;
pub mod driver;
pub mod args;
pub mod logging;
pub mod tool_runner;

// Re-export commonly used items
pub use signature::signature::{normalize_row_text, MethodSignature, ParameterToken, SignatureExtractor, PARAMETER_PATTERN};
pub use overloads::overloads::{MethodKey, OverloadCounter};
pub use record::record::{format_record, AttrRecord, OutputFormat, HEADER_LINES};
pub use document::document::{walk, walk_document, transform_html, transform_row, DocumentOutput, SummaryKind, TransformConfig, WalkStats};
pub use driver::driver::{find_html_files, run, RunConfig, RunSummary};
pub use args::args::{parse_args, CommandArgs, ParsedArgs};
pub use logging::logging::ToolLogger;
pub use tool_runner::tool_runner::{run_tool, ToolConfig};
