// Copyright (C) Brian G. Milnes 2025

//! Signature extraction for Javadoc summary rows
//!
//! Recovers a method (or constructor) name and its ordered parameters from
//! the loosely formatted text of one summary table cell, e.g.
//! `doFoo(int a, java.lang.String b)`.
//!
//! Parameter tokens are found by regex, not by a Java parser:
//! - a type token is word characters, dots and brackets (`int`, `a.b.C`, `byte[]`, `String...`)
//! - a name token is a bare identifier
//! - types written with generic angle brackets (`List<String> items`) do not match
//!   and the parameter is dropped from the result

pub mod signature {
    use anyhow::{Context, Result};
    use regex::Regex;

    /// Pattern for one `<type> <name>` parameter token, optionally led by a comma.
    pub const PARAMETER_PATTERN: &str = r"(,\s*)?(([\w\.\[\]]+) (\w+))";

    /// One (declared type, parameter name) pair recovered from a signature.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ParameterToken {
        pub type_name: String,
        pub name: String,
    }

    /// A parsed signature: bare method name plus parameters in source order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MethodSignature {
        pub name: String,
        pub parameters: Vec<ParameterToken>,
    }

    impl MethodSignature {
        /// Arity as counted by the parameter pattern
        pub fn arity(&self) -> usize {
            self.parameters.len()
        }
    }

    /// Extracts method signatures using a compiled parameter pattern
    #[derive(Debug, Clone)]
    pub struct SignatureExtractor {
        pattern: Regex,
    }

    impl SignatureExtractor {
        /// Create an extractor using [`PARAMETER_PATTERN`]
        pub fn new() -> Result<Self> {
            Self::with_pattern(PARAMETER_PATTERN)
        }

        /// Create an extractor with a custom parameter pattern
        ///
        /// The pattern must expose the type as capture group 3 and the
        /// parameter name as capture group 4.
        pub fn with_pattern(pattern: &str) -> Result<Self> {
            let pattern = Regex::new(pattern)
                .with_context(|| format!("Invalid parameter pattern: {pattern}"))?;
            Ok(SignatureExtractor { pattern })
        }

        /// Extract the method name and parameters from signature text
        ///
        /// Returns `None` when no parameter token matches. Zero-parameter
        /// methods and constructors therefore never produce a signature.
        pub fn extract(&self, text: &str) -> Option<MethodSignature> {
            let parameters: Vec<ParameterToken> = self.pattern
                .captures_iter(text)
                .filter_map(|caps| {
                    let type_name = caps.get(3)?.as_str().to_string();
                    let name = caps.get(4)?.as_str().to_string();
                    Some(ParameterToken { type_name, name })
                })
                .collect();

            if parameters.is_empty() {
                return None;
            }

            let name = text.split('(').next().unwrap_or(text).to_string();

            Some(MethodSignature { name, parameters })
        }
    }

    /// Normalize raw cell text before extraction
    ///
    /// Non-breaking spaces (decoded or as a literal `&nbsp;` entity) and
    /// newline sequences each become a single plain space.
    pub fn normalize_row_text(raw: &str) -> String {
        raw.replace("&nbsp;", " ")
            .replace('\u{a0}', " ")
            .replace("\r\n", " ")
            .replace('\n', " ")
    }

}
