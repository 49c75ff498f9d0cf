// Copyright (C) Brian G. Milnes 2025

//! Attribute-transform records and their output formats
//!
//! One record renames one parameter of one method occurrence. Values are
//! substituted verbatim: nothing is XML-escaped, so a name containing `<`,
//! `&` or `'` yields an invalid fragment.

pub mod record {
    use std::fmt;
    use std::io::Write;
    use std::str::FromStr;
    use anyhow::Result;
    use serde::Serialize;

    /// Comment lines written once before any `attr` record
    pub const HEADER_LINES: [&str; 2] = [
        "  <!-- This tool isn't aware of inherited methods, and the binding generator will complain that the xpath isn't found. -->",
        "  <!-- These nodes will be ignored by the generator. -->",
    ];

    /// One `<attr>` line addressing a parameter by position
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct AttrRecord {
        pub package: String,
        pub class: String,
        pub method: String,
        pub parameter: String,
        /// 1-based parameter position
        pub position: usize,
        /// Parameter count of this overload
        pub total: usize,
        /// 1-based occurrence of (method, total) within the document
        pub overload: usize,
    }

    impl fmt::Display for AttrRecord {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "  <attr path=\"/api/package[@name='{}']/class[@name='{}']/method[@name='{}' and count(parameter)={}][{}]/parameter[position()={}]\" name=\"name\">{}</attr>",
                self.package, self.class, self.method, self.total, self.overload, self.position, self.parameter
            )
        }
    }

    /// Render one record line (without trailing newline)
    pub fn format_record(
        class_name: &str,
        method_name: &str,
        param_name: &str,
        position: usize,
        total_params: usize,
        overload_index: usize,
        package_name: &str,
    ) -> String {
        AttrRecord {
            package: package_name.to_string(),
            class: class_name.to_string(),
            method: method_name.to_string(),
            parameter: param_name.to_string(),
            position,
            total: total_params,
            overload: overload_index,
        }
        .to_string()
    }

    /// Output format selected on the command line
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum OutputFormat {
        /// Metadata `<attr>` lines preceded by the header comments
        #[default]
        Attr,
        /// One JSON object per record per line
        Json,
    }

    impl FromStr for OutputFormat {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> Result<Self> {
            match s {
                "attr" => Ok(OutputFormat::Attr),
                "json" => Ok(OutputFormat::Json),
                other => Err(anyhow::anyhow!("Unknown output format '{other}' (expected attr or json)")),
            }
        }
    }

    impl OutputFormat {
        /// Write the per-run preamble, if the format has one
        pub fn write_header(&self, out: &mut dyn Write) -> Result<()> {
            if *self == OutputFormat::Attr {
                for line in HEADER_LINES {
                    writeln!(out, "{line}")?;
                }
            }
            Ok(())
        }

        /// Write records in this format, one per line
        pub fn write_records(&self, records: &[AttrRecord], out: &mut dyn Write) -> Result<()> {
            for record in records {
                match self {
                    OutputFormat::Attr => writeln!(out, "{record}")?,
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
                }
            }
            Ok(())
        }
    }
}
