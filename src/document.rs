// Copyright (C) Brian G. Milnes 2025

//! Document walker for Javadoc class pages
//!
//! Locates the constructor and method summary tables of one page, runs each
//! row's signature text through extraction and overload disambiguation, and
//! produces one [`AttrRecord`] per matched parameter.
//!
//! A summary table is any `<table>` that follows an `<a name="...">` anchor
//! as a sibling. Rows after the header row carry the signature in
//! `td.colOne > code` (constructors) or `td.colLast > code` (methods).

pub mod document {
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use anyhow::{Context, Result};
    use scraper::{ElementRef, Html, Selector};

    use crate::overloads::overloads::{MethodKey, OverloadCounter};
    use crate::record::record::{AttrRecord, OutputFormat};
    use crate::signature::signature::{normalize_row_text, SignatureExtractor};

    /// Which summary section of a class page is being read
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SummaryKind {
        Constructor,
        Method,
    }

    impl SummaryKind {
        pub fn anchor_name(&self) -> &'static str {
            match self {
                SummaryKind::Constructor => "constructor_summary",
                SummaryKind::Method => "method_summary",
            }
        }

        /// Class of the cell holding the signature text
        pub fn cell_class(&self) -> &'static str {
            match self {
                SummaryKind::Constructor => "colOne",
                SummaryKind::Method => "colLast",
            }
        }
    }

    /// Read-only settings shared by every document of a run
    #[derive(Debug)]
    pub struct TransformConfig {
        pub package_name: String,
        extractor: SignatureExtractor,
        constructor_anchor: Selector,
        method_anchor: Selector,
    }

    impl TransformConfig {
        pub fn new(package_name: &str) -> Result<Self> {
            Self::with_extractor(package_name, SignatureExtractor::new()?)
        }

        pub fn with_extractor(package_name: &str, extractor: SignatureExtractor) -> Result<Self> {
            Ok(TransformConfig {
                package_name: package_name.to_string(),
                extractor,
                constructor_anchor: anchor_selector(SummaryKind::Constructor)?,
                method_anchor: anchor_selector(SummaryKind::Method)?,
            })
        }

        fn anchor(&self, kind: SummaryKind) -> &Selector {
            match kind {
                SummaryKind::Constructor => &self.constructor_anchor,
                SummaryKind::Method => &self.method_anchor,
            }
        }
    }

    fn anchor_selector(kind: SummaryKind) -> Result<Selector> {
        let css = format!("a[name=\"{}\"]", kind.anchor_name());
        Selector::parse(&css).map_err(|e| anyhow::anyhow!("Invalid selector {css}: {e:?}"))
    }

    /// Row and record counts for one document
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct WalkStats {
        /// Summary rows whose signature text was examined
        pub rows: usize,
        /// Rows dropped because no parameter matched
        pub skipped: usize,
        pub records: usize,
    }

    impl WalkStats {
        pub fn add(&mut self, other: &WalkStats) {
            self.rows += other.rows;
            self.skipped += other.skipped;
            self.records += other.records;
        }
    }

    /// Everything one document contributed
    #[derive(Debug, Clone)]
    pub struct DocumentOutput {
        pub path: PathBuf,
        pub class_name: String,
        pub records: Vec<AttrRecord>,
        pub stats: WalkStats,
    }

    /// Class name of a page: its file name with the extension stripped
    ///
    /// Only the last extension goes, so nested class pages keep their
    /// dotted name (`Outer.Inner.html` -> `Outer.Inner`).
    pub fn class_name_for(path: &Path) -> Result<String> {
        let stem = path.file_stem()
            .with_context(|| format!("No file name in path: {}", path.display()))?;
        Ok(stem.to_string_lossy().into_owned())
    }

    /// Read and parse one HTML document
    ///
    /// Only a failed read is an error. Bytes that are not UTF-8 (Latin-1
    /// description text in older javadoc) decode to U+FFFD.
    pub fn load_document(path: &Path) -> Result<Html> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to load document: {}", path.display()))?;
        Ok(Html::parse_document(&String::from_utf8_lossy(&bytes)))
    }

    /// Signature cells of every summary table of the given kind, in document order
    pub fn summary_cells<'a>(html: &'a Html, config: &TransformConfig, kind: SummaryKind) -> Vec<ElementRef<'a>> {
        let mut tables: Vec<ElementRef<'a>> = Vec::new();
        for anchor in html.select(config.anchor(kind)) {
            for sibling in anchor.next_siblings().filter_map(ElementRef::wrap) {
                if sibling.value().name() == "table" && !tables.iter().any(|t| t.id() == sibling.id()) {
                    tables.push(sibling);
                }
            }
        }

        let mut cells = Vec::new();
        for table in tables {
            for row in table_rows(table).into_iter().skip(1) {
                for td in child_elements(row, "td") {
                    if td.value().attr("class") != Some(kind.cell_class()) {
                        continue;
                    }
                    cells.extend(child_elements(td, "code"));
                }
            }
        }
        cells
    }

    /// Rows of a table, looking through any `thead`/`tbody`/`tfoot` the parser inserted
    fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
        let mut rows = Vec::new();
        for child in table.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "tr" => rows.push(child),
                "thead" | "tbody" | "tfoot" => rows.extend(child_elements(child, "tr")),
                _ => {}
            }
        }
        rows
    }

    fn child_elements<'a>(parent: ElementRef<'a>, name: &'static str) -> impl Iterator<Item = ElementRef<'a>> {
        parent.children()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name() == name)
    }

    /// Transform one signature text, appending its records
    ///
    /// Returns false (and leaves `counter` untouched) when the text holds no
    /// parameter token.
    pub fn transform_row(
        text: &str,
        class_name: &str,
        config: &TransformConfig,
        counter: &mut OverloadCounter,
        records: &mut Vec<AttrRecord>,
    ) -> bool {
        let Some(signature) = config.extractor.extract(text) else {
            return false;
        };

        let total = signature.arity();
        let overload = counter.next_index(MethodKey::new(&signature.name, total));

        for (i, param) in signature.parameters.iter().enumerate() {
            records.push(AttrRecord {
                package: config.package_name.clone(),
                class: class_name.to_string(),
                method: signature.name.clone(),
                parameter: param.name.clone(),
                position: i + 1,
                total,
                overload,
            });
        }
        true
    }

    /// Transform the constructor then method summaries of a parsed page
    pub fn transform_html(
        html: &Html,
        class_name: &str,
        config: &TransformConfig,
        counter: &mut OverloadCounter,
    ) -> (Vec<AttrRecord>, WalkStats) {
        let mut records = Vec::new();
        let mut stats = WalkStats::default();

        for kind in [SummaryKind::Constructor, SummaryKind::Method] {
            for cell in summary_cells(html, config, kind) {
                let raw: String = cell.text().collect();
                let text = normalize_row_text(&raw);
                stats.rows += 1;
                if !transform_row(&text, class_name, config, counter, &mut records) {
                    stats.skipped += 1;
                }
            }
        }

        stats.records = records.len();
        (records, stats)
    }

    /// Load and transform one document with a fresh overload counter
    pub fn walk_document(path: &Path, config: &TransformConfig) -> Result<DocumentOutput> {
        let html = load_document(path)?;
        let class_name = class_name_for(path)?;
        let mut counter = OverloadCounter::new();
        let (records, stats) = transform_html(&html, &class_name, config, &mut counter);
        Ok(DocumentOutput {
            path: path.to_path_buf(),
            class_name,
            records,
            stats,
        })
    }

    /// Walk one document and write its records to `out`
    pub fn walk(path: &Path, config: &TransformConfig, format: OutputFormat, out: &mut dyn Write) -> Result<WalkStats> {
        let output = walk_document(path, config)?;
        format.write_records(&output.records, out)?;
        Ok(output.stats)
    }
}
