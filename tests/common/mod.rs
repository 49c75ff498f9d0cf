// Copyright (C) Brian G. Milnes 2025

//! Common test utilities: Javadoc page fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// One summary row: the text before `(` becomes the linked name,
/// the rest is emitted as-is (use `&nbsp;` like javadoc does)
fn signature_code(signature: &str) -> String {
    match signature.split_once('(') {
        Some((name, rest)) => format!(
            "<code><strong><a href=\"#{name}\">{name}</a></strong>({rest}</code>"
        ),
        None => format!("<code>{signature}</code>"),
    }
}

pub fn constructor_section(signatures: &[&str]) -> String {
    let mut html = String::from(
        "<ul class=\"blockList\">\n<li class=\"blockList\"><a name=\"constructor_summary\">\n<!--   -->\n</a>\n\
         <h3>Constructor Summary</h3>\n\
         <table class=\"memberSummary\" border=\"0\" cellpadding=\"3\" cellspacing=\"0\" summary=\"Constructor Summary table\">\n\
         <caption><span>Constructors</span><span class=\"tabEnd\">&nbsp;</span></caption>\n\
         <tr>\n<th class=\"colOne\" scope=\"col\">Constructor and Description</th>\n</tr>\n",
    );
    for (i, sig) in signatures.iter().enumerate() {
        let row_class = if i % 2 == 0 { "altColor" } else { "rowColor" };
        html.push_str(&format!(
            "<tr class=\"{row_class}\">\n<td class=\"colOne\">{}\n<div class=\"block\">Creates one.</div>\n</td>\n</tr>\n",
            signature_code(sig)
        ));
    }
    html.push_str("</table>\n</li>\n</ul>\n");
    html
}

pub fn method_section(signatures: &[&str]) -> String {
    let mut html = String::from(
        "<ul class=\"blockList\">\n<li class=\"blockList\"><a name=\"method_summary\">\n<!--   -->\n</a>\n\
         <h3>Method Summary</h3>\n\
         <table class=\"memberSummary\" border=\"0\" cellpadding=\"3\" cellspacing=\"0\" summary=\"Method Summary table\">\n\
         <caption><span>Methods</span><span class=\"tabEnd\">&nbsp;</span></caption>\n\
         <tr>\n<th class=\"colFirst\" scope=\"col\">Modifier and Type</th>\n\
         <th class=\"colLast\" scope=\"col\">Method and Description</th>\n</tr>\n",
    );
    for (i, sig) in signatures.iter().enumerate() {
        let row_class = if i % 2 == 0 { "altColor" } else { "rowColor" };
        html.push_str(&format!(
            "<tr class=\"{row_class}\">\n<td class=\"colFirst\"><code>void</code></td>\n\
             <td class=\"colLast\">{}\n<div class=\"block\">Does something.</div>\n</td>\n</tr>\n",
            signature_code(sig)
        ));
    }
    html.push_str("</table>\n</li>\n</ul>\n");
    html
}

/// A full class page with optional constructor and method summaries
pub fn class_page(title: &str, constructors: Option<&[&str]>, methods: Option<&[&str]>) -> String {
    let mut body = String::new();
    if let Some(sigs) = constructors {
        body.push_str(&constructor_section(sigs));
    }
    if let Some(sigs) = methods {
        body.push_str(&method_section(sigs));
    }
    format!(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">\n\
         <html lang=\"en\">\n<head>\n<title>{title}</title>\n</head>\n<body>\n\
         <div class=\"header\">\n<h2 title=\"Class {title}\" class=\"title\">Class {title}</h2>\n</div>\n\
         <div class=\"contentContainer\">\n<div class=\"summary\">\n<ul class=\"blockList\">\n<li class=\"blockList\">\n\
         {body}\
         </li>\n</ul>\n</div>\n</div>\n</body>\n</html>\n"
    )
}

/// Write `content` to `dir/rel`, creating parent directories
pub fn write_page(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Expected attr line for one parameter
pub fn attr_line(package: &str, class: &str, method: &str, total: usize, overload: usize, position: usize, param: &str) -> String {
    format!(
        "  <attr path=\"/api/package[@name='{package}']/class[@name='{class}']/method[@name='{method}' and count(parameter)={total}][{overload}]/parameter[position()={position}]\" name=\"name\">{param}</attr>"
    )
}
