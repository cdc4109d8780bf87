/// Checker report files
///
/// The harness passes an optional report path and, for XML ("appes")
/// reports, a literal `-appes` token. The XML shape is the one the
/// pipeline's report parser consumes: a single `<result>` element with an
/// `outcome` attribute and the message as text content. Plain reports are
/// the bare message.
use crate::verdict::outcome::CheckResult;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Appes,
}

pub fn write_report(path: &Path, format: ReportFormat, result: &CheckResult) -> io::Result<()> {
    fs::write(path, render(format, result))
}

pub fn render(format: ReportFormat, result: &CheckResult) -> String {
    match format {
        ReportFormat::Text => format!("{}\n", result.message),
        ReportFormat::Appes => format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<result outcome = \"{}\">{}</result>\n",
            result.outcome,
            xml_escape(&result.message)
        ),
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
