//! Bill rendering in two formats: plain text and a paginated document.
//!
//! Both formats carry identical logical content: a title, one line per
//! item as `CODE - NAME - price x qty = total`, and a trailing grand
//! total line. Rendering is a pure transform; the timestamped filenames
//! are the caller's concern.

use crate::error::Result;
use crate::ledger::LineItem;
use crate::money::Money;
use std::fs;
use std::path::{Path, PathBuf};

/// Title printed at the top of every bill.
pub const BILL_TITLE: &str = "Wholesale Crackers Bill";

/// Header line of the plain-text format.
const TEXT_HEADER: &str = "==== Wholesale Crackers Bill ====";

/// Fixed page geometry for the document format: 80 columns,
/// 56 body lines framed by a title and a page footer.
const PAGE_WIDTH: usize = 80;
const BODY_LINES: usize = 56;

/// A rendered, read-only snapshot of the ledger and its total.
///
/// Never re-parsed; only written out as artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    /// Plain-text representation.
    pub text: String,

    /// Paginated fixed-font document representation.
    pub document: String,
}

/// Paths of the artifacts produced by [`Bill::write_to`].
#[derive(Debug, Clone)]
pub struct BillArtifacts {
    /// Path of the plain-text bill.
    pub text_path: PathBuf,

    /// Path of the paginated document bill.
    pub document_path: PathBuf,
}

impl Bill {
    /// Writes both artifacts into `dir` as `bill_<stamp>.txt` and
    /// `bill_<stamp>.doc`, returning their paths.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P, stamp: &str) -> Result<BillArtifacts> {
        let dir = dir.as_ref();
        let text_path = dir.join(format!("bill_{}.txt", stamp));
        let document_path = dir.join(format!("bill_{}.doc", stamp));

        fs::write(&text_path, &self.text)?;
        fs::write(&document_path, &self.document)?;

        Ok(BillArtifacts {
            text_path,
            document_path,
        })
    }
}

/// Renders the given entries and grand total into both output formats.
///
/// Deterministic: identical input yields byte-identical output. An empty
/// entry slice still renders the header and a zero total.
pub fn render(entries: &[LineItem], total: Money) -> Bill {
    Bill {
        text: render_text(entries, total),
        document: render_document(entries, total),
    }
}

/// Formats one line item: `CODE - NAME - price x qty = total`.
fn item_line(item: &LineItem) -> String {
    format!(
        "{} - {} - {} x {} = {}",
        item.code, item.name, item.price, item.quantity, item.line_total
    )
}

fn render_text(entries: &[LineItem], total: Money) -> String {
    let mut out = String::new();
    out.push_str(TEXT_HEADER);
    out.push('\n');

    for item in entries {
        out.push_str(&item_line(item));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("TOTAL: {}", total));
    out.push('\n');
    out
}

/// Renders the document format: fixed-geometry pages with a centered
/// title, the item lines, the total, and a centered page footer. Pages
/// are separated by a form feed.
fn render_document(entries: &[LineItem], total: Money) -> String {
    let mut content: Vec<String> = entries.iter().map(item_line).collect();
    content.push(String::new());
    content.push(format!("TOTAL: {}", total));

    let pages: Vec<String> = content
        .chunks(BODY_LINES)
        .enumerate()
        .map(|(page_idx, body)| render_page(page_idx + 1, body))
        .collect();

    pages.join("\u{0C}")
}

fn render_page(page_num: usize, body: &[String]) -> String {
    let mut page = String::new();
    page.push_str(&center(BILL_TITLE));
    page.push('\n');
    page.push('\n');

    for line in body {
        page.push_str(line);
        page.push('\n');
    }
    for _ in body.len()..BODY_LINES {
        page.push('\n');
    }

    page.push('\n');
    page.push_str(&center(&format!("- Page {} -", page_num)));
    page.push('\n');
    page
}

fn center(text: &str) -> String {
    let width = text.chars().count();
    if width >= PAGE_WIDTH {
        return text.to_string();
    }
    let pad = (PAGE_WIDTH - width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
