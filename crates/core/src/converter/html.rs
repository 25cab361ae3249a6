//! HTML report converter - outputs one table section per mark family.

use std::io::Write;

use crate::error::Result;
use crate::model::{AnnotatedMark, Family, MarkSet};
use crate::utils::{enc, fmt3};

/// Document title.
pub const REPORT_TITLE: &str = "TVP & AGA Marks Analysis";

/// Text emitted instead of tables when no family has marks.
pub const EMPTY_MESSAGE: &str = "No marks selected or found.";

/// Table header labels, in column order.
pub const COLUMNS: [&str; 10] = [
    "Seq",
    "Mark",
    "Layer",
    "Center X",
    "Center Y",
    "Size X",
    "Size Y",
    "Nearest (Same Layer)",
    "Dist",
    "Angle°",
];

const STYLE: &str = "<style>
body { font-family: Arial, Helvetica, sans-serif; margin: 20px; }
h1 { font-size: 20px; margin-bottom: 6px; }
h2 { font-size: 16px; margin-top: 24px; }
.tablewrap { overflow-x: auto; }
table { border-collapse: collapse; width: 100%; font-size: 12px; }
th, td { border: 1px solid #ccc; padding: 6px 8px; text-align: left; }
th { position: sticky; top: 0; background: #f5f5f5; }
tr:nth-child(even) { background: #fafafa; }
tr:target { background: #fff3c4; }
.note { color: #666; font-size: 11px; }
nav a { margin-right: 12px; }
</style>
";

// ============================================================================
// HtmlReportWriter
// ============================================================================

/// HTML report writer.
///
/// The header (including navigation) is written on construction, one section
/// per [`receive_set`](Self::receive_set) call, and the footer on
/// [`close`](Self::close).
pub struct HtmlReportWriter<W: Write> {
    /// Output writer
    outfp: W,
    /// Number of sections written so far
    sections: usize,
}

impl<W: Write> HtmlReportWriter<W> {
    /// Create a writer and emit the header.
    ///
    /// `present` lists the families whose sections will follow; navigation
    /// links are emitted only for those.
    pub fn new(outfp: W, present: &[Family]) -> Result<Self> {
        let mut writer = Self { outfp, sections: 0 };
        writer.write_header(present)?;
        Ok(writer)
    }

    /// Number of table sections written.
    pub const fn sections(&self) -> usize {
        self.sections
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_header(&mut self, present: &[Family]) -> Result<()> {
        self.write("<!DOCTYPE html><html lang='en'><head><meta charset='utf-8'>\n")?;
        self.write(&format!("<title>{}</title>\n", enc(REPORT_TITLE)))?;
        self.write(STYLE)?;
        self.write("</head><body>\n")?;
        self.write(&format!("<h1>{} Report</h1>\n", enc(REPORT_TITLE)))?;

        let links: String = present
            .iter()
            .map(|f| format!("<a href=\"#{}\">{} Section</a>", f.anchor(), f.title()))
            .collect();
        self.write(&format!("<nav>{links}</nav>\n"))?;

        let note = format!(
            "Columns: {}. Sorted by Layer → Center X → Center Y.",
            COLUMNS.join(", ")
        );
        self.write(&format!("<p class='note'>{}</p>\n", enc(&note)))
    }

    fn write_row(&mut self, set: &MarkSet, mark: &AnnotatedMark) -> Result<()> {
        let record = &mark.record;
        let (name, dist, angle) = match (&mark.nearest, set.neighbor_of(mark)) {
            (Some(n), Some(target)) => (
                format!("<a href=\"#{}\">{}</a>", target.anchor(), enc(&n.name)),
                fmt3(n.distance),
                fmt3(n.angle),
            ),
            _ => (String::new(), String::new(), String::new()),
        };

        let row = format!(
            "<tr id=\"{}\"><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td></tr>\n",
            mark.anchor(),
            mark.sequence,
            enc(&record.identifier),
            enc(&record.layer),
            fmt3(record.center_x()),
            fmt3(record.center_y()),
            fmt3(record.size_x()),
            fmt3(record.size_y()),
            name,
            dist,
            angle,
        );
        self.write(&row)
    }

    /// Write the table section of one family. Empty sets write nothing.
    pub fn receive_set(&mut self, set: &MarkSet) -> Result<()> {
        if set.is_empty() {
            return Ok(());
        }
        let family = set.family;

        self.write(&format!(
            "<h2 id='{}'>{} Marks</h2>\n",
            family.anchor(),
            family.title()
        ))?;
        self.write(&format!("<p class='note'>{} marks</p>\n", set.len()))?;
        self.write("<div class='tablewrap'><table>\n<thead><tr>")?;
        for col in COLUMNS {
            self.write(&format!("<th>{}</th>", enc(col)))?;
        }
        self.write("</tr></thead>\n<tbody>\n")?;
        for mark in set {
            self.write_row(set, mark)?;
        }
        self.write("</tbody></table></div>\n")?;

        self.sections += 1;
        Ok(())
    }

    /// Finish the document and flush the writer.
    pub fn close(mut self) -> Result<W> {
        if self.sections == 0 {
            self.write(&format!("<p>{EMPTY_MESSAGE}</p>\n"))?;
        }
        self.write("</body></html>\n")?;
        self.outfp.flush()?;
        Ok(self.outfp)
    }
}

/// Render a complete report for `sets` into a string.
///
/// Sections appear in the order given; empty sets are left out, and when every
/// set is empty the document carries [`EMPTY_MESSAGE`] and no tables.
pub fn render_report(sets: &[&MarkSet]) -> Result<String> {
    let present: Vec<Family> = sets
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.family)
        .collect();

    let mut writer = HtmlReportWriter::new(Vec::new(), &present)?;
    for set in sets {
        writer.receive_set(set)?;
    }
    let bytes = writer.close()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_has_message_and_no_table() {
        let tvp = MarkSet::empty(Family::Tvp);
        let aga = MarkSet::empty(Family::Aga);
        let html = render_report(&[&tvp, &aga]).unwrap();
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("<table"));
        assert!(html.contains("<nav></nav>"));
    }

    #[test]
    fn test_no_sets_at_all() {
        let html = render_report(&[]).unwrap();
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(html.ends_with("</body></html>\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_report(&[]).unwrap();
        assert!(html.contains("<title>TVP &amp; AGA Marks Analysis</title>"));
    }
}
