//! Output converters for annotated mark sets.
//!
//! - HtmlReportWriter: self-contained HTML report with one table per family

mod html;

pub use html::{COLUMNS, EMPTY_MESSAGE, HtmlReportWriter, REPORT_TITLE, render_report};
