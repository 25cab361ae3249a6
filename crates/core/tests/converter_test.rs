//! Tests for converter module - HTML report output.

use markscope_core::converter::{COLUMNS, EMPTY_MESSAGE, HtmlReportWriter, render_report};
use markscope_core::high_level::{AnalyzeOptions, analyze_lines};
use markscope_core::model::{Family, MarkSet};

const TWO_TVP: &[&str] = &[
    "M1 P_MC_TVP.TVPY1_NS 0 0 2 2",
    "M2 Q_MC_TVP.TVPY1_NS 3 4 5 6",
];

fn section(html: &str) -> &str {
    let start = html.find("<h2").unwrap();
    let end = html.find("</table>").unwrap() + "</table>".len();
    &html[start..end]
}

#[test]
fn test_tvp_section_snapshot() {
    let analysis = analyze_lines(TWO_TVP, &AnalyzeOptions::default());
    let html = analysis.render().unwrap();
    insta::assert_snapshot!(section(&html), @r##"
    <h2 id='tvp'>TVP Marks</h2>
    <p class='note'>2 marks</p>
    <div class='tablewrap'><table>
    <thead><tr><th>Seq</th><th>Mark</th><th>Layer</th><th>Center X</th><th>Center Y</th><th>Size X</th><th>Size Y</th><th>Nearest (Same Layer)</th><th>Dist</th><th>Angle°</th></tr></thead>
    <tbody>
    <tr id="tvp-1"><td>1</td><td>P_MC_TVP.TVPY1_NS</td><td>1</td><td>1.000</td><td>1.000</td><td>2.000</td><td>2.000</td><td><a href="#tvp-2">Q_MC_TVP.TVPY1_NS</a></td><td>5.000</td><td>53.130</td></tr>
    <tr id="tvp-2"><td>2</td><td>Q_MC_TVP.TVPY1_NS</td><td>1</td><td>4.000</td><td>5.000</td><td>2.000</td><td>2.000</td><td><a href="#tvp-1">P_MC_TVP.TVPY1_NS</a></td><td>5.000</td><td>233.130</td></tr>
    </tbody></table>
    "##);
}

#[test]
fn test_navigation_only_for_present_sections() {
    let analysis = analyze_lines(TWO_TVP, &AnalyzeOptions::default());
    let html = analysis.render().unwrap();
    assert!(html.contains("<nav><a href=\"#tvp\">TVP Section</a></nav>"));
    assert!(!html.contains("#aga"));
    assert!(!html.contains(EMPTY_MESSAGE));
    assert_eq!(html.matches("<table>").count(), 1);
}

#[test]
fn test_both_sections_in_family_order() {
    let lines = [
        "a A_MC_AGA.AGAX1_NS 0 0 1 1",
        "t T_MC_TVP.TVPY1_NS 0 0 1 1",
    ];
    let html = analyze_lines(&lines, &AnalyzeOptions::default())
        .render()
        .unwrap();
    let tvp = html.find("<h2 id='tvp'>").unwrap();
    let aga = html.find("<h2 id='aga'>").unwrap();
    assert!(tvp < aga);
    assert!(html.contains(
        "<nav><a href=\"#tvp\">TVP Section</a><a href=\"#aga\">AGA Section</a></nav>"
    ));
}

#[test]
fn test_absent_neighbor_renders_empty_cells() {
    let html = analyze_lines(&["x S_MC_TVP.TVPY9_NS 1 1 3 3"], &AnalyzeOptions::default())
        .render()
        .unwrap();
    assert!(html.contains("<td>2.000</td><td>2.000</td><td></td><td></td><td></td></tr>"));
}

#[test]
fn test_identifiers_are_escaped() {
    let html = analyze_lines(&["x <b>&_MC_TVP 1 1 3 3"], &AnalyzeOptions::default())
        .render()
        .unwrap();
    assert!(html.contains("<td>&lt;b&gt;&amp;_MC_TVP</td>"));
    assert!(!html.contains("<b>&_MC_TVP"));
}

#[test]
fn test_header_lists_every_column() {
    let html = render_report(&[]).unwrap();
    for col in COLUMNS {
        assert!(html.contains(col), "missing column {col}");
    }
}

#[test]
fn test_writer_counts_sections_and_skips_empty_sets() {
    let analysis = analyze_lines(TWO_TVP, &AnalyzeOptions::default());
    let mut writer = HtmlReportWriter::new(Vec::new(), &[Family::Tvp]).unwrap();
    writer.receive_set(&analysis.tvp).unwrap();
    writer.receive_set(&MarkSet::empty(Family::Aga)).unwrap();
    assert_eq!(writer.sections(), 1);
    let html = String::from_utf8(writer.close().unwrap()).unwrap();
    assert!(html.ends_with("</table></div>\n</body></html>\n"));
}
