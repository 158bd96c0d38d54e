//! PDF export — fixed single-page layout for the branded report.
//!
//! Every field is placed at a fixed coordinate; long section text is clipped
//! by the page edge rather than flowed. Output is deterministic apart from
//! the document's embedded creation timestamp.

use anyhow::Result;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::models::report::ReportRow;

/// Renders a stored report as a single-page A4 PDF.
///
/// printpdf's origin is the lower-left corner of the 297 mm page, so the
/// vertical coordinates below are the layout's top-edge offsets (20, 40,
/// 60, 70, ... mm) already converted.
pub fn render_report_pdf(report: &ReportRow) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Premium SWOT Analysis Report",
        Mm(210.0),
        Mm(297.0),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    layer.use_text(
        "Premium SWOT Analysis Report",
        18.0,
        Mm(20.0),
        Mm(277.0),
        &bold,
    );
    layer.use_text(
        format!("Business Details: {}", report.business_info),
        12.0,
        Mm(20.0),
        Mm(257.0),
        &regular,
    );

    let sections = [
        ("Strengths:", report.strengths.as_str(), Mm(237.0), Mm(227.0)),
        ("Weaknesses:", report.weaknesses.as_str(), Mm(207.0), Mm(197.0)),
        (
            "Opportunities:",
            report.opportunities.as_str(),
            Mm(177.0),
            Mm(167.0),
        ),
        ("Threats:", report.threats.as_str(), Mm(147.0), Mm(137.0)),
    ];

    for (label, text, label_y, text_y) in sections {
        layer.use_text(label, 12.0, Mm(20.0), label_y, &bold);
        layer.use_text(text, 12.0, Mm(20.0), text_y, &regular);
    }

    Ok(doc.save_to_bytes()?)
}
