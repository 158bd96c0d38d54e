//! Best-effort extraction of the four SWOT sections from free-form model
//! output. The model is prompted for labeled sections, but the response text
//! is not structurally guaranteed: labels may be reordered, recased, or
//! missing entirely, and a missing section must never fail the analysis.

/// Sentinel used when a section label does not occur in the raw output.
pub const NOT_AVAILABLE: &str = "N/A";

const LABELS: [&str; 4] = ["Strengths:", "Weaknesses:", "Opportunities:", "Threats:"];

/// The four extracted SWOT segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwotSections {
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
}

/// Scans `raw` for the four section labels (case-insensitive, any order) and
/// returns the text between each label and the next occurrence of any other
/// label, or end of text. Segments are whitespace-trimmed; a label that never
/// occurs yields [`NOT_AVAILABLE`].
pub fn extract_sections(raw: &str) -> SwotSections {
    SwotSections {
        strengths: section_after(raw, 0),
        weaknesses: section_after(raw, 1),
        opportunities: section_after(raw, 2),
        threats: section_after(raw, 3),
    }
}

fn section_after(raw: &str, label_idx: usize) -> String {
    let Some(pos) = find_ignore_case(raw, LABELS[label_idx], 0) else {
        return NOT_AVAILABLE.to_string();
    };
    let start = pos + LABELS[label_idx].len();

    // The nearest following occurrence of any *other* label bounds the section.
    let end = LABELS
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != label_idx)
        .filter_map(|(_, other)| find_ignore_case(raw, other, start))
        .min()
        .unwrap_or(raw.len());

    raw[start..end].trim().to_string()
}

/// Byte offset of the first case-insensitive occurrence of `needle` at or
/// after `from`. The labels are ASCII, so ASCII folding is sufficient and
/// every match lands on a char boundary.
fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let ndl = needle.as_bytes();
    if from > hay.len() {
        return None;
    }
    hay[from..]
        .windows(ndl.len())
        .position(|window| window.eq_ignore_ascii_case(ndl))
        .map(|pos| from + pos)
}
