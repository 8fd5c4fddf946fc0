// Response normalization: repair a free-form model response into a valid
// AnalysisResult. Total over any input string — parse failures resolve to
// the fallback record, never to an error.

use ai_client::util::strip_code_blocks;
use pulsecheck_common::AnalysisResult;

/// Normalize a raw model response.
///
/// Strategies tried in order, first success wins:
/// 1. parse the whole response (code fences stripped)
/// 2. parse the first `{...}` span — the model wraps the requested object
///    in commentary often enough that this matters
/// 3. give up and return the fallback record
pub fn normalize(raw: &str) -> AnalysisResult {
    let cleaned = strip_code_blocks(raw);
    parse_whole(cleaned)
        .or_else(|| parse_embedded(cleaned))
        .unwrap_or_else(AnalysisResult::fallback)
}

fn parse_whole(text: &str) -> Option<AnalysisResult> {
    serde_json::from_str(text).ok()
}

/// Smallest span from the first `{` to the next `}`. Does not survive
/// nested braces; analysis objects are flat, so in practice this only
/// loses responses that were unusable anyway.
fn parse_embedded(text: &str) -> Option<AnalysisResult> {
    let start = text.find('{')?;
    let end = start + text[start..].find('}')?;
    serde_json::from_str(&text[start..=end]).ok()
}
