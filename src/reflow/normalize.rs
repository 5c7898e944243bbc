use once_cell::sync::Lazy;
use regex::Regex;

static DUPLICATE_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</mxCell>(?:\s*</mxCell>)+\s*$").unwrap());

/// Best-effort repair of a fragment cut off mid-stream: strip a CDATA
/// wrapper, complete a trailing `</mx` close, drop anything after the last
/// complete cell, and collapse duplicated trailing closes. Well-formed input
/// passes through unchanged.
pub fn normalize_fragment(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("<![CDATA[") {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix("]]>") {
        text = stripped;
    }
    let mut repaired = text.trim().to_string();

    if repaired.ends_with("</mx") && !repaired.ends_with("</mxCell>") {
        repaired.push_str("Cell>");
    }

    // Truncated output often ends mid-attribute; keep only up to the last
    // complete cell close when the tail is not markup.
    if let Some(last_close) = repaired.rfind("</mxCell>") {
        let end = last_close + "</mxCell>".len();
        let tail = repaired[end..].trim();
        if !tail.is_empty() && !tail.starts_with('<') {
            repaired.truncate(end);
        }
    }

    DUPLICATE_CLOSE_RE
        .replace(&repaired, "</mxCell>")
        .into_owned()
}
