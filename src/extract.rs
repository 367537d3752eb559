/// Content extraction from structured post bodies
///
/// Post bodies are stored as a JSON sequence of typed content blocks
/// (editor output), either a bare array or wrapped as `{"blocks": [...]}`.
/// Extraction renders the blocks to a single plain-text string with markup
/// tags stripped. Unknown or malformed blocks are skipped per-block; a body
/// that is not valid JSON at all falls back to the raw text — post text is
/// never lost because structure parsing failed.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

/// One typed block of a structured post body.
///
/// Payload shape depends on the discriminator: `content` and `subtitle`
/// carry a bare string, `paragraph`/`header`/`quote` carry `{"text": ...}`,
/// and `list` carries `{"items": [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ContentBlock {
    Content(String),
    Subtitle(String),
    Paragraph(TextPayload),
    Header(TextPayload),
    Quote(TextPayload),
    List(ListPayload),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListPayload {
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Remove simple markup tags, keeping inner text (`<b>Hello</b>` → `Hello`).
fn strip_markup(text: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));
    re.replace_all(text, "").to_string()
}

fn render_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_block(block: &ContentBlock, parts: &mut Vec<String>) {
    match block {
        ContentBlock::Content(text) | ContentBlock::Subtitle(text) => {
            push_clean(parts, text);
        }
        ContentBlock::Paragraph(p) | ContentBlock::Header(p) | ContentBlock::Quote(p) => {
            push_clean(parts, &p.text);
        }
        ContentBlock::List(list) => {
            for item in &list.items {
                push_clean(parts, &render_item(item));
            }
        }
    }
}

fn push_clean(parts: &mut Vec<String>, text: &str) {
    let clean = strip_markup(text);
    let clean = clean.trim();
    if !clean.is_empty() {
        parts.push(clean.to_string());
    }
}

/// Extract plain text from a structured post body.
///
/// Pure: the same input always produces the same output. Falls back to the
/// raw (trimmed) body when the JSON is unparseable or renders to nothing.
pub fn extract_text(content: &str) -> String {
    let fallback = || content.trim().to_string();

    let parsed: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => return fallback(),
    };

    let blocks: Vec<Value> = match parsed {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("blocks") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut parts: Vec<String> = Vec::new();
    for raw in blocks {
        // Per-block tolerance: a malformed or unknown block is skipped,
        // the rest of the body still renders.
        match serde_json::from_value::<ContentBlock>(raw) {
            Ok(block) => render_block(&block, &mut parts),
            Err(_) => continue,
        }
    }

    let text = parts.join(" ");
    if text.is_empty() {
        fallback()
    } else {
        text
    }
}
