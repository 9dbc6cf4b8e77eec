use crate::domain::models::{TraitPayload, TraitValue};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Structured traits extracted from one overlay document, keyed by
/// operation name and then trait name.
pub type OverlayTraits = BTreeMap<String, BTreeMap<String, TraitPayload>>;

// `apply <Op> @<trait>({ <body> })` with a single-level body. Nested
// braces make the whole statement unmatchable, which is the documented
// precision limit: such statements silently yield nothing.
static APPLY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"apply\s+(\w+)\s+@(\w+)\(\{([^}]+)\}\)").ok());

// key: "quoted" | 123 | bareword
static KEY_VALUE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(\w+):\s*(?:"([^"]+)"|(\d+)|(\w+))"#).ok());

/// Scan one overlay document for `apply` statements. Multiple
/// statements targeting the same operation accumulate; a repeated
/// (operation, trait) pair keeps the last occurrence in document order.
pub fn scan_overlay(text: &str) -> OverlayTraits {
    let mut out = OverlayTraits::new();
    let (Some(apply_re), Some(kv_re)) = (APPLY_RE.as_ref(), KEY_VALUE_RE.as_ref()) else {
        return out;
    };
    for caps in apply_re.captures_iter(text) {
        let mut payload = TraitPayload::new();
        for kv in kv_re.captures_iter(&caps[3]) {
            payload.set(&kv[1], parse_value(&kv));
        }
        out.entry(caps[1].to_string())
            .or_default()
            .insert(caps[2].to_string(), payload);
    }
    out
}

/// A quoted value is always a string; a digits-only literal becomes an
/// unsigned integer; bare `true`/`false` become booleans; any other
/// bare word stays a string token.
fn parse_value(kv: &regex::Captures<'_>) -> TraitValue {
    if let Some(quoted) = kv.get(2) {
        return TraitValue::Str(quoted.as_str().to_string());
    }
    if let Some(digits) = kv.get(3) {
        // A literal too large for u64 degrades to its string form.
        return match digits.as_str().parse::<u64>() {
            Ok(n) => TraitValue::Int(n),
            Err(_) => TraitValue::Str(digits.as_str().to_string()),
        };
    }
    match &kv[4] {
        "true" => TraitValue::Bool(true),
        "false" => TraitValue::Bool(false),
        word => TraitValue::Str(word.to_string()),
    }
}
