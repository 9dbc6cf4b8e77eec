use crate::domain::models::{TraitPayload, TraitValue};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Fixed prose marker for Link-header (RFC 5988) pagination, bound
// lazily to the next operation declaration that follows it.
static PROSE_PAGINATION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?s)\*\*Pagination\*\*:\s*Uses\s+Link\s+header.*?\n.*?operation\s+(\w+)\s*\{")
        .ok()
});

/// Detect operations whose preceding documentation prose declares
/// Link-header pagination. A fallback signal only: the assembler drops
/// it whenever an overlay supplies an explicit pagination trait.
pub fn detect_prose_pagination(text: &str) -> BTreeMap<String, TraitPayload> {
    let mut ops = BTreeMap::new();
    let Some(re) = PROSE_PAGINATION_RE.as_ref() else {
        return ops;
    };
    for caps in re.captures_iter(text) {
        let mut style = TraitPayload::new();
        style.set("style", TraitValue::from("link"));
        ops.insert(caps[1].to_string(), style);
    }
    ops
}
