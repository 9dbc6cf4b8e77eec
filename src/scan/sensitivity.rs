use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// `@sensitive` directly above a scalar type declaration. Only leaf
// types can be marked sensitive; composite types never enter the set.
static SENSITIVE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"@sensitive\s*\n\s*(?:string|integer|long|blob|timestamp)\s+(\w+)").ok()
});

/// Collect the names of scalar types declared with a sensitivity
/// marker in the primary document.
pub fn scan_sensitive_types(text: &str) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    let Some(re) = SENSITIVE_RE.as_ref() else {
        return types;
    };
    for caps in re.captures_iter(text) {
        types.insert(caps[1].to_string());
    }
    types
}
