use crate::domain::models::RedactionRules;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Structure declaration with a brace-delimited body. The body stops at
// the first closing brace, so inline nested bodies are not descended
// into: redaction is one level deep.
static STRUCTURE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)structure\s+(\w+)\s*\{([^}]+)\}").ok());

// `field: Type` member pairs inside a structure body.
static MEMBER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\w+):\s*(\w+)").ok());

/// For every structure declaration, emit `$.<field>` paths for members
/// whose declared type is in the sensitive set, in declaration order.
/// Structures with no qualifying members get no entry.
pub fn resolve_redactions(text: &str, sensitive_types: &BTreeSet<String>) -> RedactionRules {
    let mut rules = RedactionRules::new();
    let (Some(struct_re), Some(member_re)) = (STRUCTURE_RE.as_ref(), MEMBER_RE.as_ref()) else {
        return rules;
    };
    for caps in struct_re.captures_iter(text) {
        let mut paths = Vec::new();
        for member in member_re.captures_iter(&caps[2]) {
            if sensitive_types.contains(&member[2]) {
                paths.push(format!("$.{}", &member[1]));
            }
        }
        if !paths.is_empty() {
            rules.insert(&caps[1], paths);
        }
    }
    rules
}
