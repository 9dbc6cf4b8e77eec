use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Flag traits found in the annotation block directly above an
/// operation declaration. Absence of a marker leaves the flag false;
/// the scanner never materializes an explicit negative downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpFlags {
    pub readonly: bool,
    pub idempotent: bool,
}

// Zero or more `@marker` / `@marker(args)` lines immediately followed by
// an operation header. Only the captured block is inspected for flags,
// never the operation body.
static OPERATION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"((?:@[a-zA-Z]+(?:\([^)]*\))?\s*\n)*)operation\s+(\w+)\s*\{").ok()
});

/// Scan the primary document for operation declarations and their flag
/// traits. Every matched operation yields an entry, even when no flags
/// apply: operation identity is established here.
pub fn scan_operations(text: &str) -> BTreeMap<String, OpFlags> {
    let mut ops = BTreeMap::new();
    let Some(re) = OPERATION_RE.as_ref() else {
        return ops;
    };
    for caps in re.captures_iter(text) {
        let block = &caps[1];
        ops.insert(
            caps[2].to_string(),
            OpFlags {
                readonly: block.contains("@readonly"),
                idempotent: block.contains("@idempotent"),
            },
        );
    }
    ops
}
