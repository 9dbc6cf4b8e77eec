//! Model assembly: runs the primary-document scanners once, merges each
//! overlay document into a per-operation accumulator, then finalizes
//! entries under a fixed precedence order.
//!
//! Precedence per operation, highest first:
//! 1. overlay `retry` trait;
//! 2. overlay `pagination` trait;
//! 3. overlay `idempotency` trait (`supported` sub-key, default false),
//!    consulted only when the direct `@idempotent` marker is absent;
//! 4. flag traits from the primary document;
//! 5. prose-detected pagination, only where no overlay set one.

use crate::domain::constants::{MODEL_VERSION, SCHEMA_URL};
use crate::domain::models::{BehaviorModel, OperationEntry, OverlayDoc, TraitPayload, TraitValue};
use crate::scan;
use std::collections::BTreeMap;

/// Per-operation accumulator threaded through the primary scan and each
/// overlay merge step.
#[derive(Debug, Default)]
struct OpTraits {
    readonly: bool,
    idempotent: bool,
    structured: BTreeMap<String, TraitPayload>,
}

/// Structured trait names the merge step recognizes; anything else an
/// overlay applies is ignored.
const MERGED_TRAITS: [&str; 3] = ["pagination", "retry", "idempotency"];

/// Build the behavior model from the primary document text and the
/// behavioral overlay documents, in processing order.
pub fn build_model(primary: &str, overlays: &[OverlayDoc]) -> BehaviorModel {
    let mut ops: BTreeMap<String, OpTraits> = scan::flags::scan_operations(primary)
        .into_iter()
        .map(|(name, flags)| {
            (
                name,
                OpTraits {
                    readonly: flags.readonly,
                    idempotent: flags.idempotent,
                    structured: BTreeMap::new(),
                },
            )
        })
        .collect();

    let prose_pagination = scan::pagination::detect_prose_pagination(primary);
    let sensitive_types = scan::sensitivity::scan_sensitive_types(primary);
    let redaction = scan::redaction::resolve_redactions(primary, &sensitive_types);

    // Overlays are processed strictly sequentially; within the same
    // precedence tier a later document's (operation, trait) pair
    // replaces an earlier one.
    for doc in overlays {
        for (op_name, traits) in scan::overlay::scan_overlay(&doc.text) {
            if !ops.contains_key(&op_name) {
                // Overlays may only augment operations declared in the
                // primary document. Tolerated, but worth surfacing.
                eprintln!(
                    "warning: overlay {} applies traits to undeclared operation {}",
                    doc.name, op_name
                );
            }
            let entry = ops.entry(op_name).or_default();
            for (trait_name, payload) in traits {
                if MERGED_TRAITS.contains(&trait_name.as_str()) {
                    entry.structured.insert(trait_name, payload);
                }
            }
        }
    }

    // Prose-detected pagination is the lowest-precedence source: only
    // set where no overlay already did.
    for (op_name, payload) in prose_pagination {
        if let Some(entry) = ops.get_mut(&op_name) {
            entry
                .structured
                .entry("pagination".to_string())
                .or_insert(payload);
        }
    }

    BehaviorModel {
        schema: SCHEMA_URL.to_string(),
        version: MODEL_VERSION.to_string(),
        generated: true,
        operations: ops
            .into_iter()
            .map(|(name, traits)| (name, finalize_entry(traits)))
            .collect(),
        redaction,
        sensitive_types: sensitive_types.into_iter().collect(),
    }
}

fn finalize_entry(traits: OpTraits) -> OperationEntry {
    let readonly = traits.readonly.then_some(true);

    // The direct @idempotent marker beats an overlay idempotency trait;
    // the trait's `supported` sub-key defaults to false and only a
    // boolean true counts.
    let idempotent = if traits.idempotent {
        Some(true)
    } else if let Some(payload) = traits.structured.get("idempotency") {
        Some(matches!(
            payload.get("supported"),
            Some(TraitValue::Bool(true))
        ))
    } else {
        None
    };

    let pagination = traits.structured.get("pagination").cloned();
    let retry = traits
        .structured
        .get("retry")
        .cloned()
        .unwrap_or_else(|| default_retry(traits.readonly));

    OperationEntry {
        readonly,
        idempotent,
        pagination,
        retry,
    }
}

/// Mutating operations are not safely retryable by default; read-only
/// operations get a conservative exponential backoff with jitter.
fn default_retry(readonly: bool) -> TraitPayload {
    if readonly {
        [
            ("max", TraitValue::Int(3)),
            ("base_delay_seconds", TraitValue::Int(1)),
            ("backoff", TraitValue::from("exp+jitter")),
        ]
        .into_iter()
        .collect()
    } else {
        [("max", TraitValue::Int(0))].into_iter().collect()
    }
}
