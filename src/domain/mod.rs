//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep model/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — trait values/payloads, operation entries, behavior model.
//! - `constants.rs` — stable constants (schema URL, version tag, file names).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect the generated artifact and the `--json`
//! summary. Keep schema-impacting changes explicit.

pub mod constants;
pub mod models;
