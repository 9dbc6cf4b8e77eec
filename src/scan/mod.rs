//! Scanner layer: each scanner is a pure function from document text to
//! a structured partial result.
//!
//! ## Scanner map
//! - `flags.rs` — flag traits (`@readonly`/`@idempotent`) above operation declarations.
//! - `overlay.rs` — `apply` statements carrying structured trait payloads.
//! - `sensitivity.rs` — `@sensitive` scalar type declarations.
//! - `redaction.rs` — per-structure sensitive field paths.
//! - `pagination.rs` — Link-header pagination documented in prose.
//!
//! ## Conventions
//! - Scanners never fail: text that does not match a pattern yields nothing.
//! - Shallow textual matching only; no grammar, no AST, no nested bodies.
//! - Regexes compile once behind `LazyLock<Option<Regex>>`; a pattern that
//!   fails to compile degrades to "no matches" instead of aborting the run.

pub mod flags;
pub mod overlay;
pub mod pagination;
pub mod redaction;
pub mod sensitivity;
