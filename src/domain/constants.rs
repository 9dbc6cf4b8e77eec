//! Stable constants shared across the pipeline and the output artifact.

/// `$schema` value stamped into every generated behavior model.
pub const SCHEMA_URL: &str = "https://traitscan.dev/schemas/behavior-model.json";

/// Version tag of the behavior-model output format.
pub const MODEL_VERSION: &str = "1.0.0";

/// Conventional name of the primary IDL document inside the spec directory.
pub const PRIMARY_DOC: &str = "main.smithy";

/// Subdirectory of the spec directory that holds overlay documents.
pub const OVERLAY_DIR: &str = "overlays";

/// File extension overlay documents must carry to be picked up.
pub const OVERLAY_EXT: &str = "smithy";

/// Overlay files that carry only auxiliary annotations (examples, tags),
/// never behavior. Skipped by the pipeline.
pub const RESERVED_OVERLAYS: [&str; 2] = ["examples.smithy", "tags.smithy"];

/// Default spec directory when none is given on the command line.
pub const DEFAULT_SPEC_DIR: &str = "spec";

/// Default output filename, written next to the spec directory.
pub const DEFAULT_OUTPUT_NAME: &str = "behavior-model.json";
