use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct SpecFixture {
    _tmp: TempDir,
    pub root: PathBuf,
    pub spec_dir: PathBuf,
}

impl SpecFixture {
    pub fn new(primary: &str, overlays: &[(&str, &str)]) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let spec_dir = root.join("spec");

        fs::create_dir_all(spec_dir.join("overlays")).expect("create overlays dir");
        fs::write(spec_dir.join("main.smithy"), primary).expect("write primary doc");
        for (name, text) in overlays {
            fs::write(spec_dir.join("overlays").join(name), text).expect("write overlay");
        }

        Self {
            _tmp: tmp,
            root,
            spec_dir,
        }
    }

    /// Default artifact location for this fixture (next to the spec dir).
    pub fn model_path(&self) -> PathBuf {
        self.root.join("behavior-model.json")
    }

    pub fn read_model(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.model_path()).expect("read generated model");
        serde_json::from_str(&raw).expect("valid json artifact")
    }
}

pub fn spec_arg(fixture: &SpecFixture) -> &str {
    fixture.spec_dir.to_str().expect("spec path utf8")
}

pub const TRACKER_PRIMARY: &str = r#"$version: "2"

namespace example.tracker

/// Lists projects visible to the caller.
///
/// **Pagination**: Uses Link header (RFC5988). Follow the `next` rel URL.
@readonly
@http(method: "GET", uri: "/projects.json")
operation ListProjects {
    input: ListProjectsInput
    output: ListProjectsOutput
}

@readonly
@http(method: "GET", uri: "/projects/{id}.json")
operation GetProject {
    input: GetProjectInput
    output: GetProjectOutput
}

@http(method: "POST", uri: "/projects.json")
operation CreateProject {
    input: CreateProjectInput
    output: CreateProjectOutput
}

@idempotent
@http(method: "PUT", uri: "/todos/{id}.json")
operation UpdateTodo {
    input: UpdateTodoInput
}

@sensitive
string PersonName

@sensitive
string EmailAddress

structure Person {
    name: PersonName
    email: EmailAddress
    age: Integer
}

structure Project {
    name: String
    purpose: String
}
"#;

pub const PAGINATION_OVERLAY: &str = r#"$version: "2"

namespace example.tracker

apply ListProjects @pagination({ style: "link" })
"#;

pub const RESILIENCE_OVERLAY: &str = r#"$version: "2"

namespace example.tracker

apply GetProject @retry({ max: 5, base_delay_seconds: 1, backoff: "exp+jitter" })
apply CreateProject @idempotency({ supported: true })
"#;

/// Reserved overlay: its traits must never reach the model.
pub const EXAMPLES_OVERLAY: &str = r#"apply ListProjects @retry({ max: 99 })
"#;

pub fn tracker_fixture() -> SpecFixture {
    SpecFixture::new(
        TRACKER_PRIMARY,
        &[
            ("pagination.smithy", PAGINATION_OVERLAY),
            ("resilience.smithy", RESILIENCE_OVERLAY),
            ("examples.smithy", EXAMPLES_OVERLAY),
        ],
    )
}
