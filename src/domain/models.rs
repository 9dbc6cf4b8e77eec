use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Generic envelope for `--json` summary output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A single value inside a structured trait payload.
///
/// Overlay trait bodies only carry quoted strings, unsigned integer
/// literals, and bare words (`true`/`false` become booleans, anything
/// else stays a word token). Negative numbers, floats, and nested
/// objects are deliberately unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraitValue {
    Bool(bool),
    Int(u64),
    Str(String),
}

impl From<bool> for TraitValue {
    fn from(v: bool) -> Self {
        TraitValue::Bool(v)
    }
}

impl From<u64> for TraitValue {
    fn from(v: u64) -> Self {
        TraitValue::Int(v)
    }
}

impl From<&str> for TraitValue {
    fn from(v: &str) -> Self {
        TraitValue::Str(v.to_string())
    }
}

/// Flat key→value payload of a structured trait, preserving the key
/// order of the source document. A repeated key keeps its first
/// position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitPayload(Vec<(String, TraitValue)>);

impl TraitPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: TraitValue) {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&TraitValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraitValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for TraitPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<TraitValue>> FromIterator<(K, V)> for TraitPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = TraitPayload::new();
        for (k, v) in iter {
            payload.set(k, v.into());
        }
        payload
    }
}

/// One operation's entry in the final model. `retry` is always present;
/// the optional fields are omitted from the artifact when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<TraitPayload>,
    pub retry: TraitPayload,
}

/// Redaction rules keyed by structure name, kept in first-discovery
/// order. A structure with no sensitive members has no entry at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedactionRules(Vec<(String, Vec<String>)>);

impl RedactionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rule for a structure. A redeclared
    /// structure keeps its original position.
    pub fn insert(&mut self, structure: impl Into<String>, paths: Vec<String>) {
        let structure = structure.into();
        if let Some(slot) = self.0.iter_mut().find(|(name, _)| *name == structure) {
            slot.1 = paths;
        } else {
            self.0.push((structure, paths));
        }
    }

    pub fn get(&self, structure: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == structure)
            .map(|(_, paths)| paths.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }
}

impl Serialize for RedactionRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, paths) in &self.0 {
            map.serialize_entry(name, paths)?;
        }
        map.end()
    }
}

/// The consolidated output artifact.
#[derive(Debug, Serialize)]
pub struct BehaviorModel {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub generated: bool,
    pub operations: BTreeMap<String, OperationEntry>,
    pub redaction: RedactionRules,
    #[serde(rename = "sensitiveTypes")]
    pub sensitive_types: Vec<String>,
}

/// In-memory contents of a spec directory: the primary document plus
/// the behavioral overlay documents in processing order.
#[derive(Debug, Default)]
pub struct SpecDocs {
    pub primary: String,
    pub overlays: Vec<OverlayDoc>,
}

#[derive(Debug, Clone)]
pub struct OverlayDoc {
    pub name: String,
    pub text: String,
}
