//! Load a generated mapping back as an id → API name lookup table
//!
//! The mapping produced by the CLI is meant to be pasted into a collector's
//! YAML configuration, where numeric API ids reported at runtime are
//! translated back into names:
//!
//! ```yaml
//! pushurl: http://localhost:9091
//! apinamemap:
//!   "1": API_1
//!   "5": API_5
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

use crate::formatter::HEADER;
use crate::models::Annotation;

#[derive(Debug, Deserialize)]
struct NameMapDocument {
    #[serde(default)]
    apinamemap: Option<Mapping>,
}

/// API names keyed by numeric id, iterated in ascending id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiNameMap {
    names: BTreeMap<usize, String>,
}

impl ApiNameMap {
    /// Parse the `apinamemap` section of a YAML document
    ///
    /// A document without the section gives an empty map.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let doc: NameMapDocument =
            serde_yaml::from_str(yaml).context("Failed to parse name map YAML")?;

        let mut names = BTreeMap::new();
        for (key, value) in doc.apinamemap.unwrap_or_default() {
            let id = parse_id(&key)?;
            let name = scalar_to_string(&value)
                .with_context(|| format!("Invalid {} entry for id {}", HEADER, id))?;
            names.insert(id, name);
        }

        log::debug!("Loaded {} {} entries", names.len(), HEADER);
        Ok(Self { names })
    }

    /// Build the map straight from annotator output
    pub fn from_annotations(annotations: &[Annotation]) -> Self {
        let names = annotations
            .iter()
            .map(|a| (a.line, a.text().into_owned()))
            .collect();
        Self { names }
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

fn parse_id(key: &Value) -> Result<usize> {
    match key {
        Value::String(s) => s
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid {} key '{}': not a decimal id", HEADER, s)),
        Value::Number(n) => match n.as_u64().and_then(|id| usize::try_from(id).ok()) {
            Some(id) => Ok(id),
            None => bail!("Invalid {} key '{}': not a decimal id", HEADER, n),
        },
        other => bail!("Invalid {} key {:?}: not a decimal id", HEADER, other),
    }
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => bail!("expected a scalar name, found {:?}", other),
    }
}
