use anyhow::{Context, Result};
use ddlsync::schema::{ModelDescriptor, ScalarKind};
use serde::Deserialize;
use std::path::Path;

/// A model as written in a models file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelEntry {
    pub name: String,
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,

    /// Scalar kind name, e.g. `int`, `string` or `time.Time`
    pub kind: String,

    #[serde(default)]
    pub tag: String,
}

impl ModelEntry {
    pub fn into_descriptor(self) -> Result<ModelDescriptor> {
        let mut model = ModelDescriptor::new(&self.name);

        for field in self.fields {
            let kind: ScalarKind = field
                .kind
                .parse()
                .with_context(|| format!("model `{}`, field `{}`", self.name, field.name))?;

            model = model.field(field.name, kind, &field.tag)?;
        }

        Ok(model)
    }
}

/// Parses a JSON array of models.
pub fn parse_models(json: &str) -> Result<Vec<ModelDescriptor>> {
    let entries: Vec<ModelEntry> = serde_json::from_str(json).context("invalid models file")?;
    entries.into_iter().map(ModelEntry::into_descriptor).collect()
}

pub fn load_models(path: &Path) -> Result<Vec<ModelDescriptor>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read models file {}", path.display()))?;

    parse_models(&json).with_context(|| format!("loading {}", path.display()))
}
