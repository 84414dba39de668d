//! Template descriptor types.

use serde::{Deserialize, Serialize};

/// One entry of a GitHub repository contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Raw content URL; directories carry `null` here.
    pub download_url: Option<String>,
}

/// A selectable `.gitattributes` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// Display name: the file name minus its `.gitattributes` suffix.
    pub label: String,
    /// Path of the file within the source repository.
    pub description: String,
    /// Raw content URL.
    pub download_url: String,
}

impl TemplateDescriptor {
    /// Turn a contents listing into sorted template descriptors.
    ///
    /// Keeps files named `<something>.gitattributes`; the bare
    /// `.gitattributes` of the source repository itself and anything that is
    /// not a plain file are skipped. Sorted by label, case-insensitively.
    pub fn from_contents(entries: Vec<ContentsEntry>) -> Vec<TemplateDescriptor> {
        let mut templates: Vec<TemplateDescriptor> = entries
            .into_iter()
            .filter(|entry| {
                entry.entry_type == "file"
                    && entry.name != ".gitattributes"
                    && entry.name.ends_with(".gitattributes")
            })
            .filter_map(|entry| {
                let label = entry.name.strip_suffix(".gitattributes")?.to_string();
                Some(TemplateDescriptor {
                    label,
                    description: entry.path,
                    download_url: entry.download_url?,
                })
            })
            .collect();

        templates.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
        templates
    }
}
