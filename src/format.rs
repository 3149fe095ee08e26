//! Document formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Serialization format of a template document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Guess from a file extension; anything but `yaml`/`yml` is JSON
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("stack.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("stack.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("stack.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("stack.template")), Format::Json);
        assert_eq!(Format::from_path(Path::new("stack")), Format::Json);
    }
}
