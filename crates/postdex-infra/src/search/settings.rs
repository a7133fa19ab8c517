//! Static index definition: analyzer settings and field mappings.

use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};

use postdex_core::ports::IndexError;

/// Analysis settings for the Korean analyzer, shipped with the crate.
const NORI_SETTINGS: &str = include_str!("../../es-config/nori-analyzer.json");

/// Text analyzer applied to `content` at index and query time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Analyzer {
    /// Elasticsearch's built-in `standard` analyzer.
    #[default]
    Standard,
    /// Custom analyzer over the `analysis-nori` tokenizer.
    Nori,
}

impl Analyzer {
    /// Analyzer name referenced from the field mapping.
    pub fn name(&self) -> &'static str {
        match self {
            Analyzer::Standard => "standard",
            Analyzer::Nori => "post_nori_analyzer",
        }
    }

    /// Index settings required for this analyzer.
    pub fn settings(&self) -> Result<Value, IndexError> {
        match self {
            Analyzer::Standard => Ok(json!({})),
            Analyzer::Nori => serde_json::from_str(NORI_SETTINGS)
                .map_err(|e| IndexError::Configuration(format!("nori settings: {e}"))),
        }
    }
}

impl FromStr for Analyzer {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Analyzer::Standard),
            "nori" => Ok(Analyzer::Nori),
            other => Err(IndexError::Configuration(format!(
                "unknown analyzer '{other}' (expected 'standard' or 'nori')"
            ))),
        }
    }
}

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of the create-index request: settings plus post document mappings.
pub fn index_definition(analyzer: Analyzer) -> Result<Value, IndexError> {
    let settings = analyzer.settings()?;
    Ok(json!({
        "settings": settings,
        "mappings": {
            "properties": {
                "id": { "type": "long" },
                "content": {
                    "type": "text",
                    "analyzer": analyzer.name(),
                    "search_analyzer": analyzer.name(),
                },
                "createdTime": { "type": "date", "format": "date_hour_minute_second" },
                "updatedTime": { "type": "date", "format": "date_hour_minute_second" },
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyzer_names() {
        assert_eq!("standard".parse::<Analyzer>().unwrap(), Analyzer::Standard);
        assert_eq!(" Nori ".parse::<Analyzer>().unwrap(), Analyzer::Nori);
        assert!("kuromoji".parse::<Analyzer>().is_err());
    }

    #[test]
    fn standard_definition_uses_builtin_analyzer() {
        let definition = index_definition(Analyzer::Standard).unwrap();

        assert_eq!(definition["settings"], json!({}));
        assert_eq!(
            definition["mappings"]["properties"]["content"]["analyzer"],
            "standard"
        );
        assert_eq!(definition["mappings"]["properties"]["id"]["type"], "long");
    }

    #[test]
    fn nori_definition_declares_custom_analyzer() {
        let definition = index_definition(Analyzer::Nori).unwrap();
        let content = &definition["mappings"]["properties"]["content"];

        assert_eq!(content["analyzer"], "post_nori_analyzer");
        assert_eq!(content["search_analyzer"], "post_nori_analyzer");
        assert_eq!(
            definition["settings"]["analysis"]["analyzer"]["post_nori_analyzer"]["tokenizer"],
            "post_nori_tokenizer"
        );
        assert_eq!(
            definition["mappings"]["properties"]["createdTime"]["format"],
            "date_hour_minute_second"
        );
    }
}
