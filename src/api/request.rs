//! Request types for the import API.

use serde::{Deserialize, Serialize};

/// Source name used when a request does not provide one.
pub const DEFAULT_SOURCE_NAME: &str = "request";

/// Request body for the `/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Name reported in logs and in the response, e.g. the original file name.
    #[serde(default)]
    pub source_name: Option<String>,
    /// The comma-delimited employee lines.
    pub content: String,
}

impl ImportRequest {
    /// Returns the source name, falling back to [`DEFAULT_SOURCE_NAME`].
    pub fn source_name(&self) -> &str {
        self.source_name.as_deref().unwrap_or(DEFAULT_SOURCE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_source_name() {
        let request: ImportRequest =
            serde_json::from_str(r#"{"content": "M00001,Doe,Jane,01/01/2020,3000"}"#).unwrap();
        assert_eq!(request.source_name(), "request");
        assert_eq!(request.content, "M00001,Doe,Jane,01/01/2020,3000");
    }

    #[test]
    fn test_deserialize_with_source_name() {
        let request: ImportRequest =
            serde_json::from_str(r#"{"source_name": "employes.csv", "content": ""}"#).unwrap();
        assert_eq!(request.source_name(), "employes.csv");
    }

    #[test]
    fn test_content_is_required() {
        let result: Result<ImportRequest, _> = serde_json::from_str(r#"{"source_name": "x"}"#);
        assert!(result.is_err());
    }
}
