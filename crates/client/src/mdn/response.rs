//! MDN search API response types.

use serde::Deserialize;

/// Response body of `GET /api/v1/search`.
///
/// Only the fields the tools render are modelled; everything else in the
/// payload (metadata, suggestions, highlight fragments) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub documents: Vec<SearchDocument>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchDocument {
    pub title: String,
    /// Site-relative path such as `/en-US/docs/Web/API/Headers`.
    pub mdn_url: String,
    pub summary: String,
}

impl SearchResponse {
    /// Get the number of documents.
    pub fn result_count(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "documents": [
            {
                "mdn_url": "/en-US/docs/Web/API/Headers",
                "score": 81.2,
                "title": "Headers",
                "locale": "en-US",
                "slug": "Web/API/Headers",
                "popularity": 0.0021,
                "summary": "The Headers interface of the Fetch API allows you to perform various actions on HTTP request and response headers.",
                "highlight": {"body": [], "title": []}
            },
            {
                "mdn_url": "/en-US/docs/Web/API/Headers/get",
                "score": 40.0,
                "title": "Headers: get() method",
                "locale": "en-US",
                "slug": "Web/API/Headers/get",
                "popularity": 0.0004,
                "summary": "The get() method of the Headers interface returns a byte string of all the values of a header."
            }
        ],
        "metadata": {"took_ms": 12, "size": 10, "page": 1, "total": {"value": 2, "relation": "eq"}},
        "suggestions": []
    }"#;

    #[test]
    fn test_deserialize_search_response() {
        let response: SearchResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        assert_eq!(response.result_count(), 2);

        let first = &response.documents[0];
        assert_eq!(first.title, "Headers");
        assert_eq!(first.mdn_url, "/en-US/docs/Web/API/Headers");
        assert!(first.summary.starts_with("The Headers interface"));

        assert_eq!(response.documents[1].title, "Headers: get() method");
    }

    #[test]
    fn test_empty_documents() {
        let response: SearchResponse = serde_json::from_str(r#"{"documents": []}"#).unwrap();
        assert_eq!(response.result_count(), 0);
    }

    #[test]
    fn test_missing_documents_is_an_error() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"metadata": {}}"#);
        assert!(result.is_err());
    }
}
