//! JSON shapes exchanged with the classification service, and their
//! coercion into domain types.

use serde::Deserialize;
use serde_json::Value;

use super::factors::decode_marked;
use crate::app::domain::verdict::{
    AnalysisResult, Classification, Factor, FactorTag, NewsItem, VerificationTool,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireAnalysis {
    classification: Option<Value>,
    #[serde(rename = "confidenceReal")]
    confidence_real: Option<Value>,
    #[serde(rename = "confidenceFake")]
    confidence_fake: Option<Value>,
    explanation: Option<Value>,
    suggestion: Option<Value>,
    factors: Option<Value>,
    related_news: Option<Value>,
    verification_tools: Option<Value>,
}

/// Explicit factor object, the alternative to a marker-prefixed string.
#[derive(Debug, Deserialize)]
struct TaggedFactor {
    tag: FactorTag,
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    detail: Option<Value>,
}

fn confidence(value: Option<Value>) -> f64 {
    let raw = value.as_ref().and_then(Value::as_f64).unwrap_or(0.0);
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}

fn optional_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Entries of a list field. Anything that is not an array has no entries.
fn entries(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// A string member of an object; null, missing or non-string is empty.
fn text_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn factor(entry: Value) -> Option<Factor> {
    match entry {
        Value::String(raw) => Some(decode_marked(&raw)),
        Value::Object(_) => match serde_json::from_value::<TaggedFactor>(entry) {
            Ok(tagged) => Some(Factor {
                tag: Some(tagged.tag),
                text: tagged.text.trim().to_string(),
            }),
            Err(e) => {
                log::debug!("Skipping unreadable factor: {}", e);
                None
            }
        },
        _ => None,
    }
}

fn news_item(entry: Value) -> Option<NewsItem> {
    if !entry.is_object() {
        return None;
    }
    Some(NewsItem {
        source: text_field(&entry, "source"),
        title: text_field(&entry, "title"),
        url: text_field(&entry, "url"),
    })
}

fn verification_tool(entry: Value) -> Option<VerificationTool> {
    if !entry.is_object() {
        return None;
    }
    Some(VerificationTool {
        source: text_field(&entry, "source"),
        url: text_field(&entry, "url"),
    })
}

impl From<WireAnalysis> for AnalysisResult {
    fn from(wire: WireAnalysis) -> Self {
        let classification = match &wire.classification {
            Some(Value::String(s)) => Classification::parse(s),
            _ => Classification::Unverified,
        };

        AnalysisResult {
            classification,
            confidence_real: confidence(wire.confidence_real),
            confidence_fake: confidence(wire.confidence_fake),
            explanation: optional_text(wire.explanation),
            suggestion: optional_text(wire.suggestion),
            factors: entries(wire.factors).into_iter().filter_map(factor).collect(),
            related_news: entries(wire.related_news)
                .into_iter()
                .filter_map(news_item)
                .collect(),
            verification_tools: entries(wire.verification_tools)
                .into_iter()
                .filter_map(verification_tool)
                .collect(),
        }
    }
}

/// Decode a success body. Fails only when the body is not a JSON object of
/// the expected shape.
pub fn decode_analysis(body: &[u8]) -> Result<AnalysisResult, serde_json::Error> {
    let wire: WireAnalysis = serde_json::from_slice(body)?;
    Ok(wire.into())
}

/// Pull a human-readable `detail` string out of an error body, if any.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_service_reply() {
        let body = r#"{
            "classification": "Fake",
            "confidenceReal": 0.2,
            "confidenceFake": 0.8,
            "factors": ["🚩 Claims to reveal 'secret' information.", "plain note"],
            "related_news": [{"title": "T", "url": "https://news.example/1", "source": "Wire"}],
            "verification_tools": [{"source": "Snopes Search", "url": "https://www.snopes.com/"}]
        }"#;

        let result = decode_analysis(body.as_bytes()).unwrap();
        assert_eq!(result.classification, Classification::Fake);
        assert_eq!(result.confidence_fake, 0.8);
        assert_eq!(result.factors.len(), 2);
        assert_eq!(result.factors[0].tag, Some(FactorTag::Flag));
        assert_eq!(result.factors[1].tag, None);
        assert_eq!(result.related_news[0].source, "Wire");
        assert_eq!(result.verification_tools[0].source, "Snopes Search");
        assert_eq!(result.explanation, None);
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let result = decode_analysis(b"{}").unwrap();
        assert_eq!(result.classification, Classification::Unverified);
        assert_eq!(result.confidence_real, 0.0);
        assert!(result.factors.is_empty());
        assert!(result.related_news.is_empty());
        assert!(result.verification_tools.is_empty());
    }

    #[test]
    fn test_unknown_fields_and_nulls_are_tolerated() {
        let body = br#"{"classification": null, "factors": null, "model": "distilbert", "explanation": 42}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.classification, Classification::Unverified);
        assert!(result.factors.is_empty());
        assert_eq!(result.explanation, None);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let body = br#"{"confidenceReal": 1.7, "confidenceFake": -0.3}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.confidence_real, 1.0);
        assert_eq!(result.confidence_fake, 0.0);
    }

    #[test]
    fn test_tagged_factor_objects() {
        let body = br#"{"factors": [{"tag": "check", "text": " cites sources "}, {"tag": "info", "text": "short text"}]}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.factors[0], Factor { tag: Some(FactorTag::Check), text: "cites sources".into() });
        assert_eq!(result.factors[1].tag, Some(FactorTag::Info));
    }

    #[test]
    fn test_blank_explanation_is_absent() {
        let body = br#"{"explanation": "   ", "suggestion": "Check a second source."}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.explanation, None);
        assert_eq!(result.suggestion.as_deref(), Some("Check a second source."));
    }

    #[test]
    fn test_null_news_title_keeps_verdict() {
        let body = br#"{
            "classification": "Fake",
            "confidenceReal": 0.1,
            "confidenceFake": 0.9,
            "related_news": [{"title": null, "url": "https://news.example/2", "source": "Wire"}]
        }"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.classification, Classification::Fake);
        assert_eq!(
            result.related_news,
            vec![NewsItem {
                source: "Wire".into(),
                title: String::new(),
                url: "https://news.example/2".into(),
            }]
        );
    }

    #[test]
    fn test_bad_factor_entries_are_skipped() {
        let body = br#"{"classification": "Real", "factors": ["ok", null, 7, {"tag": "bogus", "text": "x"}]}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.classification, Classification::Real);
        assert_eq!(result.factors, vec![Factor { tag: None, text: "ok".into() }]);
    }

    #[test]
    fn test_wrongly_typed_lists_are_empty() {
        let body = br#"{"factors": "none", "related_news": {"title": "T"}, "verification_tools": [null, {"source": "Snopes", "url": 3}]}"#;
        let result = decode_analysis(body).unwrap();
        assert!(result.factors.is_empty());
        assert!(result.related_news.is_empty());
        assert_eq!(
            result.verification_tools,
            vec![VerificationTool { source: "Snopes".into(), url: String::new() }]
        );
    }

    #[test]
    fn test_non_object_body_fails() {
        assert!(decode_analysis(b"<html>oops</html>").is_err());
        assert!(decode_analysis(b"\"Real\"").is_err());
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(br#"{"detail": "Failed to fetch URL: timeout"}"#).as_deref(),
            Some("Failed to fetch URL: timeout")
        );
        // FastAPI validation errors carry a list, not a message
        assert_eq!(error_detail(br#"{"detail": [{"loc": ["body"]}]}"#), None);
        assert_eq!(error_detail(b"Internal Server Error"), None);
        assert_eq!(error_detail(b""), None);
    }
}
