//! Turns an `AnalysisResult` into display data. Pure; no widgets here.

use crate::app::domain::verdict::{
    AnalysisResult, Classification, Factor, NewsItem, Severity, VerificationTool,
};

pub const LABEL_FAKE: &str = "Likely Misinformation";
pub const LABEL_REAL: &str = "Credible Source";
pub const LABEL_UNVERIFIED: &str = "Unverified / Needs Sources";

/// Shown in place of the factor list when the service sent none.
pub const NO_FACTORS_PLACEHOLDER: &str = "No triggers found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictBadge {
    pub severity: Severity,
    pub label: &'static str,
}

impl VerdictBadge {
    pub fn for_classification(classification: Classification) -> Self {
        match classification {
            Classification::Fake => Self {
                severity: Severity::Negative,
                label: LABEL_FAKE,
            },
            Classification::Real => Self {
                severity: Severity::Positive,
                label: LABEL_REAL,
            },
            Classification::Unverified => Self {
                severity: Severity::Neutral,
                label: LABEL_UNVERIFIED,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorRow {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub verdict: VerdictBadge,
    /// Percentage in [0, 100], one decimal.
    pub confidence: f64,
    pub explanation: Option<String>,
    pub suggestion: Option<String>,
    pub factors: Vec<FactorRow>,
    pub related_news: Option<Vec<NewsItem>>,
    pub verification_tools: Option<Vec<VerificationTool>>,
}

impl Presentation {
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

/// `max(real, fake) * 100`, rounded to one decimal.
pub fn display_confidence(confidence_real: f64, confidence_fake: f64) -> f64 {
    let top = confidence_real.max(confidence_fake);
    let pct = (top * 1000.0).round() / 10.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

pub fn factor_rows(factors: &[Factor]) -> Vec<FactorRow> {
    if factors.is_empty() {
        return vec![FactorRow {
            severity: Severity::Neutral,
            text: NO_FACTORS_PLACEHOLDER.to_string(),
        }];
    }

    factors
        .iter()
        .map(|factor| FactorRow {
            severity: factor.tag.map_or(Severity::Neutral, |tag| tag.severity()),
            text: factor.text.clone(),
        })
        .collect()
}

fn non_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items.to_vec()) }
}

pub fn present(result: &AnalysisResult) -> Presentation {
    Presentation {
        verdict: VerdictBadge::for_classification(result.classification),
        confidence: display_confidence(result.confidence_real, result.confidence_fake),
        explanation: result.explanation.clone(),
        suggestion: result.suggestion.clone(),
        factors: factor_rows(&result.factors),
        related_news: non_empty(&result.related_news),
        verification_tools: non_empty(&result.verification_tools),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::factors::decode_marked;
    use crate::app::services::wire::decode_analysis;

    #[test]
    fn test_real_verdict_and_confidence() {
        let result = AnalysisResult {
            classification: Classification::Real,
            confidence_real: 0.82,
            confidence_fake: 0.18,
            ..Default::default()
        };
        let p = present(&result);
        assert_eq!(p.confidence_label(), "82.0%");
        assert_eq!(p.verdict.severity, Severity::Positive);
        assert_eq!(p.verdict.label, "Credible Source");
    }

    #[test]
    fn test_fake_verdict() {
        let badge = VerdictBadge::for_classification(Classification::Fake);
        assert_eq!(badge.severity, Severity::Negative);
        assert_eq!(badge.label, "Likely Misinformation");
    }

    #[test]
    fn test_unknown_classification_is_neutral() {
        let result = decode_analysis(br#"{"classification": "Unknown"}"#).unwrap();
        let p = present(&result);
        assert_eq!(p.verdict.severity, Severity::Neutral);
        assert_eq!(p.verdict.label, "Unverified / Needs Sources");
    }

    #[test]
    fn test_confidence_rounding() {
        assert_eq!(display_confidence(0.1234, 0.8766), 87.7);
        assert_eq!(display_confidence(0.5, 0.5), 50.0);
        assert_eq!(display_confidence(0.0, 0.0), 0.0);
        assert_eq!(display_confidence(1.0, 0.0), 100.0);
        assert_eq!(display_confidence(0.98, 0.02), 98.0);
    }

    #[test]
    fn test_confidence_stays_in_range() {
        assert_eq!(display_confidence(1.5, 0.0), 100.0);
        assert_eq!(display_confidence(-1.0, -2.0), 0.0);
        assert_eq!(display_confidence(f64::NAN, f64::NAN), 0.0);
    }

    #[test]
    fn test_factor_decoding_partition() {
        let factors = vec![
            decode_marked("\u{26a0} sensational language"),
            decode_marked("\u{2713} cites sources"),
        ];
        let rows = factor_rows(&factors);
        assert_eq!(
            rows,
            vec![
                FactorRow { severity: Severity::Negative, text: "sensational language".into() },
                FactorRow { severity: Severity::Positive, text: "cites sources".into() },
            ]
        );
    }

    #[test]
    fn test_untagged_factor_is_neutral() {
        let rows = factor_rows(&[decode_marked("Structure resembles reporting.")]);
        assert_eq!(rows[0].severity, Severity::Neutral);
        assert_eq!(rows[0].text, "Structure resembles reporting.");
    }

    #[test]
    fn test_empty_factors_render_placeholder() {
        let p = present(&AnalysisResult::default());
        assert_eq!(p.factors.len(), 1);
        assert_eq!(p.factors[0].text, NO_FACTORS_PLACEHOLDER);
        assert_eq!(p.factors[0].severity, Severity::Neutral);
    }

    #[test]
    fn test_side_panels_only_when_present() {
        let mut result = AnalysisResult::default();
        let p = present(&result);
        assert!(p.related_news.is_none());
        assert!(p.verification_tools.is_none());

        result.verification_tools.push(VerificationTool {
            source: "PolitiFact".into(),
            url: "https://www.politifact.com/".into(),
        });
        let p = present(&result);
        assert!(p.related_news.is_none());
        assert_eq!(p.verification_tools.unwrap().len(), 1);
    }

    #[test]
    fn test_explanation_and_suggestion_pass_through() {
        let result = AnalysisResult {
            explanation: Some("Language is sensational.".into()),
            suggestion: Some("Look for a primary source.".into()),
            ..Default::default()
        };
        let p = present(&result);
        assert_eq!(p.explanation.as_deref(), Some("Language is sensational."));
        assert_eq!(p.suggestion.as_deref(), Some("Look for a primary source."));
    }
}
