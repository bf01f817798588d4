use serde::Deserialize;

/// The three-way credibility label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    Fake,
    Real,
    #[default]
    Unverified,
}

impl Classification {
    /// Lenient parse: anything other than "fake" or "real" is unverified.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fake" => Classification::Fake,
            "real" => Classification::Real,
            _ => Classification::Unverified,
        }
    }
}

/// Tint used when rendering verdicts and factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Negative,
    Positive,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorTag {
    Flag,
    Check,
    Info,
}

impl FactorTag {
    pub fn severity(&self) -> Severity {
        match self {
            FactorTag::Flag => Severity::Negative,
            FactorTag::Check => Severity::Positive,
            FactorTag::Info => Severity::Neutral,
        }
    }
}

/// One explanatory line returned by the service. `tag` is `None` when the
/// line carried no recognized marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    pub tag: Option<FactorTag>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsItem {
    pub source: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationTool {
    pub source: String,
    pub url: String,
}

/// A classification reply after coercion. Confidences are always in [0, 1].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub classification: Classification,
    pub confidence_real: f64,
    pub confidence_fake: f64,
    pub explanation: Option<String>,
    pub suggestion: Option<String>,
    pub factors: Vec<Factor>,
    pub related_news: Vec<NewsItem>,
    pub verification_tools: Vec<VerificationTool>,
}

/// Reply of the service's status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
}

impl ServiceStatus {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}
