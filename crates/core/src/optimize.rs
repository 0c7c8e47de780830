//! Parsing of SEO optimization responses.
//!
//! The model is asked for a JSON object but is free to answer with anything.
//! Parsing never fails: missing or unusable fields fall back to the caller's
//! original values, and non-JSON text falls back entirely.

use serde::Serialize;
use serde_json::Value;

/// Score reported when the model does not supply a usable one.
pub const DEFAULT_SEO_SCORE: u8 = 50;

pub const MIN_SEO_SCORE: u8 = 1;
pub const MAX_SEO_SCORE: u8 = 100;

/// Optimized metadata for a single video.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub optimized_title: String,
    pub optimized_description: String,
    pub optimized_tags: Vec<String>,
    pub seo_score: u8,
}

impl Optimization {
    /// The unchanged input with the default score.
    pub fn fallback(title: &str, description: &str, tags: &[String]) -> Self {
        Self {
            optimized_title: title.to_string(),
            optimized_description: description.to_string(),
            optimized_tags: tags.to_vec(),
            seo_score: DEFAULT_SEO_SCORE,
        }
    }
}

/// Interpret raw model output as an [`Optimization`].
pub fn parse_optimization(raw: &str, title: &str, description: &str, tags: &[String]) -> Optimization {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Optimization response is not JSON, echoing input");
            return Optimization::fallback(title, description, tags);
        }
    };

    Optimization {
        optimized_title: non_empty_str(&parsed, "optimizedTitle").unwrap_or(title).to_string(),
        optimized_description: non_empty_str(&parsed, "optimizedDescription")
            .unwrap_or(description)
            .to_string(),
        optimized_tags: string_array(&parsed, "optimizedTags").unwrap_or_else(|| tags.to_vec()),
        seo_score: seo_score(&parsed),
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str().filter(|s| !s.is_empty())
}

/// Non-string entries are skipped.
fn string_array(value: &Value, key: &str) -> Option<Vec<String>> {
    let items = value.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
    )
}

/// A missing, zero, or non-numeric score maps to the default; anything else
/// is rounded and clamped into `1..=100`. Numeric strings such as `"87"`
/// are accepted.
fn seo_score(value: &Value) -> u8 {
    let score = value.get("seoScore").and_then(|raw| {
        raw.as_f64()
            .or_else(|| raw.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
    });
    match score {
        Some(score) if score != 0.0 && score.is_finite() => {
            score
                .round()
                .clamp(f64::from(MIN_SEO_SCORE), f64::from(MAX_SEO_SCORE)) as u8
        }
        _ => DEFAULT_SEO_SCORE,
    }
}
