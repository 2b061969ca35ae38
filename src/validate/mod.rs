//! Weighted rule-based validation of acquired text.
//!
//! [`validate`] is a pure function: it scores a piece of text against
//! independent rule groups (error signatures, length bands, positive
//! indicators, markup artifacts, repetition, encoding anomalies), sums the
//! fixed weights from a 0.5 base, clamps to `[0, 1]`, and applies two hard
//! vetoes. Same text and URL in, same verdict out — no internal state.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ContentType, ValidationVerdict};
use serde::Serialize;

const BASE_CONFIDENCE: f64 = 0.5;
const VALID_THRESHOLD: f64 = 0.3;
const MAX_ISSUES: usize = 2;

const ERROR_PATTERN_WEIGHT: f64 = -0.8;
const TOO_SHORT_WEIGHT: f64 = -0.6;
const VERY_SHORT_WEIGHT: f64 = -0.3;
const LENGTH_OK_WEIGHT: f64 = 0.2;
const STRONG_INDICATOR_WEIGHT: f64 = 0.4;
const WEAK_INDICATOR_WEIGHT: f64 = 0.2;
const NO_INDICATOR_WEIGHT: f64 = -0.1;
const HTML_ARTIFACT_WEIGHT: f64 = -0.2;
const REPETITION_WEIGHT: f64 = -0.3;
const ENCODING_WEIGHT: f64 = -0.2;

const TOO_SHORT_CHARS: usize = 50;
const SHORT_CHARS: usize = 100;
const MAX_TAG_COUNT: usize = 10;
const MAX_CHAR_RUN: usize = 11;

/// Phrases an upstream failure hides behind, posing as page text.
/// Japanese and Chinese portals tend to return these with HTTP 200.
const ERROR_PHRASES: &[&str] = &[
    // Japanese
    "本文が取得できませんでした",
    "アクセスできません",
    "エラーが発生しました",
    "ページが見つかりません",
    "接続できません",
    // English
    r"could not.*fetch",
    r"unable to.*retrieve",
    r"failed to.*load",
    r"error.*occurred",
    r"page not found",
    r"access denied",
    r"connection.*failed",
    r"timeout.*error",
    r"404.*not found",
    r"500.*internal server error",
    r"503.*service unavailable",
    // Chinese
    "无法获取",
    "获取失败",
    "连接失败",
    "页面不存在",
    "访问被拒绝",
];

static ERROR_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ERROR_PHRASES
        .iter()
        .map(|p| (*p, Regex::new(&format!("(?i){}", p)).expect("valid regex")))
        .collect()
});

/// Words and labels that genuine article text tends to contain
const POSITIVE_PHRASES: &[&str] = &[
    r"abstract:?\s*[a-zA-Z]",
    r"title:?\s*[a-zA-Z]",
    "introduction",
    "conclusion",
    "methodology",
    "results",
    "discussion",
    "research",
    "study",
    "analysis",
    "experiment",
];

static POSITIVE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    POSITIVE_PHRASES
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("valid regex"))
        .collect()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// C0/C1 control ranges that survive a broken decode
static CONTROL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\x84\x86-\x9F]").expect("valid regex")
});

/// Validate acquired text and produce a verdict.
///
/// `url` is only consulted for content-type classification; the score
/// comes from the text alone. Empty input short-circuits every rule.
pub fn validate(content: &str, url: &str) -> ValidationVerdict {
    if content.is_empty() {
        return ValidationVerdict {
            is_valid: false,
            confidence_score: 0.0,
            issues: vec!["Empty content".to_string()],
            content_type: ContentType::Empty,
            length: 0,
            positive_indicator_count: 0,
        };
    }

    let mut issues = Vec::new();
    let mut total = 0.0;

    for (phrase, re) in ERROR_RES.iter() {
        if re.is_match(content) {
            issues.push(format!("Error pattern detected: {}", phrase));
            total += ERROR_PATTERN_WEIGHT;
        }
    }

    let length = content.chars().count();
    if length < TOO_SHORT_CHARS {
        issues.push("Content too short".to_string());
        total += TOO_SHORT_WEIGHT;
    } else if length < SHORT_CHARS {
        issues.push("Content very short".to_string());
        total += VERY_SHORT_WEIGHT;
    } else {
        total += LENGTH_OK_WEIGHT;
    }

    let positive_indicator_count = POSITIVE_RES.iter().filter(|re| re.is_match(content)).count();
    total += match positive_indicator_count {
        0 => NO_INDICATOR_WEIGHT,
        1 | 2 => WEAK_INDICATOR_WEIGHT,
        _ => STRONG_INDICATOR_WEIGHT,
    };

    if TAG_RE.find_iter(content).count() > MAX_TAG_COUNT {
        issues.push("Too many HTML tags".to_string());
        total += HTML_ARTIFACT_WEIGHT;
    }

    if has_char_run(content, MAX_CHAR_RUN) {
        issues.push("Repeated character patterns".to_string());
        total += REPETITION_WEIGHT;
    }

    if content.contains('\u{FFFD}') || CONTROL_RE.is_match(content) {
        issues.push("Encoding issues detected".to_string());
        total += ENCODING_WEIGHT;
    }

    let confidence_score = (BASE_CONFIDENCE + total).clamp(0.0, 1.0);

    let mut is_valid = confidence_score >= VALID_THRESHOLD && issues.len() <= MAX_ISSUES;

    // Error patterns and hard-short content are vetoes; positive
    // indicators are not allowed to outvote them.
    if issues
        .iter()
        .any(|i| i.contains("Error pattern detected") || i.contains("Content too short"))
    {
        is_valid = false;
    }

    ValidationVerdict {
        is_valid,
        confidence_score,
        issues,
        content_type: classify_content(content, url),
        length,
        positive_indicator_count,
    }
}

/// Validate content/URL pairs in order.
pub fn validate_batch(items: &[(String, String)]) -> Vec<ValidationVerdict> {
    items
        .iter()
        .map(|(content, url)| validate(content, url))
        .collect()
}

/// Fixed-priority content classification, independent of the score.
fn classify_content(content: &str, url: &str) -> ContentType {
    if url.to_lowercase().contains("arxiv.org") {
        return ContentType::Academic;
    }

    let lower = content.to_lowercase();
    if ["research", "study", "analysis"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return ContentType::Research;
    }
    if ["news", "article", "report"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return ContentType::News;
    }

    ContentType::Text
}

/// True when any single char repeats at least `min_run` times in a row.
/// (A run-length scan; the regex crate has no backreferences.)
fn has_char_run(text: &str, min_run: usize) -> bool {
    let mut prev = None;
    let mut run = 0;

    for ch in text.chars() {
        if Some(ch) == prev {
            run += 1;
        } else {
            prev = Some(ch);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }

    false
}

/// Aggregate statistics over a batch of verdicts
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub success_rate: f64,
    pub avg_confidence: f64,
    /// The five most frequent issues, most common first
    pub common_issues: Vec<(String, usize)>,
}

impl ValidationSummary {
    /// Summarize a batch of verdicts; an empty batch yields zeros.
    pub fn from_verdicts(verdicts: &[ValidationVerdict]) -> Self {
        if verdicts.is_empty() {
            return Self {
                total: 0,
                valid: 0,
                invalid: 0,
                success_rate: 0.0,
                avg_confidence: 0.0,
                common_issues: Vec::new(),
            };
        }

        let total = verdicts.len();
        let valid = verdicts.iter().filter(|v| v.is_valid).count();
        let avg_confidence =
            verdicts.iter().map(|v| v.confidence_score).sum::<f64>() / total as f64;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for verdict in verdicts {
            for issue in &verdict.issues {
                *counts.entry(issue.as_str()).or_default() += 1;
            }
        }
        let mut common_issues: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(issue, count)| (issue.to_string(), count))
            .collect();
        common_issues.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        common_issues.truncate(5);

        Self {
            total,
            valid,
            invalid: total - valid,
            success_rate: valid as f64 / total as f64,
            avg_confidence,
            common_issues,
        }
    }
}
