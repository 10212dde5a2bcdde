// capability.rs - Capability keyword table.
//
// Same mechanism as domain classification: an ordered table matched by
// token prefix. Unlike domains, a phase may require every capability that
// matches, not just the best one.

use std::collections::BTreeSet;

use gs_model::keywords::{self, KeywordTable};

/// Capability → keyword stems. Capability names are already normalised.
pub const CAPABILITY_KEYWORDS: &KeywordTable<&str> = &[
    ("analysis", &["analy", "inspect", "profil", "investigat", "triage"]),
    (
        "data-access",
        &["collect", "gather", "load", "fetch", "inventor", "discover"],
    ),
    (
        "data-transform",
        &[
            "transform", "clean", "normaliz", "aggregate", "enrich", "ingest", "etl", "convert",
            "map",
        ],
    ),
    ("storage", &["export", "store", "persist", "publish", "upload"]),
    (
        "vulnerability-scan",
        &["scan", "vulnerab", "cve", "threat", "exploit"],
    ),
    ("test-execution", &["test", "suite", "regression", "assert"]),
    ("coverage-analysis", &["coverage", "untested", "uncovered"]),
    (
        "deployment",
        &[
            "deploy", "release", "rollout", "rollback", "provision", "production", "environment",
        ],
    ),
    (
        "monitoring",
        &[
            "monitor", "alert", "metric", "health", "observab", "uptime", "instrument",
        ],
    ),
    (
        "api-integration",
        &["api", "endpoint", "webhook", "integrat", "connect", "sync", "contract"],
    ),
    (
        "scheduling",
        &["schedul", "cron", "trigger", "automat", "recurring"],
    ),
    ("scripting", &["script", "implement", "automat"]),
    (
        "report-generation",
        &["report", "summar", "document", "chart", "dashboard", "draft"],
    ),
    (
        "validation",
        &["validat", "verif", "check", "confirm", "smoke"],
    ),
    (
        "planning",
        &["plan", "design", "strateg", "prioriti", "outline", "model"],
    ),
    (
        "remediation",
        &["fix", "remediat", "patch", "mitigat", "repair", "correct", "retry", "retries"],
    ),
];

/// Every capability whose keywords occur in the text.
pub fn derive_capabilities(text: &str) -> BTreeSet<String> {
    keywords::all_matches(CAPABILITY_KEYWORDS, text)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_model::normalize_capability;

    fn caps(text: &str) -> Vec<String> {
        derive_capabilities(text).into_iter().collect()
    }

    #[test]
    fn capability_names_are_normalised() {
        for (name, keywords) in CAPABILITY_KEYWORDS {
            assert_eq!(normalize_capability(name), *name);
            assert!(!keywords.is_empty(), "{} has no keywords", name);
        }
    }

    #[test]
    fn capability_names_are_unique() {
        let names: BTreeSet<&str> = CAPABILITY_KEYWORDS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), CAPABILITY_KEYWORDS.len());
    }

    #[test]
    fn derives_multiple_capabilities() {
        assert_eq!(
            caps("Run the test suite and measure coverage"),
            vec!["coverage-analysis", "test-execution"]
        );
        assert_eq!(
            caps("Scan dependencies and patch vulnerabilities"),
            vec!["remediation", "vulnerability-scan"]
        );
    }

    #[test]
    fn unrelated_text_has_no_capabilities() {
        assert!(caps("Hand the outcome over to the requester").is_empty());
    }
}
