// domain.rs - Keyword-table domain classification.
//
// The table is ordered: a domain declared earlier wins a tie on keyword
// overlap. `Domain::Unknown` is the answer when no keyword matches.

use gs_model::keywords::{self, KeywordTable};
use gs_model::Domain;

/// Domain → keyword stems, in tie-break order. Stems match by token prefix,
/// so "vulnerab" covers "vulnerable" and "vulnerability".
pub const DOMAIN_KEYWORDS: &KeywordTable<Domain> = &[
    (
        Domain::DataProcessing,
        &[
            "data", "dataset", "csv", "etl", "transform", "parse", "ingest", "aggregate", "dedup",
            "normaliz",
        ],
    ),
    (
        Domain::SecurityAnalysis,
        &[
            "security", "scan", "vulnerab", "audit", "cve", "exploit", "threat", "secret",
            "penetration", "malware",
        ],
    ),
    (
        Domain::Automation,
        &[
            "automat", "script", "workflow", "schedul", "cron", "batch", "repetitive", "routine",
        ],
    ),
    (
        Domain::Testing,
        &[
            "test", "coverage", "unit", "regression", "qa", "assert", "fixture", "flaky", "e2e",
        ],
    ),
    (
        Domain::Deployment,
        &[
            "deploy", "release", "rollout", "ship", "container", "kubernetes", "docker",
            "provision", "rollback",
        ],
    ),
    (
        Domain::Monitoring,
        &[
            "monitor", "alert", "metric", "uptime", "health", "observab", "latency", "incident",
        ],
    ),
    (
        Domain::Integration,
        &[
            "integrat", "api", "webhook", "connect", "sync", "endpoint", "oauth", "third-party",
        ],
    ),
    (
        Domain::Reporting,
        &["report", "summar", "digest", "chart", "dashboard", "insight", "visualiz"],
    ),
];

/// Classify text into a domain: highest keyword overlap, first-declared on ties.
pub fn classify_domain(text: &str) -> Domain {
    keywords::best_match(DOMAIN_KEYWORDS, text).unwrap_or(Domain::Unknown)
}

/// Keyword overlap of every domain in table order, for diagnostics.
pub fn domain_scores(text: &str) -> Vec<(Domain, usize)> {
    keywords::overlaps(DOMAIN_KEYWORDS, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_declares_every_known_domain_once() {
        let domains: Vec<Domain> = DOMAIN_KEYWORDS.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            domains,
            vec![
                Domain::DataProcessing,
                Domain::SecurityAnalysis,
                Domain::Automation,
                Domain::Testing,
                Domain::Deployment,
                Domain::Monitoring,
                Domain::Integration,
                Domain::Reporting,
            ]
        );
        assert!(DOMAIN_KEYWORDS.iter().all(|(_, kws)| !kws.is_empty()));
    }

    #[test]
    fn classifies_representative_goals() {
        assert_eq!(
            classify_domain("Scan the repo for vulnerabilities"),
            Domain::SecurityAnalysis
        );
        assert_eq!(classify_domain("Analyze test coverage"), Domain::Testing);
        assert_eq!(
            classify_domain("Deploy the service to kubernetes"),
            Domain::Deployment
        );
        assert_eq!(
            classify_domain("Transform the CSV dataset"),
            Domain::DataProcessing
        );
        assert_eq!(classify_domain("Write a weekly summary report"), Domain::Reporting);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(classify_domain("Make the thing better"), Domain::Unknown);
        assert_eq!(classify_domain(""), Domain::Unknown);
    }

    #[test]
    fn tie_break_follows_declaration_order() {
        // One keyword each for security-analysis ("audit") and reporting ("report").
        let text = "audit and report";
        let scores = domain_scores(text);
        let security = scores
            .iter()
            .find(|(d, _)| *d == Domain::SecurityAnalysis)
            .unwrap()
            .1;
        let reporting = scores.iter().find(|(d, _)| *d == Domain::Reporting).unwrap().1;
        assert_eq!(security, reporting);

        for _ in 0..20 {
            assert_eq!(classify_domain(text), Domain::SecurityAnalysis);
        }
    }

    #[test]
    fn larger_overlap_wins_over_earlier_domain() {
        // data-processing gets one hit, monitoring gets three.
        assert_eq!(
            classify_domain("monitor data latency and alert"),
            Domain::Monitoring
        );
    }
}
