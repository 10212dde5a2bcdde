// ontology.rs - Fixed per-domain phase ontologies.
//
// Each domain has seven templates in execution order. `rank` orders them by
// how essential they are: a plan with N phases uses the N lowest-ranked
// templates, still emitted in execution order. So a simple (3-phase) testing
// plan is Discovery → Execution → Analysis, and the full 7-phase plan adds
// planning, remediation, regression and reporting around it.
//
// `parallel` marks a template that shares its predecessor with the phase
// before it instead of depending on it; the phase after both depends on both.
// `carries_goal` marks the working phases, whose description is extended
// with the goal statement so goal-specific capabilities land on them.

use gs_model::Domain;

/// Number of templates in every ontology (and the largest possible plan).
pub const ONTOLOGY_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub rank: u8,
    pub parallel: bool,
    pub carries_goal: bool,
}

const fn step(name: &'static str, description: &'static str, rank: u8) -> PhaseTemplate {
    PhaseTemplate {
        name,
        description,
        rank,
        parallel: false,
        carries_goal: false,
    }
}

const fn work(name: &'static str, description: &'static str, rank: u8) -> PhaseTemplate {
    PhaseTemplate {
        carries_goal: true,
        ..step(name, description, rank)
    }
}

const fn beside(name: &'static str, description: &'static str, rank: u8) -> PhaseTemplate {
    PhaseTemplate {
        parallel: true,
        ..step(name, description, rank)
    }
}

const GENERIC: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Analysis", "Analyze the request and gather the relevant inputs.", 1),
    step("Planning", "Plan the approach and break the work into steps.", 4),
    work("Execution", "Carry out the core work.", 2),
    step("Verification", "Verify the results against the success criteria.", 3),
    step("Review", "Review the outcome and fix remaining issues.", 5),
    beside("Reporting", "Summarize the results in a short report.", 6),
    step("Handoff", "Hand the outcome over to the requester.", 7),
];

const DATA_PROCESSING: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Ingestion", "Ingest and load the source records.", 1),
    step("Profiling", "Profile the records and analyze their quality.", 4),
    work("Transformation", "Transform, clean and normalize the records.", 2),
    step("Validation", "Validate the output against the expected schema.", 3),
    step("Enrichment", "Aggregate and enrich the transformed records.", 5),
    beside("Export", "Export the processed records to their destination.", 6),
    step("Run Summary", "Summarize the processing run.", 7),
];

const SECURITY_ANALYSIS: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Reconnaissance", "Inventory assets, dependencies and exposed endpoints.", 1),
    step("Threat Modeling", "Model threats and plan the scan strategy.", 4),
    work("Scanning", "Scan code and dependencies for vulnerabilities.", 2),
    step("Triage", "Triage findings and prioritize them by severity.", 3),
    step("Remediation", "Patch or mitigate confirmed vulnerabilities.", 5),
    step("Verification", "Re-scan to verify the fixes.", 6),
    beside("Audit Report", "Write the security audit report.", 7),
];

const AUTOMATION: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Discovery", "Discover the manual steps and inventory the current workflow.", 1),
    step("Design", "Design the automated workflow and its triggers.", 4),
    work("Implementation", "Implement the automation scripts.", 2),
    step("Validation", "Validate the automation with dry runs.", 3),
    step("Rollout", "Enable the automation in production on a recurring schedule.", 5),
    step("Monitoring", "Monitor scheduled runs and alert on failures.", 6),
    beside("Documentation", "Document the automation for operators.", 7),
];

const TESTING: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Discovery", "Inventory the code under test and collect existing suites.", 1),
    step("Test Planning", "Plan test cases for uncovered behaviour.", 4),
    work("Execution", "Run the test suite and collect results.", 2),
    step("Analysis", "Analyze the results and measure coverage.", 3),
    step("Remediation", "Fix failing tests and add missing cases.", 5),
    step("Regression", "Re-run the regression suite to confirm fixes.", 6),
    beside("Reporting", "Summarize findings in a test report.", 7),
];

const DEPLOYMENT: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Preparation", "Collect release artifacts and check prerequisites.", 1),
    step("Provisioning", "Provision the target environment.", 4),
    work("Deployment", "Deploy the release to the target environment.", 2),
    step("Smoke Testing", "Run smoke tests against the deployed service.", 3),
    step("Monitoring", "Monitor health and error rates after the release.", 5),
    beside("Rollback Planning", "Plan a rollback path for the release.", 6),
    step("Handoff", "Document the release for operators.", 7),
];

const MONITORING: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Baseline", "Collect current metrics and establish a baseline.", 1),
    step("Instrumentation", "Instrument services to emit metrics.", 4),
    work("Alerting", "Configure alert rules and thresholds.", 2),
    step("Verification", "Verify alerts fire on simulated incidents.", 3),
    step("Dashboards", "Build dashboards for key health indicators.", 5),
    beside("Escalation", "Define on-call escalation and ownership.", 6),
    step("Tuning", "Review alert noise and tune thresholds.", 7),
];

const INTEGRATION: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Discovery", "Review the API contracts of both systems.", 1),
    step("Mapping", "Map fields between the systems and plan the flow.", 4),
    work("Implementation", "Connect the systems through their endpoints.", 2),
    step("Contract Testing", "Test the integration against sandbox endpoints.", 3),
    step("Error Handling", "Add retries and fix failure paths.", 5),
    step("Sync Verification", "Verify both systems stay in sync.", 6),
    beside("Documentation", "Document the integration for maintainers.", 7),
];

const REPORTING: [PhaseTemplate; ONTOLOGY_SIZE] = [
    work("Collection", "Collect the source figures for the report.", 1),
    step("Outline", "Outline the report structure and key questions.", 4),
    work("Analysis", "Analyze the collected figures.", 2),
    step("Drafting", "Draft the report summary.", 3),
    beside("Visualization", "Chart the key figures.", 5),
    step("Review", "Verify figures and correct errors.", 6),
    step("Distribution", "Publish the report to stakeholders.", 7),
];

/// The ontology used for a domain; `Unknown` gets the generic one.
pub fn ontology_for(domain: Domain) -> &'static [PhaseTemplate; ONTOLOGY_SIZE] {
    match domain {
        Domain::DataProcessing => &DATA_PROCESSING,
        Domain::SecurityAnalysis => &SECURITY_ANALYSIS,
        Domain::Automation => &AUTOMATION,
        Domain::Testing => &TESTING,
        Domain::Deployment => &DEPLOYMENT,
        Domain::Monitoring => &MONITORING,
        Domain::Integration => &INTEGRATION,
        Domain::Reporting => &REPORTING,
        Domain::Unknown => &GENERIC,
    }
}

/// The `count` most essential templates of an ontology, in execution order.
pub fn select_templates(
    ontology: &'static [PhaseTemplate; ONTOLOGY_SIZE],
    count: usize,
) -> Vec<&'static PhaseTemplate> {
    ontology.iter().filter(|t| usize::from(t.rank) <= count).collect()
}
