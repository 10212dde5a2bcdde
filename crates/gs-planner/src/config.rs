// config.rs - Planner tuning: phase counts per complexity and the duration model.
//
// Both structs deserialize with every field optional, so a `[planner]` table
// in goalsmith.toml only has to name what it overrides.

use serde::{Deserialize, Serialize};

use gs_model::Complexity;

/// Inclusive range of phase counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseRange {
    pub min: usize,
    pub max: usize,
}

impl PhaseRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min, self.max)
    }
}

/// Phase count range for each complexity class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhaseCounts {
    pub simple: PhaseRange,
    pub moderate: PhaseRange,
    pub complex: PhaseRange,
}

impl Default for PhaseCounts {
    fn default() -> Self {
        Self {
            simple: PhaseRange::new(3, 3),
            moderate: PhaseRange::new(4, 5),
            complex: PhaseRange::new(5, 7),
        }
    }
}

impl PhaseCounts {
    pub fn range_for(&self, complexity: Complexity) -> PhaseRange {
        match complexity {
            Complexity::Simple => self.simple,
            Complexity::Moderate => self.moderate,
            Complexity::Complex => self.complex,
        }
    }
}

/// Complexity-weighted duration estimate, in minutes.
///
/// - simple: `simple_total`
/// - moderate: `moderate_base + per_criterion * criteria`, clamped to
///   `moderate_base..=moderate_max`
/// - complex: `complex_base + per_criterion * criteria`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DurationModel {
    pub simple_total: f64,
    pub moderate_base: f64,
    pub moderate_max: f64,
    pub complex_base: f64,
    pub per_criterion: f64,
}

impl Default for DurationModel {
    fn default() -> Self {
        Self {
            simple_total: 5.0,
            moderate_base: 15.0,
            moderate_max: 30.0,
            complex_base: 30.0,
            per_criterion: 5.0,
        }
    }
}

impl DurationModel {
    /// Total minutes for a goal of this complexity with `criteria` success criteria.
    pub fn total_minutes(&self, complexity: Complexity, criteria: usize) -> f64 {
        let weighted = self.per_criterion * criteria as f64;
        match complexity {
            Complexity::Simple => self.simple_total,
            Complexity::Moderate => (self.moderate_base + weighted)
                .clamp(self.moderate_base, self.moderate_max.max(self.moderate_base)),
            Complexity::Complex => self.complex_base + weighted,
        }
    }
}

/// Everything the planner can be tuned with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    pub phase_counts: PhaseCounts,
    pub duration: DurationModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranges() {
        let counts = PhaseCounts::default();
        assert_eq!(counts.range_for(Complexity::Simple), PhaseRange::new(3, 3));
        assert_eq!(counts.range_for(Complexity::Moderate), PhaseRange::new(4, 5));
        assert_eq!(counts.range_for(Complexity::Complex), PhaseRange::new(5, 7));
    }

    #[test]
    fn range_clamps() {
        let r = PhaseRange::new(4, 5);
        assert_eq!(r.clamp(0), 4);
        assert_eq!(r.clamp(5), 5);
        assert_eq!(r.clamp(9), 5);
    }

    #[test]
    fn duration_model_defaults() {
        let d = DurationModel::default();
        assert_eq!(d.total_minutes(Complexity::Simple, 2), 5.0);
        assert_eq!(d.total_minutes(Complexity::Moderate, 0), 15.0);
        assert_eq!(d.total_minutes(Complexity::Moderate, 3), 30.0);
        assert_eq!(d.total_minutes(Complexity::Moderate, 10), 30.0);
        assert_eq!(d.total_minutes(Complexity::Complex, 5), 55.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: PlannerConfig = toml::from_str(
            r#"
[phase_counts.complex]
min = 6
max = 7

[duration]
per_criterion = 2.0
"#,
        )
        .unwrap();
        assert_eq!(cfg.phase_counts.complex, PhaseRange::new(6, 7));
        assert_eq!(cfg.phase_counts.simple, PhaseRange::new(3, 3));
        assert_eq!(cfg.duration.per_criterion, 2.0);
        assert_eq!(cfg.duration.simple_total, 5.0);
    }
}
