// scoring.rs - Relevance of a skill's capability tags to a phase's requirements.

use std::collections::BTreeSet;

/// Jaccard overlap `|tags ∩ required| / |tags ∪ required|`, in `[0, 1]`.
///
/// Two empty sets score 0: a skill that declares nothing is not relevant to
/// a phase that requires nothing.
pub fn relevance(tags: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    let union = tags.union(required).count();
    if union == 0 {
        return 0.0;
    }
    let shared = tags.intersection(required).count();
    shared as f64 / union as f64
}
