use serde::{Deserialize, Serialize};

/// One row of the attribution reference table.
///
/// Attribution records the judged causal relationship between an adverse
/// event and the study treatment (Treatment, Disease, Error, Unrelated,
/// Unknown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionOption {
    /// Canonical attribution name (e.g., "Treatment").
    pub name: String,
    /// Human-readable description of the causal category.
    pub description: String,
}
