//! Audit trail model.

use serde::{Deserialize, Serialize};

/// A record of one decision made while resolving a tariff.
///
/// Steps carry their inputs and outputs as JSON so that a resolution can be
/// explained after the fact without re-running it.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "tariff_resolution".to_string(),
///     rule_name: "Tariff Resolution".to_string(),
///     input: serde_json::json!({"month": 6}),
///     output: serde_json::json!({"tier": "peak"}),
///     reasoning: "10:00 falls in peak window 09:00-17:00".to_string(),
/// };
/// assert_eq!(step.rule_id, "tariff_resolution");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
