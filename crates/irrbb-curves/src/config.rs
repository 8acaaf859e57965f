//! Scenario batch configuration.
//!
//! Scenario batches are described in TOML or JSON:
//!
//! ```toml
//! [[scenarios]]
//! name = "parallel_up"
//! shift_bps = 200
//!
//! [[scenarios]]
//! name = "eur_down"
//! shift_bps = -100
//! apply_to = ["EUR_ESTR", "EUR_EURIBOR_3M"]
//! ```
//!
//! Configurations are validated after loading; an invalid file never yields
//! a [`ScenarioConfig`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve_set::ForwardCurveSet;
use crate::error::{CurveError, CurveResult};
use crate::scenarios::{apply_parallel_shock, ensure_unique_names, ParallelShock, ShockTarget};

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path of the offending field, e.g. `scenarios[1].name`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a validation issue.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One scenario of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockSpec {
    /// Scenario name, unique within the batch.
    pub name: String,
    /// Parallel shift in basis points.
    pub shift_bps: f64,
    /// Indices to shift; all indices when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<Vec<String>>,
}

impl ShockSpec {
    /// The shock this spec describes.
    pub fn shock(&self) -> ParallelShock {
        ParallelShock::new(self.name.clone(), self.shift_bps)
    }

    /// The indices this spec targets.
    pub fn target(&self) -> ShockTarget {
        ShockTarget::from(self.apply_to.clone())
    }

    fn validate(&self, prefix: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("{prefix}.name"),
                "Name cannot be empty",
            ));
        }

        if !self.shift_bps.is_finite() {
            issues.push(ValidationIssue::new(
                format!("{prefix}.shift_bps"),
                "Shift must be a finite number of basis points",
            ));
        }

        if let Some(indices) = &self.apply_to {
            if indices.iter().all(|name| name.trim().is_empty()) {
                issues.push(ValidationIssue::new(
                    format!("{prefix}.apply_to"),
                    "Target must name at least one index; omit it to shift all indices",
                ));
            }
        }

        issues
    }
}

/// A batch of parallel scenarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Scenarios, in evaluation order.
    pub scenarios: Vec<ShockSpec>,
}

impl ScenarioConfig {
    /// The EBA standard parallel pair: `parallel_up` and `parallel_down`.
    ///
    /// Both arguments are magnitudes in basis points.
    pub fn eba_parallel(up_bps: f64, down_bps: f64) -> Self {
        let spec = |shock: ParallelShock| ShockSpec {
            name: shock.name().to_string(),
            shift_bps: shock.shift_bps(),
            apply_to: None,
        };

        Self {
            scenarios: vec![
                spec(ParallelShock::up(up_bps)),
                spec(ParallelShock::down(down_bps)),
            ],
        }
    }

    /// Loads and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidConfig` for malformed TOML or validation
    /// failures, and `CurveError::DuplicateScenario` for repeated names.
    pub fn from_toml_str(s: &str) -> CurveResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| CurveError::invalid_config(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// As for [`ScenarioConfig::from_toml_str`].
    pub fn from_json_str(s: &str) -> CurveResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| CurveError::invalid_config(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> CurveResult<String> {
        toml::to_string(self).map_err(|e| CurveError::invalid_config(e.to_string()))
    }

    /// Every validation problem, or an empty list if the batch is valid.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.scenarios.is_empty() {
            issues.push(ValidationIssue::new("scenarios", "At least one scenario is required"));
        }

        let mut seen = BTreeSet::new();
        for (i, spec) in self.scenarios.iter().enumerate() {
            let prefix = format!("scenarios[{i}]");
            issues.extend(spec.validate(&prefix));
            if !seen.insert(spec.name.as_str()) {
                issues.push(ValidationIssue::new(
                    format!("{prefix}.name"),
                    format!("Duplicate scenario name '{}'", spec.name),
                ));
            }
        }

        issues
    }

    /// Returns true if the batch has no validation problems.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates, mapping problems onto a single error.
    ///
    /// # Errors
    ///
    /// `CurveError::DuplicateScenario` for repeated names, otherwise
    /// `CurveError::InvalidConfig` listing every problem.
    pub fn validate_or_error(&self) -> CurveResult<()> {
        ensure_unique_names(self.scenarios.iter().map(|spec| spec.name.as_str()))?;

        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let reason = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(CurveError::invalid_config(reason))
    }

    /// Derives every scenario from `base`, keyed by name.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or the first scenario that cannot
    /// be applied.
    pub fn run(&self, base: &ForwardCurveSet) -> CurveResult<BTreeMap<String, ForwardCurveSet>> {
        self.validate_or_error()?;

        self.scenarios
            .iter()
            .map(|spec| {
                apply_parallel_shock(base, &spec.shock(), &spec.target())
                    .map(|set| (spec.name.clone(), set))
            })
            .collect()
    }
}
