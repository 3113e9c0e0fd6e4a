// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Analysis options shared by the table-level operations.

use serde::{Deserialize, Serialize};

use crate::discretization::DiscretizationAlgorithm;
use crate::error::{Result, StatsError};
use crate::metrics::VarianceKind;
use crate::preprocessing::ScalingOperation;

/// Options for discretization, metrics and scaling.
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// use tabstats::config::AnalysisConfig;
/// use tabstats::discretization::DiscretizationAlgorithm;
///
/// let config = AnalysisConfig::from_json_str(r#"{ "num_bins": 3, "algorithm": "EF" }"#).unwrap();
/// assert_eq!(config.num_bins, 3);
/// assert_eq!(config.algorithm, DiscretizationAlgorithm::EqualFrequency);
/// assert!(!config.normalize_entropy);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub num_bins: usize,
    pub algorithm: DiscretizationAlgorithm,
    pub variance_kind: VarianceKind,
    pub normalize_entropy: bool,
    pub scaling: ScalingOperation,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_bins: 5,
            algorithm: DiscretizationAlgorithm::default(),
            variance_kind: VarianceKind::default(),
            normalize_entropy: false,
            scaling: ScalingOperation::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| StatsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that cannot be expressed in the field types, currently the
    /// bin count used by discretization.
    pub fn validate(&self) -> Result<()> {
        if self.num_bins == 0 {
            return Err(StatsError::InvalidBinCount(self.num_bins));
        }
        Ok(())
    }
}
