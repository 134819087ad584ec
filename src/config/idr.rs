//! Intrinsically-disordered-region detection settings
//!
//! IDRs are either detected by IUPred cutoff scoring (`find_idrs`) or read
//! from a precomputed map file (`idr_map_file`). Exactly one of the two must
//! be configured.

use crate::config::coerce::{self, JsonMap};
use crate::error::ConfigError;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Parameters for IDR detection
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IdrConf {
    /// Detect IDRs from IUPred scores; mutually exclusive with `idr_map_file`
    pub find_idrs: bool,
    /// Precomputed hit-to-IDR map; mutually exclusive with `find_idrs`
    pub idr_map_file: Option<PathBuf>,
    /// IUPred score cutoff for calling a residue disordered, in [0, 1]
    pub iupred_cutoff: f64,
    /// Merge detected regions separated by gaps up to this many residues
    pub gap_merge_threshold: usize,
    /// Discard detected regions shorter than this
    pub idr_min_length: usize,
}

impl Default for IdrConf {
    fn default() -> Self {
        Self {
            find_idrs: true,
            idr_map_file: None,
            iupred_cutoff: 0.4,
            gap_merge_threshold: 10,
            idr_min_length: 8,
        }
    }
}

impl IdrConf {
    const KEYS: &'static [&'static str] = &[
        "find_idrs",
        "idr_map_file",
        "iupred_cutoff",
        "gap_merge_threshold",
        "idr_min_length",
    ];

    /// Build from a loosely-typed parameter block, applying defaults for
    /// absent keys
    ///
    /// # Errors
    ///
    /// Returns an error if a key is unrecognized, a value cannot be coerced,
    /// `iupred_cutoff` is outside [0, 1], or the `find_idrs`/`idr_map_file`
    /// exclusivity rule is violated.
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        coerce::reject_unknown_keys("idr_params", map, Self::KEYS)?;
        let mut conf = Self::default();
        if let Some(value) = map.get("find_idrs") {
            conf.find_idrs = coerce::coerce_bool("find_idrs", value)?;
        }
        if let Some(value) = map.get("idr_map_file") {
            conf.idr_map_file = coerce::coerce_optional_path("idr_map_file", value)?;
        }
        if let Some(value) = map.get("iupred_cutoff") {
            conf.iupred_cutoff = coerce::coerce_float("iupred_cutoff", value)?;
        }
        if let Some(value) = map.get("gap_merge_threshold") {
            conf.gap_merge_threshold = coerce::coerce_count("gap_merge_threshold", value)?;
        }
        if let Some(value) = map.get("idr_min_length") {
            conf.idr_min_length = coerce::coerce_count("idr_min_length", value)?;
        }
        conf.validate()?;
        Ok(conf)
    }

    /// Run field-level and cross-field validation
    ///
    /// Field coercions have already produced typed values by the time this
    /// runs; this checks ranges and the exclusivity rule.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.iupred_cutoff) {
            return Err(ConfigError::invalid_value(
                "iupred_cutoff",
                format!("must be between 0 and 1, got: {}", self.iupred_cutoff),
            )
            .into());
        }
        match (self.find_idrs, self.idr_map_file.as_ref()) {
            (true, Some(_)) => Err(ConfigError::inconsistent(
                "idr_map_file must not be provided if find_idrs is true. choose one",
            )
            .into()),
            (false, None) => Err(ConfigError::inconsistent(
                "idr_map_file must be provided if find_idrs is false",
            )
            .into()),
            _ => Ok(()),
        }
    }
}
