//! Hit-sequence location settings
//!
//! Controls how the target hit subsequence is located within each ortholog
//! sequence: either searched for, or taken from positions given in the input
//! table.

use crate::config::coerce::{self, JsonMap};
use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the hit subsequence is located within an ortholog sequence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Search for the hit subsequence within the ortholog
    #[default]
    Search,
    /// Use positions given in the input table
    GivenPositions,
}

impl SearchMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::GivenPositions => "given_positions",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Self::Search),
            "given_positions" => Ok(Self::GivenPositions),
            _ => Err(ConfigError::invalid_value(
                "hit_sequence_search_method",
                format!("unknown search method '{s}' (expected 'search' or 'given_positions')"),
            )),
        }
    }
}

/// Parameters for locating the hit subsequence within each ortholog
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HitSequenceConf {
    pub search_method: SearchMethod,
    /// Fall back to the longest common subsequence when an exact search fails
    pub longest_common_subsequence: bool,
    /// Minimum LCS length for a match to count
    pub lcs_min_length: usize,
    /// Expected hit length; 0 means unconstrained
    pub target_hit_length: usize,
}

impl Default for HitSequenceConf {
    fn default() -> Self {
        Self {
            search_method: SearchMethod::Search,
            longest_common_subsequence: false,
            lcs_min_length: 20,
            target_hit_length: 0,
        }
    }
}

impl HitSequenceConf {
    const KEYS: &'static [&'static str] = &[
        "hit_sequence_search_method",
        "longest_common_subsequence",
        "lcs_min_length",
        "target_hit_length",
    ];

    /// Build from a loosely-typed parameter block, applying defaults for
    /// absent keys
    ///
    /// # Errors
    ///
    /// Returns an error if a key is unrecognized, a value cannot be coerced,
    /// or the search method is not one of the two known literals.
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        coerce::reject_unknown_keys("hit_sequence_params", map, Self::KEYS)?;
        let mut conf = Self::default();
        if let Some(value) = map.get("hit_sequence_search_method") {
            conf.search_method = coerce::coerce_string("hit_sequence_search_method", value)?
                .parse::<SearchMethod>()?;
        }
        if let Some(value) = map.get("longest_common_subsequence") {
            conf.longest_common_subsequence =
                coerce::coerce_bool("longest_common_subsequence", value)?;
        }
        if let Some(value) = map.get("lcs_min_length") {
            conf.lcs_min_length = coerce::coerce_count("lcs_min_length", value)?;
        }
        if let Some(value) = map.get("target_hit_length") {
            conf.target_hit_length = coerce::coerce_count("target_hit_length", value)?;
        }
        Ok(conf)
    }
}
