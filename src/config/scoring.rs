//! Scoring, plotting, and table-annotation settings
//!
//! Score keys are opaque names resolved by the scoring subsystem; this module
//! only carries them. `ScoreMethod` kwargs are passed through unchanged.

use crate::config::coerce::{self, JsonMap};
use crate::error::ConfigError;
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

/// One named conservation-scoring method and its keyword arguments
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreMethod {
    pub score_key: String,
    /// Opaque payload, interpreted only by the scoring subsystem
    pub score_kwargs: JsonMap,
}

impl ScoreMethod {
    #[must_use]
    pub fn new<K: Into<String>>(score_key: K, score_kwargs: JsonMap) -> Self {
        Self {
            score_key: score_key.into(),
            score_kwargs,
        }
    }
}

impl Default for ScoreMethod {
    fn default() -> Self {
        Self::new("property_entropy", JsonMap::new())
    }
}

/// Parameters for the multi-level score plots
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MultiLevelPlotConf {
    pub score_key: String,
    pub output_folder: PathBuf,
    /// Skip plotting a level with fewer background scores than this
    pub num_bg_scores_cutoff: usize,
}

impl Default for MultiLevelPlotConf {
    fn default() -> Self {
        Self {
            score_key: "property_entropy".to_owned(),
            output_folder: PathBuf::from("plots"),
            num_bg_scores_cutoff: 20,
        }
    }
}

impl MultiLevelPlotConf {
    const KEYS: &'static [&'static str] = &["score_key", "output_folder", "num_bg_scores_cutoff"];

    /// Build from a loosely-typed parameter block, applying defaults for
    /// absent keys
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        coerce::reject_unknown_keys("multilevel_plot_params", map, Self::KEYS)?;
        let mut conf = Self::default();
        if let Some(value) = map.get("score_key") {
            conf.score_key = coerce::coerce_string("score_key", value)?;
        }
        if let Some(value) = map.get("output_folder") {
            conf.output_folder = coerce::coerce_path("output_folder", value)?;
        }
        if let Some(value) = map.get("num_bg_scores_cutoff") {
            conf.num_bg_scores_cutoff = coerce::coerce_count("num_bg_scores_cutoff", value)?;
        }
        Ok(conf)
    }
}

/// Which score, phylogenetic levels, and motif pattern annotate the output
/// table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableAnnotationConf {
    pub score_key_for_table: String,
    /// Motif pattern highlighted in the annotated table, validated to compile
    pub motif_regex: Option<String>,
    pub levels: Vec<String>,
}

impl Default for TableAnnotationConf {
    fn default() -> Self {
        Self {
            score_key_for_table: "property_entropy".to_owned(),
            motif_regex: None,
            levels: Vec::new(),
        }
    }
}

impl TableAnnotationConf {
    const KEYS: &'static [&'static str] = &["score_key_for_table", "motif_regex", "levels"];

    /// Build from a loosely-typed parameter block, applying defaults for
    /// absent keys
    ///
    /// # Errors
    ///
    /// Returns an error if a key is unrecognized, a value cannot be coerced,
    /// or `motif_regex` does not compile.
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        coerce::reject_unknown_keys("table_annotation_params", map, Self::KEYS)?;
        let mut conf = Self::default();
        if let Some(value) = map.get("score_key_for_table") {
            conf.score_key_for_table = coerce::coerce_string("score_key_for_table", value)?;
        }
        if let Some(value) = map.get("motif_regex") {
            if !value.is_null() {
                let pattern = coerce::coerce_string("motif_regex", value)?;
                Regex::new(&pattern).map_err(|e| {
                    ConfigError::invalid_value("motif_regex", format!("pattern does not compile: {e}"))
                })?;
                conf.motif_regex = Some(pattern);
            }
        }
        if let Some(value) = map.get("levels") {
            conf.levels = coerce::coerce_string_list("levels", value)?;
        }
        Ok(conf)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(value: serde_json::Value) -> JsonMap {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn plot_conf_defaults() {
        let conf = MultiLevelPlotConf::from_map(&JsonMap::new()).unwrap();
        assert_eq!(conf.score_key, "property_entropy");
        assert_eq!(conf.output_folder, PathBuf::from("plots"));
        assert_eq!(conf.num_bg_scores_cutoff, 20);
    }

    #[test]
    fn annotation_levels_preserve_order() {
        let conf = TableAnnotationConf::from_map(&block(json!({
            "levels": ["Vertebrata", "Tetrapoda", "Mammalia"]
        })))
        .unwrap();
        assert_eq!(conf.levels, ["Vertebrata", "Tetrapoda", "Mammalia"]);
    }

    #[test]
    fn motif_regex_must_compile() {
        let conf = TableAnnotationConf::from_map(&block(json!({
            "motif_regex": "P[TS]AP"
        })))
        .unwrap();
        assert_eq!(conf.motif_regex.as_deref(), Some("P[TS]AP"));

        let err = TableAnnotationConf::from_map(&block(json!({"motif_regex": "["})))
            .unwrap_err();
        assert!(err.to_string().contains("motif_regex"));
    }

    #[test]
    fn score_method_kwargs_pass_through() {
        let kwargs = block(json!({
            "matrix_name": "EDSSMat50_max_off_diagonal_norm",
            "gap_frac_cutoff": 0.2
        }));
        let method = ScoreMethod::new("property_entropy", kwargs.clone());
        assert_eq!(method.score_key, "property_entropy");
        assert_eq!(method.score_kwargs, kwargs);
    }
}
