//! Configuration object graph for the conservation-analysis pipeline
//!
//! A loosely-typed mapping (parsed JSON) goes in; a fully validated,
//! strongly-typed [`PipelineParameters`] tree comes out, or construction
//! fails. All coercion, range validation, and cross-field checks run once,
//! at construction time. Construction is all-or-nothing: no partially-valid
//! graph is ever returned, and the caller's mapping is never mutated.

pub mod coerce;
pub mod hit_sequence;
pub mod idr;
pub mod scoring;

use crate::error::ConfigError;
use crate::system::System;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::debug;

pub use coerce::JsonMap;
pub use hit_sequence::{HitSequenceConf, SearchMethod};
pub use idr::IdrConf;
pub use scoring::{MultiLevelPlotConf, ScoreMethod, TableAnnotationConf};

/// Ortholog-count filtering threshold
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FilterConf {
    /// Skip orthogroup levels with fewer orthologs than this
    pub min_num_orthos: usize,
}

impl Default for FilterConf {
    fn default() -> Self {
        Self { min_num_orthos: 20 }
    }
}

impl FilterConf {
    /// Build from a loosely-typed parameter block
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        coerce::reject_unknown_keys("filter_params", map, &["min_num_orthos"])?;
        let mut conf = Self::default();
        if let Some(value) = map.get("min_num_orthos") {
            conf.min_num_orthos = coerce::coerce_count("min_num_orthos", value)?;
        }
        Ok(conf)
    }
}

/// Alignment-column flanking width around the hit when slicing the MSA
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AlnSliceConf {
    /// Number of alignment columns to flank the hit sequence with
    pub n_flanking_cols: usize,
}

impl Default for AlnSliceConf {
    fn default() -> Self {
        Self { n_flanking_cols: 20 }
    }
}

impl AlnSliceConf {
    /// Build from a loosely-typed parameter block
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        coerce::reject_unknown_keys("aln_slice_params", map, &["n_flanking_cols"])?;
        let mut conf = Self::default();
        if let Some(value) = map.get("n_flanking_cols") {
            conf.n_flanking_cols = coerce::coerce_count("n_flanking_cols", value)?;
        }
        Ok(conf)
    }
}

/// The complete validated pipeline configuration
///
/// Owns one instance of each sub-record (composition, not sharing).
/// Treat as sealed once built; the pipeline reads it, nothing mutates it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PipelineParameters {
    /// Key file of the orthogroup database; must exist
    pub database_filekey: PathBuf,
    /// Input table of hits to analyze; must exist
    pub table_file: PathBuf,
    /// Score keys already present in the alignment files
    pub precalculated_aln_conservation_score_keys: Vec<String>,
    pub clear_files: bool,
    pub clean_analysis_files: bool,
    /// Scoring methods to run, in the order they were configured
    pub score_methods: Vec<ScoreMethod>,
    pub output_folder: PathBuf,
    pub hit_sequence_params: HitSequenceConf,
    pub idr_params: IdrConf,
    pub filter_params: FilterConf,
    pub multilevel_plot_params: MultiLevelPlotConf,
    pub aln_slice_params: AlnSliceConf,
    pub table_annotation_params: TableAnnotationConf,
}

const TOP_LEVEL_KEYS: &[&str] = &[
    "database_filekey",
    "table_file",
    "precalculated_aln_conservation_score_keys",
    "clear_files",
    "clean_analysis_files",
    "new_score_methods",
    "output_folder",
    "hit_sequence_params",
    "idr_params",
    "filter_params",
    "multilevel_plot_params",
    "aln_slice_params",
    "table_annotation_params",
];

/// Extract an optional nested parameter block, defaulting to an empty block
fn sub_block<'a>(map: &'a JsonMap, key: &str) -> Result<Cow<'a, JsonMap>> {
    match map.get(key) {
        Some(value) => Ok(Cow::Borrowed(coerce::require_object(key, value)?)),
        None => Ok(Cow::Owned(JsonMap::new())),
    }
}

/// Extract a required path field
fn required_path(map: &JsonMap, key: &str) -> Result<PathBuf> {
    let value = map
        .get(key)
        .ok_or_else(|| ConfigError::invalid_value(key, "required key is missing"))?;
    coerce::coerce_path(key, value)
}

impl PipelineParameters {
    /// Build the whole configuration graph from a loosely-typed mapping
    ///
    /// The sole entry point for external input. The caller's value is never
    /// mutated; everything kept is cloned out of it. Field coercion and
    /// validation run first, the file-existence checks run as the final
    /// guard.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the value is not a mapping, or contains an unrecognized key
    /// - any field fails coercion or validation ([`ConfigError::InvalidValue`])
    /// - a cross-field invariant is violated ([`ConfigError::Inconsistent`])
    /// - `table_file` or `database_filekey` does not exist
    ///   ([`ConfigError::MissingInput`])
    pub fn from_value(system: &dyn System, value: &Value) -> Result<Self> {
        let map = coerce::require_object("pipeline parameters", value)?;
        coerce::reject_unknown_keys("pipeline parameters", map, TOP_LEVEL_KEYS)?;

        let hit_sequence_params =
            HitSequenceConf::from_map(sub_block(map, "hit_sequence_params")?.as_ref())?;
        let idr_params = IdrConf::from_map(sub_block(map, "idr_params")?.as_ref())?;
        let filter_params = FilterConf::from_map(sub_block(map, "filter_params")?.as_ref())?;
        let multilevel_plot_params =
            MultiLevelPlotConf::from_map(sub_block(map, "multilevel_plot_params")?.as_ref())?;
        let aln_slice_params =
            AlnSliceConf::from_map(sub_block(map, "aln_slice_params")?.as_ref())?;
        let table_annotation_params =
            TableAnnotationConf::from_map(sub_block(map, "table_annotation_params")?.as_ref())?;
        let score_methods = score_methods_from_map(map)?;

        let params = Self {
            database_filekey: required_path(map, "database_filekey")?,
            table_file: required_path(map, "table_file")?,
            precalculated_aln_conservation_score_keys: match map
                .get("precalculated_aln_conservation_score_keys")
            {
                Some(value) => coerce::coerce_string_list(
                    "precalculated_aln_conservation_score_keys",
                    value,
                )?,
                None => Vec::new(),
            },
            clear_files: match map.get("clear_files") {
                Some(value) => coerce::coerce_bool("clear_files", value)?,
                None => false,
            },
            clean_analysis_files: match map.get("clean_analysis_files") {
                Some(value) => coerce::coerce_bool("clean_analysis_files", value)?,
                None => true,
            },
            score_methods,
            output_folder: match map.get("output_folder") {
                Some(value) => coerce::coerce_path("output_folder", value)?,
                None => PathBuf::from("conservation_analysis"),
            },
            hit_sequence_params,
            idr_params,
            filter_params,
            multilevel_plot_params,
            aln_slice_params,
            table_annotation_params,
        };

        // File existence is the final guard, after all field validators
        params.check_input_files(system)?;

        debug!(
            table_file = %params.table_file.display(),
            n_score_methods = params.score_methods.len(),
            "pipeline parameters validated"
        );
        Ok(params)
    }

    /// Re-run the cross-field and file-existence checks
    ///
    /// Useful when a `PipelineParameters` was assembled by struct literal
    /// rather than through [`Self::from_value`].
    pub fn validate(&self, system: &dyn System) -> Result<()> {
        self.idr_params.validate()?;
        self.check_input_files(system)
    }

    fn check_input_files(&self, system: &dyn System) -> Result<()> {
        if !system.exists(&self.table_file) {
            return Err(
                ConfigError::missing_input("table_file", self.table_file.clone()).into(),
            );
        }
        if !system.exists(&self.database_filekey) {
            return Err(
                ConfigError::missing_input("database_filekey", self.database_filekey.clone())
                    .into(),
            );
        }
        Ok(())
    }
}

/// Construct one `ScoreMethod` per `new_score_methods` entry, preserving
/// insertion order
fn score_methods_from_map(map: &JsonMap) -> Result<Vec<ScoreMethod>> {
    let Some(value) = map.get("new_score_methods") else {
        return Ok(Vec::new());
    };
    let methods = coerce::require_object("new_score_methods", value)?;
    methods
        .iter()
        .map(|(score_key, kwargs)| {
            let kwargs = kwargs.as_object().ok_or_else(|| {
                ConfigError::invalid_value(
                    "new_score_methods",
                    format!("kwargs for '{score_key}' must be a mapping, got: {kwargs}"),
                )
            })?;
            Ok(ScoreMethod::new(score_key.clone(), kwargs.clone()))
        })
        .collect()
}
