//! `orthoconserv-config` — validated configuration for an orthogroup
//! conservation-analysis pipeline
//!
//! This library turns a loosely-typed mapping (parsed from JSON or built in
//! code) into a strongly-typed, validated [`config::PipelineParameters`]
//! tree. Field defaults, type coercion, range validation, cross-field
//! consistency checks, and input-file existence checks all run once, at
//! construction time. The pipeline itself (alignment slicing, IDR detection,
//! conservation scoring, plotting) lives elsewhere and consumes the
//! validated tree by attribute access.
//!
//! ```
//! use orthoconserv_config::config::PipelineParameters;
//! use orthoconserv_config::system::MockSystem;
//! use serde_json::json;
//!
//! let system = MockSystem::new()
//!     .with_file("/data/database_key.json")
//!     .with_file("/data/table.csv");
//!
//! let params = PipelineParameters::from_value(&system, &json!({
//!     "database_filekey": "/data/database_key.json",
//!     "table_file": "/data/table.csv",
//!     "idr_params": {"find_idrs": true, "iupred_cutoff": 0.4},
//!     "new_score_methods": {
//!         "property_entropy": {"matrix_name": "EDSSMat50_max_off_diagonal_norm"}
//!     }
//! })).unwrap();
//!
//! assert!(params.idr_params.find_idrs);
//! assert_eq!(params.score_methods[0].score_key, "property_entropy");
//! ```

pub mod config;
pub mod error;
pub mod system;

pub use config::PipelineParameters;
pub use error::ConfigError;
