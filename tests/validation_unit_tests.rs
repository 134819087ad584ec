//! Per-record validation behavior through the public API
//!
//! Uses `MockSystem` so no test touches the real filesystem.

use orthoconserv_config::config::{
    HitSequenceConf, IdrConf, PipelineParameters, SearchMethod, TableAnnotationConf,
};
use orthoconserv_config::error::ConfigError;
use orthoconserv_config::system::MockSystem;
use serde_json::json;

fn system() -> MockSystem {
    MockSystem::new()
        .with_file("/data/database_key.json")
        .with_file("/data/table.csv")
}

fn mapping_with(key: &str, block: serde_json::Value) -> serde_json::Value {
    json!({
        "database_filekey": "/data/database_key.json",
        "table_file": "/data/table.csv",
        key: block,
    })
}

#[test]
fn hit_sequence_literals_round_trip() {
    for (literal, expected) in [
        ("search", SearchMethod::Search),
        ("given_positions", SearchMethod::GivenPositions),
    ] {
        let params = PipelineParameters::from_value(
            &system(),
            &mapping_with(
                "hit_sequence_params",
                json!({"hit_sequence_search_method": literal}),
            ),
        )
        .unwrap();
        assert_eq!(params.hit_sequence_params.search_method, expected);
        assert_eq!(params.hit_sequence_params.search_method.to_string(), literal);
    }
}

#[test]
fn hit_sequence_rejects_unknown_literal() {
    for bad in ["Search", "given", "", "positions"] {
        let result = PipelineParameters::from_value(
            &system(),
            &mapping_with(
                "hit_sequence_params",
                json!({"hit_sequence_search_method": bad}),
            ),
        );
        let err = result.unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::InvalidValue { field, .. })
                    if field == "hit_sequence_search_method"
            ),
            "expected InvalidValue for literal {bad:?}, got: {err}"
        );
    }
}

#[test]
fn hit_sequence_coerces_loose_types() {
    let params = PipelineParameters::from_value(
        &system(),
        &mapping_with(
            "hit_sequence_params",
            json!({
                "longest_common_subsequence": "yes",
                "lcs_min_length": "25",
                "target_hit_length": 12.0
            }),
        ),
    )
    .unwrap();
    let conf = &params.hit_sequence_params;
    assert_eq!(
        *conf,
        HitSequenceConf {
            search_method: SearchMethod::Search,
            longest_common_subsequence: true,
            lcs_min_length: 25,
            target_hit_length: 12,
        }
    );
}

#[test]
fn idr_exclusivity_both_directions() {
    // detection on + map file given
    let err = PipelineParameters::from_value(
        &system(),
        &mapping_with(
            "idr_params",
            json!({"find_idrs": true, "idr_map_file": "./idr_map.json"}),
        ),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Inconsistent { .. })
    ));

    // detection off + no map file
    let err = PipelineParameters::from_value(
        &system(),
        &mapping_with("idr_params", json!({"find_idrs": false})),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Inconsistent { .. })
    ));

    // either side alone is fine
    let params = PipelineParameters::from_value(
        &system(),
        &mapping_with(
            "idr_params",
            json!({"find_idrs": false, "idr_map_file": "./idr_map.json"}),
        ),
    )
    .unwrap();
    assert_eq!(
        params.idr_params,
        IdrConf {
            find_idrs: false,
            idr_map_file: Some("./idr_map.json".into()),
            ..IdrConf::default()
        }
    );
}

#[test]
fn iupred_cutoff_out_of_range_is_invalid() {
    for cutoff in [-0.5, 1.01, 40.0] {
        let err = PipelineParameters::from_value(
            &system(),
            &mapping_with("idr_params", json!({"iupred_cutoff": cutoff})),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidValue { field, .. }) if field == "iupred_cutoff"
        ));
    }
}

#[test]
fn table_annotation_defaults_and_regex() {
    let params = PipelineParameters::from_value(
        &system(),
        &mapping_with(
            "table_annotation_params",
            json!({"motif_regex": "[ST]P.R", "levels": ["Metazoa", "Vertebrata"]}),
        ),
    )
    .unwrap();
    assert_eq!(
        params.table_annotation_params,
        TableAnnotationConf {
            score_key_for_table: "property_entropy".to_owned(),
            motif_regex: Some("[ST]P.R".to_owned()),
            levels: vec!["Metazoa".to_owned(), "Vertebrata".to_owned()],
        }
    );

    let err = PipelineParameters::from_value(
        &system(),
        &mapping_with("table_annotation_params", json!({"motif_regex": "(PY"})),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { field, .. }) if field == "motif_regex"
    ));
}

#[test]
fn unknown_sub_block_key_is_rejected() {
    let err = PipelineParameters::from_value(
        &system(),
        &mapping_with("filter_params", json!({"min_orthologs": 20})),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { field, .. }) if field == "min_orthologs"
    ));
}

#[test]
fn aln_slice_and_plot_blocks_coerce_counts() {
    let mut mapping = mapping_with("aln_slice_params", json!({"n_flanking_cols": "30"}));
    mapping["multilevel_plot_params"] = json!({"num_bg_scores_cutoff": 15, "score_key": "shannon_entropy"});
    let params = PipelineParameters::from_value(&system(), &mapping).unwrap();
    assert_eq!(params.aln_slice_params.n_flanking_cols, 30);
    assert_eq!(params.multilevel_plot_params.num_bg_scores_cutoff, 15);
    assert_eq!(params.multilevel_plot_params.score_key, "shannon_entropy");
}
