//! Model-to-data-directory tables.
//!
//! The product scripts used to embed these tables at every call site; they
//! live here once, keyed by analysis type, built on first use into
//! process-wide read-only state.

use std::collections::HashMap;

use map_common::{MapError, MapResult};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::AnalysisType;

/// One model's catalog entry: the canonical name plus the data directories
/// of the fields its products read, in drawing order (primary first,
/// overlays after).
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    pub model: &'static str,
    pub data_dirs: &'static [&'static str],
}

const CREF_UV850: &[ModelEntry] = &[
    ModelEntry {
        model: "SHANGHAI",
        data_dirs: &[
            "SHANGHAI_HR/COMPOSITE_REFLECTIVITY/ENTIRE_ATMOSPHERE",
            "SHANGHAI_HR/UGRD/850",
            "SHANGHAI_HR/VGRD/850",
        ],
    },
    ModelEntry {
        model: "BEIJING",
        data_dirs: &[
            "BEIJING_MR/COMPOSITE_REFLECTIVITY/ENTIRE_ATMOSPHERE",
            "BEIJING_MR/UGRD/850",
            "BEIJING_MR/VGRD/850",
        ],
    },
    ModelEntry {
        model: "GRAPES_MESO",
        data_dirs: &[
            "GRAPES_MESO_HR/RADAR_COMBINATION_REFLECTIVITY",
            "GRAPES_MESO_HR/UGRD/850",
            "GRAPES_MESO_HR/VGRD/850",
        ],
    },
    ModelEntry {
        model: "GRAPES_3KM",
        data_dirs: &[
            "GRAPES_3KM/RADAR_COMBINATION_REFLECTIVITY",
            "GRAPES_3KM/UGRD/850",
            "GRAPES_3KM/VGRD/850",
        ],
    },
];

const RAIN_24H: &[ModelEntry] = &[ModelEntry {
    model: "ECMWF",
    data_dirs: &["ECMWF_HR/RAIN24"],
}];

const GH500_UV850_MSLP: &[ModelEntry] = &[
    ModelEntry {
        model: "ECMWF",
        data_dirs: &[
            "ECMWF_LR/HGT/500",
            "ECMWF_LR/UGRD/850",
            "ECMWF_LR/VGRD/850",
            "ECMWF_LR/PRMSL",
        ],
    },
    ModelEntry {
        model: "GRAPES",
        data_dirs: &[
            "GRAPES_GFS/HGT/500",
            "GRAPES_GFS/UGRD/850",
            "GRAPES_GFS/VGRD/850",
            "GRAPES_GFS/PRMSL",
        ],
    },
    ModelEntry {
        model: "NCEP",
        data_dirs: &[
            "NCEP_GFS/HGT/500",
            "NCEP_GFS/UGRD/850",
            "NCEP_GFS/VGRD/850",
            "NCEP_GFS/PRMSL",
        ],
    },
];

static CATALOG: Lazy<HashMap<AnalysisType, &'static [ModelEntry]>> = Lazy::new(|| {
    let mut tables: HashMap<AnalysisType, &'static [ModelEntry]> = HashMap::new();
    tables.insert(AnalysisType::CompositeReflectivityWind, CREF_UV850);
    tables.insert(AnalysisType::Precipitation24h, RAIN_24H);
    tables.insert(AnalysisType::Synoptic500, GH500_UV850_MSLP);
    tables
});

fn table(analysis: AnalysisType) -> &'static [ModelEntry] {
    CATALOG.get(&analysis).copied().unwrap_or(&[])
}

/// Catalog entry for one model under one analysis type.
///
/// Lookup is case-insensitive and ignores surrounding whitespace.
pub fn resolve_model(model: &str, analysis: AnalysisType) -> MapResult<&'static ModelEntry> {
    let wanted = model.trim();
    match table(analysis)
        .iter()
        .find(|entry| entry.model.eq_ignore_ascii_case(wanted))
    {
        Some(entry) => {
            debug!(
                model = entry.model,
                analysis = %analysis,
                dirs = entry.data_dirs.len(),
                "Resolved model data directories"
            );
            Ok(entry)
        }
        None => Err(MapError::UnknownModel {
            model: wanted.to_string(),
            analysis: analysis.to_string(),
            valid: models_for(analysis),
        }),
    }
}

/// Ordered data directories for one model under one analysis type.
///
/// The order is significant: the first path is the primary field, the rest
/// are overlays.
pub fn resolve_field_paths(
    model: &str,
    analysis: AnalysisType,
) -> MapResult<&'static [&'static str]> {
    resolve_model(model, analysis).map(|entry| entry.data_dirs)
}

/// Valid model names for an analysis type, in table order.
pub fn models_for(analysis: AnalysisType) -> Vec<&'static str> {
    table(analysis).iter().map(|entry| entry.model).collect()
}
