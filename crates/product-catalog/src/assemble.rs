//! Product assembly: resolve, fetch, mask, and hand back a drawable scene.
//!
//! This is the stage every product script used to repeat inline before
//! touching the figure. Missing remote data withholds the scene (warn and
//! return `None`) rather than erroring; the only hard failure is an unknown
//! model name.

use map_common::{
    model_filename, GridField, GridSource, InitialTime, MapExtent, MapResult, ValidTime,
};
use tracing::{debug, warn};

use crate::catalog;
use crate::product::{product_spec, title_line, FieldRole};
use crate::AnalysisType;

/// Everything a renderer needs to draw one product frame.
#[derive(Debug, Clone)]
pub struct ProductScene {
    pub analysis: AnalysisType,
    /// Canonical model name from the catalog entry.
    pub model: &'static str,
    pub time: ValidTime,
    /// Figure-header text.
    pub title: String,
    /// Drawing window.
    pub extent: MapExtent,
    /// The main field, masking policy applied.
    pub primary: GridField,
    /// Overlay fields in role order.
    pub overlays: Vec<(FieldRole, GridField)>,
}

/// Assemble one product frame.
///
/// Resolves the model's data directories, formats the retrieval filename,
/// fetches the primary field and (per product policy) the overlays, applies
/// the primary masking policy and derives the run time, preferring the init
/// time stamped on the retrieved grid over the caller's initial time.
pub fn assemble_product<S: GridSource>(
    source: &S,
    analysis: AnalysisType,
    model: &str,
    initial_time: &InitialTime,
    forecast_hour: u32,
    draw_overlays: bool,
) -> MapResult<Option<ProductScene>> {
    let entry = catalog::resolve_model(model, analysis)?;
    let spec = product_spec(analysis);
    let filename = model_filename(initial_time, forecast_hour);

    let Some(primary_dir) = entry.data_dirs.first() else {
        return Ok(None);
    };
    let Some(mut primary) = fetch(source, primary_dir, &filename) else {
        return Ok(None);
    };
    if let Some(sentinel) = spec.missing_value {
        primary.mask_equal(sentinel);
    }
    if let Some(threshold) = spec.mask_below {
        primary.mask_below(threshold);
    }

    let mut overlays = Vec::new();
    if !spec.overlays_optional || draw_overlays {
        for (role, dir) in spec.roles.iter().zip(entry.data_dirs.iter()).skip(1) {
            let Some(field) = fetch(source, dir, &filename) else {
                return Ok(None);
            };
            overlays.push((*role, field));
        }
    }

    let Some(reference_time) = primary.init_time.or_else(|| initial_time.as_datetime()) else {
        warn!(
            filename = %filename,
            "Grid carries no run time and the initial time token is malformed"
        );
        return Ok(None);
    };
    let time = ValidTime::new(reference_time, forecast_hour);

    debug!(
        model = entry.model,
        analysis = %analysis,
        filename = %filename,
        overlays = overlays.len(),
        "Assembled product scene"
    );

    Ok(Some(ProductScene {
        analysis,
        model: entry.model,
        time,
        title: title_line(spec, entry.model, &time),
        extent: spec.domain.extent(),
        primary,
        overlays,
    }))
}

/// One scene per catalog model, in table order.
///
/// Mirrors the side-by-side comparison figures: if any model's data is not
/// on the server yet the whole set is withheld, so panels always show the
/// same frame.
pub fn assemble_comparison<S: GridSource>(
    source: &S,
    analysis: AnalysisType,
    initial_time: &InitialTime,
    forecast_hour: u32,
    draw_overlays: bool,
) -> MapResult<Option<Vec<ProductScene>>> {
    let mut scenes = Vec::new();
    for model in catalog::models_for(analysis) {
        match assemble_product(
            source,
            analysis,
            model,
            initial_time,
            forecast_hour,
            draw_overlays,
        )? {
            Some(scene) => scenes.push(scene),
            None => return Ok(None),
        }
    }
    Ok(Some(scenes))
}

fn fetch<S: GridSource>(source: &S, data_dir: &str, filename: &str) -> Option<GridField> {
    match source.get_model_grid(data_dir, filename) {
        Ok(Some(field)) => Some(field),
        Ok(None) => {
            warn!(
                data_dir = %data_dir,
                filename = %filename,
                "Can not retrieve grid from data server"
            );
            None
        }
        Err(e) => {
            warn!(
                data_dir = %data_dir,
                filename = %filename,
                error = %e,
                "Grid retrieval failed"
            );
            None
        }
    }
}
