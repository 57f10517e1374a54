//! Per-product metadata: titles, field roles, masking and map defaults.

use map_common::{MapExtent, ValidTime};
use serde::{Deserialize, Serialize};

use crate::AnalysisType;

/// What a positional field in a product is used for.
///
/// Roles line up with the catalog's data directories by position; catalog
/// entries beyond the last role are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRole {
    /// The shaded or contoured main field.
    Primary,
    /// Eastward wind component overlay.
    WindU,
    /// Northward wind component overlay.
    WindV,
    /// Mean sea level pressure overlay.
    Pressure,
}

/// Default drawing window for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MapDomain {
    /// Window centered on a point, sized in degrees.
    Centered {
        lon: f64,
        lat: f64,
        width: f64,
        height: f64,
    },
    /// Fixed window.
    Fixed(MapExtent),
}

impl MapDomain {
    /// Resolve the domain to a concrete window.
    pub fn extent(&self) -> MapExtent {
        match *self {
            MapDomain::Centered {
                lon,
                lat,
                width,
                height,
            } => MapExtent::centered(lon, lat, width, height),
            MapDomain::Fixed(extent) => extent,
        }
    }
}

/// Static description of one diagnostic product.
#[derive(Debug, Clone)]
pub struct ProductSpec {
    pub analysis: AnalysisType,
    /// Figure title, e.g. "CREF (dBz), 850-hPa Winds".
    pub title: &'static str,
    /// Field roles, positionally aligned with the catalog data directories.
    pub roles: &'static [FieldRole],
    /// Accumulation window behind the primary field, if any.
    pub accumulation_hours: Option<u32>,
    /// Primary-field sentinel to mask out.
    pub missing_value: Option<f64>,
    /// Mask primary values below this threshold.
    pub mask_below: Option<f64>,
    /// Whether overlay fields are fetched only on request.
    pub overlays_optional: bool,
    /// Default drawing window.
    pub domain: MapDomain,
}

static CREF_UV850: ProductSpec = ProductSpec {
    analysis: AnalysisType::CompositeReflectivityWind,
    title: "CREF (dBz), 850-hPa Winds",
    roles: &[FieldRole::Primary, FieldRole::WindU, FieldRole::WindV],
    accumulation_hours: None,
    // 9999 is the server's missing marker; below 10 dBZ is noise.
    missing_value: Some(9999.0),
    mask_below: Some(10.0),
    overlays_optional: true,
    domain: MapDomain::Centered {
        lon: 117.0,
        lat: 39.0,
        width: 12.0,
        height: 8.0,
    },
};

static RAIN_24H: ProductSpec = ProductSpec {
    analysis: AnalysisType::Precipitation24h,
    title: "24h accumulated QPF",
    roles: &[FieldRole::Primary],
    accumulation_hours: Some(24),
    missing_value: None,
    mask_below: None,
    overlays_optional: true,
    domain: MapDomain::Centered {
        lon: 117.0,
        lat: 39.0,
        width: 12.0,
        height: 12.0,
    },
};

static GH500_UV850_MSLP: ProductSpec = ProductSpec {
    analysis: AnalysisType::Synoptic500,
    title: "500-hPa Heights (m), 850-hPa Winds, MSLP (hPa)",
    roles: &[
        FieldRole::Primary,
        FieldRole::WindU,
        FieldRole::WindV,
        FieldRole::Pressure,
    ],
    accumulation_hours: None,
    missing_value: None,
    mask_below: None,
    overlays_optional: false,
    domain: MapDomain::Fixed(MapExtent::new(50.0, 0.0, 150.0, 65.0)),
};

/// The static product description for an analysis type.
pub fn product_spec(analysis: AnalysisType) -> &'static ProductSpec {
    match analysis {
        AnalysisType::CompositeReflectivityWind => &CREF_UV850,
        AnalysisType::Precipitation24h => &RAIN_24H,
        AnalysisType::Synoptic500 => &GH500_UV850_MSLP,
    }
}

/// Compose the figure-header line for one product frame.
pub fn title_line(spec: &ProductSpec, model: &str, time: &ValidTime) -> String {
    let stamps = time.stamps();
    format!(
        "{} | {} | {} {} {}",
        spec.title, model, stamps.initial, stamps.forecast, stamps.valid
    )
}
