//! Model catalog and product assembly for met-map diagnostic products.
//!
//! The catalog maps (analysis type, model name) to the data directories of
//! the fields each product draws; assembly turns a [`map_common::GridSource`]
//! into ready-to-draw product scenes. Rendering is a downstream collaborator.

pub mod analysis;
pub mod assemble;
pub mod catalog;
pub mod product;

pub use analysis::AnalysisType;
pub use assemble::{assemble_comparison, assemble_product, ProductScene};
pub use catalog::{models_for, resolve_field_paths, resolve_model, ModelEntry};
pub use product::{product_spec, title_line, FieldRole, MapDomain, ProductSpec};
