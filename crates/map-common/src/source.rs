//! Interface to the remote gridded-data service.

use anyhow::Result;

use crate::GridField;

/// A provider of model output grids, addressed by data directory and
/// resolved filename.
///
/// Implementations wrap the data server; transport, encoding and retries are
/// theirs. `Ok(None)` means the file is not (yet) on the server, which
/// callers treat as "skip this frame" rather than as an error.
pub trait GridSource {
    /// Fetch one field from a data directory by filename.
    fn get_model_grid(&self, data_dir: &str, filename: &str) -> Result<Option<GridField>>;
}
