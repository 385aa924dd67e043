//! JSON parameter files for letter dimensions.

use std::fs;
use std::path::Path;

use isomark_geometry::LetterParams;

use crate::error::EmitError;

/// Reads [`LetterParams`] from a JSON file. Missing fields keep their
/// defaults.
///
/// ```json
/// { "width": 60.0, "gap": 20.0 }
/// ```
pub fn load_params(path: &Path) -> Result<LetterParams, EmitError> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| EmitError::params(path, e))
}
