pub mod catalog;
pub mod conditions;
pub mod test;

use std::path::Path;

use bs_screening::PlateCatalog;

/// Load a catalog file, or fall back to the built-in catalog.
fn load_catalog(path: Option<&Path>) -> Result<PlateCatalog, String> {
    match path {
        Some(path) => PlateCatalog::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(PlateCatalog::builtin()),
    }
}
