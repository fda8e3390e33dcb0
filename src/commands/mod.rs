//! Command implementations

mod history;
mod interpret;
mod theme;

pub use history::history;
pub use interpret::interpret;
pub use theme::theme;

use std::path::PathBuf;

use abg_analyzer::adapters::file::JsonlInterpretationStore;
use abg_analyzer::config::GlobalConfig;

/// Open the results store, preferring an explicit path over the configured one
fn open_store(config: &GlobalConfig, override_path: Option<PathBuf>) -> JsonlInterpretationStore {
    let path = override_path.unwrap_or_else(|| config.results_file());
    log::debug!("Using results file {}", path.display());
    JsonlInterpretationStore::new(path)
}
