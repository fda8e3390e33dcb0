//! History command - list saved interpretations

use std::path::PathBuf;

use abg_analyzer::config::GlobalConfig;
use abg_analyzer::core::services;
use abg_analyzer::output::{HistoryOutput, OutputMode};

/// List saved interpretations, oldest first
pub fn history(
    limit: Option<usize>,
    results_file: Option<PathBuf>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let store = super::open_store(&config, results_file);
    let saved = services::recent(&store, limit)?;

    HistoryOutput::new(&saved).render(output_mode, config.ui.theme);
    Ok(())
}
