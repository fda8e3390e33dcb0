//! Theme command - show or change the output color theme

use abg_analyzer::config::{GlobalConfig, Theme};
use abg_analyzer::output::{OperationResult, OutputMode};

/// Show the current theme, or persist a new one
pub fn theme(new_theme: Option<&str>, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut config = GlobalConfig::load();

    let Some(raw) = new_theme else {
        OperationResult::ok(format!("Theme: {}", config.ui.theme)).render(output_mode);
        return Ok(());
    };

    let theme: Theme = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    config.ui.theme = theme;
    config.save()?;
    log::debug!("Saved config to {}", GlobalConfig::config_path().display());

    OperationResult::ok(format!("Theme set to {theme}")).render(output_mode);
    Ok(())
}
