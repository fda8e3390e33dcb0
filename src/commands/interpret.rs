//! Interpret command - run the interpreter on a panel of lab values

use std::path::PathBuf;

use abg_analyzer::config::GlobalConfig;
use abg_analyzer::core::models::ReadingInput;
use abg_analyzer::core::services;
use abg_analyzer::output::{InterpretOutput, OperationResult, OutputMode};

use crate::cli::ReadingArgs;

/// Shown when a mandatory value is missing or not a number
const INVALID_INPUT: &str = "Please enter valid numerical values!";

/// Interpret a blood gas panel, optionally saving it to the history
pub fn interpret(
    values: ReadingArgs,
    save: bool,
    results_file: Option<PathBuf>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let input = ReadingInput {
        ph: values.ph,
        pco2: values.pco2,
        hco3: values.hco3,
        pao2: values.pao2,
        na: values.na,
        cl: values.cl,
    };

    let result = match services::interpret(&input) {
        Ok(result) => result,
        Err(err) => {
            if output_mode == OutputMode::Json {
                OperationResult::failed(format!("{INVALID_INPUT} ({err})")).render(output_mode);
            }
            anyhow::bail!("{INVALID_INPUT} ({err})");
        },
    };

    let config = GlobalConfig::load();
    let saved_to = if save {
        let store = super::open_store(&config, results_file);
        services::record(&store, &result)?;
        Some(store.path().display().to_string())
    } else {
        None
    };

    InterpretOutput::new(&result, saved_to).render(output_mode, config.ui.theme);
    Ok(())
}
