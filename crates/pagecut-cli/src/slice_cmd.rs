use std::path::Path;

use pagecut::OutputTree;

use crate::cli::CutArgs;
use crate::shared::{batch_options, resolve_preset, run_batch};

pub fn run(pages: &Path, preset: &str, output: &Path, args: &CutArgs) -> Result<(), i32> {
    let preset = resolve_preset(preset)?;

    if !pages.is_dir() {
        eprintln!("Error: directory not found: {}", pages.display());
        return Err(1);
    }

    let tree = OutputTree::create_fields(output, &preset.items).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    run_batch(preset, batch_options(args), tree, pages)?;
    Ok(())
}
