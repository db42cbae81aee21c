use std::path::Path;

use pagecut::{ImageMagick, PageRenderer, prepare_document};

use crate::cli::CutArgs;
use crate::shared::{batch_options, resolve_preset, run_batch};

pub fn run(
    file: &Path,
    preset: Option<&str>,
    skip_render: bool,
    convert: &Path,
    args: &CutArgs,
) -> Result<(), i32> {
    let name = match preset {
        Some(name) => name.to_string(),
        None => file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                eprintln!("Error: cannot derive a preset name from {}", file.display());
                1
            })?,
    };
    let preset = resolve_preset(&name)?;

    if !skip_render && !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let renderer = ImageMagick::with_program(convert);
    let renderer = (!skip_render).then_some(&renderer as &dyn PageRenderer);
    let output = prepare_document(file, &preset, renderer).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    let pages = output.temp_dir();
    run_batch(preset, batch_options(args), output, &pages)?;
    Ok(())
}
