use pagecut::{DocumentFamily, LayoutPreset};

use crate::cli::OutputFormat;

pub fn run(format: &OutputFormat) -> Result<(), i32> {
    let presets: Vec<LayoutPreset> = DocumentFamily::ALL
        .iter()
        .map(DocumentFamily::preset)
        .collect();
    match format {
        OutputFormat::Text => {
            for preset in &presets {
                println!("{}", format_preset(preset));
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&presets).map_err(|e| {
                eprintln!("Error: failed to serialize presets: {e}");
                1
            })?;
            println!("{json}");
            Ok(())
        }
    }
}

fn format_preset(preset: &LayoutPreset) -> String {
    format!(
        "{}\t{}\t{}dpi\tfooter={}\tthresh={}\t{}",
        preset.name,
        preset.mode,
        preset.dpi,
        preset.cut_footer,
        preset.cut_thresh,
        preset.items.join(","),
    )
}
