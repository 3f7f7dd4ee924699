/// Label inspection tool for native builds.
///
/// Usage: `seglabel-inspect <config.json> [label-file]`
///
/// Restores the labeling state from the label file (or an empty state),
/// prints the canonical label for that state and reports whether it differs
/// from the file contents.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use std::path::PathBuf;

    use seglabel::model::Geometry;
    use seglabel::{LabelerConfig, has_unsaved_changes, serialize_label};

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .map(PathBuf::from)
        .ok_or("usage: seglabel-inspect <config.json> [label-file]")?;
    let label_path = args.next().map(PathBuf::from);

    let config = LabelerConfig::load(&config_path)?;

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let label = match &label_path {
        Some(path) => Some(std::fs::read_to_string(path)?.trim_end().to_string()),
        None => None,
    };

    let state = config.to_state().restore_from_label(label);

    for annotation in &state.annotations {
        let points = match &annotation.geometry {
            Geometry::Point(_) => 1,
            Geometry::Sequence(points) => points.len(),
        };
        log::info!(
            "{} {} on tool '{}' ({} points)",
            annotation.tool_kind.name(),
            annotation.id,
            annotation.tool_id,
            points
        );
    }
    for field in &state.classification_fields {
        match field.answer() {
            Some(answer) => log::info!("Field '{}' = {}", field.name, answer),
            None => log::info!("Field '{}' unanswered", field.name),
        }
    }

    println!("{}", serialize_label(&state)?);
    if has_unsaved_changes(&state)? {
        println!("label is not in canonical form");
    }

    Ok(())
}

// WASM builds embed the library directly and have no inspection binary
#[cfg(target_arch = "wasm32")]
fn main() {}
