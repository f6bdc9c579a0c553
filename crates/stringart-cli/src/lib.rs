//! CLI logic for the stringart diagram tool.

mod args;
mod config;

pub use args::{Args, ChordSpec};

use log::info;

use stringart::{Color, Diagram, StringArtError, export::svg::Svg};

/// Run the stringart CLI application
///
/// Builds a diagram from the parsed arguments (layout, then chords in the
/// order given, switching the active color when a chord spec carries one)
/// and writes the rendered SVG to the output file.
///
/// # Errors
///
/// Returns `StringArtError` for:
/// - Configuration loading errors
/// - An invalid point count or color string
/// - File I/O errors while writing the SVG
pub fn run(args: &Args) -> Result<(), StringArtError> {
    info!(
        points = args.points,
        chords_len = args.chords.len(),
        output_path = args.output;
        "Building diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let mut diagram = Diagram::from_config(&app_config)?;
    if let Some(color) = &args.color {
        diagram.set_color(Color::new(color)?);
    }

    diagram.layout(args.points)?;
    for spec in &args.chords {
        if let Some(color) = &spec.color {
            diagram.set_color(Color::new(color)?);
        }
        diagram.connect(spec.a, spec.b)?;
    }

    Svg::new().write(&diagram, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
