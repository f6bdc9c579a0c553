//! SVG rendering for string art diagrams.

use std::{fs::File, io::Write, path::Path};

use log::{error, info};
use svg::{Document, node::element as svg_element};

use stringart_core::draw;

use crate::{
    StringArtError,
    diagram::{Diagram, LABEL_OFFSET, LAYOUT_RADIUS},
};

/// Margin between the label circle and the document edge.
const VIEW_MARGIN: f32 = 10.0;

/// SVG exporter for [`Diagram`] values.
///
/// The diagram model uses math coordinates (y up); SVG uses screen
/// coordinates (y down). The exporter bridges the two with a single root
/// `<g transform="scale(1 -1)">` around all primitives, so the model's
/// geometry stays convention-consistent and only labels need to counter
/// the flip (which [`draw::Label`] does in its placement transform).
#[derive(Debug, Default)]
pub struct Svg;

impl Svg {
    pub fn new() -> Self {
        Self
    }

    /// Builds the SVG document for a diagram.
    ///
    /// The viewBox is symmetric around the origin and sized to cover the
    /// label circle plus a margin, so it is invariant under the root
    /// flip. An empty diagram is a valid degenerate case and produces a
    /// document with an empty root group.
    pub fn document(&self, diagram: &Diagram) -> Document {
        let extent = LAYOUT_RADIUS + LABEL_OFFSET + VIEW_MARGIN;
        let side = extent * 2.0;

        let mut doc = Document::new()
            .set("viewBox", format!("{} {} {side} {side}", -extent, -extent))
            .set("width", side)
            .set("height", side);

        if let Some(background) = diagram.style().background() {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", -extent)
                    .set("y", -extent)
                    .set("width", side)
                    .set("height", side)
                    .set("fill", background),
            );
        }

        let mut group = svg_element::Group::new().set("transform", "scale(1 -1)");
        for node in draw::render_all(&diagram.primitives(), diagram.style()) {
            group = group.add(node);
        }

        doc.add(group)
    }

    /// Serializes a diagram to an SVG markup string.
    pub fn render(&self, diagram: &Diagram) -> String {
        self.document(diagram).to_string()
    }

    /// Writes the SVG document for a diagram to the given file.
    pub fn write(&self, diagram: &Diagram, path: impl AsRef<Path>) -> Result<(), StringArtError> {
        let path = path.as_ref();
        info!(file_name = path.display().to_string(); "Creating SVG file");

        let doc = self.document(diagram);

        let mut file = File::create(path).inspect_err(|err| {
            error!(file_name = path.display().to_string(), err:err = *err; "Failed to create SVG file");
        })?;
        write!(file, "{doc}").inspect_err(|err| {
            error!(file_name = path.display().to_string(), err:err = *err; "Failed to write SVG content");
        })?;

        Ok(())
    }
}

impl Diagram {
    /// Serializes the diagram to an SVG markup string.
    ///
    /// This is the entire display contract: a host display environment
    /// calls this to obtain a displayable image.
    pub fn to_svg(&self) -> String {
        Svg::new().render(self)
    }
}
