//! Narrow capability interface for analysis-side adapters.
//!
//! The core never references host object models. An adapter for a concrete
//! analysis tool implements [`PolygonSink`] and the driver walks a validated
//! section through it in a fixed order.

use crate::domain::{DeckSection, MaterialProperties, Polygon, ReferencePoint};
use crate::error::Result;

/// Operations an analysis-side host must support to receive a section
pub trait PolygonSink {
    /// Start (or select) the target section in the host model
    fn begin_section(&mut self, name: &str, material: &MaterialProperties) -> Result<()>;

    /// Remove any voids already present on the target section
    fn clear_voids(&mut self) -> Result<()>;

    fn define_exterior_polygon(&mut self, polygon: &Polygon) -> Result<()>;

    fn define_void_polygon(&mut self, polygon: &Polygon) -> Result<()>;

    fn set_reference_point(&mut self, point: &ReferencePoint) -> Result<()>;
}

/// Options controlling how a section is pushed into a sink
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Override for the section name in the target model
    pub target_section_name: Option<String>,
    pub set_reference_point: bool,
    pub clear_existing_voids: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            target_section_name: None,
            set_reference_point: true,
            clear_existing_voids: true,
        }
    }
}

/// Push a section into a sink: begin, optionally clear voids, exterior,
/// voids, optionally reference point. Stops at the first sink failure.
pub fn import_section(
    section: &DeckSection,
    sink: &mut dyn PolygonSink,
    options: &ImportOptions,
) -> Result<()> {
    let target_name = options
        .target_section_name
        .as_deref()
        .unwrap_or(&section.name);

    sink.begin_section(target_name, &section.material)?;

    if options.clear_existing_voids {
        sink.clear_voids()?;
    }

    sink.define_exterior_polygon(&section.exterior_boundary)?;

    for void in &section.interior_voids {
        sink.define_void_polygon(void)?;
    }

    if options.set_reference_point {
        sink.set_reference_point(&section.reference_point)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point2D, PolygonKind};

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl PolygonSink for RecordingSink {
        fn begin_section(&mut self, name: &str, _material: &MaterialProperties) -> Result<()> {
            self.calls.push(format!("begin:{name}"));
            Ok(())
        }

        fn clear_voids(&mut self) -> Result<()> {
            self.calls.push("clear_voids".to_string());
            Ok(())
        }

        fn define_exterior_polygon(&mut self, polygon: &Polygon) -> Result<()> {
            self.calls.push(format!("exterior:{}", polygon.name));
            Ok(())
        }

        fn define_void_polygon(&mut self, polygon: &Polygon) -> Result<()> {
            self.calls.push(format!("void:{}", polygon.name));
            Ok(())
        }

        fn set_reference_point(&mut self, _point: &ReferencePoint) -> Result<()> {
            self.calls.push("ref_point".to_string());
            Ok(())
        }
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(x0, y0),
            Point2D::new(x1, y0),
            Point2D::new(x1, y1),
            Point2D::new(x0, y1),
        ]
    }

    fn sample_section() -> DeckSection {
        crate::builder::assemble_section(
            vec![
                Polygon::new("a", PolygonKind::Solid, rect(0.0, 0.0, 10.0, 2.0)),
                Polygon::new("b", PolygonKind::Solid, rect(1.0, 0.3, 9.0, 1.7)),
            ],
            "DeckSection_01",
            0.0,
            ReferencePoint::default(),
            MaterialProperties::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_import_call_order() {
        let section = sample_section();
        let mut sink = RecordingSink::default();

        import_section(&section, &mut sink, &ImportOptions::default()).unwrap();

        assert_eq!(
            sink.calls,
            vec![
                "begin:DeckSection_01",
                "clear_voids",
                "exterior:Exterior",
                "void:Void_1",
                "ref_point",
            ]
        );
    }

    #[test]
    fn test_import_options_respected() {
        let section = sample_section();
        let mut sink = RecordingSink::default();

        let options = ImportOptions {
            target_section_name: Some("BridgeDeck".to_string()),
            set_reference_point: false,
            clear_existing_voids: false,
        };
        import_section(&section, &mut sink, &options).unwrap();

        assert_eq!(
            sink.calls,
            vec!["begin:BridgeDeck", "exterior:Exterior", "void:Void_1"]
        );
    }
}
