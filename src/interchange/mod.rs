//! Versioned JSON interchange file for deck sections.
//!
//! Pretty-printed UTF-8 JSON with camelCase field names. Numeric fields are
//! 64-bit floats; no unit conversion happens here, the unit label is carried
//! through unchanged. Derived centerlines/cutlines are not persisted and are
//! recomputed after load.

mod dto;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::DeckSection;
use crate::error::{Result, SectionError};

/// Export metadata header written at the top of every interchange file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInfo {
    pub date: DateTime<Utc>,
    pub tool: String,
    pub version: String,
    /// Free-text unit label, passed through unchanged
    pub units: String,
    pub coordinate_system: String,
}

impl ExportInfo {
    pub fn new(units: impl Into<String>, coordinate_system: impl Into<String>) -> Self {
        Self {
            date: Utc::now(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            units: units.into(),
            coordinate_system: coordinate_system.into(),
        }
    }
}

impl Default for ExportInfo {
    fn default() -> Self {
        Self::new("Meters", "Local")
    }
}

/// A loaded interchange file: the export header plus its sections
#[derive(Debug)]
pub struct LoadedDocument {
    pub export_info: ExportInfo,
    pub sections: Vec<DeckSection>,
}

/// Write a single section to an interchange file.
pub fn write_section(path: &Path, section: &DeckSection, info: ExportInfo) -> Result<()> {
    write_sections(path, std::slice::from_ref(section), info)
}

/// Write multiple sections to one interchange file.
///
/// A single scoped write; a failure mid-write leaves the file state
/// undefined, which is acceptable for this batch-tool use case.
pub fn write_sections(path: &Path, sections: &[DeckSection], info: ExportInfo) -> Result<()> {
    let document = dto::SectionDocument {
        export_info: info,
        sections: sections.iter().map(dto::to_dto).collect(),
    };

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read an interchange file, returning header and all sections.
///
/// Fails with `EmptyDocument` when the file holds zero sections and
/// `MalformedFile` when it is not structurally valid.
pub fn read_document(path: &Path) -> Result<LoadedDocument> {
    let json = fs::read_to_string(path)?;
    let document: dto::SectionDocument = serde_json::from_str(&json)?;

    if document.sections.is_empty() {
        return Err(SectionError::EmptyDocument);
    }

    Ok(LoadedDocument {
        export_info: document.export_info,
        sections: document.sections.into_iter().map(dto::from_dto).collect(),
    })
}

/// Read all sections from an interchange file.
pub fn read_sections(path: &Path) -> Result<Vec<DeckSection>> {
    Ok(read_document(path)?.sections)
}

/// Read the first section of an interchange file.
pub fn read_section(path: &Path) -> Result<DeckSection> {
    let mut sections = read_sections(path)?;
    Ok(sections.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_lines;
    use crate::domain::{
        MaterialProperties, Point2D, Polygon, PolygonKind, ReferencePoint,
    };
    use tempfile::tempdir;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(x0, y0),
            Point2D::new(x1, y0),
            Point2D::new(x1, y1),
            Point2D::new(x0, y1),
        ]
    }

    fn sample_section() -> DeckSection {
        DeckSection {
            name: "DeckSection_01".to_string(),
            station: 125.5,
            area: 18.2,
            centroid: Point2D::new(5.0, 1.0),
            reference_point: ReferencePoint::new(5.0, 2.0, "Top center"),
            material: MaterialProperties::default(),
            exterior_boundary: Polygon::new(
                "Exterior",
                PolygonKind::Solid,
                rect(0.0, 0.0, 10.0, 2.0),
            ),
            interior_voids: vec![Polygon::new(
                "Void_1",
                PolygonKind::Opening,
                rect(1.0, 0.3, 9.0, 1.7),
            )],
            centerlines: Vec::new(),
            cutlines: Vec::new(),
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("section.json");

        let original = sample_section();
        write_section(&path, &original, ExportInfo::default()).unwrap();

        let loaded = read_section(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_round_trip_drops_derived_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("section.json");

        let mut original = sample_section();
        derive_lines(&mut original).unwrap();
        assert!(!original.centerlines.is_empty());

        write_section(&path, &original, ExportInfo::default()).unwrap();
        let loaded = read_section(&path).unwrap();

        // Derived lines are not part of the file contract
        assert!(loaded.centerlines.is_empty());
        assert!(loaded.cutlines.is_empty());
        assert_eq!(loaded.exterior_boundary, original.exterior_boundary);
        assert_eq!(loaded.interior_voids, original.interior_voids);
        assert_eq!(loaded.reference_point, original.reference_point);
        assert_eq!(loaded.material, original.material);
    }

    #[test]
    fn test_multiple_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sections.json");

        let mut second = sample_section();
        second.name = "DeckSection_02".to_string();
        second.station = 150.0;

        write_sections(&path, &[sample_section(), second], ExportInfo::default()).unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[1].name, "DeckSection_02");
        assert_eq!(doc.export_info.units, "Meters");
        assert_eq!(doc.export_info.coordinate_system, "Local");
    }

    #[test]
    fn test_file_uses_camel_case_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("section.json");

        write_section(&path, &sample_section(), ExportInfo::default()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("exportInfo").is_some());
        assert!(value["exportInfo"].get("coordinateSystem").is_some());
        let section = &value["sections"][0];
        assert!(section.get("referencePoint").is_some());
        assert!(section.get("exteriorBoundary").is_some());
        assert!(section.get("interiorVoids").is_some());
        assert!(section["material"].get("concreteStrength").is_some());
    }

    #[test]
    fn test_empty_document_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_sections(&path, &[], ExportInfo::default()).unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SectionError::EmptyDocument));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SectionError::MalformedFile(_)));
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let err = read_document(Path::new("/nonexistent/section.json")).unwrap_err();
        assert!(matches!(err, SectionError::IoFailure(_)));
    }
}
