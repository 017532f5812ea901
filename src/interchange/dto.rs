//! Wire-format DTOs and their mapping to the domain model.
//!
//! Kept separate from the domain types so the file layout can evolve without
//! touching them. The mapping is lossless for every persisted field; polygon
//! handles and derived lines are intentionally absent from the file.

use serde::{Deserialize, Serialize};

use super::ExportInfo;
use crate::domain::{
    DeckSection, MaterialProperties, Point2D, Polygon, PolygonKind, ReferencePoint,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SectionDocument {
    pub export_info: ExportInfo,
    pub sections: Vec<DeckSectionDto>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DeckSectionDto {
    pub name: String,
    pub station: f64,
    pub area: f64,
    pub centroid: PointDto,
    pub reference_point: ReferencePointDto,
    pub material: MaterialDto,
    pub exterior_boundary: Vec<PointDto>,
    pub interior_voids: Vec<VoidDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct PointDto {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReferencePointDto {
    pub x: f64,
    pub y: f64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MaterialDto {
    pub concrete_strength: f64,
    pub density: f64,
    pub elastic_modulus: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VoidDto {
    pub name: String,
    pub points: Vec<PointDto>,
}

fn point_to_dto(p: &Point2D) -> PointDto {
    PointDto { x: p.x, y: p.y }
}

fn point_from_dto(p: PointDto) -> Point2D {
    Point2D::new(p.x, p.y)
}

pub(super) fn to_dto(section: &DeckSection) -> DeckSectionDto {
    DeckSectionDto {
        name: section.name.clone(),
        station: section.station,
        area: section.area,
        centroid: point_to_dto(&section.centroid),
        reference_point: ReferencePointDto {
            x: section.reference_point.x,
            y: section.reference_point.y,
            description: section.reference_point.description.clone(),
        },
        material: MaterialDto {
            concrete_strength: section.material.concrete_strength,
            density: section.material.density,
            elastic_modulus: section.material.elastic_modulus,
        },
        exterior_boundary: section
            .exterior_boundary
            .points
            .iter()
            .map(point_to_dto)
            .collect(),
        interior_voids: section
            .interior_voids
            .iter()
            .map(|v| VoidDto {
                name: v.name.clone(),
                points: v.points.iter().map(point_to_dto).collect(),
            })
            .collect(),
    }
}

pub(super) fn from_dto(dto: DeckSectionDto) -> DeckSection {
    DeckSection {
        name: dto.name,
        station: dto.station,
        area: dto.area,
        centroid: point_from_dto(dto.centroid),
        reference_point: ReferencePoint {
            x: dto.reference_point.x,
            y: dto.reference_point.y,
            description: dto.reference_point.description,
        },
        material: MaterialProperties {
            concrete_strength: dto.material.concrete_strength,
            density: dto.material.density,
            elastic_modulus: dto.material.elastic_modulus,
        },
        exterior_boundary: Polygon::new(
            "Exterior",
            PolygonKind::Solid,
            dto.exterior_boundary.into_iter().map(point_from_dto).collect(),
        ),
        interior_voids: dto
            .interior_voids
            .into_iter()
            .map(|v| {
                let points = v.points.into_iter().map(point_from_dto).collect();
                Polygon::new(v.name, PolygonKind::Opening, points)
            })
            .collect(),
        centerlines: Vec::new(),
        cutlines: Vec::new(),
    }
}
