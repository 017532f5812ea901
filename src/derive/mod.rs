//! Centerline and cutline derivation.
//!
//! Rule-based inference of slab and web centerlines from section geometry,
//! then cutlines positioned between them. This is heuristic, not closed-form:
//! the thresholds (10% slab thickness estimate, 25% shared-level vote, 1e-6
//! tolerance) reproduce the behavior the downstream modeling tools expect.

mod centerlines;
mod cutlines;
mod validate;

use crate::domain::DeckSection;
use crate::error::Result;
use crate::geometry::SectionBounds;

/// Numeric tolerance for grouping, interpolation, and bounds checks
pub(crate) const TOLERANCE: f64 = 1e-6;

/// Derive all centerlines and cutlines for a section.
///
/// Steps: analyze bounds, compute centerlines, compute cutlines, validate
/// every derived point against the section bounds. The section is only
/// updated after validation passes; any failure discards the partial result.
pub fn derive_lines(section: &mut DeckSection) -> Result<()> {
    let bounds = SectionBounds::analyze(section)?;

    let mut derived_centerlines = vec![
        centerlines::top_slab(&bounds),
        centerlines::bottom_slab(&bounds),
    ];
    derived_centerlines.extend(centerlines::webs(&bounds));

    let mut derived_cutlines = cutlines::horizontal(section, &bounds);
    derived_cutlines.extend(cutlines::vertical(&derived_centerlines));

    validate::check_lines(&derived_centerlines, &derived_cutlines, &bounds)?;

    section.centerlines = derived_centerlines;
    section.cutlines = derived_cutlines;
    Ok(())
}
