/// Concrete material properties carried with a section.
///
/// All values are positive reals in the units of the source model. The core
/// does no unit conversion; defaults match a typical bridge deck concrete
/// (MPa / kg/m3 / MPa).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    pub concrete_strength: f64,
    pub density: f64,
    pub elastic_modulus: f64,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            concrete_strength: 30.0,
            density: 2400.0,
            elastic_modulus: 30000.0,
        }
    }
}
