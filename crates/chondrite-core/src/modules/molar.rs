use super::normalize::normalize_to_percent;
use crate::common::elements::{AtomicMassSource, resolve_atomic_masses, validate_atomic_mass};
use crate::domain::{ChondriteResult, ElementVector};

/// Converts a mass-percent vector to molar percent: each entry is divided by
/// its atomic mass and the quotients are renormalized to sum to 100.
pub fn mass_to_molar_percent(
    mass_percent: &ElementVector,
    atomic_masses: &ElementVector,
) -> ChondriteResult<ElementVector> {
    for (element, mass) in atomic_masses.iter() {
        validate_atomic_mass(element, mass)?;
    }
    let moles = mass_percent.map(|element, value| value / atomic_masses[element]);
    normalize_to_percent(&moles)
}

pub fn mass_to_molar_percent_with<S>(
    mass_percent: &ElementVector,
    source: &S,
) -> ChondriteResult<ElementVector>
where
    S: AtomicMassSource + ?Sized,
{
    let atomic_masses = resolve_atomic_masses(source)?;
    mass_to_molar_percent(mass_percent, &atomic_masses)
}
