//! Standard atomic weights for the tracked elements and the lookup seam the
//! molar conversion reads them through.
//!
//! Values are the IUPAC conventional standard atomic weights (g/mol).

use crate::domain::{ChondriteError, ChondriteResult, ELEMENT_COUNT, Element, ElementVector};

struct ElementRecord {
    atomic_number: u8,
    name: &'static str,
    atomic_weight: f64,
}

static ELEMENT_RECORDS: [ElementRecord; ELEMENT_COUNT] = [
    ElementRecord {
        atomic_number: 26,
        name: "Iron",
        atomic_weight: 55.845,
    },
    ElementRecord {
        atomic_number: 16,
        name: "Sulfur",
        atomic_weight: 32.06,
    },
    ElementRecord {
        atomic_number: 6,
        name: "Carbon",
        atomic_weight: 12.011,
    },
    ElementRecord {
        atomic_number: 12,
        name: "Magnesium",
        atomic_weight: 24.305,
    },
    ElementRecord {
        atomic_number: 14,
        name: "Silicon",
        atomic_weight: 28.085,
    },
    ElementRecord {
        atomic_number: 11,
        name: "Sodium",
        atomic_weight: 22.98976928,
    },
    ElementRecord {
        atomic_number: 13,
        name: "Aluminum",
        atomic_weight: 26.9815385,
    },
    ElementRecord {
        atomic_number: 20,
        name: "Calcium",
        atomic_weight: 40.078,
    },
    ElementRecord {
        atomic_number: 19,
        name: "Potassium",
        atomic_weight: 39.0983,
    },
    ElementRecord {
        atomic_number: 17,
        name: "Chlorine",
        atomic_weight: 35.45,
    },
    ElementRecord {
        atomic_number: 8,
        name: "Oxygen",
        atomic_weight: 15.999,
    },
    ElementRecord {
        atomic_number: 1,
        name: "Hydrogen",
        atomic_weight: 1.008,
    },
];

fn record(element: Element) -> &'static ElementRecord {
    &ELEMENT_RECORDS[element.index()]
}

pub fn standard_atomic_weight(element: Element) -> f64 {
    record(element).atomic_weight
}

pub fn atomic_number(element: Element) -> u8 {
    record(element).atomic_number
}

pub fn element_name(element: Element) -> &'static str {
    record(element).name
}

pub fn atomic_mass_for_symbol(symbol: &str) -> Option<f64> {
    Element::from_symbol(symbol).map(standard_atomic_weight)
}

/// Anything that can report an atomic mass (g/mol) for a tracked element.
pub trait AtomicMassSource {
    fn atomic_mass(&self, element: Element) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardAtomicWeights;

impl AtomicMassSource for StandardAtomicWeights {
    fn atomic_mass(&self, element: Element) -> Option<f64> {
        Some(standard_atomic_weight(element))
    }
}

/// Collects one mass per tracked element, failing on the first element the
/// source cannot supply or supplies a non-positive value for.
pub fn resolve_atomic_masses<S>(source: &S) -> ChondriteResult<ElementVector>
where
    S: AtomicMassSource + ?Sized,
{
    let mut masses = [0.0; ELEMENT_COUNT];
    for element in Element::ALL {
        let mass = source.atomic_mass(element).ok_or_else(|| {
            ChondriteError::computation(
                "RUN.ATOMIC_MASS",
                format!("no atomic mass available for element '{}'", element),
            )
        })?;
        masses[element.index()] = validate_atomic_mass(element, mass)?;
    }
    Ok(ElementVector::new(masses))
}

/// A usable atomic mass is finite and strictly positive.
pub fn validate_atomic_mass(element: Element, mass: f64) -> ChondriteResult<f64> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(ChondriteError::computation(
            "RUN.ATOMIC_MASS",
            format!("atomic mass {} for element '{}' is not positive", mass, element),
        ));
    }
    Ok(mass)
}

#[cfg(test)]
mod tests {
    use super::{
        AtomicMassSource, StandardAtomicWeights, atomic_mass_for_symbol, atomic_number,
        element_name, resolve_atomic_masses, standard_atomic_weight, validate_atomic_mass,
    };
    use crate::domain::Element;

    struct WithoutChlorine;

    impl AtomicMassSource for WithoutChlorine {
        fn atomic_mass(&self, element: Element) -> Option<f64> {
            (element != Element::Cl).then(|| standard_atomic_weight(element))
        }
    }

    struct ZeroHydrogen;

    impl AtomicMassSource for ZeroHydrogen {
        fn atomic_mass(&self, element: Element) -> Option<f64> {
            Some(if element == Element::H {
                0.0
            } else {
                standard_atomic_weight(element)
            })
        }
    }

    #[test]
    fn standard_weights_cover_every_tracked_element() {
        let masses = resolve_atomic_masses(&StandardAtomicWeights).expect("all masses present");
        assert_eq!(masses[Element::Fe], 55.845);
        assert_eq!(masses[Element::S], 32.06);
        assert_eq!(masses[Element::H], 1.008);
        assert!(masses.as_array().iter().all(|mass| *mass > 0.0));
    }

    #[test]
    fn symbol_lookup_uses_standard_weights() {
        assert_eq!(atomic_mass_for_symbol("O"), Some(15.999));
        assert_eq!(atomic_mass_for_symbol("Xe"), None);
        assert_eq!(atomic_number(Element::Fe), 26);
        assert_eq!(element_name(Element::K), "Potassium");
    }

    #[test]
    fn missing_mass_fails_loudly() {
        let error = resolve_atomic_masses(&WithoutChlorine).expect_err("Cl is missing");
        assert_eq!(error.placeholder(), "RUN.ATOMIC_MASS");
        assert!(error.message().contains("'Cl'"));
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let error = resolve_atomic_masses(&ZeroHydrogen).expect_err("H mass is zero");
        assert_eq!(error.placeholder(), "RUN.ATOMIC_MASS");
        assert!(error.message().contains("'H'"));
    }

    #[test]
    fn validation_accepts_only_finite_positive_masses() {
        assert_eq!(validate_atomic_mass(Element::O, 15.999), Ok(15.999));
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let error = validate_atomic_mass(Element::O, mass).expect_err("mass must be rejected");
            assert_eq!(error.placeholder(), "RUN.ATOMIC_MASS");
        }
    }
}
