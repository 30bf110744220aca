//! Bulk elemental compositions of meteorite classes and comet 67P, as
//! published. Vectors follow [`Element::ALL`] order: Fe, S, C, Mg, Si, Na, Al,
//! Ca, K, Cl, O, H.
//!
//! [`Element::ALL`]: crate::domain::Element::ALL

use crate::domain::ClassGroup::{
    CarbonaceousChondrite, Comet, EnstatiteChondrite, OrdinaryChondrite,
};
use crate::domain::LiteratureSource::{MelwaniDaswani2021, Wasson1997};
use crate::domain::{
    ChondriteError, ChondriteResult, ClassGroup, CompositionClass, ElementVector, LiteratureSource,
};

const fn class(
    name: &'static str,
    group: ClassGroup,
    source: LiteratureSource,
    abundances: [f64; 12],
) -> CompositionClass {
    CompositionClass {
        name,
        group,
        source,
        abundances: ElementVector::new(abundances),
    }
}

static REGISTRY: [CompositionClass; 12] = [
    class(
        "CI",
        CarbonaceousChondrite,
        MelwaniDaswani2021,
        [
            19.000, 5.448, 3.543, 9.714, 10.895, 0.505, 0.855, 0.928, 0.057, 0.012, 46.737, 2.006,
        ],
    ),
    class(
        "CM",
        CarbonaceousChondrite,
        MelwaniDaswani2021,
        [
            21.731, 2.755, 2.244, 11.733, 12.957, 0.398, 1.153, 1.316, 0.038, 0.019, 44.073, 1.428,
        ],
    ),
    class(
        "CV",
        CarbonaceousChondrite,
        MelwaniDaswani2021,
        [
            24.123, 2.258, 0.544, 14.679, 16.116, 0.349, 1.725, 1.889, 0.037, 0.005, 37.980, 0.287,
        ],
    ),
    class(
        "CK",
        CarbonaceousChondrite,
        MelwaniDaswani2021,
        [
            23.379, 1.728, 0.224, 14.942, 16.060, 0.315, 1.494, 1.728, 0.029, 0.005, 39.802, 0.285,
        ],
    ),
    class(
        "CR",
        CarbonaceousChondrite,
        MelwaniDaswani2021,
        [
            24.254, 1.937, 2.038, 13.961, 15.286, 0.336, 1.172, 1.315, 0.032, 0.007, 39.280, 0.319,
        ],
    ),
    class(
        "CO",
        CarbonaceousChondrite,
        MelwaniDaswani2021,
        [
            25.391, 2.234, 0.447, 14.727, 16.047, 0.427, 1.422, 1.605, 0.037, 0.005, 37.578, 0.071,
        ],
    ),
    class(
        "H",
        OrdinaryChondrite,
        Wasson1997,
        [
            27.5, 0.20, 1.1, 14.0, 16.9, 0.64, 1.13, 1.25, 0.0780, 80e-4, 35.7, 0.0,
        ],
    ),
    class(
        "L",
        OrdinaryChondrite,
        Wasson1997,
        [
            21.5, 0.22, 0.9, 14.9, 18.5, 0.70, 1.22, 1.31, 0.0825, 76e-4, 37.7, 0.0,
        ],
    ),
    class(
        "LL",
        OrdinaryChondrite,
        Wasson1997,
        [
            18.5, 0.23, 1.2, 15.3, 18.9, 0.70, 1.19, 1.30, 0.0790, 130e-4, 40.0, 0.0,
        ],
    ),
    class(
        "EH",
        EnstatiteChondrite,
        Wasson1997,
        [
            29.0, 0.58, 0.40, 10.6, 16.7, 0.68, 0.81, 0.85, 800e-4, 660e-4, 28.0, 0.0,
        ],
    ),
    class(
        "EL",
        EnstatiteChondrite,
        Wasson1997,
        [
            22.0, 0.33, 0.36, 14.1, 18.6, 0.58, 1.05, 1.01, 735e-4, 210e-4, 31.0, 0.0,
        ],
    ),
    class(
        "comet 67P",
        Comet,
        MelwaniDaswani2021,
        [
            6.035, 1.789, 27.814, 0.985, 10.434, 0.696, 0.178, 0.082, 0.031, 0.031, 41.652, 11.283,
        ],
    ),
];

pub fn registry() -> &'static [CompositionClass] {
    &REGISTRY
}

/// Exact name first, then an ASCII case-insensitive match.
pub fn class_by_name(name: &str) -> ChondriteResult<&'static CompositionClass> {
    let name = name.trim();
    REGISTRY
        .iter()
        .find(|class| class.name == name)
        .or_else(|| {
            REGISTRY
                .iter()
                .find(|class| class.name.eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| {
            ChondriteError::input_validation(
                "INPUT.UNKNOWN_CLASS",
                format!(
                    "unknown composition class '{}'; known classes: {}",
                    name,
                    class_names().join(", ")
                ),
            )
        })
}

pub fn class_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|class| class.name).collect()
}

pub fn classes_in_group(group: ClassGroup) -> impl Iterator<Item = &'static CompositionClass> {
    REGISTRY.iter().filter(move |class| class.group == group)
}

#[cfg(test)]
mod tests {
    use super::{class_by_name, class_names, classes_in_group, registry};
    use crate::domain::{ClassGroup, Element, LiteratureSource};

    #[test]
    fn registry_keeps_published_column_order() {
        assert_eq!(
            class_names(),
            vec![
                "CI", "CM", "CV", "CK", "CR", "CO", "H", "L", "LL", "EH", "EL", "comet 67P"
            ]
        );
    }

    #[test]
    fn ci_vector_matches_literature_values() {
        let ci = class_by_name("CI").expect("CI is registered");
        assert_eq!(
            ci.abundances.as_array(),
            &[
                19.000, 5.448, 3.543, 9.714, 10.895, 0.505, 0.855, 0.928, 0.057, 0.012, 46.737,
                2.006
            ]
        );
        assert!((ci.abundances.sum() - 99.700).abs() < 1e-9);
        assert_eq!(ci.source, LiteratureSource::MelwaniDaswani2021);
    }

    #[test]
    fn compact_exponent_literals_keep_their_values() {
        let eh = class_by_name("EH").expect("EH is registered");
        assert_eq!(eh.abundances[Element::K], 0.08);
        assert_eq!(eh.abundances[Element::Cl], 0.066);
        let h = class_by_name("H").expect("H is registered");
        assert_eq!(h.abundances[Element::Cl], 0.008);
        assert_eq!(h.abundances[Element::H], 0.0);
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive_match() {
        assert_eq!(
            class_by_name("Comet 67P").expect("case-insensitive").name,
            "comet 67P"
        );
        assert_eq!(class_by_name("LL").expect("exact").name, "LL");
        assert_eq!(class_by_name("ll").expect("folded").name, "LL");

        let error = class_by_name("Pallasite").expect_err("not registered");
        assert_eq!(error.placeholder(), "INPUT.UNKNOWN_CLASS");
        assert!(error.message().contains("comet 67P"));
    }

    #[test]
    fn groups_partition_the_registry() {
        let counts = [
            (ClassGroup::CarbonaceousChondrite, 6),
            (ClassGroup::OrdinaryChondrite, 3),
            (ClassGroup::EnstatiteChondrite, 2),
            (ClassGroup::Comet, 1),
        ];
        let mut total = 0;
        for (group, expected) in counts {
            let found = classes_in_group(group).count();
            assert_eq!(found, expected, "group {group}");
            total += found;
        }
        assert_eq!(total, registry().len());
    }
}
