pub mod errors;

pub use errors::{ChondriteError, ChondriteErrorCategory, ChondriteResult};

use std::fmt::{Display, Formatter};
use std::ops::Index;

pub const ELEMENT_COUNT: usize = 12;

/// Tracked elements, in the row order every composition vector uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Fe,
    S,
    C,
    Mg,
    Si,
    Na,
    Al,
    Ca,
    K,
    Cl,
    O,
    H,
}

impl Element {
    pub const ALL: [Element; ELEMENT_COUNT] = [
        Self::Fe,
        Self::S,
        Self::C,
        Self::Mg,
        Self::Si,
        Self::Na,
        Self::Al,
        Self::Ca,
        Self::K,
        Self::Cl,
        Self::O,
        Self::H,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Fe => "Fe",
            Self::S => "S",
            Self::C => "C",
            Self::Mg => "Mg",
            Self::Si => "Si",
            Self::Na => "Na",
            Self::Al => "Al",
            Self::Ca => "Ca",
            Self::K => "K",
            Self::Cl => "Cl",
            Self::O => "O",
            Self::H => "H",
        }
    }

    /// Case-sensitive; surrounding whitespace is ignored.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        Self::ALL
            .into_iter()
            .find(|element| element.symbol() == symbol)
    }

    pub fn ratio_label(self) -> String {
        format!("{}/{}", self.symbol(), Self::Fe.symbol())
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).symbol())
    }
}

/// Twelve abundances indexed by [`Element`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementVector([f64; ELEMENT_COUNT]);

impl ElementVector {
    pub const fn new(values: [f64; ELEMENT_COUNT]) -> Self {
        Self(values)
    }

    pub fn from_slice(values: &[f64]) -> ChondriteResult<Self> {
        let values: [f64; ELEMENT_COUNT] = values.try_into().map_err(|_| {
            ChondriteError::input_validation(
                "INPUT.VECTOR_LENGTH",
                format!(
                    "composition vector has {} values, expected {} ({})",
                    values.len(),
                    ELEMENT_COUNT,
                    Element::ALL.map(Element::symbol).join(", ")
                ),
            )
        })?;
        Ok(Self(values))
    }

    pub fn get(&self, element: Element) -> f64 {
        self.0[element.index()]
    }

    pub const fn as_array(&self) -> &[f64; ELEMENT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Left-to-right sum, matching a sequential accumulation of the literal values.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn map(&self, mut f: impl FnMut(Element, f64) -> f64) -> Self {
        let mut values = self.0;
        for (element, value) in Element::ALL.into_iter().zip(values.iter_mut()) {
            *value = f(element, *value);
        }
        Self(values)
    }
}

impl Index<Element> for ElementVector {
    type Output = f64;

    fn index(&self, element: Element) -> &Self::Output {
        &self.0[element.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassGroup {
    CarbonaceousChondrite,
    OrdinaryChondrite,
    EnstatiteChondrite,
    Comet,
}

impl ClassGroup {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarbonaceousChondrite => "carbonaceous chondrite",
            Self::OrdinaryChondrite => "ordinary chondrite",
            Self::EnstatiteChondrite => "enstatite chondrite",
            Self::Comet => "comet",
        }
    }
}

impl Display for ClassGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteratureSource {
    MelwaniDaswani2021,
    Wasson1997,
}

impl LiteratureSource {
    pub const fn citation(self) -> &'static str {
        match self {
            Self::MelwaniDaswani2021 => "compiled by Melwani-Daswani et al. (2021)",
            Self::Wasson1997 => "from Wasson et al. (1997)",
        }
    }
}

impl Display for LiteratureSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).citation())
    }
}

/// A named meteorite or comet category with its bulk composition as published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionClass {
    pub name: &'static str,
    pub group: ClassGroup,
    pub source: LiteratureSource,
    pub abundances: ElementVector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    MassPercent,
    MolarPercent,
    MassRatioToIron,
    MolarRatioToIron,
}

impl TableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MassPercent => "mass %",
            Self::MolarPercent => "molar %",
            Self::MassRatioToIron => "mass ratio to Fe",
            Self::MolarRatioToIron => "molar ratio to Fe",
        }
    }

    pub const fn is_ratio(self) -> bool {
        matches!(self, Self::MassRatioToIron | Self::MolarRatioToIron)
    }

    pub const fn ratio_kind(self) -> Option<Self> {
        match self {
            Self::MassPercent => Some(Self::MassRatioToIron),
            Self::MolarPercent => Some(Self::MolarRatioToIron),
            Self::MassRatioToIron | Self::MolarRatioToIron => None,
        }
    }

    pub fn row_label(self, element: Element) -> String {
        if self.is_ratio() {
            element.ratio_label()
        } else {
            element.symbol().to_string()
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
