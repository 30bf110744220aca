use super::molar::mass_to_molar_percent;
use super::normalize::normalize_to_percent;
use super::ratio::ratio_to_iron;
use super::registry::registry;
use crate::common::elements::{AtomicMassSource, resolve_atomic_masses};
use crate::domain::{
    ChondriteError, ChondriteResult, CompositionClass, Element, ElementVector, TableKind,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub name: String,
    pub values: ElementVector,
}

/// Rows are the tracked elements in [`Element::ALL`] order, columns are
/// composition classes.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionTable {
    kind: TableKind,
    columns: Vec<TableColumn>,
}

impl CompositionTable {
    pub(crate) fn new(kind: TableKind, columns: Vec<TableColumn>) -> Self {
        Self { kind, columns }
    }

    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn class_count(&self) -> usize {
        self.columns.len()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn row_labels(&self) -> Vec<String> {
        Element::ALL
            .into_iter()
            .map(|element| self.kind.row_label(element))
            .collect()
    }

    pub fn column(&self, class_name: &str) -> Option<&ElementVector> {
        self.position_of(class_name)
            .map(|index| &self.columns[index].values)
    }

    pub fn row(&self, element: Element) -> Vec<f64> {
        self.columns
            .iter()
            .map(|column| column.values[element])
            .collect()
    }

    pub fn value(&self, element: Element, class_name: &str) -> Option<f64> {
        self.column(class_name).map(|values| values[element])
    }

    /// Sub-table holding `class_names` in the order given.
    pub fn select_columns<S>(&self, class_names: &[S]) -> ChondriteResult<Self>
    where
        S: AsRef<str>,
    {
        let columns = class_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.position_of(name)
                    .map(|index| self.columns[index].clone())
                    .ok_or_else(|| {
                        ChondriteError::input_validation(
                            "INPUT.UNKNOWN_CLASS",
                            format!(
                                "table '{}' has no column '{}'; available: {}",
                                self.kind,
                                name,
                                self.class_names().collect::<Vec<_>>().join(", ")
                            ),
                        )
                    })
            })
            .collect::<ChondriteResult<Vec<_>>>()?;
        Ok(Self::new(self.kind, columns))
    }

    fn position_of(&self, class_name: &str) -> Option<usize> {
        let class_name = class_name.trim();
        self.columns
            .iter()
            .position(|column| column.name == class_name)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|column| column.name.eq_ignore_ascii_case(class_name))
            })
    }
}

pub fn mass_percent_table(classes: &[CompositionClass]) -> ChondriteResult<CompositionTable> {
    let columns = classes
        .iter()
        .map(|class| {
            normalize_to_percent(&class.abundances)
                .map(|values| TableColumn {
                    name: class.name.to_string(),
                    values,
                })
                .map_err(|error| error.for_subject(class.name))
        })
        .collect::<ChondriteResult<Vec<_>>>()?;
    Ok(CompositionTable::new(TableKind::MassPercent, columns))
}

pub fn molar_percent_table(
    mass_table: &CompositionTable,
    atomic_masses: &ElementVector,
) -> ChondriteResult<CompositionTable> {
    if mass_table.kind() != TableKind::MassPercent {
        return Err(ChondriteError::input_validation(
            "INPUT.TABLE_KIND",
            format!(
                "molar conversion needs a '{}' table, got '{}'",
                TableKind::MassPercent,
                mass_table.kind()
            ),
        ));
    }

    let columns = mass_table
        .columns()
        .iter()
        .map(|column| {
            mass_to_molar_percent(&column.values, atomic_masses)
                .map(|values| TableColumn {
                    name: column.name.clone(),
                    values,
                })
                .map_err(|error| error.for_subject(&column.name))
        })
        .collect::<ChondriteResult<Vec<_>>>()?;
    Ok(CompositionTable::new(TableKind::MolarPercent, columns))
}

/// All four views, computed once from the same classes and atomic masses.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionTables {
    mass: CompositionTable,
    molar: CompositionTable,
    mass_ratio: CompositionTable,
    molar_ratio: CompositionTable,
}

impl CompositionTables {
    /// Builds every view over the full registry.
    pub fn build<S>(source: &S) -> ChondriteResult<Self>
    where
        S: AtomicMassSource + ?Sized,
    {
        Self::from_classes(registry(), source)
    }

    pub fn from_classes<S>(classes: &[CompositionClass], source: &S) -> ChondriteResult<Self>
    where
        S: AtomicMassSource + ?Sized,
    {
        let atomic_masses = resolve_atomic_masses(source)?;
        let mass = mass_percent_table(classes)?;
        let molar = molar_percent_table(&mass, &atomic_masses)?;
        let mass_ratio = ratio_to_iron(&mass)?;
        let molar_ratio = ratio_to_iron(&molar)?;
        Ok(Self {
            mass,
            molar,
            mass_ratio,
            molar_ratio,
        })
    }

    pub fn get(&self, kind: TableKind) -> &CompositionTable {
        match kind {
            TableKind::MassPercent => &self.mass,
            TableKind::MolarPercent => &self.molar,
            TableKind::MassRatioToIron => &self.mass_ratio,
            TableKind::MolarRatioToIron => &self.molar_ratio,
        }
    }

    pub fn mass_percent(&self) -> &CompositionTable {
        &self.mass
    }

    pub fn molar_percent(&self) -> &CompositionTable {
        &self.molar
    }

    pub fn mass_ratio_to_iron(&self) -> &CompositionTable {
        &self.mass_ratio
    }

    pub fn molar_ratio_to_iron(&self) -> &CompositionTable {
        &self.molar_ratio
    }
}
