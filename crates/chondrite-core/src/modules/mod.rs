pub mod molar;
pub mod normalize;
pub mod ratio;
pub mod registry;
pub mod render;
pub mod table;

pub use molar::{mass_to_molar_percent, mass_to_molar_percent_with};
pub use normalize::normalize_to_percent;
pub use ratio::ratio_to_iron;
pub use registry::{class_by_name, class_names, classes_in_group, registry};
pub use render::{DEFAULT_PRECISION, render_table};
pub use table::{
    CompositionTable, CompositionTables, TableColumn, mass_percent_table, molar_percent_table,
};
