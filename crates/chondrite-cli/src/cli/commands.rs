use super::CliError;
use anyhow::Context;
use chondrite_core::common::elements::{
    StandardAtomicWeights, atomic_number, element_name, standard_atomic_weight,
};
use chondrite_core::domain::{Element, TableKind};
use chondrite_core::modules::{CompositionTables, DEFAULT_PRECISION, registry, render_table};
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum View {
    /// Mass percent per class
    Mass,
    /// Molar percent per class
    Molar,
    /// Mass percent divided by the class's Fe mass percent
    MassRatio,
    /// Molar percent divided by the class's Fe molar percent
    MolarRatio,
}

impl View {
    fn table_kind(self) -> TableKind {
        match self {
            Self::Mass => TableKind::MassPercent,
            Self::Molar => TableKind::MolarPercent,
            Self::MassRatio => TableKind::MassRatioToIron,
            Self::MolarRatio => TableKind::MolarRatioToIron,
        }
    }
}

#[derive(clap::Args)]
pub(super) struct ShowArgs {
    /// Table to display
    #[arg(long, value_enum, default_value_t = View::MassRatio)]
    view: View,

    /// Restrict output to these classes, in the order given (repeatable)
    #[arg(long = "class", value_name = "NAME")]
    classes: Vec<String>,

    /// Digits after the decimal point
    #[arg(
        long,
        default_value_t = DEFAULT_PRECISION as u8,
        value_parser = clap::value_parser!(u8).range(0..=15)
    )]
    precision: u8,
}

pub(super) fn run_show_command(args: ShowArgs) -> Result<i32, CliError> {
    let kind = args.view.table_kind();
    info!(view = %kind, precision = args.precision, "rendering composition table");

    let tables = CompositionTables::build(&StandardAtomicWeights)?;
    debug!(classes = tables.mass_percent().class_count(), "built composition tables");

    let table = tables.get(kind);
    let rendered = if args.classes.is_empty() {
        render_table(table, usize::from(args.precision))
    } else {
        debug!(selected = ?args.classes, "selecting class columns");
        render_table(
            &table.select_columns(args.classes.as_slice())?,
            usize::from(args.precision),
        )
    };

    write_stdout(&rendered)?;
    Ok(0)
}

pub(super) fn run_classes_command() -> Result<i32, CliError> {
    let classes = registry();
    let name_width = classes
        .iter()
        .map(|class| class.name.len())
        .max()
        .unwrap_or(0);
    let group_width = classes
        .iter()
        .map(|class| class.group.as_str().len())
        .max()
        .unwrap_or(0);

    let mut rendered = String::new();
    for class in classes {
        rendered.push_str(&format!(
            "{:<name_width$}  {:<group_width$}  {}\n",
            class.name,
            class.group.as_str(),
            class.source,
        ));
    }

    write_stdout(&rendered)?;
    Ok(0)
}

pub(super) fn run_elements_command() -> Result<i32, CliError> {
    let mut rendered = String::new();
    for element in Element::ALL {
        rendered.push_str(&format!(
            "{:<2}  {:>2}  {:<9}  {}\n",
            element.symbol(),
            atomic_number(element),
            element_name(element),
            standard_atomic_weight(element),
        ));
    }

    write_stdout(&rendered)?;
    Ok(0)
}

fn write_stdout(rendered: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}
