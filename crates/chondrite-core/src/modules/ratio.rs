use super::table::{CompositionTable, TableColumn};
use crate::domain::{ChondriteError, ChondriteResult, Element};

/// Divides every column by its own Fe entry, so the Fe/Fe row is 1.0 throughout.
/// Column count and order are unchanged.
pub fn ratio_to_iron(table: &CompositionTable) -> ChondriteResult<CompositionTable> {
    let Some(ratio_kind) = table.kind().ratio_kind() else {
        return Err(ChondriteError::input_validation(
            "INPUT.TABLE_KIND",
            format!("table '{}' is already expressed relative to Fe", table.kind()),
        ));
    };

    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let iron = column.values[Element::Fe];
            if iron == 0.0 || !iron.is_finite() {
                return Err(ChondriteError::computation(
                    "RUN.ZERO_IRON",
                    format!("Fe value {} cannot be used as a ratio denominator", iron),
                )
                .for_subject(&column.name));
            }
            Ok(TableColumn {
                name: column.name.clone(),
                values: column.values.map(|_, value| value / iron),
            })
        })
        .collect::<ChondriteResult<Vec<_>>>()?;

    Ok(CompositionTable::new(ratio_kind, columns))
}

#[cfg(test)]
mod tests {
    use super::ratio_to_iron;
    use crate::domain::{Element, ElementVector, TableKind};
    use crate::modules::table::{CompositionTable, TableColumn};

    fn percent_table(columns: &[(&str, [f64; 12])]) -> CompositionTable {
        CompositionTable::new(
            TableKind::MassPercent,
            columns
                .iter()
                .map(|(name, values)| TableColumn {
                    name: (*name).to_string(),
                    values: ElementVector::new(*values),
                })
                .collect(),
        )
    }

    #[test]
    fn iron_row_becomes_one_and_order_is_kept() {
        let table = percent_table(&[
            ("B", [20.0, 10.0, 5.0, 15.0, 10.0, 5.0, 5.0, 5.0, 5.0, 5.0, 10.0, 5.0]),
            ("A", [50.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, 5.0, 5.0]),
        ]);
        let ratios = ratio_to_iron(&table).expect("Fe is non-zero");

        assert_eq!(ratios.kind(), TableKind::MassRatioToIron);
        assert_eq!(ratios.class_names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(ratios.row(Element::Fe), vec![1.0, 1.0]);
        assert_eq!(ratios.value(Element::S, "B"), Some(0.5));
        assert_eq!(ratios.value(Element::Cl, "A"), Some(0.0));
        assert_eq!(ratios.row_labels()[1], "S/Fe");
    }

    #[test]
    fn zero_iron_is_a_computation_error() {
        let mut values = [1.0; 12];
        values[Element::Fe.index()] = 0.0;
        let table = percent_table(&[("NoIron", values)]);

        let error = ratio_to_iron(&table).expect_err("Fe is zero");
        assert_eq!(error.placeholder(), "RUN.ZERO_IRON");
        assert!(error.message().starts_with("NoIron: "));
    }

    #[test]
    fn ratio_tables_cannot_be_transformed_again() {
        let table = percent_table(&[("A", [1.0; 12])]);
        let ratios = ratio_to_iron(&table).expect("first transform");
        let error = ratio_to_iron(&ratios).expect_err("second transform");
        assert_eq!(error.placeholder(), "INPUT.TABLE_KIND");
    }
}
