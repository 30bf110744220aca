use crate::domain::{ChondriteError, ChondriteResult, ElementVector};

pub const PERCENT_SCALE: f64 = 100.0;

/// Rescales `vector` so its entries sum to 100.
///
/// Each entry is computed as `value / sum * 100`. Negative or non-finite entries
/// and a zero sum are reported instead of propagating NaN or infinity.
pub fn normalize_to_percent(vector: &ElementVector) -> ChondriteResult<ElementVector> {
    if let Some((element, value)) = vector
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        return Err(ChondriteError::input_validation(
            "INPUT.ABUNDANCE",
            format!(
                "abundance {} for element '{}' must be finite and non-negative",
                value, element
            ),
        ));
    }

    let total = vector.sum();
    if total == 0.0 {
        return Err(ChondriteError::computation(
            "RUN.ZERO_SUM",
            "composition vector sums to zero and cannot be normalized",
        ));
    }

    Ok(vector.map(|_, value| value / total * PERCENT_SCALE))
}
