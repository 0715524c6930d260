//! Millimeter/inch display helpers.
//!
//! Stored dimension cells are unit-less: legacy sheets recorded inches, newer
//! ones millimeters. The backend convention is that values under 100 are
//! inches and values at or above 100 are millimeters, so these helpers apply
//! that cutoff when normalizing for display. They never modify the stored
//! value.

use doorworks_records::DimValue;

use crate::grouping::DimensionKind;

pub const MM_PER_INCH: f64 = 25.4;

/// Normalize a raw cell to whole millimeters.
pub fn to_mm(value: f64) -> i64 {
    if value < 100.0 {
        (value * MM_PER_INCH).round() as i64
    } else {
        value.round() as i64
    }
}

/// Normalize a raw cell to inches, rounded to two decimals.
pub fn to_inches(value: f64) -> f64 {
    let inches = if value > 100.0 { value / MM_PER_INCH } else { value };
    (inches * 100.0).round() / 100.0
}

/// Area in square feet from millimeter dimensions.
pub fn square_feet(width_mm: f64, height_mm: f64) -> f64 {
    (width_mm / MM_PER_INCH) * (height_mm / MM_PER_INCH) / 144.0
}

/// Render a dimension cell for the paper tables: frames print millimeters,
/// shutters print inches. Unparsable text cells pass through untouched.
pub fn format_dimension(value: &DimValue, kind: DimensionKind) -> String {
    let Some(number) = value.as_number() else {
        return value.to_string();
    };
    match kind {
        DimensionKind::Frame => to_mm(number).to_string(),
        DimensionKind::Shutter => {
            if number < 100.0 {
                value.to_string()
            } else {
                format!("{:.2}", number / MM_PER_INCH)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_are_inches_and_convert_to_mm() {
        assert_eq!(to_mm(36.0), 914);
        assert_eq!(to_mm(914.0), 914);
    }

    #[test]
    fn large_values_are_mm_and_convert_to_inches() {
        assert_eq!(to_inches(914.0), 35.98);
        assert_eq!(to_inches(36.0), 36.0);
    }

    #[test]
    fn square_feet_from_mm_dimensions() {
        let area = square_feet(914.0, 2134.0);
        assert!((area - 20.99).abs() < 0.05, "unexpected area {area}");
    }

    #[test]
    fn frame_cells_format_as_whole_mm() {
        let cell = DimValue::Text("36\"".to_string());
        assert_eq!(format_dimension(&cell, DimensionKind::Frame), "914");
    }

    #[test]
    fn shutter_cells_format_as_inches() {
        let cell = DimValue::Num(914.0);
        assert_eq!(format_dimension(&cell, DimensionKind::Shutter), "35.98");

        let already_inches = DimValue::Num(36.0);
        assert_eq!(format_dimension(&already_inches, DimensionKind::Shutter), "36");
    }

    #[test]
    fn unparsable_text_passes_through() {
        let cell = DimValue::Text("see remark".to_string());
        assert_eq!(format_dimension(&cell, DimensionKind::Frame), "see remark");
    }
}
