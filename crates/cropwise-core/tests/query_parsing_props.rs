//! Property tests for the explicit parse and default-substitution steps

use cropwise_core::models::{
    parse_optional_number, Coordinate, NumericInput, PartialSoilReading, SoilField, SoilReading,
};
use proptest::prelude::*;

fn partial() -> impl Strategy<Value = PartialSoilReading> {
    (
        prop::option::of(0.0f64..500.0),
        prop::option::of(0.0f64..500.0),
        prop::option::of(0.0f64..500.0),
        prop::option::of(0.0f64..14.0),
    )
        .prop_map(|(n, p, k, ph)| PartialSoilReading { n, p, k, ph })
}

proptest! {
    #[test]
    fn finite_numbers_survive_text_form(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let text = NumericInput::from(format!("  {}  ", value));
        prop_assert_eq!(parse_optional_number(Some(&text)), Some(value));
        prop_assert_eq!(parse_optional_number(Some(&NumericInput::from(value))), Some(value));
    }

    #[test]
    fn non_numeric_text_is_absent(text in "[a-zA-Z_ ]{0,12}") {
        // "inf" and "nan" parse, but are rejected as non-finite
        prop_assert_eq!(parse_optional_number(Some(&NumericInput::from(text))), None);
    }

    #[test]
    fn defaults_fill_only_missing_fields(partial in partial()) {
        let reading = SoilReading::with_defaults(&partial);
        let missing = partial.missing_fields();

        for (field, value) in [
            (SoilField::Nitrogen, reading.n),
            (SoilField::Phosphorus, reading.p),
            (SoilField::Potassium, reading.k),
            (SoilField::Ph, reading.ph),
        ] {
            match partial.get(field) {
                Some(given) => {
                    prop_assert_eq!(value, given);
                    prop_assert!(!missing.contains(&field));
                }
                None => {
                    prop_assert_eq!(value, field.default_value());
                    prop_assert!(missing.contains(&field));
                }
            }
        }
    }

    #[test]
    fn coordinates_parse_from_text(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let parsed = Coordinate::parse(
            Some(&NumericInput::from(lat.to_string())),
            Some(&NumericInput::from(lon.to_string())),
        )
        .unwrap();
        prop_assert_eq!(parsed, Coordinate { lat, lon });
    }
}
