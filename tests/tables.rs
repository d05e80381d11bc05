//! Contract tests for the search configuration tables.
//!
//! Element count and order are relied on by UI layouts, so they are pinned
//! here in full.

use person_search::tables::{self, field_values, operator_values, result_headers};
use person_search::{Align, FIELD_VALUES, OPERATOR_VALUES, RESULT_HEADERS};

#[test]
fn test_field_values_in_order() {
    let pairs: Vec<(&str, &str)> = FIELD_VALUES.iter().map(|f| (f.text, f.value)).collect();
    assert_eq!(
        pairs,
        [
            ("Any Name", "ANY_NME"),
            ("First Name", "first_nme"),
            ("Middle Name", "middle_nme"),
            ("Last Name", "last_nme"),
            ("Address", "addr_line_1"),
        ]
    );
}

#[test]
fn test_operator_values_in_order() {
    let pairs: Vec<(&str, &str)> = OPERATOR_VALUES.iter().map(|o| (o.text, o.value)).collect();
    assert_eq!(
        pairs,
        [
            ("Contains", "contains"),
            ("Starts With", "startswith"),
            ("Ends With", "endswith"),
            ("Exact Match", "exact"),
        ]
    );
}

#[test]
fn test_result_headers_in_order() {
    let pairs: Vec<(&str, &str)> = RESULT_HEADERS.iter().map(|c| (c.text, c.value)).collect();
    assert_eq!(
        pairs,
        [
            ("Surname", "last_nme"),
            ("Middle Name", "middle_nme"),
            ("First Name", "first_nme"),
            ("Appointed", "appointment_dt"),
            ("Ceased", "cessation_dt"),
            ("Act/Hist", "acchistory"),
            ("Inc/Org #", "corp_num"),
            ("Company Name", "corp_nme"),
            ("Filing Address", "addr_line_1"),
            ("Province", "province"),
            ("Postal Code", "postal_cd"),
            ("Corporation Party ID", "corp_party_id"),
        ]
    );
    for column in RESULT_HEADERS {
        assert!(column.sortable, "{} should be sortable", column.value);
        assert_eq!(column.align, Align::Left, "{} should be left aligned", column.value);
    }
}

#[test]
fn test_tables_are_stable_across_accesses() {
    let first = (field_values(), operator_values(), result_headers());
    let second = (field_values(), operator_values(), result_headers());
    assert!(std::ptr::eq(first.0, second.0));
    assert!(std::ptr::eq(first.1, second.1));
    assert!(std::ptr::eq(first.2, second.2));
    assert!(std::ptr::eq(first.0, FIELD_VALUES));
    assert!(std::ptr::eq(first.1, OPERATOR_VALUES));
    assert!(std::ptr::eq(first.2, RESULT_HEADERS));
}

#[test]
fn test_every_searchable_field_has_a_result_column_or_is_any_name() {
    for field in FIELD_VALUES {
        if field.value == "ANY_NME" {
            continue;
        }
        assert!(
            tables::find_column(field.value).is_some(),
            "{} has no result column",
            field.value
        );
    }
}

#[test]
fn test_tables_serialize_like_ui_config() {
    let json = serde_json::to_value(OPERATOR_VALUES).unwrap();
    assert_eq!(json[3], serde_json::json!({"text": "Exact Match", "value": "exact"}));

    let json = serde_json::to_value(RESULT_HEADERS).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(12));
    assert_eq!(json[6]["text"], "Inc/Org #");
    assert_eq!(json[6]["align"], "left");
}
