//! Search configuration tables.
//!
//! Static lookup data for a search UI: which fields can be searched, which
//! comparison operators exist, and how the results grid is laid out. The
//! element order of each table is part of the contract (it is the order the
//! pickers and grid columns are presented in).

mod types;

pub use types::{Align, FieldOption, OperatorOption, ResultColumn};

/// Searchable fields, in picker order.
pub static FIELD_VALUES: &[FieldOption] = &[
    FieldOption {
        text: "Any Name",
        value: "ANY_NME",
    },
    FieldOption {
        text: "First Name",
        value: "first_nme",
    },
    FieldOption {
        text: "Middle Name",
        value: "middle_nme",
    },
    FieldOption {
        text: "Last Name",
        value: "last_nme",
    },
    FieldOption {
        text: "Address",
        value: "addr_line_1",
    },
];

/// Comparison operators, in picker order.
pub static OPERATOR_VALUES: &[OperatorOption] = &[
    OperatorOption {
        text: "Contains",
        value: "contains",
    },
    OperatorOption {
        text: "Starts With",
        value: "startswith",
    },
    OperatorOption {
        text: "Ends With",
        value: "endswith",
    },
    OperatorOption {
        text: "Exact Match",
        value: "exact",
    },
];

const fn column(text: &'static str, value: &'static str) -> ResultColumn {
    ResultColumn {
        text,
        value,
        sortable: true,
        align: Align::Left,
    }
}

/// Results grid columns, left to right.
pub static RESULT_HEADERS: &[ResultColumn] = &[
    column("Surname", "last_nme"),
    column("Middle Name", "middle_nme"),
    column("First Name", "first_nme"),
    column("Appointed", "appointment_dt"),
    column("Ceased", "cessation_dt"),
    column("Act/Hist", "acchistory"),
    column("Inc/Org #", "corp_num"),
    column("Company Name", "corp_nme"),
    column("Filing Address", "addr_line_1"),
    column("Province", "province"),
    column("Postal Code", "postal_cd"),
    column("Corporation Party ID", "corp_party_id"),
];

/// Returns [`FIELD_VALUES`].
pub fn field_values() -> &'static [FieldOption] {
    FIELD_VALUES
}

/// Returns [`OPERATOR_VALUES`].
pub fn operator_values() -> &'static [OperatorOption] {
    OPERATOR_VALUES
}

/// Returns [`RESULT_HEADERS`].
pub fn result_headers() -> &'static [ResultColumn] {
    RESULT_HEADERS
}

/// Looks up a field by its backend key.
pub fn find_field(value: &str) -> Option<&'static FieldOption> {
    FIELD_VALUES.iter().find(|f| f.value == value)
}

/// Looks up an operator by its backend key.
pub fn find_operator(value: &str) -> Option<&'static OperatorOption> {
    OPERATOR_VALUES.iter().find(|o| o.value == value)
}

/// Looks up a result column by its record key.
pub fn find_column(value: &str) -> Option<&'static ResultColumn> {
    RESULT_HEADERS.iter().find(|c| c.value == value)
}
