//! Row types of the search configuration tables.

use serde::Serialize;

/// A searchable field: display label and the backend field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    /// Label shown in the field picker
    pub text: &'static str,
    /// Key sent to the backend as `field=`
    pub value: &'static str,
}

/// A comparison operator: display label and the backend operator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorOption {
    /// Label shown in the operator picker
    pub text: &'static str,
    /// Key sent to the backend as `operator=`
    pub value: &'static str,
}

/// Horizontal alignment of a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-aligned
    Left,
    /// Right-aligned
    Right,
    /// Centered
    Center,
}

impl Align {
    /// Lowercase name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

impl std::fmt::Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of the search results grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultColumn {
    /// Column heading
    pub text: &'static str,
    /// Key of the result record shown in this column
    pub value: &'static str,
    /// Whether the grid may sort by this column
    pub sortable: bool,
    /// Cell alignment
    pub align: Align,
}
