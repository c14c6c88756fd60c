/// Which editable field of a row changed, carrying the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    Cost(String),
    Multiplier(String),
}

/// A single edit coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditIntent {
    pub code: i64,
    pub field: EditField,
}

impl EditIntent {
    pub fn cost(code: i64, value: impl Into<String>) -> Self {
        Self {
            code,
            field: EditField::Cost(value.into()),
        }
    }

    pub fn multiplier(code: i64, value: impl Into<String>) -> Self {
        Self {
            code,
            field: EditField::Multiplier(value.into()),
        }
    }
}

/// The one cell that needs redrawing after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub code: i64,
    pub suggested: String,
}
