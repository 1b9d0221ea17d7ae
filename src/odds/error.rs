#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OddsError {
    #[error("You must provide at least one outcome.")]
    EmptyTable,

    #[error(transparent)]
    MalformedEntry(#[from] MalformedEntryError),

    #[error("Outcome weights must total 100 (currently {0}).")]
    WeightMismatch(u64),
}

impl OddsError {
    pub(super) fn bad_format() -> Self {
        Self::MalformedEntry(MalformedEntryError::BadFormat)
    }

    pub(super) fn blank_name() -> Self {
        Self::MalformedEntry(MalformedEntryError::BlankName)
    }

    pub(super) fn bad_weight(part: &str) -> Self {
        Self::MalformedEntry(MalformedEntryError::BadWeight(part.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEntryError {
    #[error("Bad format. Use: name=weight; ...")]
    BadFormat,

    #[error("Outcome name must be a non-empty string.")]
    BlankName,

    #[error("Weight must be an integer: `{0}`")]
    BadWeight(String),
}
