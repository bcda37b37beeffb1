use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown jewelry type: {0}")]
    UnknownJewelryType(String),

    #[error("unknown metal type: {0}")]
    UnknownMetal(String),

    #[error("unknown gem type: {0}")]
    UnknownGem(String),

    #[error("unknown shape: {0} (expected a standard shape or a `custom-` id)")]
    UnknownShape(String),

    #[error("design name must not be blank")]
    BlankDesignName,
}
