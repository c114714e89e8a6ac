use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// The label is blank, or contains nothing that survives id normalization.
    #[error("Cannot derive an anchor id from label {label:?}")]
    EmptyId { label: String },
}
