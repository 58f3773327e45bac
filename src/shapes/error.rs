use thiserror::Error;

/// Errors that can occur when generating or transforming shapes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Invalid {shape} parameter: {reason}")]
    InvalidParameter { shape: &'static str, reason: String },

    #[error("{0} cannot be inset")]
    NotInsettable(&'static str),

    #[error("Cannot interpolate between {from} and {to}")]
    KindMismatch {
        from: &'static str,
        to: &'static str,
    },
}

impl ShapeError {
    pub(crate) fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        ShapeError::InvalidParameter {
            shape,
            reason: reason.into(),
        }
    }
}
