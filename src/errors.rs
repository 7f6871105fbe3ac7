use std::fmt;

/// Data contract failures raised by the refinement routines
///
/// None of these are transient: they indicate the caller supplied input which violates the
/// documented preconditions, so they are returned immediately and never retried.
///
#[derive(Clone, Debug, PartialEq)]
pub enum RefineError {
    /// A structural precondition on the input was violated, such as an empty candidate list or
    /// regions presented out of order
    Precondition(String),

    /// An input value fell outside a recognized enumeration (status, gender, chromosome, ...)
    DomainValue(String),
}

impl RefineError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn domain_value(msg: impl Into<String>) -> Self {
        Self::DomainValue(msg.into())
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    pub fn is_domain_value(&self) -> bool {
        matches!(self, Self::DomainValue(_))
    }
}

impl std::error::Error for RefineError {}

impl fmt::Display for RefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition(msg) => write!(f, "PreconditionError{{msg: {msg}}}"),
            Self::DomainValue(msg) => write!(f, "DomainValueError{{msg: {msg}}}"),
        }
    }
}

pub type RefineResult<T> = Result<T, RefineError>;
