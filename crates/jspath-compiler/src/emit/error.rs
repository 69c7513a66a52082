use jspath_core::LimitError;

/// Errors raised while encoding a parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A sequence, array or object constructor without the `pg` modifier.
    #[error("{0} constructor requires extended operators (the \"pg\" modifier)")]
    ExtensionsDisabled(&'static str),

    #[error("@ is not allowed in root expressions")]
    CurrentOutsideFilter,

    #[error("LAST is allowed only in array subscripts")]
    LastOutsideSubscript,

    #[error("numeric literal is empty")]
    EmptyNumeric,

    #[error("invalid regular expression {pattern:?}: {message}")]
    InvalidRegex { pattern: String, message: String },

    #[error("encoded jsonpath too large: {0} bytes")]
    TooLarge(usize),

    #[error(transparent)]
    Limit(#[from] LimitError),
}

impl EmitError {
    /// Errors a user can fix by rewriting the path text.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::ExtensionsDisabled(_)
                | Self::CurrentOutsideFilter
                | Self::LastOutsideSubscript
                | Self::InvalidRegex { .. }
        )
    }
}
