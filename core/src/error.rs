use core::fmt::{Debug, Display};

/// Result type alias for pipeline operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything a pipeline can settle with besides a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element was rejected by a filter whose predicate was pending.
    ///
    /// Terminals absorb this and move on to the next element, so it never
    /// reaches the caller of `take` or `reduce`.
    #[error("element rejected by filter")]
    Skip,

    /// A seedless reduce found no element to start from.
    #[error("cannot reduce an empty source without a seed")]
    EmptySource,

    /// `flatten` met an element that had not settled yet.
    #[error("cannot flatten a pending element")]
    PendingSource,

    /// A failure raised by a caller-supplied stage.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl Error {
    /// Builds a caller failure from a message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Error::Failed(anyhow::Error::msg(message))
    }

    #[inline]
    pub fn is_skip(&self) -> bool {
        matches!(self, Error::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn failed_displays_the_caller_message() {
        let err = Error::msg("boom");
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_skip());
        assert!(Error::Skip.is_skip());
    }

    #[test]
    fn anyhow_errors_convert() {
        let err: Error = anyhow::anyhow!("disk on fire").into();
        assert!(matches!(err, Error::Failed(_)));
    }
}
