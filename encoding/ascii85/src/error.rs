/// Errors that can occur while decoding ASCII85 data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input contained a byte outside the alphabet, a `z` inside a
    /// group, or ended with a single dangling digit.
    #[error("illegal ascii85 data at input byte {position}")]
    IllegalFormat {
        /// Offset into the decoder input at which the problem was found.
        position: usize,
    },
}

impl DecodeError {
    /// The offset into the decoder input at which the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            Self::IllegalFormat { position } => position,
        }
    }
}
