use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("aspect ratio terms must be non-zero (got {width}:{height})")]
    InvalidAspectRatio { width: u32, height: u32 },

    #[error("mobile breakpoint must be greater than zero")]
    ZeroBreakpoint,

    #[error("malformed asset reference {0:?}: expected `name.ext`")]
    MalformedAssetReference(String),

    #[error("deck has no slides")]
    EmptyDeck,
}
