use thiserror::Error;

pub type Result<T> = std::result::Result<T, CartError>;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("empty input: nothing to minify")]
    EmptyInput,

    #[error("no `__gfx__` marker found: cannot split code from cart data")]
    MissingMarker,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
