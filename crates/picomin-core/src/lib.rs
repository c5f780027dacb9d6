pub mod cart;
pub mod compact;
pub mod error;
pub mod minify;

pub use crate::cart::split::{split_cart, CartParts, GFX_MARKER};
pub use crate::compact::compact_code;
pub use crate::error::{CartError, Result};
pub use crate::minify::minify_cart;
