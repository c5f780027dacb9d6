// crates/picomin-cli/src/io/mod.rs

pub mod cart;
