// crates/picomin-cli/src/cmd/mod.rs

pub mod minify;
