//! Integration tests for `drs-rs` file types

mod archive;
mod builder;
mod sprite_in_archive;
