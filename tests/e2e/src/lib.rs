//! Browser-level checks against `dx serve`. Run with `cargo test -p e2e -- --ignored`.

pub mod browser;
pub mod test_server;
