//! Test-only package. Workspace-level integration tests live in `tests/`;
//! the library itself is `crates/euler-core`.
