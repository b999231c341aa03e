// tests/support/mod.rs
// Test-only support code shared by several integration test binaries. Each
// binary uses a different subset, so unused items are allowed here.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use builders::*;
