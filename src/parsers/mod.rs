//! Source parsing
//!
//! One parser: test files are read as TypeScript-with-JSX so `.ts`,
//! `.tsx`, `.jsx`, and `.js` inputs all parse uniformly.

pub mod typescript;

pub use typescript::extract_test_blocks;
