//! # Entangled Engine Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # Pinned end-to-end scenarios and boundary rejections
//!     ├── pipeline.rs    # Mine -> sign -> verify -> attach over one bundle
//!     └── properties.rs  # Property tests across the facade
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p en-tests
//! cargo test -p en-tests integration::scenarios::
//! ```

pub mod integration;
