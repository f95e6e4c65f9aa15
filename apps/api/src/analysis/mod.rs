//! Resume analysis: PDF text extraction, normalization, and skill scoring.
//!
//! Flow per upload: `extract` → `normalize` → `scorer::analyze`.

pub mod extract;
pub mod normalize;
pub mod scorer;
