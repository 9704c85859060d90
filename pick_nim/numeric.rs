//! Numeric types used by drawing

pub mod v2f;
