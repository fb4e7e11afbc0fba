//! File parsers for collection formats

pub mod json;
