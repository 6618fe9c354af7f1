//! Text normalization and question analysis module

pub mod analyzer;
pub mod comparator;
pub mod lemmatizer;
pub mod normalizer;
pub mod questions;
