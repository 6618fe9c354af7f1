//! Report computation and rendering

pub mod chart;
pub mod formatter;
pub mod report;
