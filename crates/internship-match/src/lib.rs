//! Internship shortlisting: catalog loading, eligibility gates, weighted
//! scoring and stable top-K ranking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
