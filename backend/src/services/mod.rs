//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the pure computation pipeline and the persistence collaborator.

pub mod analysis;

pub use analysis::AnalysisService;
