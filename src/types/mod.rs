//! Core types for TrustGate

mod emotion;
mod report;
mod session;
mod status;
mod verdict;

pub use emotion::Emotion;
pub use report::{BehaviorReport, SubmitRequest};
pub use session::{OpenSession, SessionRecord};
pub use status::SessionStatus;
pub use verdict::TrustVerdict;
