// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, Interest, Quote, ScoredCandidate, UserProfile};
pub use requests::ChatRequest;
pub use responses::{ChatResponse, Envelope, ErrorResponse, HealthResponse};
