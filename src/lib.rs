// TrustGuard: claim-by-claim trust scoring for AI-generated text.
//
// This is the library root. Each module corresponds to one stage of the
// verification pipeline; `pipeline::analyze::analyze` is the entry point
// front ends call.

pub mod claims;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod reference;
pub mod scoring;
