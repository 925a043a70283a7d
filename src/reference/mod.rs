// Reference retrieval: the only part of the pipeline that touches the network.
//
// The ReferenceSource trait abstracts the encyclopedia service so the
// pipeline can be driven by the live Wikipedia client or by an in-memory
// fake in tests. The fetcher sits on top of it and owns the guarantee that
// a lookup always produces a Reference, never an error.

pub mod fetcher;
pub mod rate_limiter;
pub mod traits;
pub mod wikipedia;
