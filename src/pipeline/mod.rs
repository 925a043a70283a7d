// Pipeline orchestration: the service boundary front ends call.
//
// analyze: segment the text, then fetch and score each claim in order.

pub mod analyze;
