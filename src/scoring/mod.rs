// Trust scoring: lexical word overlap between a claim and its reference.

pub mod similarity;
