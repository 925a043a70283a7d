// Claim extraction: turning a pasted blob of text into checkable units.
//
// Segmentation is deliberately naive: sentence punctuation followed by
// whitespace marks a boundary, and anything too short to carry a fact is
// dropped. Normalization is the shared tokenizer the scorer relies on.

pub mod normalize;
pub mod segment;
