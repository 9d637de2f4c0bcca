// Transparency scoring: additive sub-scores over loosely-typed product data,
// plus fixed advisory strings for weak categories.

pub mod handlers;
pub mod product;
pub mod scorer;
