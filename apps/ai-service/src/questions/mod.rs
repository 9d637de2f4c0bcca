// Follow-up question catalog: per-category question sets served behind a
// swappable generator trait.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod models;
