//! Heir categories and the counts a calculation starts from

pub mod catalog;
pub mod quantities;

pub use catalog::{HeirCategory, HeirGroup, HeirId, MAX_PLURAL_COUNT};
pub use quantities::HeirQuantities;
