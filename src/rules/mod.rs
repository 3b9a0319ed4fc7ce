//! Static rule-text reference table

pub mod catalog;

pub use catalog::{Language, RuleCategory, RuleText, RULE_COUNT};
