// Filename generation: typed fields, sanitation, segment assembly, and colors.
// `builder` is pure; validation and handlers sit in front of it.

pub mod builder;
pub mod catalog;
pub mod fields;
pub mod handlers;
pub mod sanitize;
pub mod segment;
pub mod validation;
