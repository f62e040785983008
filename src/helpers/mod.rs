pub mod casing;
pub mod predicates;
