// models/src/medical/mod.rs
pub mod hospital;
pub mod problem;
