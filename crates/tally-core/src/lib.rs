pub mod comparator;
pub mod comparison;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod harness;
pub mod model;
pub mod report;
pub mod runner;
