// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod evaluate;
pub mod report;
pub mod signs;

// algorithms
pub mod bisection;
pub mod secant;
