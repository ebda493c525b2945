pub mod config;
pub mod generator;
pub mod models;
pub mod occupancy;
pub mod placement;
pub mod sampler;
pub mod venue;
pub mod writer;
