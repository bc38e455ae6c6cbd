//! Common test utilities and infrastructure
//!
//! - Cucumber world implementation

pub mod world;

#[allow(unused_imports)]
pub use world::PlaygroundWorld;
