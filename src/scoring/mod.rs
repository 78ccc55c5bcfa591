pub mod engine;
pub mod hook;
pub mod niche;
pub mod recommend;
pub mod structure;

pub use engine::ScoringEngine;
