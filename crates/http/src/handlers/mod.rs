pub mod entries;
pub mod reflections;
pub mod thoughts;
