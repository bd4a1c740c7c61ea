pub mod executor;
pub mod random;
