pub mod strength;
