pub mod capabilities;
pub mod config;
pub mod dataset;
pub mod preview;
pub mod recommendation;
pub mod relationship;
pub mod threshold;
