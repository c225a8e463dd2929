pub mod assets;
pub mod matches;
pub mod upload;
