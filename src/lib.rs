// Library crate exposing modules for integration tests

pub mod cli;
pub mod descent;
pub mod model;
pub mod util;
