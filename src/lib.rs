//! Command line front-end for the real-time transit network builder.

pub mod app;
pub mod output;

pub use app::{TubenetCliArguments, TubenetOperation};
