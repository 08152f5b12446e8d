pub mod error;
pub mod facet;
pub mod filter;
pub mod partition;
