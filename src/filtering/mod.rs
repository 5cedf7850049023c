/*! Filtering utilities

Filters decide which tokens take part in the analysis.
They implement [filter::Filter] and hold no state, so that a given token is always kept or always skipped.
! */
mod filter;
mod token;

pub use filter::Filter;
pub use token::Separators;
