pub mod analyzer;
pub mod annotation;
pub mod cache;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod filtering;
pub mod layout;
pub mod pipelines;
pub mod writing;
