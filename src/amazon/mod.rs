//! Amazon-specific page loading and listing extraction.

pub mod client;
pub mod extractor;
pub mod selectors;

pub use client::{AmazonClient, SearchPage};
pub use extractor::{Extraction, Extractor};
