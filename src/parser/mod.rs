// Listing parsers: turn a storefront document into offers
pub mod store_parser;

pub use store_parser::{ParsedRow, Parser, StoreListingParser};
