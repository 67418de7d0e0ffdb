pub mod quote_repo;

pub use quote_repo::QuoteRepo;
