//! CLI command implementations.

pub mod catalog;
pub mod compare;
pub mod prices;

pub use catalog::CatalogCommand;
pub use compare::CompareCommand;
pub use prices::PricesCommand;
