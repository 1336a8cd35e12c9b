//! Pure data core: CSV tables in, lookup indexes and a renderable graph out.
//!
//! Nothing in this module touches the DOM, so it is exercised by native unit
//! tests without a wasm runtime.

pub mod graph;
pub mod index;
pub mod loader;
pub mod model;
pub mod query;
pub mod store;

pub use graph::DrugGraph;
pub use index::DrugIndex;
pub use loader::{LoadError, load};
pub use model::{Drug, Interaction};
pub use query::{DrugDetail, InteractionEntry, describe, search_names};
pub use store::DrugStore;
