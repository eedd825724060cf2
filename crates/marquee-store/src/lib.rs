// crates/marquee-store/src/lib.rs
//
// marquee-store: Storage layer for Marquee.
//
// Holds the viewer's catalog of people, movies, and ratings, and derives the
// rating records the scoring core consumes. Two backends implement the
// `RatingStore` trait: an in-memory store and a JSON file store that rewrites
// its document after every mutation.

pub mod catalog;
pub mod file;
pub mod memory;

// Re-export key types for ergonomic access from downstream crates.
pub use catalog::Catalog;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
