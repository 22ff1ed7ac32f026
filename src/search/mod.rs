//! Search module for the tic-tac-toe AI
//!
//! Contains the exhaustive minimax searcher. The game tree is small enough
//! that no pruning or caching is used.

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
