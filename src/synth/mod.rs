//! Scheduled signal chains.
//!
//! A [`Chain`] is one source → optional filter → gain-envelope path, pinned
//! to a start time on the engine clock. Effect recipes and the song player
//! both produce chains; the mixer renders and retires them.

pub mod chain;

pub use chain::Chain;
