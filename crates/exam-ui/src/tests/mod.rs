//! Behavioral tests for the page behaviors
//!
//! BDD-style tests using given-when-then naming, run against the in-memory
//! document and the virtual clock.

mod search_behaviors;
