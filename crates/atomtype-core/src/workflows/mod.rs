//! # Workflows Module
//!
//! Higher-level entry points that apply a typer to many atoms at once.
//!
//! Each atom is classified independently, so [`batch`] simply spreads the
//! work over the rayon thread pool and returns one result per atom in input
//! order. Typing failures are reported per atom rather than aborting the batch.

pub mod batch;
