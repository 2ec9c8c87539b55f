//! # CacheSweep
//!
//! Cachesweep is a configuration-space search harness for a two-level cache
//! simulator
//!
//! Given a fixed memory-access trace, it enumerates combinations of cache
//! size, associativity, and prefetch-buffer depth for an L1/L2 pair, runs the
//! external simulator once per combination, scrapes the L1 miss rate out of
//! the simulator's textual report, and keeps the combination that minimises
//! that miss rate
//!
//! The simulator itself is an opaque collaborator: the harness only talks to
//! it through a process boundary (flags in, report text out, non-zero exit on
//! failure) and never models cache behaviour on its own

/// Contains definitions for the sweep axes, the fixed simulator parameters,
/// and the configuration points built from them
pub mod config;

/// Contains the error taxonomy shared by the invoker, the parser, and the
/// sweep controller
pub mod error;

/// Contains the subprocess boundary to the external simulator
pub mod invoker;

/// Contains the scraper which pulls the L1 miss rate out of a simulator report
pub mod report;

/// Contains the sweep controller, which drives the search and tracks the best
/// configuration seen so far
pub mod sweep;
