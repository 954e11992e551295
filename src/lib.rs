//! Conway's Game of Life on a bounded dead-border grid, scoring seed designs.
//!
//! Designs are compact hexadecimal text files. Each one is decoded into the
//! central box of the board, run for a fixed number of generations with a
//! dead border (cells on the perimeter never come alive, no wraparound) and
//! scored by the ratio of ending live cells to twice the starting live cells.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Run configuration and design decoding/placement
//! - `compute`: Grid state, the generation-stepping engine and display
//!
//! # Example
//!
//! ```rust
//! use hexlife::{Design, Placement, Simulation};
//!
//! // A blinker: three cells in a row
//! let design = Design::parse("38").unwrap();
//!
//! let mut sim = Simulation::new(32, 32).unwrap();
//! let placement = Placement::centered_box(32, 32);
//! let stats = sim.score_design(&design, placement, 1000);
//!
//! println!("Fitness after {} generations: {}", stats.generations, stats.fitness);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, RunStats, Simulation, compact_hex};
pub use schema::{ConfigError, Design, DesignError, Placement, RunConfig};
