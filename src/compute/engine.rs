//! Simulation engine - double-buffered generation stepping and fitness.
//!
//! Owns a pair of equally sized boards and alternates between them each
//! generation: the active board is the frozen snapshot every cell reads,
//! the inactive board receives the next state, and the roles swap at the
//! generation boundary. Mutating in place would read already-updated
//! neighbors mid-scan.

use rayon::prelude::*;

use crate::schema::{ConfigError, Design, Placement};

use super::Grid;

/// Game of Life simulation on a bounded dead-border board.
///
/// Border cells are never evaluated against the rule; they are forced dead
/// in every generation. There is no wraparound.
pub struct Simulation {
    /// The two boards; `active` indexes the current one.
    boards: [Grid; 2],
    active: usize,
    /// Generation counter. Starts at 1 when seeded.
    generation: u32,
    /// Live cells recorded right after seeding.
    start_live: usize,
}

impl Simulation {
    /// Create a simulation with both boards allocated dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        let board = Grid::new(rows, columns)?;
        Ok(Self {
            boards: [board.clone(), board],
            active: 0,
            generation: 1,
            start_live: 0,
        })
    }

    /// The board holding the current generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.boards[self.active]
    }

    /// Current generation counter value.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Live-cell count captured at seed time.
    #[inline]
    pub fn starting_live_cells(&self) -> usize {
        self.start_live
    }

    /// Load a design into the placement rectangle of the current board.
    ///
    /// Clears the board, resets the generation counter to 1 and records the
    /// starting live-cell count. Design rows and bits that fall outside the
    /// rectangle are ignored; bits whose target lands outside the board are
    /// dropped with a warning. Bits seeded onto the border count toward the
    /// starting total but die at the first step.
    pub fn seed(&mut self, design: &Design, placement: Placement) {
        let board = &mut self.boards[self.active];
        board.clear();

        let mut clipped = 0usize;
        for (r, bits) in design.rows().take(placement.height).enumerate() {
            for (c, &alive) in bits.iter().take(placement.width).enumerate() {
                if !alive {
                    continue;
                }
                let row = placement.row + r;
                let col = placement.col + c;
                if row < board.rows() && col < board.columns() {
                    board.set(row, col, true);
                } else {
                    clipped += 1;
                }
            }
        }
        if clipped > 0 {
            log::warn!("{clipped} live design bits fell outside the board and were dropped");
        }

        self.generation = 1;
        self.start_live = board.live_cells();
        log::debug!("seeded {} live cells", self.start_live);
    }

    /// Advance one generation.
    ///
    /// Every cell of the inactive board is written exactly once: border
    /// cells are forced dead, interior cells follow B3/S23 against the
    /// frozen active board. Rows are computed in parallel; the read board
    /// is immutable for the whole step.
    pub fn step(&mut self) {
        let (left, right) = self.boards.split_at_mut(1);
        let (current, next) = if self.active == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };

        let columns = current.columns();
        next.cells_mut()
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = if current.is_border(row, col) {
                        false
                    } else {
                        let n = current.live_neighbors(row, col);
                        if current.is_alive(row, col) {
                            n == 2 || n == 3
                        } else {
                            n == 3
                        }
                    };
                }
            });

        self.generation += 1;
        self.active = 1 - self.active;
    }

    /// Step until the generation counter reaches `target`, then report.
    ///
    /// The counter starts at 1, so reaching generation N takes N - 1 steps;
    /// a target at or below the current counter performs no steps. The
    /// ending live-cell count is taken from the board that is current when
    /// the target is reached.
    pub fn run_to_generation(&mut self, target: u32) -> RunStats {
        while self.generation < target {
            self.step();
        }

        let end_live = self.current().live_cells();
        log::debug!(
            "reached generation {} with {} live cells",
            self.generation,
            end_live
        );

        RunStats {
            generations: self.generation,
            start_live: self.start_live,
            end_live,
            fitness: fitness_ratio(self.start_live, end_live),
        }
    }

    /// Seed a design and run it to the target generation.
    pub fn score_design(&mut self, design: &Design, placement: Placement, target: u32) -> RunStats {
        self.seed(design, placement);
        self.run_to_generation(target)
    }
}

/// Ending live cells over twice the starting live cells.
///
/// A dead seeding scores 0 rather than dividing by zero: no design can
/// produce life from an empty dead-border board.
#[inline]
pub fn fitness_ratio(start_live: usize, end_live: usize) -> f32 {
    if start_live == 0 {
        0.0
    } else {
        end_live as f32 / (2.0 * start_live as f32)
    }
}

/// Summary of one scored run.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunStats {
    /// Generation counter value when the run stopped.
    pub generations: u32,
    /// Live cells right after seeding.
    pub start_live: usize,
    /// Live cells when the target generation was reached.
    pub end_live: usize,
    /// `end_live / (2 * start_live)`, 0 for a dead seeding.
    pub fitness: f32,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn centered(sim: &Simulation) -> Placement {
        Placement::centered_box(sim.current().rows(), sim.current().columns())
    }

    fn seeded(design_text: &str, rows: usize, columns: usize) -> Simulation {
        let design = Design::parse(design_text).unwrap();
        let mut sim = Simulation::new(rows, columns).unwrap();
        let placement = centered(&sim);
        sim.seed(&design, placement);
        sim
    }

    #[test]
    fn test_seeding_matches_design_bits() {
        let design = Design::parse("3C\n42\n81").unwrap();
        let mut sim = Simulation::new(32, 32).unwrap();
        sim.seed(&design, Placement::centered_box(32, 32));

        assert_eq!(sim.current().live_cells(), design.live_bits());
        assert_eq!(sim.starting_live_cells(), design.live_bits());
        assert_eq!(sim.generation(), 1);
        // Top-left design bit of "3C" is at (12, 14)
        assert!(sim.current().is_alive(12, 14));
    }

    #[test]
    fn test_reseeding_clears_previous_design() {
        let mut sim = Simulation::new(32, 32).unwrap();
        let placement = centered(&sim);
        sim.seed(&Design::parse("FF\nFF").unwrap(), placement);
        sim.seed(&Design::parse("18\n18").unwrap(), placement);
        assert_eq!(sim.current().live_cells(), 4);
    }

    #[test]
    fn test_border_cells_dead_after_every_step() {
        // Cover the whole 8x8 board with live cells, border included
        let design = Design::parse("FF\nFF\nFF\nFF\nFF\nFF\nFF\nFF").unwrap();
        let mut sim = Simulation::new(8, 8).unwrap();
        sim.seed(
            &design,
            Placement {
                row: 0,
                col: 0,
                width: 8,
                height: 8,
            },
        );
        assert_eq!(sim.starting_live_cells(), 64);

        for _ in 0..5 {
            sim.step();
            let grid = sim.current();
            for row in 0..grid.rows() {
                for col in 0..grid.columns() {
                    if grid.is_border(row, col) {
                        assert!(
                            !grid.is_alive(row, col),
                            "border cell ({}, {}) alive at generation {}",
                            row,
                            col,
                            sim.generation()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_dead_board_is_fixed_point() {
        let mut sim = seeded("00\n00", 16, 16);
        assert_eq!(sim.starting_live_cells(), 0);

        let stats = sim.run_to_generation(100);
        assert_eq!(stats.end_live, 0);
        assert_eq!(stats.fitness, 0.0);
    }

    #[test]
    fn test_isolated_cell_dies_in_one_step() {
        // Single live bit: "80" = 1000 0000
        let mut sim = seeded("80", 16, 16);
        assert_eq!(sim.starting_live_cells(), 1);

        sim.step();
        assert_eq!(sim.current().live_cells(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        // 2x2 block: "18" = 0001 1000
        let mut sim = seeded("18\n18", 16, 16);
        let before = sim.current().clone();

        let stats = sim.run_to_generation(50);
        assert_eq!(stats.end_live, 4);
        assert_eq!(sim.current(), &before, "block changed during run");
        assert!((stats.fitness - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        // Horizontal 3-in-a-row: "38" = 0011 1000
        let mut sim = seeded("38", 16, 16);
        let horizontal = sim.current().clone();

        sim.step();
        let vertical = sim.current().clone();
        assert_ne!(horizontal, vertical);
        assert_eq!(vertical.live_cells(), 3);

        sim.step();
        assert_eq!(sim.current(), &horizontal, "blinker did not return after 2 steps");
    }

    #[test]
    fn test_run_to_generation_counts_from_one() {
        let mut sim = seeded("38", 16, 16);

        // Already at generation 1: no steps
        let stats = sim.run_to_generation(1);
        assert_eq!(stats.generations, 1);
        assert_eq!(stats.end_live, 3);

        // Reaching generation 3 takes two steps: blinker is back upright
        let horizontal = sim.current().clone();
        let stats = sim.run_to_generation(3);
        assert_eq!(stats.generations, 3);
        assert_eq!(sim.current(), &horizontal);
    }

    #[test]
    fn test_fitness_matches_live_cell_ratio() {
        let design = Design::parse("38").unwrap();
        let mut sim = Simulation::new(16, 16).unwrap();
        let placement = centered(&sim);

        let stats = sim.score_design(&design, placement, 10);
        assert_eq!(stats.start_live, 3);
        assert_eq!(
            stats.fitness,
            fitness_ratio(stats.start_live, stats.end_live)
        );
        // Blinker never dies: 3 cells forever
        assert!((stats.fitness - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fitness_ratio_zero_start() {
        assert_eq!(fitness_ratio(0, 0), 0.0);
        assert_eq!(fitness_ratio(4, 2), 0.25);
        assert_eq!(fitness_ratio(3, 3), 0.5);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let design = Design::parse("20\n10\n70").unwrap();

        let mut first = Simulation::new(32, 32).unwrap();
        let mut second = Simulation::new(32, 32).unwrap();
        let placement = Placement::centered_box(32, 32);

        let a = first.score_design(&design, placement, 200);
        let b = second.score_design(&design, placement, 200);

        assert_eq!(a, b);
        assert_eq!(first.current(), second.current());
    }

    proptest! {
        #[test]
        fn prop_border_stays_dead_and_runs_deterministic(
            lines in prop::collection::vec(prop::collection::vec(0u32..16, 1..4), 1..9)
        ) {
            let text: String = lines
                .iter()
                .map(|digits| {
                    digits
                        .iter()
                        .map(|d| char::from_digit(*d, 16).unwrap())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n");
            let design = Design::parse(&text).unwrap();
            let placement = Placement::centered_box(16, 16);

            let mut first = Simulation::new(16, 16).unwrap();
            let mut second = Simulation::new(16, 16).unwrap();
            let a = first.score_design(&design, placement, 12);
            let b = second.score_design(&design, placement, 12);

            prop_assert_eq!(a, b);

            let grid = first.current();
            for row in 0..grid.rows() {
                for col in 0..grid.columns() {
                    if grid.is_border(row, col) {
                        prop_assert!(!grid.is_alive(row, col));
                    }
                }
            }
        }
    }
}
