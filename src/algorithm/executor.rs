//! Generation driver: build, collapse, validate, retry
//!
//! A failed validation cannot be repaired locally, so the whole grid is
//! thrown away and rebuilt from scratch. Attempts are unbounded unless a cap
//! is configured.

use tracing::{debug, info};

use crate::algorithm::collapse::collapse_grid;
use crate::algorithm::connectivity::validate_and_prune;
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{MAP_HEIGHT, MAP_WIDTH};
use crate::io::error::{MapError, Result};
use crate::spatial::grid::Grid;

/// Parameters controlling map generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Give up after this many discarded grids (`None` retries forever)
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            max_attempts: None,
        }
    }
}

/// A validated map together with the effort it took
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    /// Fully resolved and pruned grid
    pub grid: Grid,
    /// Number of grids built, including the accepted one
    pub attempts: usize,
}

/// Produces validated street maps from a random source
///
/// Successive calls to [`MapGenerator::generate`] continue the same random
/// stream, so a seeded source yields a reproducible sequence of maps.
pub struct MapGenerator<R> {
    config: GeneratorConfig,
    rng: R,
}

impl<R: RandomSource> MapGenerator<R> {
    /// Create a generator drawing decisions from `rng`
    pub const fn new(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generation parameters in use
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Random source driving generation
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Generate grids until one connects start to home
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured dimensions cannot hold a start and a home cell
    /// - `max_attempts` grids were discarded without success
    pub fn generate(&mut self) -> Result<GeneratedMap> {
        let GeneratorConfig { width, height, .. } = self.config;
        if width < 2 {
            return Err(MapError::InvalidDimensions {
                width,
                height,
                reason: "start and home need separate columns",
            });
        }

        let mut attempts = 0;

        loop {
            if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(MapError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            let mut grid = Grid::new(width, height, &mut self.rng)?;
            let stats = collapse_grid(&mut grid, &mut self.rng)?;

            if validate_and_prune(&mut grid)? {
                info!(
                    attempts,
                    steps = stats.steps,
                    propagated = stats.propagated_edges,
                    start_row = grid.start()[1],
                    home_row = grid.home()[1],
                    "map accepted"
                );
                return Ok(GeneratedMap { grid, attempts });
            }

            debug!(
                attempt = attempts,
                steps = stats.steps,
                propagated = stats.propagated_edges,
                "home unreachable, discarding grid"
            );
        }
    }
}
