//! Command-line interface and the interactive regenerate loop

use crate::algorithm::executor::{GeneratorConfig, MapGenerator};
use crate::algorithm::random::SeededRandom;
use crate::io::configuration::REGENERATE_PROMPT;
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::render::render_grid;
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "streetmap")]
#[command(
    author,
    version,
    about = "Generate street maps from start to home with wave function collapse"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Random seed for reproducible maps (drawn at random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print a single map and exit instead of prompting to regenerate
    #[arg(short, long)]
    pub once: bool,

    /// Give up after this many discarded grids per map
    #[arg(short = 'a', long)]
    pub max_attempts: Option<usize>,

    /// Suppress the prompt and the attempt summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if the session should keep prompting for new maps
    pub const fn should_prompt(&self) -> bool {
        !self.once
    }

    /// Log filter directive implied by the verbosity flag
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Interactive session printing one map per prompt
pub struct MapSession {
    cli: Cli,
    generator: MapGenerator<SeededRandom>,
}

impl MapSession {
    /// Create a session from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if `--max-attempts` is zero
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.max_attempts == Some(0) {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"at least one attempt is needed",
            ));
        }

        let rng = cli.seed.map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        info!(seed = rng.seed(), "starting session");

        let config = GeneratorConfig {
            max_attempts: cli.max_attempts,
            ..GeneratorConfig::default()
        };

        Ok(Self {
            cli,
            generator: MapGenerator::new(config, rng),
        })
    }

    /// Seed driving this session
    pub const fn seed(&self) -> u64 {
        self.generator.rng().seed()
    }

    /// Run the session on the process terminal
    ///
    /// # Errors
    ///
    /// Returns an error if generation gives up or the terminal fails
    pub fn process(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(&mut stdin.lock(), &mut stdout.lock())?;
        Ok(())
    }

    /// Generate and print maps until input ends or a single map was asked for
    ///
    /// Returns the number of maps printed.
    ///
    /// # Errors
    ///
    /// Returns an error if generation gives up, or if reading `input` or
    /// writing `output` fails
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<usize> {
        let mut printed = 0;

        loop {
            let map = self.generator.generate()?;
            printed += 1;

            for line in render_grid(&map.grid) {
                writeln!(output, "{line}").map_err(io_error("writing map"))?;
            }
            if !self.cli.quiet {
                writeln!(
                    output,
                    "Generated in {} attempt(s) with seed {}.",
                    map.attempts,
                    self.seed()
                )
                .map_err(io_error("writing summary"))?;
            }

            if !self.cli.should_prompt() {
                break;
            }

            if !self.cli.quiet {
                writeln!(output, "{REGENERATE_PROMPT}").map_err(io_error("writing prompt"))?;
            }
            output.flush().map_err(io_error("flushing output"))?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .map_err(io_error("reading input"))?;
            if read == 0 {
                break;
            }
        }

        Ok(printed)
    }
}
