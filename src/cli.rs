use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use automata::Coord;
use automata::automaton::Automaton;
use automata::cell::Cell;
use automata::elementary::Elementary;
use automata::grid::Grid;
use automata::life::Life;
use automata::patterns::Pattern;
use automata::presets::Registry;
use automata::render::BrailleRenderer;
use automata::render::Glyphs;
use automata::render::TextRenderer;
use automata::rule_set::RuleSet;
use clap::Parser;
use clap::Subcommand;
use tracing::warn;

/// Run cellular automata in the terminal.
#[derive(Parser)]
#[command(
    name = "automata",
    about = "Elementary and Life-like cellular automata in the terminal"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Animate a Life-like automaton. Space pauses, `n` steps while paused, `q` quits.
    Life(LifeArgs),

    /// Print the history of an elementary automaton, one generation per row.
    Elementary(ElementaryArgs),

    /// List the named rules usable with `life --preset`.
    Presets,
}

#[derive(clap::Args)]
pub struct LifeArgs {
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Rule in born/survive notation, e.g. `3/23` or `B36/S23`.
    #[arg(long, conflicts_with = "preset")]
    pub rule: Option<String>,

    /// Name of a builtin rule, see `automata presets`.
    #[arg(long)]
    pub preset: Option<String>,

    /// Seed pattern: glider, blinker, block or r-pentomino.
    #[arg(long, default_value = "r-pentomino")]
    pub pattern: String,

    /// Top left corner of the pattern as `x,y`. Centered when omitted.
    #[arg(long, value_parser = parse_position)]
    pub at: Option<(Coord, Coord)>,

    /// Stop after this many generations and print the last one.
    #[arg(long)]
    pub generations: Option<u64>,

    /// Time between generations.
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Draw 2x4 cells per character.
    #[arg(long)]
    pub braille: bool,
}

#[derive(clap::Args)]
pub struct ElementaryArgs {
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Wolfram rule number, 0 to 255.
    #[arg(long, default_value_t = 30)]
    pub rule: u32,

    /// Live cells of the first row, comma separated. Defaults to the middle cell.
    #[arg(long, value_delimiter = ',')]
    pub seed: Vec<Coord>,

    /// Draw 2x4 cells per character.
    #[arg(long)]
    pub braille: bool,
}

fn parse_position(s: &str) -> Result<(Coord, Coord), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got \"{s}\""))?;

    let x = x.trim().parse().map_err(|e| format!("invalid x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y: {e}"))?;

    Ok((x, y))
}

impl LifeArgs {
    /// Pick the rule from `--rule`, then `--preset`, then fall back to Conway's.
    pub fn rule_set(&self, registry: &Registry) -> Result<RuleSet> {
        match (&self.rule, &self.preset) {
            (Some(rule), _) => rule
                .parse()
                .with_context(|| format!("Invalid rule \"{rule}\"")),
            (None, Some(name)) => registry
                .get(name)
                .with_context(|| format!("Unknown preset \"{name}\"")),
            (None, None) => Ok(RuleSet::default()),
        }
    }

    /// Build the automaton and place the seed pattern.
    pub fn build(&self, registry: &Registry) -> Result<Life> {
        let rule = self.rule_set(registry)?;
        let Some(pattern) = Pattern::find(&self.pattern) else {
            bail!("Unknown pattern \"{}\"", self.pattern)
        };

        let mut life = Life::new(self.width, self.height, rule).context("Failed to create grid")?;

        let placed = match self.at {
            Some((x, y)) => pattern.stamp(&mut life, x, y),
            None => pattern.stamp_centered(&mut life),
        };

        let total = pattern.cells().count();
        if placed < total {
            warn!("Only {placed} of {total} cells of {} fit in the grid", pattern.name);
        }

        Ok(life)
    }
}

impl ElementaryArgs {
    /// Build the automaton, seed the first row and process it.
    pub fn build(&self) -> Result<Elementary> {
        let mut automaton = Elementary::new(self.width, self.height, self.rule)
            .context("Failed to create elementary automaton")?;

        if self.seed.is_empty() {
            automaton.set(Cell::Live, self.width as Coord / 2, 0);
        }

        for &x in &self.seed {
            if !automaton.set(Cell::Live, x, 0) {
                warn!("Seed cell {x} is outside of the first row");
            }
        }

        automaton.step();

        Ok(automaton)
    }
}

/// Either renderer, picked once from the command line
pub enum Renderer {
    Text(TextRenderer),
    Braille(BrailleRenderer),
}

impl Renderer {
    pub fn new(braille: bool) -> Self {
        if braille {
            Renderer::Braille(BrailleRenderer::new())
        } else {
            Renderer::Text(TextRenderer::new(Glyphs::default()))
        }
    }

    pub fn render(&mut self, grid: &Grid) -> &str {
        match self {
            Renderer::Text(r) => r.render(grid),
            Renderer::Braille(r) => r.render(grid),
        }
    }
}
