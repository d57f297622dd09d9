use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use anyhow::Result;
use automata::automaton::Automaton;
use automata::presets::Registry;
use clap::Parser;
use crossterm::event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use cli::Command;
use cli::ElementaryArgs;
use cli::LifeArgs;
use cli::Renderer;
use events::AppEvent;
use events::EngineEvent;
use events::Event;

mod cli;
mod events;
mod term;

fn main() -> Result<()> {
    // Logs go to stderr so they never end up in the rendered frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let registry = Registry::builtin().context("Failed to load builtin rules")?;

    match args.command {
        Command::Life(args) => run_life(&args, &registry),
        Command::Elementary(args) => run_elementary(&args),
        Command::Presets => {
            for (name, rule) in registry.iter() {
                println!("{name:<16}{rule}");
            }

            Ok(())
        }
    }
}

fn run_elementary(args: &ElementaryArgs) -> Result<()> {
    let automaton = args.build()?;
    info!(rule = %automaton.rule(), "Processed elementary automaton");

    let mut renderer = Renderer::new(args.braille);
    print!("{}", renderer.render(automaton.grid()));

    Ok(())
}

fn run_life(args: &LifeArgs, registry: &Registry) -> Result<()> {
    let mut life = args.build(registry)?;
    info!(rule = %life.rule(), "Starting life");

    let frametime = Duration::from_millis(args.delay_ms);
    let mut renderer = Renderer::new(args.braille);
    let mut paused = false;

    {
        let _raw = term::RawTerminal::enter().context("Failed to set up the terminal")?;
        let mut stdout = std::io::stdout();

        loop {
            let status = format!(
                "generation {} | population {} | {}{}",
                life.generation(),
                life.population(),
                life.rule(),
                if paused { " | paused" } else { "" },
            );
            term::draw_frame(&mut stdout, renderer.render(life.grid()), &status)
                .context("Failed to draw frame")?;

            if args.generations.is_some_and(|n| life.generation() >= n) {
                break;
            }

            let t = Instant::now();

            // Poll events for as long as a frame lasts
            let event = if event::poll(frametime)? {
                term::convert_event(event::read()?)
            } else {
                None
            };

            match event {
                None => {}
                Some(Event::AppEvent(AppEvent::Exit)) => break,
                Some(Event::AppEvent(AppEvent::TogglePause)) => paused = !paused,
                Some(Event::EngineEvent(EngineEvent::Step)) => {
                    if paused {
                        life.step();
                    }
                }
            }

            if !paused {
                life.step();
            }

            thread::sleep(frametime.saturating_sub(t.elapsed()));
        }
    }

    // The alternate screen is gone now, leave the last generation on the terminal
    print!("{}", renderer.render(life.grid()));
    println!(
        "generation {} | population {} | {}",
        life.generation(),
        life.population(),
        life.rule()
    );

    Ok(())
}
