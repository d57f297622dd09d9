use automata::Coord;
use automata::automaton::Automaton;
use automata::cell::Cell;
use automata::elementary::Elementary;
use automata::life::Life;
use automata::patterns;
use automata::presets::Registry;
use automata::render::Glyphs;
use automata::render::TextRenderer;
use automata::rule_set::B3S23;
use proptest::prelude::*;

fn dots() -> TextRenderer {
    TextRenderer::new(Glyphs {
        live: '#',
        dead: '.',
    })
}

#[test]
fn rule_90_triangle() -> anyhow::Result<()> {
    let mut automaton = Elementary::new(9, 5, 90)?;
    automaton.set(Cell::Live, 4, 0);

    automaton.step();

    let mut renderer = dots();
    insta::assert_snapshot!(renderer.render(automaton.grid()), @r"
    ....#....
    ...#.#...
    ..#...#..
    .#.#.#.#.
    #.......#
    ");

    Ok(())
}

#[test]
fn rule_999_is_rejected() {
    assert!(Elementary::new(60, 20, 999).is_err());
}

#[test]
fn empty_three_by_three_stays_empty() -> anyhow::Result<()> {
    let mut life = Life::with_rulestring(3, 3, "3/23")?;

    life.step();

    assert_eq!(life.population(), 0);

    Ok(())
}

#[test]
fn blinker_returns_after_two_steps() -> anyhow::Result<()> {
    let mut life = Life::with_rulestring(5, 5, "3/23")?;
    patterns::BLINKER.stamp(&mut life, 1, 2);
    let start = life.grid().clone();

    life.step();
    let mut renderer = dots();
    insta::assert_snapshot!(renderer.render(life.grid()), @r"
    .....
    ..#..
    ..#..
    ..#..
    .....
    ");

    life.step();
    assert_eq!(life.grid(), &start);

    Ok(())
}

#[test]
fn glider_keeps_its_shape() -> anyhow::Result<()> {
    let mut life = Life::new(8, 8, B3S23)?;
    patterns::GLIDER.stamp(&mut life, 0, 0);

    life.step_n(4);

    let mut renderer = dots();
    insta::assert_snapshot!(renderer.render(life.grid()), @r"
    ........
    ..#.....
    ...#....
    .###....
    ........
    ........
    ........
    ........
    ");

    Ok(())
}

#[test]
fn glider_settles_into_a_block_in_the_corner() -> anyhow::Result<()> {
    // With dead cells past the border, a glider running into the corner leaves a block behind
    let mut life = Life::new(6, 6, B3S23)?;
    patterns::GLIDER.stamp(&mut life, 0, 0);

    life.step_n(40);

    let mut renderer = dots();
    insta::assert_snapshot!(renderer.render(life.grid()), @r"
    ......
    ......
    ......
    ......
    ....##
    ....##
    ");

    Ok(())
}

#[test]
fn set_past_the_width_is_refused() -> anyhow::Result<()> {
    let mut life = Life::new(4, 2, B3S23)?;
    let before = life.grid().clone();

    assert!(!life.set(Cell::Live, 4, 0));
    assert_eq!(life.grid(), &before);

    Ok(())
}

#[test]
fn every_preset_runs() -> anyhow::Result<()> {
    let registry = Registry::builtin()?;

    for (name, rule) in registry.iter() {
        let mut life = Life::new(16, 16, rule)?;
        patterns::R_PENTOMINO.stamp_centered(&mut life);

        life.step_n(10);

        assert_eq!(life.generation(), 10, "{name}");
    }

    Ok(())
}

fn seeded(cells: &[(Coord, Coord)]) -> Life {
    let mut life = Life::new(16, 16, B3S23).unwrap();
    for &(x, y) in cells {
        life.set(Cell::Live, x, y);
    }

    life
}

proptest! {
    #[test]
    fn stepping_is_deterministic(
        cells in prop::collection::vec((0..16 as Coord, 0..16 as Coord), 0..64),
        steps in 0usize..24,
    ) {
        let mut a = seeded(&cells);
        let mut b = seeded(&cells);

        a.step_n(steps);
        b.step_n(steps);

        prop_assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn elementary_is_deterministic(
        rule in 0u32..256,
        seed in prop::collection::vec(0..32 as Coord, 0..8),
    ) {
        let mut a = Elementary::new(32, 16, rule).unwrap();
        for &x in &seed {
            a.set(Cell::Live, x, 0);
        }
        let mut b = a.clone();

        a.process();
        b.process();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn still_lifes_survive_anywhere_inside(x in 1..13 as Coord, y in 1..13 as Coord) {
        let mut life = Life::new(16, 16, B3S23).unwrap();
        patterns::BLOCK.stamp(&mut life, x, y);
        let start = life.grid().clone();

        life.step_n(3);

        prop_assert_eq!(life.grid(), &start);
    }
}
