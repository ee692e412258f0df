//! src/app.rs
//!
//! Accordion demo app: 13 toggle buttons, each bound to a collapsible panel
//! with a fade/scale transition.
//!
//! The frame loop owns all timing. Each frame it applies due deferred
//! actions, advances the transitions, rebuilds the layout tree (a collapsed
//! panel gets a zero-height slot; an animating one gets a slot proportional
//! to its current scale), draws, then handles keyboard input.
//!
//! # Keyboard Controls
//!
//! - **0–9** — Toggle pairs 0 through 9 directly.
//! - **Tab** — Cycle keyboard focus across all pairs (including 10–12).
//! - **Enter / Space** — Toggle the focused pair.
//! - **q** — Quit and restore the terminal.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::document::Document;
use crate::panels::{ButtonPanel, HintsPanel, StatusPanel, TitlePanel, VoletPanel};
use crate::toggle::style::Display;
use crate::toggle::{PanelToggler, TogglerConfig, VisualState};
use crate::ui::{Node, empty, group, leaf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction};

/// Rows a fully open volet occupies: two border rows plus body text.
const VOLET_FULL_HEIGHT: u16 = 5;

/// Slot height for a panel at its current scale. A panel removed from layout
/// contributes nothing; an animating one grows or shrinks with its scale.
fn volet_height(toggler: &PanelToggler, index: usize) -> u16 {
    let p = toggler.pairs()[index].panel.read().unwrap();
    if p.style.display != Display::Block {
        return 0;
    }
    let h = (p.style.current.scale * f64::from(VOLET_FULL_HEIGHT)).round() as u16;
    h.min(VOLET_FULL_HEIGHT)
}

/// Build one accordion column: a button row plus a panel slot per pair.
fn accordion_column(toggler: &PanelToggler, indices: &[usize], focused: usize) -> Node {
    let mut constraints = Vec::new();
    let mut children = Vec::new();
    for &i in indices {
        let pair = &toggler.pairs()[i];
        let state = pair.panel.read().unwrap().state;
        let mut button = ButtonPanel::new(pair.button.clone(), state);
        button.highlighted = i == focused;

        constraints.push(Constraint::Length(1));
        children.push(leaf(Box::new(button) as Box<dyn crate::ui::Panel>));

        let height = volet_height(toggler, i);
        constraints.push(Constraint::Length(height));
        if height == 0 {
            children.push(empty());
        } else {
            children.push(leaf(
                Box::new(VoletPanel::new(pair.panel.clone())) as Box<dyn crate::ui::Panel>
            ));
        }
    }
    // absorb leftover vertical space below the column
    constraints.push(Constraint::Min(0));
    children.push(empty());

    group(Direction::Vertical, constraints, children)
}

/// Apply one key event against the toggler and loop flags.
fn handle_key(
    key: KeyEvent,
    toggler: &mut PanelToggler,
    focused: &mut usize,
    running: &mut bool,
) -> Result<()> {
    let pair_count = toggler.pairs().len();
    match key.code {
        KeyCode::Char('q') => *running = false,
        KeyCode::Tab => *focused = (*focused + 1) % pair_count,
        KeyCode::Enter | KeyCode::Char(' ') => {
            toggler.toggle(*focused, Instant::now())?;
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let index = c as usize - '0' as usize;
            if index < pair_count {
                toggler.toggle(index, Instant::now())?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// The frame loop proper; any error bubbles up to `run`, which restores the
/// terminal before propagating it.
fn main_loop(terminal: &mut ratatui::DefaultTerminal, toggler: &mut PanelToggler) -> Result<()> {
    let pair_count = toggler.pairs().len();
    let mut focused = 0usize;
    let frame_time = Duration::from_millis(33);
    let mut last_frame = Instant::now();
    let mut running = true;

    while running {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        toggler.pump(frame_start);
        toggler.tick(dt);

        let open = toggler
            .pairs()
            .iter()
            .filter(|pair| {
                matches!(
                    pair.panel.read().unwrap().state,
                    VisualState::Shown | VisualState::Showing
                )
            })
            .count();

        // Two accordion columns on the left, state + controls on the right.
        let split = pair_count.div_ceil(2);
        let left_indices: Vec<usize> = (0..split).collect();
        let right_indices: Vec<usize> = (split..pair_count).collect();

        let accordion = group(
            Direction::Horizontal,
            vec![Constraint::Percentage(50), Constraint::Percentage(50)],
            vec![
                accordion_column(toggler, &left_indices, focused),
                accordion_column(toggler, &right_indices, focused),
            ],
        );

        let status = leaf(Box::new(StatusPanel::new(
            toggler
                .pairs()
                .iter()
                .map(|pair| pair.panel.clone())
                .collect(),
            focused,
        )) as Box<dyn crate::ui::Panel>);

        let controls = leaf(Box::new(HintsPanel::new(&[
            ("0-9", "Toggle pair"),
            ("TAB", "Focus"),
            ("ENTER", "Toggle focused"),
            ("Q", "Quit"),
        ])) as Box<dyn crate::ui::Panel>);

        let sidebar = group(
            Direction::Vertical,
            vec![Constraint::Min(0), Constraint::Length(4)],
            vec![status, controls],
        );

        let root = group(
            Direction::Vertical,
            vec![Constraint::Length(3), Constraint::Min(0)],
            vec![
                leaf(Box::new(TitlePanel::new("Volets", open, pair_count))
                    as Box<dyn crate::ui::Panel>),
                group(
                    Direction::Horizontal,
                    vec![Constraint::Percentage(58), Constraint::Percentage(42)],
                    vec![accordion, sidebar],
                ),
            ],
        );

        terminal.draw(|f| root.draw(f, f.area()))?;

        // Keyboard controls
        while crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                handle_key(key, toggler, &mut focused, &mut running)?;
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}

pub fn run() -> Result<()> {
    let config = TogglerConfig::default();
    let document = Document::demo(&config);
    let mut toggler = PanelToggler::initialize(&document, config)?;

    let mut terminal = ratatui::init();
    let result = main_loop(&mut terminal, &mut toggler);
    // restore the terminal even when the loop errored
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggler() -> PanelToggler {
        let cfg = TogglerConfig::default();
        let doc = Document::demo(&cfg);
        PanelToggler::initialize(&doc, cfg).unwrap()
    }

    fn state_of(t: &PanelToggler, index: usize) -> VisualState {
        t.pairs()[index].panel.read().unwrap().state
    }

    #[test]
    fn quit_on_q() {
        let mut t = toggler();
        let mut focused = 0;
        let mut running = true;

        handle_key(KeyEvent::from(KeyCode::Char('q')), &mut t, &mut focused, &mut running)
            .unwrap();
        assert!(!running);
    }

    #[test]
    fn tab_cycles_focus_and_wraps() {
        let mut t = toggler();
        let mut focused = 11;
        let mut running = true;

        handle_key(KeyEvent::from(KeyCode::Tab), &mut t, &mut focused, &mut running).unwrap();
        assert_eq!(focused, 12);
        handle_key(KeyEvent::from(KeyCode::Tab), &mut t, &mut focused, &mut running).unwrap();
        assert_eq!(focused, 0);
    }

    #[test]
    fn digit_key_toggles_its_pair() {
        let mut t = toggler();
        let mut focused = 0;
        let mut running = true;

        handle_key(KeyEvent::from(KeyCode::Char('7')), &mut t, &mut focused, &mut running)
            .unwrap();
        assert_eq!(state_of(&t, 7), VisualState::Showing);
        assert_eq!(state_of(&t, 6), VisualState::Hidden);
    }

    #[test]
    fn enter_toggles_the_focused_pair() {
        let mut t = toggler();
        let mut focused = 3;
        let mut running = true;

        handle_key(KeyEvent::from(KeyCode::Enter), &mut t, &mut focused, &mut running).unwrap();
        assert_eq!(state_of(&t, 3), VisualState::Showing);
    }

    #[test]
    fn digit_beyond_pair_count_is_ignored_not_an_error() {
        let cfg = TogglerConfig {
            pair_count: 5,
            ..TogglerConfig::default()
        };
        let doc = Document::demo(&cfg);
        let mut t = PanelToggler::initialize(&doc, cfg).unwrap();
        let mut focused = 0;
        let mut running = true;

        let res = handle_key(KeyEvent::from(KeyCode::Char('8')), &mut t, &mut focused, &mut running);
        assert!(res.is_ok());
        for i in 0..5 {
            assert_eq!(state_of(&t, i), VisualState::Hidden);
        }
    }
}
