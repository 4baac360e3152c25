use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use episim_core::sweep::{SortOrder, SweepResults};

use crate::charts;

/// Which projection of the sweep is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Curves,
    Summary,
}

pub struct App {
    results: SweepResults,
    view: View,
    order: SortOrder,
    selected: usize,
    exit: bool,
}

impl App {
    pub fn new(results: SweepResults) -> Self {
        Self {
            results,
            view: View::Curves,
            order: SortOrder::Grid,
            selected: 0,
            exit: false,
        }
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: content above a one-line key hint bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        match self.view {
            View::Curves => {
                charts::render_facets(frame, chunks[0], &self.results, self.order, self.selected)
            }
            View::Summary => charts::render_summary_table(
                frame,
                chunks[0],
                &self.results,
                self.order,
                self.selected,
            ),
        }

        let hints = Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Yellow)),
            Span::raw("view  "),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::raw(" sort ("),
            Span::raw(order_label(self.order)),
            Span::raw(")  "),
            Span::styled("\u{2190}/\u{2192}", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(hints), chunks[1]);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Tab => {
                self.view = match self.view {
                    View::Curves => View::Summary,
                    View::Summary => View::Curves,
                };
            }
            KeyCode::Char('s') => {
                self.order = match self.order {
                    SortOrder::Grid => SortOrder::PeakDescending,
                    SortOrder::PeakDescending => SortOrder::PeakAscending,
                    SortOrder::PeakAscending => SortOrder::Grid,
                };
            }
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right => {
                let last = self.results.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            _ => {}
        }
    }
}

fn order_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Grid => "grid",
        SortOrder::PeakDescending => "peak desc",
        SortOrder::PeakAscending => "peak asc",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use episim_core::{ScenarioBuilder, SerialInterval, SweepConfig, sweep_run};

    fn sample_app() -> App {
        let base = ScenarioBuilder::new()
            .population(200)
            .initial_infected(2)
            .exposure_rate(5.0)
            .infection_probability(0.05)
            .recovery_rate(0.1)
            .steps(20)
            .trials(2)
            .seed(7)
            .build()
            .unwrap();
        let sweep = SweepConfig {
            exposure_rates: vec![2.0, 5.0],
            infection_probabilities: vec![0.02, 0.08],
            serial_interval: SerialInterval::default(),
        };
        App::new(sweep_run(&base, &sweep).unwrap())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn quit_keys_set_exit() {
        let mut app = sample_app();
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.exit);

        let mut app = sample_app();
        app.handle_key_event(press(KeyCode::Esc));
        assert!(app.exit);
    }

    #[test]
    fn tab_toggles_view() {
        let mut app = sample_app();
        assert_eq!(app.view, View::Curves);
        app.handle_key_event(press(KeyCode::Tab));
        assert_eq!(app.view, View::Summary);
        app.handle_key_event(press(KeyCode::Tab));
        assert_eq!(app.view, View::Curves);
    }

    #[test]
    fn sort_key_cycles_orders() {
        let mut app = sample_app();
        assert_eq!(app.order, SortOrder::Grid);
        app.handle_key_event(press(KeyCode::Char('s')));
        assert_eq!(app.order, SortOrder::PeakDescending);
        app.handle_key_event(press(KeyCode::Char('s')));
        assert_eq!(app.order, SortOrder::PeakAscending);
        app.handle_key_event(press(KeyCode::Char('s')));
        assert_eq!(app.order, SortOrder::Grid);
    }

    #[test]
    fn selection_clamps_to_grid() {
        let mut app = sample_app();
        app.handle_key_event(press(KeyCode::Left));
        assert_eq!(app.selected, 0);

        for _ in 0..10 {
            app.handle_key_event(press(KeyCode::Right));
        }
        assert_eq!(app.selected, app.results.len() - 1);
    }
}
