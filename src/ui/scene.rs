//! What the screen currently shows, and how it is drawn.

use std::collections::VecDeque;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::combat::{BattleEvent, PoolKind, Side, StatusKind};
use crate::progression::Ending;
use crate::session::GameEvent;

const LOG_LINES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: &'static str,
    pub glyph: &'static str,
    pub colour: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: usize,
}

impl MenuView {
    pub fn new(prompt: &str, options: &[String]) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.to_vec(),
            selected: 0,
        }
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

/// Everything on screen. Events update it; [`render`] draws it.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub room: Option<RoomView>,
    pub player_hp: Option<(i32, i32)>,
    pub player_mana: Option<(i32, i32)>,
    pub player_gold: Option<i32>,
    pub boss_hp: Option<(i32, i32)>,
    pub boss_status: Option<StatusKind>,
    pub expression: Option<&'static str>,
    /// Side currently highlighted by a flicker frame.
    pub flash: Option<(Side, Option<&'static str>)>,
    pub log: VecDeque<String>,
    pub menu: Option<MenuView>,
    /// A line is waiting for the player to continue.
    pub waiting: bool,
    pub ending: Option<Ending>,
}

impl ScreenState {
    pub fn push_line(&mut self, line: impl Into<String>) {
        if self.log.len() == LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(line.into());
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Narration(text) => self.push_line(text.clone()),
            GameEvent::Battle(battle) => self.apply_battle(battle),
            GameEvent::EnterRoom {
                name, glyph, colour, ..
            } => {
                self.room = Some(RoomView {
                    name: *name,
                    glyph: *glyph,
                    colour: *colour,
                });
                self.boss_hp = None;
                self.boss_status = None;
                self.expression = None;
                self.log.clear();
            }
            GameEvent::LeaveRoom => {
                self.room = None;
                self.boss_hp = None;
                self.boss_status = None;
                self.expression = None;
            }
            GameEvent::Ending(ending) => {
                self.ending = Some(*ending);
                self.log.clear();
            }
        }
    }

    fn apply_battle(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::Message(text) => self.push_line(text.clone()),
            BattleEvent::PoolChanged {
                side,
                pool,
                current,
                max,
            } => match (side, pool) {
                (Side::Player, PoolKind::Hp) => self.player_hp = Some((*current, *max)),
                (Side::Player, PoolKind::Mana) => self.player_mana = Some((*current, *max)),
                (Side::Player, PoolKind::Gold) => self.player_gold = Some(*current),
                (Side::Boss, PoolKind::Hp) => self.boss_hp = Some((*current, *max)),
                (Side::Boss, _) => {}
            },
            BattleEvent::Expression(face) => self.expression = Some(*face),
            BattleEvent::StatusChanged {
                side: Side::Boss,
                status,
            } => self.boss_status = *status,
            BattleEvent::StatusChanged { .. }
            | BattleEvent::Flicker { .. }
            | BattleEvent::PhaseChanged(_) => {}
        }
    }
}

/// Maps a room colour name to a terminal colour.
pub fn colour_of(name: &str) -> Color {
    match name {
        "RED" => Color::Red,
        "YELLOW" => Color::Yellow,
        "CYAN" => Color::Cyan,
        "BLUE" => Color::Blue,
        "GREEN" => Color::Green,
        "PURPLE" | "VIOLET" => Color::Magenta,
        "ORANGE" => Color::Rgb(255, 165, 0),
        "INDIGO" => Color::Rgb(75, 0, 130),
        "GREY" => Color::Gray,
        _ => Color::White,
    }
}

fn ratio(current: i32, max: i32) -> f64 {
    if max <= 0 {
        0.0
    } else {
        (current as f64 / max as f64).clamp(0.0, 1.0)
    }
}

/// Draws the whole screen.
pub fn render(frame: &mut Frame, state: &ScreenState) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let accent = state
        .room
        .as_ref()
        .map_or(Color::White, |room| colour_of(room.colour));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Boss panel
            Constraint::Min(4),    // Log
            Constraint::Length(3), // Player gauges
            Constraint::Length(menu_height(state)),
        ])
        .split(area);

    render_boss(frame, chunks[0], state, accent);
    render_log(frame, chunks[1], state);
    render_player(frame, chunks[2], state);
    if let Some(menu) = &state.menu {
        render_menu(frame, chunks[3], menu, accent);
    }
}

fn menu_height(state: &ScreenState) -> u16 {
    state
        .menu
        .as_ref()
        .map_or(0, |menu| menu.options.len() as u16 + 3)
}

fn render_boss(frame: &mut Frame, area: Rect, state: &ScreenState, accent: Color) {
    let Some(room) = &state.room else {
        let title = match state.ending {
            Some(_) => " The End ",
            None => " Idols ",
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(block, area);
        return;
    };

    let flashing = matches!(state.flash, Some((Side::Boss, _)));
    let border = match state.flash {
        Some((Side::Boss, Some(colour))) => colour_of(colour),
        Some((Side::Boss, None)) => Color::White,
        _ => accent,
    };

    let block = Block::default()
        .title(format!(" {} ", room.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let mut spans = vec![Span::styled(
        room.glyph,
        Style::default().fg(accent).add_modifier(if flashing {
            Modifier::REVERSED
        } else {
            Modifier::BOLD
        }),
    )];
    if let Some(face) = state.expression {
        spans.push(Span::raw(format!("  {}", face)));
    }
    if let Some(status) = state.boss_status {
        spans.push(Span::styled(
            format!("  [{}]", status.name()),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        rows[0],
    );

    if let Some((current, max)) = state.boss_hp {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent))
            .ratio(ratio(current, max))
            .label(format!("{}/{}", current, max));
        frame.render_widget(gauge, rows[1]);
    }
}

fn render_log(frame: &mut Frame, area: Rect, state: &ScreenState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let newest = state.log.len().saturating_sub(1);
    let mut lines: Vec<Line> = state
        .log
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == newest {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(text.clone(), style))
        })
        .collect();
    if state.waiting {
        lines.push(Line::from(Span::styled(
            "▼",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the newest lines in view.
    let overflow = (lines.len() as u16).saturating_sub(inner.height);
    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((overflow, 0));
    frame.render_widget(log, inner);
}

fn render_player(frame: &mut Frame, area: Rect, state: &ScreenState) {
    let border = match state.flash {
        Some((Side::Player, Some(colour))) => colour_of(colour),
        Some((Side::Player, None)) => Color::Red,
        _ => Color::DarkGray,
    };
    let block = Block::default()
        .title(" You ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(inner);

    if let Some((current, max)) = state.player_hp {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(ratio(current, max))
            .label(format!("HP {}/{}", current, max));
        frame.render_widget(gauge, cols[0]);
    }
    if let Some((current, max)) = state.player_mana {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(ratio(current, max))
            .label(format!("MP {}/{}", current, max));
        frame.render_widget(gauge, cols[1]);
    }
    if let Some(gold) = state.player_gold {
        frame.render_widget(
            Paragraph::new(format!("{}G", gold))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Right),
            cols[2],
        );
    }
}

fn render_menu(frame: &mut Frame, area: Rect, menu: &MenuView, accent: Color) {
    let block = Block::default()
        .title(format!(" {} ", menu.prompt))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = menu
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let prefix = if i == menu.selected { "> " } else { "  " };
            let style = if i == menu.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, option.replace('\n', "  "))).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);

    if inner.height as usize > menu.options.len() {
        let help_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let help = Paragraph::new("[↑/↓] Choose  [Enter] Confirm")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::BossId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_menu_wraps_around() {
        let mut menu = MenuView::new("?", &["A".to_string(), "B".to_string()]);
        menu.previous();
        assert_eq!(menu.selected, 1);
        menu.next();
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_log_keeps_newest_lines() {
        let mut state = ScreenState::default();
        for i in 0..20 {
            state.push_line(format!("line {}", i));
        }
        assert_eq!(state.log.len(), LOG_LINES);
        assert_eq!(state.log.back().map(String::as_str), Some("line 19"));
    }

    #[test]
    fn test_events_update_state() {
        let mut state = ScreenState::default();
        state.apply(&GameEvent::EnterRoom {
            id: BossId(0),
            name: "Akua Ahi",
            glyph: "火",
            colour: "RED",
        });
        state.apply(&GameEvent::Battle(BattleEvent::PoolChanged {
            side: Side::Boss,
            pool: PoolKind::Hp,
            current: 250,
            max: 500,
        }));
        state.apply(&GameEvent::Battle(BattleEvent::StatusChanged {
            side: Side::Boss,
            status: Some(StatusKind::Burn),
        }));
        assert_eq!(state.boss_hp, Some((250, 500)));
        assert_eq!(state.boss_status, Some(StatusKind::Burn));

        state.apply(&GameEvent::LeaveRoom);
        assert!(state.room.is_none());
        assert!(state.boss_status.is_none());
    }

    #[test]
    fn test_render_room_and_menu() {
        let mut state = ScreenState::default();
        state.apply(&GameEvent::EnterRoom {
            id: BossId(1),
            name: "Keoni Wai",
            glyph: "水",
            colour: "BLUE",
        });
        state.apply(&GameEvent::narration("Keoni Wai challenges you!"));
        state.menu = Some(MenuView::new(
            "What will you do?",
            &["FIGHT".to_string(), "FORFEIT".to_string()],
        ));

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Keoni Wai"));
        assert!(text.contains("challenges you!"));
        assert!(text.contains("> FIGHT"));
    }

    #[test]
    fn test_colour_names() {
        assert_eq!(colour_of("RED"), Color::Red);
        assert_eq!(colour_of("VIOLET"), Color::Magenta);
        assert_eq!(colour_of("mystery"), Color::White);
    }
}
