//! Tui command implementation - full-screen terminal front end.

use super::{CliError, load_world};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dark_forest::render::LEGEND;
use dark_forest::{GAME_TITLE, GameState, HELP_LINE, MapCell, MapGrid, WorldData, parse_command};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

/// Oldest log lines are dropped past this count.
const MAX_LOG_LINES: usize = 300;

/// Lines moved per page key.
const SCROLL_STEP: usize = 5;

/// Start menu entries.
const MENU_ITEMS: [&str; 2] = ["Start Game", "Quit"];

/// Execute the tui command.
///
/// # Errors
///
/// Returns an error if the world cannot be loaded or the terminal fails.
pub(crate) fn execute(world_path: Option<&Path>) -> Result<(), CliError> {
    let world = load_world(world_path)?;
    // Surface bad room data before taking over the screen
    GameState::from_world(&world)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(world);
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor().map_err(|e| CliError::new(e.to_string()))?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && app.handle_key(key) == Control::Exit
        {
            return Ok(());
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Exit,
}

/// Which screen is showing.
enum Screen {
    Menu,
    Playing(Box<Session>),
}

/// App state for the TUI.
struct App {
    world: WorldData,
    screen: Screen,
    selected: usize,
    /// Shown under the menu when a session could not start.
    status: Option<String>,
}

impl App {
    fn new(world: WorldData) -> Self {
        Self {
            world,
            screen: Screen::Menu,
            selected: 0,
            status: None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Exit;
        }

        if let Screen::Playing(session) = &mut self.screen {
            if session.handle_key(key.code) == Control::Exit {
                self.screen = Screen::Menu;
            }
            return Control::Continue;
        }
        self.handle_menu_key(key.code)
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Esc => return Control::Exit,
            KeyCode::Up => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(MENU_ITEMS.len() - 1);
            }
            KeyCode::Down => self.selected = (self.selected + 1) % MENU_ITEMS.len(),
            KeyCode::Enter if self.selected == 0 => self.start_game(),
            KeyCode::Enter => return Control::Exit,
            _ => {}
        }
        Control::Continue
    }

    fn start_game(&mut self) {
        match Session::start(&self.world) {
            Ok(session) => {
                self.status = None;
                self.screen = Screen::Playing(Box::new(session));
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not start session");
                self.status = Some(e.to_string());
            }
        }
    }
}

/// One play-through: the game state plus what the game screen shows.
struct Session {
    state: GameState,
    log: Vec<String>,
    input: String,
    /// Lines scrolled up from the bottom of the log.
    scroll: usize,
    show_map: bool,
}

impl Session {
    fn start(world: &WorldData) -> Result<Self, CliError> {
        let mut state = GameState::from_world(world)?;
        let opening = state.describe_current_room();
        let mut session = Self {
            state,
            log: Vec::new(),
            input: String::new(),
            scroll: 0,
            show_map: false,
        };
        session.push_lines([GAME_TITLE.to_string(), HELP_LINE.to_string()]);
        session.push_lines(opening);
        tracing::info!(room = session.state.current_room_id(), "tui session started");
        Ok(session)
    }

    /// Returns `Control::Exit` when the session should close.
    fn handle_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Esc => return Control::Exit,
            KeyCode::Tab => self.show_map = !self.show_map,
            KeyCode::PageUp => {
                self.scroll = (self.scroll + SCROLL_STEP).min(self.log.len());
            }
            KeyCode::PageDown => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit();
                if !self.state.is_running() {
                    return Control::Exit;
                }
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        Control::Continue
    }

    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let command = parse_command(line);
        let output = self.state.execute(&command);
        self.push_lines(std::iter::once(format!("> {line}")).chain(output));
        self.scroll = 0;
    }

    fn push_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        self.log.extend(lines);
        if self.log.len() > MAX_LOG_LINES {
            let excess = self.log.len() - MAX_LOG_LINES;
            self.log.drain(..excess);
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Menu => render_menu(f, app),
        Screen::Playing(session) => render_game(f, session),
    }
}

fn render_menu(f: &mut Frame, app: &App) {
    let area = centered_rect(40, 40, f.area());

    let mut lines = vec![Line::from("")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let line = if i == app.selected {
            Line::from(Span::styled(
                format!("> {item}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {item}"))
        };
        lines.push(line);
    }
    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[↑/↓] Select  [Enter] Confirm  [Esc] Quit",
        Style::default().fg(Color::Gray),
    )));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {GAME_TITLE} "))
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(menu, area);
}

fn render_game(f: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Log
            Constraint::Length(3), // Input
            Constraint::Length(1), // Controls
        ])
        .split(f.area());

    render_header(f, chunks[0], session);
    render_log(f, chunks[1], session);
    render_input(f, chunks[2], session);

    let controls = Paragraph::new(" [Enter] Send  [Tab] Map  [PgUp/PgDn] Scroll  [Esc] Menu ")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[3]);

    if session.show_map {
        render_map_overlay(f, centered_rect(60, 60, f.area()), session);
    }
}

fn render_header(f: &mut Frame, area: Rect, session: &Session) {
    let room = session
        .state
        .current_room()
        .map_or("(nowhere)", |room| room.name.as_str());
    let title = format!(
        " {GAME_TITLE} | {room} | Rooms discovered: {} ",
        session.state.player().discovered_count()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_log(f: &mut Frame, area: Rect, session: &Session) {
    let width = usize::from(area.width.saturating_sub(2));
    let visible = usize::from(area.height.saturating_sub(2));

    let lines = log_lines(&session.log, width);
    let max_scroll = lines.len().saturating_sub(visible);
    let start = max_scroll - session.scroll.min(max_scroll);
    let shown: Vec<Line<'_>> = lines.into_iter().skip(start).take(visible).collect();

    let log = Paragraph::new(shown).block(Block::default().borders(Borders::ALL));
    f.render_widget(log, area);
}

fn render_input(f: &mut Frame, area: Rect, session: &Session) {
    let input = Paragraph::new(format!("> {}", session.input))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(input, area);

    if !session.show_map {
        let offset = u16::try_from(session.input.chars().count() + 3).unwrap_or(u16::MAX);
        f.set_cursor_position((
            area.x.saturating_add(offset).min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn render_map_overlay(f: &mut Frame, area: Rect, session: &Session) {
    let mut lines = map_lines(&session.state);
    lines.push(Line::from(""));
    lines.extend(LEGEND.iter().map(|entry| Line::from(*entry)));
    lines.push(Line::from("Tab = close"));
    lines.push(Line::from("Esc = menu"));

    let map = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Map "));
    f.render_widget(Clear, area);
    f.render_widget(map, area);
}

/// Map rows with one coloured span per cell.
fn map_lines(state: &GameState) -> Vec<Line<'static>> {
    let grid = match MapGrid::from_state(state) {
        Ok(grid) => grid,
        Err(e) => return vec![Line::from(e.to_string())],
    };

    (0..grid.height())
        .map(|row| {
            let spans: Vec<Span<'static>> = grid
                .row(row)
                .map(|cell| match cell {
                    Some(cell) => Span::styled(format!("{} ", cell.glyph()), cell_style(cell)),
                    None => Span::raw("  "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_style(cell: MapCell) -> Style {
    match cell {
        MapCell::Current => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        MapCell::Open => Style::default().fg(Color::White),
        MapCell::Blocked => Style::default().fg(Color::Red),
    }
}

/// Wrap the log to `width` columns. Room names (a leading newline) get a
/// blank line above and are drawn bold.
fn log_lines(log: &[String], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in log {
        if let Some(title) = entry.strip_prefix('\n') {
            lines.push(Line::from(""));
            lines.extend(wrap_line(title, width).into_iter().map(|piece| {
                Line::from(Span::styled(
                    piece,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }));
        } else {
            lines.extend(wrap_line(entry, width).into_iter().map(Line::from));
        }
    }
    lines
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A rect of the given percentage size centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(WorldData::builtin().unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn session(app: &App) -> &Session {
        match &app.screen {
            Screen::Playing(session) => session,
            Screen::Menu => panic!("expected game screen"),
        }
    }

    fn started() -> App {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_menu_quit_entry_exits() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(press(&mut app, KeyCode::Enter), Control::Exit);
    }

    #[test]
    fn test_menu_esc_exits() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Exit);
    }

    #[test]
    fn test_ctrl_c_exits_anywhere() {
        let mut app = started();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(key), Control::Exit);
    }

    #[test]
    fn test_start_shows_room() {
        let app = started();
        let session = session(&app);
        assert_eq!(session.log[0], GAME_TITLE);
        assert!(session.log.iter().any(|l| l == "\nForest Clearing"));
    }

    #[test]
    fn test_command_is_echoed() {
        let mut app = started();
        type_line(&mut app, "gather wood");

        let session = session(&app);
        assert!(session.input.is_empty());
        let tail = &session.log[session.log.len() - 2..];
        assert_eq!(tail, ["> gather wood", "You gather wood."]);
        assert_eq!(session.state.player().amount("wood"), 2);
    }

    #[test]
    fn test_blank_enter_ignored() {
        let mut app = started();
        let before = session(&app).log.len();
        type_line(&mut app, "   ");
        assert_eq!(session(&app).log.len(), before);
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut app = started();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(session(&app).input, "l");
    }

    #[test]
    fn test_tab_toggles_map() {
        let mut app = started();
        press(&mut app, KeyCode::Tab);
        assert!(session(&app).show_map);
        press(&mut app, KeyCode::Tab);
        assert!(!session(&app).show_map);
    }

    #[test]
    fn test_quit_returns_to_menu() {
        let mut app = started();
        type_line(&mut app, "quit");
        assert!(matches!(app.screen, Screen::Menu));
    }

    #[test]
    fn test_esc_returns_to_menu_and_restart_is_fresh() {
        let mut app = started();
        type_line(&mut app, "gather wood");
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Continue);
        assert!(matches!(app.screen, Screen::Menu));

        press(&mut app, KeyCode::Enter);
        assert_eq!(session(&app).state.player().amount("wood"), 0);
    }

    #[test]
    fn test_log_is_clamped() {
        let mut app = started();
        for _ in 0..200 {
            type_line(&mut app, "look");
        }
        assert_eq!(session(&app).log.len(), MAX_LOG_LINES);
    }

    #[test]
    fn test_page_keys_scroll() {
        let mut app = started();
        for _ in 0..5 {
            type_line(&mut app, "look");
        }
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(session(&app).scroll, 10);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(session(&app).scroll, 5);

        type_line(&mut app, "look");
        assert_eq!(session(&app).scroll, 0);
    }

    #[test]
    fn test_map_lines_mark_player() {
        let app = started();
        let lines = map_lines(&session(&app).state);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains('@'));
    }

    #[test]
    fn test_wrap_line() {
        assert_eq!(wrap_line("short", 20), vec!["short"]);
        assert_eq!(
            wrap_line("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_line("", 10), vec![""]);
    }

    #[test]
    fn test_log_lines_bold_room_name() {
        let log = vec!["\nCave".to_string(), "Dark.".to_string()];
        let lines = log_lines(&log, 40);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_draw_game_with_map() {
        let mut app = started();
        press(&mut app, KeyCode::Tab);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Forest Clearing"));
        assert!(text.contains("@ = you"));
    }
}
