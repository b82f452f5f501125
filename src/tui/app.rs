//! The interactive lesson browser.
//!
//! One screen lists the lessons; inside a lesson the left pane walks
//! the sections while the right pane reacts to the focused section:
//! sliders and a live chart for explorations, an input box for
//! quizzes, the solution text for reveal exercises. Every slider
//! change rebuilds the model from scratch through the core
//! constructors; nothing here mutates model state.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span, Text},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, ListState,
        Paragraph, Wrap},
    Terminal,
};

use crate::config::Settings;
use crate::core::quadratic::{Quadratic, Roots};
use crate::core::solver;
use crate::format;
use crate::lessons::{self, answer, Explore, ExploreKind, Lesson, Section};
use crate::plot;

// ---------- Palette ----------
fn palette() -> (Color, Color, Color, Color) {
    (
        Color::Rgb(80, 160, 255),  // curve
        Color::Rgb(60, 200, 120),  // solutions
        Color::Rgb(230, 80, 80),   // target line
        Color::Rgb(200, 120, 230), // vertex
    )
}

const DIM: Color = Color::Rgb(140, 140, 150);

// ---------- App State ----------
#[derive(Copy, Clone, PartialEq, Eq)]
enum Screen {
    Browser,
    Lesson,
}

struct App {
    settings: Settings,
    screen: Screen,
    browser_index: usize,
    lesson_index: usize,
    /// Focused section within the open lesson.
    cursor: usize,
    /// Focused slider within the focused exploration.
    slider_focus: usize,
    /// Per-section slider values; empty for non-exploration sections.
    values: Vec<Vec<f64>>,
    /// Per-section reveal flags.
    revealed: Vec<bool>,
    /// Per-section quiz outcome; None until the first submission.
    graded: Vec<Option<bool>>,
    input_active: bool,
    input: String,
    status: String,
    last_status_at: Instant,
}

const KEYS_BROWSER: &str = "↑/↓ choose • ⏎ open • q quit";
const KEYS_LESSON: &str =
    "↑/↓ section • Tab slider • ←/→ adjust • s reveal • ⏎ answer • Esc back";

impl App {
    fn new(settings: Settings, start: Option<usize>) -> Self {
        let mut app = App {
            settings,
            screen: Screen::Browser,
            browser_index: start.unwrap_or(0),
            lesson_index: 0,
            cursor: 0,
            slider_focus: 0,
            values: Vec::new(),
            revealed: Vec::new(),
            graded: Vec::new(),
            input_active: false,
            input: String::new(),
            status: KEYS_BROWSER.into(),
            last_status_at: Instant::now(),
        };
        if let Some(i) = start {
            app.open_lesson(i);
        }
        app
    }

    fn set_status(&mut self, s: impl Into<String>) {
        self.status = s.into();
        self.last_status_at = Instant::now();
    }

    fn lesson(&self) -> &'static Lesson {
        &lessons::all()[self.lesson_index]
    }

    fn open_lesson(&mut self, index: usize) {
        self.lesson_index = index;
        self.screen = Screen::Lesson;
        self.cursor = 0;
        self.slider_focus = 0;
        self.input_active = false;
        self.input.clear();
        let lesson = self.lesson();
        self.values = lesson
            .sections
            .iter()
            .map(|s| match s {
                Section::Explore(e) => e.sliders.iter().map(|sl| sl.init).collect(),
                _ => Vec::new(),
            })
            .collect();
        self.revealed = vec![false; lesson.sections.len()];
        self.graded = vec![None; lesson.sections.len()];
        self.set_status(KEYS_LESSON);
    }

    fn close_lesson(&mut self) {
        self.screen = Screen::Browser;
        self.input_active = false;
        self.input.clear();
        self.set_status(KEYS_BROWSER);
    }

    fn focused_section(&self) -> &'static Section {
        &self.lesson().sections[self.cursor]
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.lesson().sections.len();
        let next = self.cursor as i64 + delta as i64;
        self.cursor = next.clamp(0, len as i64 - 1) as usize;
        self.slider_focus = 0;
        self.input_active = false;
        self.input.clear();
    }

    fn cycle_slider(&mut self) {
        if let Section::Explore(e) = self.focused_section() {
            if !e.sliders.is_empty() {
                self.slider_focus = (self.slider_focus + 1) % e.sliders.len();
            }
        }
    }

    fn nudge_slider(&mut self, delta_steps: f64) {
        if let Section::Explore(e) = self.focused_section() {
            if let Some(slider) = e.sliders.get(self.slider_focus) {
                let v = self.values[self.cursor][self.slider_focus];
                self.values[self.cursor][self.slider_focus] = slider.nudge(v, delta_steps);
            }
        }
    }

    fn toggle_reveal(&mut self) {
        if matches!(self.focused_section(), Section::Reveal(_)) {
            self.revealed[self.cursor] = !self.revealed[self.cursor];
        }
    }

    fn submit_answer(&mut self) {
        if let Section::Quiz(quiz) = self.focused_section() {
            let ok = answer::matches(&self.input, quiz.accepted);
            self.graded[self.cursor] = Some(ok);
            self.set_status(if ok { quiz.success } else { quiz.hint });
        }
        self.input_active = false;
    }
}

/// Model + optional target for the focused exploration, derived from
/// the current slider values. `None` only if construction fails,
/// which the zero-skipping sliders rule out.
fn explore_model(explore: &Explore, values: &[f64]) -> Option<(Quadratic, Option<f64>)> {
    let built = match explore.kind {
        ExploreKind::VertexSliders => (
            Quadratic::from_vertex(values[0], values[1], values[2]),
            None,
        ),
        ExploreKind::FactoredSliders => (
            Quadratic::from_factored(values[0], values[1], values[2]),
            None,
        ),
        ExploreKind::DoubleRootSliders => (
            Quadratic::from_factored(values[0], values[1], values[1]),
            None,
        ),
        ExploreKind::PolySliders => (
            Quadratic::from_polynomial(values[0], values[1], values[2]),
            None,
        ),
        ExploreKind::FixedTarget { a, b, c, .. } => {
            (Quadratic::from_polynomial(a, b, c), Some(values[0]))
        }
        ExploreKind::CustomEquation => (
            Quadratic::from_polynomial(values[0], values[1], values[2]),
            Some(values[3]),
        ),
        ExploreKind::SquareExtract => (
            Quadratic::from_vertex(values[0], values[1], 0.0),
            Some(values[2]),
        ),
    };
    built.0.ok().map(|q| (q, built.1))
}

/// Solutions of `f(x) = target` for an exploration. The extraction
/// playground solves by taking square roots; everything else shifts
/// the constant term.
fn explore_solutions(explore: &Explore, q: &Quadratic, target: f64, epsilon: f64) -> Roots {
    let solved = match explore.kind {
        ExploreKind::SquareExtract => solver::solve_shifted_square(q.a(), q.vertex().d, target),
        _ => solver::solve_for_target_eps(q.a(), q.b(), q.c(), target, epsilon),
    };
    solved.unwrap_or(Roots::None)
}

/// Chart window for an exploration: a fixed -10..10 window for the
/// slider playgrounds, the curve's own window for fixed-target
/// sections, and a vertex-centered window for the custom equation.
fn explore_window(explore: &Explore, q: &Quadratic, target: Option<f64>) -> (f64, f64, f64, f64) {
    match explore.kind {
        ExploreKind::FixedTarget { x_min, x_max, .. } => {
            let (lo, hi) = plot::y_bounds(q, target);
            (x_min, x_max, lo, hi)
        }
        ExploreKind::CustomEquation => {
            let (x_min, x_max) = plot::vertex_window(q, 3.0);
            let (lo, hi) = plot::y_bounds(q, target);
            (x_min, x_max, lo, hi)
        }
        ExploreKind::SquareExtract => {
            let (x_min, x_max) = plot::vertex_window(q, 4.0);
            let (lo, hi) = plot::y_bounds(q, target);
            (x_min, x_max, lo, hi)
        }
        _ => (-10.0, 10.0, -10.0, 10.0),
    }
}

/// Equation string for the focused exploration's readout.
fn explore_equation(explore: &Explore, values: &[f64], q: &Quadratic) -> String {
    match explore.kind {
        ExploreKind::VertexSliders => {
            format!("f(x) = {}", format::vertex(values[0], values[1], values[2]))
        }
        ExploreKind::FactoredSliders => format!(
            "f(x) = {}",
            format::factored(values[0], values[1], values[2])
        ),
        ExploreKind::DoubleRootSliders => format!(
            "f(x) = {}",
            format::factored(values[0], values[1], values[1])
        ),
        ExploreKind::PolySliders | ExploreKind::CustomEquation => {
            let (a, b, c) = q.coefficients();
            format!("f(x) = {}", format::polynomial(a, b, c))
        }
        ExploreKind::FixedTarget { a, b, c, .. } => {
            format!("f(x) = {}", format::polynomial(a, b, c))
        }
        ExploreKind::SquareExtract => format!(
            "{} = {}",
            format::vertex(values[0], values[1], 0.0),
            format::num(values[2])
        ),
    }
}

// ---------- Entry Point ----------
pub fn run(start: Option<usize>, settings: &Settings) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("quadlab"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(settings.clone(), start);
    let res = panic::catch_unwind(AssertUnwindSafe(|| run_app(&mut terminal, app)));

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(inner) => inner,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic>".into()
            };
            anyhow::bail!("lesson browser crashed: {}", msg)
        }
    }
}

// ---------- Event Loop ----------
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if !event::poll(tick_rate)? {
            // Age transient feedback back out to the key help.
            if app.last_status_at.elapsed() > Duration::from_secs(8) {
                app.status = match app.screen {
                    Screen::Browser => KEYS_BROWSER.into(),
                    Screen::Lesson => KEYS_LESSON.into(),
                };
            }
            continue;
        }
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }

        if app.input_active {
            match code {
                KeyCode::Esc => {
                    app.input_active = false;
                    app.input.clear();
                }
                KeyCode::Enter => app.submit_answer(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(ch) => app.input.push(ch),
                _ => {}
            }
            continue;
        }

        match app.screen {
            Screen::Browser => match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => {
                    app.browser_index = app.browser_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    app.browser_index =
                        (app.browser_index + 1).min(lessons::all().len().saturating_sub(1));
                }
                KeyCode::Enter => app.open_lesson(app.browser_index),
                _ => {}
            },
            Screen::Lesson => match code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => app.close_lesson(),
                KeyCode::Up => app.move_cursor(-1),
                KeyCode::Down => app.move_cursor(1),
                KeyCode::PageUp => app.move_cursor(-5),
                KeyCode::PageDown => app.move_cursor(5),
                KeyCode::Tab => app.cycle_slider(),
                KeyCode::Left => app.nudge_slider(-1.0),
                KeyCode::Right => app.nudge_slider(1.0),
                KeyCode::Char('s') => app.toggle_reveal(),
                KeyCode::Enter => {
                    if matches!(app.focused_section(), Section::Quiz(_)) {
                        app.input_active = true;
                        app.input.clear();
                    }
                }
                _ => {}
            },
        }
    }
}

// ---------- Drawing ----------
fn ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_title(f, rows[0], app);
    match app.screen {
        Screen::Browser => draw_browser(f, rows[1], app),
        Screen::Lesson => draw_lesson(f, rows[1], app),
    }
    draw_status(f, rows[2], app);
}

fn draw_title(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let title = match app.screen {
        Screen::Browser => " quadlab — quadratic functions, interactively ".to_string(),
        Screen::Lesson => format!(" quadlab — {} ", app.lesson().title),
    };
    let par = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Rgb(80, 160, 255))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(par, area);
}

fn draw_status(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let par = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.status),
        Style::default().fg(DIM),
    )));
    f.render_widget(par, area);
}

fn draw_browser(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = lessons::all()
        .iter()
        .enumerate()
        .map(|(i, l)| ListItem::new(format!(" {}. {}", i + 1, l.title)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Lessons "))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(80, 160, 255))
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default();
    state.select(Some(app.browser_index));
    f.render_stateful_widget(list, cols[0], &mut state);

    let intro = Paragraph::new(Text::from(vec![
        Line::raw(""),
        Line::raw(" Quadratic equations show up whenever something follows a"),
        Line::raw(" parabola: a thrown ball, a bridge arch, a consumption curve."),
        Line::raw(""),
        Line::raw(" Pick a lesson, scroll through its sections, and play with the"),
        Line::raw(" sliders. Exercises are graded right in the terminal."),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Welcome "))
    .wrap(Wrap { trim: false });
    f.render_widget(intro, cols[1]);
}

fn draw_lesson(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_sections(f, cols[0], app);

    match app.focused_section() {
        Section::Explore(e) => draw_explore(f, cols[1], app, e),
        Section::Quiz(q) => draw_quiz(f, cols[1], app, q),
        Section::Reveal(r) => draw_reveal(f, cols[1], app.revealed[app.cursor], r),
        _ => draw_keys_panel(f, cols[1]),
    }
}

fn draw_sections(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let lesson = app.lesson();
    let mut lines: Vec<Line> = Vec::new();

    for (i, section) in lesson.sections.iter().enumerate().skip(app.cursor) {
        let focused = i == app.cursor;
        let marker = if focused { "› " } else { "  " };
        let base = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        match section {
            Section::Heading(h) => {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", marker, h),
                    base.fg(Color::Rgb(80, 160, 255)).add_modifier(Modifier::BOLD),
                )));
            }
            Section::Text(t) => {
                lines.push(Line::from(Span::styled(format!("{}{}", marker, t), base)));
            }
            Section::Formula(eq) => {
                lines.push(Line::from(Span::styled(
                    format!("{}    {}", marker, eq),
                    base.fg(Color::Rgb(200, 120, 230)),
                )));
            }
            Section::Explore(e) => {
                lines.push(Line::from(Span::styled(
                    format!("{}◆ interactive: {}", marker, e.caption),
                    base.fg(Color::Rgb(60, 200, 120)),
                )));
            }
            Section::Reveal(r) => {
                lines.push(Line::from(Span::styled(
                    format!("{}▸ {}", marker, r.prompt),
                    base.fg(Color::Rgb(230, 180, 60)),
                )));
            }
            Section::Quiz(q) => {
                let mark = match app.graded[i] {
                    Some(true) => " ✓",
                    Some(false) => " ✗",
                    None => "",
                };
                lines.push(Line::from(Span::styled(
                    format!("{}? {}{}", marker, q.prompt, mark),
                    base.fg(Color::Rgb(230, 80, 80)),
                )));
            }
        }
        lines.push(Line::raw(""));
    }

    let title = format!(
        " {} — section {}/{} ",
        lesson.title,
        app.cursor + 1,
        lesson.sections.len()
    );
    let par = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(par, area);
}

fn draw_keys_panel(f: &mut ratatui::Frame<'_>, area: Rect) {
    let par = Paragraph::new(Text::from(vec![
        Line::raw(""),
        Line::raw(" Scroll with ↑/↓. When the focused section is interactive,"),
        Line::raw(" Tab picks a slider and ←/→ move it. Press s on an exercise"),
        Line::raw(" to show or hide its solution, ⏎ on a question to answer it."),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Keys "))
    .wrap(Wrap { trim: false });
    f.render_widget(par, area);
}

fn draw_reveal(f: &mut ratatui::Frame<'_>, area: Rect, revealed: bool, r: &lessons::Reveal) {
    let mut lines = vec![
        Line::from(Span::styled(
            r.prompt,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    if revealed {
        for l in r.solution.lines() {
            lines.push(Line::raw(l));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "press s to show the solution",
            Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
        )));
    }
    let par = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Exercise "))
        .wrap(Wrap { trim: false });
    f.render_widget(par, area);
}

fn draw_quiz(f: &mut ratatui::Frame<'_>, area: Rect, app: &App, quiz: &lessons::Quiz) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            quiz.prompt,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("({})", quiz.placeholder),
            Style::default().fg(DIM),
        )),
        Line::raw(""),
    ];
    match app.graded[app.cursor] {
        Some(true) => lines.push(Line::from(Span::styled(
            quiz.success,
            Style::default().fg(Color::Rgb(60, 200, 120)),
        ))),
        Some(false) => lines.push(Line::from(Span::styled(
            quiz.hint,
            Style::default().fg(Color::Rgb(230, 80, 80)),
        ))),
        None => {}
    }
    let par = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Question "))
        .wrap(Wrap { trim: false });
    f.render_widget(par, chunks[0]);

    let input_style = if app.input_active {
        Style::default().fg(Color::Rgb(230, 180, 60))
    } else {
        Style::default().fg(DIM)
    };
    let input_text = if app.input_active || !app.input.is_empty() {
        format!("> {}", app.input)
    } else {
        "> press ⏎ to type your answer".to_string()
    };
    let input = Paragraph::new(Line::from(Span::styled(input_text, input_style)))
        .block(Block::default().borders(Borders::ALL).title(" Answer "));
    f.render_widget(input, chunks[1]);
}

fn draw_explore(f: &mut ratatui::Frame<'_>, area: Rect, app: &App, explore: &Explore) {
    let values = &app.values[app.cursor];
    let Some((q, target)) = explore_model(explore, values) else {
        return;
    };
    let q = q.with_epsilon(app.settings.epsilon);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(explore.sliders.len() as u16 + 2),
            Constraint::Length(7),
        ])
        .split(area);

    draw_chart(f, chunks[0], app, explore, &q, target);
    draw_sliders(f, chunks[1], app, explore);
    draw_readout(f, chunks[2], explore, values, &q, target);
}

fn draw_chart(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    app: &App,
    explore: &Explore,
    q: &Quadratic,
    target: Option<f64>,
) {
    let (curve_color, solution_color, target_color, vertex_color) = palette();
    let (x_min, x_max, y_min, y_max) = explore_window(explore, q, target);

    let curve = plot::sample(q, x_min, x_max, app.settings.samples);
    let target_line: Vec<(f64, f64)> = match target {
        Some(t) => vec![(x_min, t), (x_max, t)],
        None => vec![],
    };

    // Solutions of f(x) = target (or the roots when there is no target
    // line), filtered to the plotted domain.
    let marks: Vec<(f64, f64)> = match target {
        Some(t) => explore_solutions(explore, q, t, app.settings.epsilon)
            .to_vec()
            .into_iter()
            .filter(|x| domain_ok(explore, *x))
            .map(|x| (x, t))
            .collect(),
        None => q.roots().to_vec().into_iter().map(|x| (x, 0.0)).collect(),
    };

    let v = q.vertex();
    let vertex_mark = vec![(v.d, v.e)];

    let mut datasets = vec![Dataset::default()
        .name("f(x)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(curve_color))
        .data(&curve)];
    if !target_line.is_empty() {
        datasets.push(
            Dataset::default()
                .name("target")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(target_color))
                .data(&target_line),
        );
    }
    if !marks.is_empty() {
        datasets.push(
            Dataset::default()
                .name("solutions")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(solution_color).add_modifier(Modifier::BOLD))
                .data(&marks),
        );
    }
    if target.is_none() && v.e >= y_min && v.e <= y_max {
        datasets.push(
            Dataset::default()
                .name("vertex")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(vertex_color).add_modifier(Modifier::BOLD))
                .data(&vertex_mark),
        );
    }

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", explore.caption)),
        )
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(format::approx(x_min, 1)),
                    Span::raw(format::approx((x_min + x_max) / 2.0, 1)),
                    Span::raw(format::approx(x_max, 1)),
                ])
                .style(Style::default().fg(DIM)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format::approx(y_min, 1)),
                    Span::raw(format::approx((y_min + y_max) / 2.0, 1)),
                    Span::raw(format::approx(y_max, 1)),
                ])
                .style(Style::default().fg(DIM)),
        );
    f.render_widget(chart, area);
}

fn domain_ok(explore: &Explore, x: f64) -> bool {
    match explore.kind {
        ExploreKind::FixedTarget {
            domain_min: Some(lo),
            ..
        } => x > lo,
        _ => true,
    }
}

fn draw_sliders(f: &mut ratatui::Frame<'_>, area: Rect, app: &App, explore: &Explore) {
    let values = &app.values[app.cursor];
    let mut lines: Vec<Line> = Vec::new();
    for (i, slider) in explore.sliders.iter().enumerate() {
        let focused = i == app.slider_focus;
        let v = values[i];
        let width = 24usize;
        let frac = ((v - slider.min) / (slider.max - slider.min)).clamp(0.0, 1.0);
        let knob = (frac * (width - 1) as f64).round() as usize;
        let mut bar = String::with_capacity(width);
        for pos in 0..width {
            bar.push(if pos == knob { '●' } else { '─' });
        }
        let style = if focused {
            Style::default()
                .fg(Color::Rgb(230, 180, 60))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{} {:>3} [{}] {}",
                if focused { "›" } else { " " },
                slider.label,
                bar,
                format::num(v)
            ),
            style,
        )));
    }
    let par = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sliders (Tab, ←/→) "),
    );
    f.render_widget(par, area);
}

fn draw_readout(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    explore: &Explore,
    values: &[f64],
    q: &Quadratic,
    target: Option<f64>,
) {
    let mut lines = vec![Line::from(Span::styled(
        explore_equation(explore, values, q),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    match target {
        Some(t) => {
            lines.push(Line::raw(format!("solving f(x) = {}", format::num(t))));
            let roots = explore_solutions(explore, q, t, q.epsilon());
            let shown: Vec<f64> = roots
                .to_vec()
                .into_iter()
                .filter(|x| domain_ok(explore, *x))
                .collect();
            match shown.len() {
                0 => lines.push(Line::raw("no solution in range")),
                1 => lines.push(Line::raw(format!("x ≈ {}", format::approx(shown[0], 2)))),
                _ => lines.push(Line::raw(format!(
                    "x1 ≈ {}, x2 ≈ {}",
                    format::approx(shown[0], 2),
                    format::approx(shown[1], 2)
                ))),
            }
        }
        None => {
            let v = q.vertex();
            lines.push(Line::raw(format!(
                "vertex S({}|{})",
                format::approx(v.d, 2),
                format::approx(v.e, 2)
            )));
            match q.roots() {
                Roots::None => lines.push(Line::raw("roots: none")),
                Roots::One(x) => {
                    lines.push(Line::raw(format!("roots: x0 = {}", format::approx(x, 2))))
                }
                Roots::Two(x1, x2) => lines.push(Line::raw(format!(
                    "roots: x1 = {}, x2 = {}",
                    format::approx(x1, 2),
                    format::approx(x2, 2)
                ))),
            }
        }
    }

    lines.push(Line::raw(format!(
        "opens {} • {} • y-intercept {}",
        q.opening().label(),
        q.stretch().label(),
        format::approx(q.y_intercept(), 2)
    )));

    let par = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Readout "))
        .wrap(Wrap { trim: false });
    f.render_widget(par, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::Slider;

    fn vertex_explore() -> Explore {
        Explore {
            caption: "t",
            kind: ExploreKind::VertexSliders,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 0.1, 1.0),
                Slider::new("d", -5.0, 5.0, 0.5, 2.0),
                Slider::new("e", -5.0, 5.0, 0.5, -3.0),
            ],
        }
    }

    #[test]
    fn explore_model_builds_from_slider_values() {
        let e = vertex_explore();
        let (q, target) = explore_model(&e, &[2.0, 2.0, -3.0]).unwrap();
        assert!(target.is_none());
        assert_eq!(q.coefficients(), (2.0, -8.0, 5.0));
    }

    #[test]
    fn fixed_target_model_carries_the_slider_as_target() {
        let e = Explore {
            caption: "t",
            kind: ExploreKind::FixedTarget {
                a: 1.0,
                b: -4.0,
                c: 5.0,
                x_min: -2.0,
                x_max: 6.0,
                domain_min: None,
            },
            sliders: vec![Slider::new("y", -2.0, 8.0, 0.1, 1.0)],
        };
        let (q, target) = explore_model(&e, &[1.0]).unwrap();
        assert_eq!(target, Some(1.0));
        assert_eq!(q.coefficients(), (1.0, -4.0, 5.0));
    }

    #[test]
    fn square_extraction_playground_solves_by_taking_roots() {
        let e = Explore {
            caption: "t",
            kind: ExploreKind::SquareExtract,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 1.0, 1.0),
                Slider::new("d", -5.0, 5.0, 1.0, 4.0),
                Slider::new("k", -10.0, 10.0, 1.0, 4.0),
            ],
        };
        let (q, target) = explore_model(&e, &[2.0, 4.0, 50.0]).unwrap();
        assert_eq!(target, Some(50.0));
        assert_eq!(
            explore_solutions(&e, &q, 50.0, 1e-9),
            Roots::Two(-1.0, 9.0)
        );
        assert_eq!(explore_solutions(&e, &q, -2.0, 1e-9), Roots::None);
    }

    #[test]
    fn fuel_domain_filter_hides_low_speeds() {
        let e = Explore {
            caption: "t",
            kind: ExploreKind::FixedTarget {
                a: 0.002,
                b: -0.18,
                c: 8.55,
                x_min: 40.0,
                x_max: 120.0,
                domain_min: Some(40.0),
            },
            sliders: vec![Slider::new("K", 4.0, 9.0, 0.1, 4.0)],
        };
        assert!(domain_ok(&e, 60.0));
        assert!(!domain_ok(&e, 30.0));
    }
}
