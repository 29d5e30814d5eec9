mod content;
mod html;
mod observer;
mod render;
mod serve;
mod viewport;
mod web_assets;

use std::{io, process};

use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    DefaultTerminal, Frame,
};

use observer::{NavState, SectionId, SectionObserver};
use render::RenderedPage;
use viewport::ViewportWatch;

/// Sections listed in the navigation bar and the menu overlay. The hero is
/// reached through the brand (or `1`/`g`).
const MENU_SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Projects,
    SectionId::Teaching,
    SectionId::Contact,
];

/// Header collapses to the compact menu below this width.
const COMPACT_WIDTH: u16 = 80;

/// Explicit subcommands.
#[derive(Subcommand)]
enum Commands {
    /// View the page in the terminal
    View {
        /// Start at a section (home, about, projects, teaching, contact)
        #[arg(long)]
        section: Option<String>,
    },
    /// Serve the page over HTTP
    Serve {
        /// Interface address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Starting port number for the HTTP server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
}

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Personal portfolio site for the terminal and the browser",
    after_help = "INVOCATION FORMS:\n  folio                 View the page in the terminal\n  folio view            Same, explicitly\n  folio serve [OPTIONS] Serve the page over HTTP"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> io::Result<()> {
    match Cli::parse().command {
        None => {
            eprintln!("[legacy] TUI viewer dispatched");
            run_tui(None)
        }
        Some(Commands::View { section }) => {
            let start = match section.as_deref() {
                Some(anchor) => match SectionId::from_anchor(anchor) {
                    Some(id) => Some(id),
                    None => {
                        eprintln!("Error: unknown section '{anchor}'.");
                        eprintln!(
                            "Expected one of: home, about, projects, teaching, contact."
                        );
                        process::exit(1);
                    }
                },
                None => None,
            };
            eprintln!("[view] TUI viewer dispatched");
            run_tui(start)
        }
        Some(Commands::Serve { bind, port }) => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(io::Error::other)?;
            rt.block_on(serve::run_serve(bind, port))
        }
    }
}

fn run_tui(start: Option<SectionId>) -> io::Result<()> {
    let page = content::page();
    let rendered = render::render_page(&page);

    // The watch is registered exactly once here and released when the TUI
    // returns on any path: the observer disconnects on drop.
    let observer = SectionObserver::attach(&SectionId::ALL);
    eprintln!("[observe] regions={}", observer.watched_regions());

    ratatui::run(|terminal| run(terminal, &rendered, observer, start))
}

/// Line the given section starts on.
fn section_start(rendered: &RenderedPage, id: SectionId) -> usize {
    rendered
        .sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.line_start)
        .unwrap_or(0)
}

fn run(
    terminal: &mut DefaultTerminal,
    rendered: &RenderedPage,
    observer: SectionObserver,
    start: Option<SectionId>,
) -> io::Result<()> {
    let total_lines = rendered.text.lines.len();
    let mut scroll_offset: usize = start.map(|id| section_start(rendered, id)).unwrap_or(0);
    let mut nav = NavState::new();
    let mut menu_selected: usize = 0;

    let viewport_height = content_height(terminal.size()?.height);
    scroll_offset = scroll_offset.min(total_lines.saturating_sub(viewport_height));
    let mut watch = ViewportWatch::new(rendered.sections.clone(), scroll_offset, viewport_height);
    observer.pump(&mut nav, &mut watch);

    loop {
        terminal.draw(|frame| {
            ui(
                frame,
                rendered,
                scroll_offset,
                total_lines,
                &nav,
                menu_selected,
            );
        })?;

        let event = event::read()?;

        // Recalculate bounds and clamp scroll offset on every event,
        // including Event::Resize, so the view stays valid after terminal
        // resize.
        let viewport_height = content_height(terminal.size()?.height);
        let max_scroll = total_lines.saturating_sub(viewport_height);
        scroll_offset = scroll_offset.min(max_scroll);

        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if nav.menu_open() {
                // Menu overlay is open — handle menu-specific keys
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        menu_selected = (menu_selected + 1).min(MENU_SECTIONS.len() - 1);
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        menu_selected = menu_selected.saturating_sub(1);
                    }
                    KeyCode::Enter => {
                        // Activating a link navigates and dismisses the menu.
                        let target = MENU_SECTIONS[menu_selected];
                        scroll_offset = section_start(rendered, target).min(max_scroll);
                        nav.close_menu();
                    }
                    KeyCode::Char(c @ '1'..='5') => {
                        let idx = (c as u8 - b'1') as usize;
                        scroll_offset = section_start(rendered, SectionId::ALL[idx]).min(max_scroll);
                        nav.close_menu();
                    }
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
                        nav.close_menu();
                    }
                    _ => {}
                }
            } else {
                // Normal mode — handle regular keys
                match key.code {
                    KeyCode::Char('q') => return Ok(()),

                    // Open the menu, preselecting the active section
                    KeyCode::Char('m') => {
                        menu_selected = MENU_SECTIONS
                            .iter()
                            .position(|&s| s == nav.active_section())
                            .unwrap_or(0);
                        nav.toggle_menu();
                    }

                    // Single line down
                    KeyCode::Char('j') | KeyCode::Down => {
                        scroll_offset = (scroll_offset + 1).min(max_scroll);
                    }

                    // Single line up
                    KeyCode::Char('k') | KeyCode::Up => {
                        scroll_offset = scroll_offset.saturating_sub(1);
                    }

                    // Half page down
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let half = viewport_height / 2;
                        scroll_offset = (scroll_offset + half).min(max_scroll);
                    }
                    KeyCode::PageDown => {
                        let half = viewport_height / 2;
                        scroll_offset = (scroll_offset + half).min(max_scroll);
                    }

                    // Half page up
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let half = viewport_height / 2;
                        scroll_offset = scroll_offset.saturating_sub(half);
                    }
                    KeyCode::PageUp => {
                        let half = viewport_height / 2;
                        scroll_offset = scroll_offset.saturating_sub(half);
                    }

                    // Jump to top
                    KeyCode::Char('g') | KeyCode::Home => {
                        scroll_offset = 0;
                    }

                    // Jump to bottom
                    KeyCode::Char('G') | KeyCode::End => {
                        scroll_offset = max_scroll;
                    }

                    // Next section
                    KeyCode::Char('n') => {
                        if let Some(span) = rendered
                            .sections
                            .iter()
                            .find(|s| s.line_start > scroll_offset)
                        {
                            scroll_offset = span.line_start.min(max_scroll);
                        }
                    }

                    // Previous section
                    KeyCode::Char('p') => {
                        if let Some(span) = rendered
                            .sections
                            .iter()
                            .rev()
                            .find(|s| s.line_start < scroll_offset)
                        {
                            scroll_offset = span.line_start.min(max_scroll);
                        }
                    }

                    // Jump straight to a section
                    KeyCode::Char(c @ '1'..='5') => {
                        let idx = (c as u8 - b'1') as usize;
                        scroll_offset = section_start(rendered, SectionId::ALL[idx]).min(max_scroll);
                    }

                    _ => {}
                }
            }
        }

        // One observer pass per handled event: the watch sees the new
        // window and the qualifying crossings update the highlight.
        watch.scrolled(scroll_offset, viewport_height);
        observer.pump(&mut nav, &mut watch);
    }
}

/// Content rows left after the header and status bars.
fn content_height(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(2) as usize
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn ui(
    frame: &mut Frame,
    rendered: &RenderedPage,
    scroll_offset: usize,
    total_lines: usize,
    nav: &NavState,
    menu_selected: usize,
) {
    let area = frame.area();

    // Minimum usable terminal size: header, some content, status bar
    const MIN_WIDTH: u16 = 24;
    const MIN_HEIGHT: u16 = 6;
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = "Terminal too small";
        let msg_len = msg.len() as u16;
        let x = area.x + area.width.saturating_sub(msg_len) / 2;
        let y = area.y + area.height / 2;
        let w = msg_len.min(area.width);
        if w > 0 && area.height > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    msg,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Rect::new(x, y, w, 1),
            );
        }
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    // Header bar with the navigation highlight
    frame.render_widget(
        Paragraph::new(header_line(nav, area.width)).style(Style::default().bg(Color::Black)),
        chunks[0],
    );

    // Scrolled page content
    let widget = Paragraph::new(rendered.text.clone()).scroll((scroll_offset as u16, 0));
    frame.render_widget(widget, chunks[1]);

    // Menu overlay
    if nav.menu_open() {
        render_menu(frame, nav, menu_selected, chunks[1]);
    }

    // Status bar with scroll position and active section
    let viewport_height = chunks[1].height as usize;
    let position = if total_lines == 0 {
        "Empty".to_owned()
    } else if total_lines <= viewport_height {
        "All".to_owned()
    } else if scroll_offset == 0 {
        "Top".to_owned()
    } else if scroll_offset >= total_lines.saturating_sub(viewport_height) {
        "Bot".to_owned()
    } else {
        let pct = (scroll_offset * 100) / total_lines;
        format!("{pct}%")
    };

    let status = format!(
        " Line {}/{} \u{2014} {}  \u{00A7} {}  [1-5 jump  m menu  q quit]",
        scroll_offset + 1,
        total_lines,
        position,
        nav.active_section().label(),
    );
    let status_bar = Paragraph::new(Span::styled(
        status,
        Style::default().fg(Color::Black).bg(Color::White),
    ))
    .style(Style::default().bg(Color::White));
    frame.render_widget(status_bar, chunks[2]);
}

/// Build the header line: brand plus, when the terminal is wide enough,
/// the inline navigation with the active entry highlighted. Narrow
/// terminals fall back to the compact-menu hint.
fn header_line(nav: &NavState, width: u16) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            " Nicholas",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Terek",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ];

    if width >= COMPACT_WIDTH {
        spans.push(Span::raw("   "));
        for section in MENU_SECTIONS {
            let style = if nav.active_section() == section {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(
                format!("  {}", section.label().to_uppercase()),
                style,
            ));
        }
    } else {
        let hint = if nav.menu_open() { "  ✕ m" } else { "  ≡ m" };
        spans.push(Span::styled(hint, Style::default().fg(Color::Gray)));
    }

    Line::from(spans)
}

/// Compute a centered rectangle within `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (area.width * percent_x / 100).max(24).min(area.width);
    let height = (area.height * percent_y / 100).max(6).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the menu overlay listing the navigation sections.
fn render_menu(frame: &mut Frame, nav: &NavState, selected: usize, viewport_area: Rect) {
    let popup = centered_rect(40, 50, viewport_area);

    // Clear the popup area
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'static>> = MENU_SECTIONS
        .iter()
        .map(|section| {
            let marker = if nav.active_section() == *section {
                "● "
            } else {
                "  "
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Red)),
                Span::raw(section.label().to_uppercase()),
            ])
        })
        .collect();

    let block = Block::bordered()
        .title(" Menu ")
        .style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), popup);

    // Apply full-width highlight to the selected entry
    let inner_height = popup.height.saturating_sub(2) as usize;
    if selected < inner_height {
        let row = popup.y + 1 + selected as u16; // +1 for top border
        let highlight = Style::default()
            .bg(Color::Red)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        for col in (popup.x + 1)..(popup.x + popup.width.saturating_sub(1)) {
            let pos = Position::new(col, row);
            if let Some(cell) = frame.buffer_mut().cell_mut(pos) {
                cell.set_style(highlight);
            }
        }
    }
}
