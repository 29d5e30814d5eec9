//! Terminal rendering.
//!
//! Lays the page content out as styled ratatui [`Text`] and records the
//! rendered line range of every section. Those spans are the region
//! geometry the viewport watch measures, so all wrapping happens here at a
//! fixed width; the line count must not depend on the terminal.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::content::{FieldKind, Page, Position, Project};
use crate::observer::SectionId;
use crate::viewport::SectionSpan;

/// Wrap width for prose. Narrower terminals clip, wider ones get margin.
const WRAP_WIDTH: usize = 72;

/// The fully rendered page.
pub struct RenderedPage {
    pub text: Text<'static>,
    /// One span per section, in document order.
    pub sections: Vec<SectionSpan>,
}

/// Render the whole page.
pub fn render_page(page: &Page) -> RenderedPage {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections: Vec<SectionSpan> = Vec::new();

    for (i, &id) in SectionId::ALL.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
            lines.push(rule());
            lines.push(Line::default());
        }
        let line_start = lines.len();
        match id {
            SectionId::Home => render_hero(page, &mut lines),
            SectionId::About => render_about(page, &mut lines),
            SectionId::Projects => render_projects(page, &mut lines),
            SectionId::Teaching => render_teaching(page, &mut lines),
            SectionId::Contact => render_contact(page, &mut lines),
        }
        sections.push(SectionSpan {
            id,
            line_start,
            line_end: lines.len(),
        });
    }

    RenderedPage {
        text: Text::from(lines),
        sections,
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

fn accent() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

fn heading() -> Style {
    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
}

fn eyebrow() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::Gray)
}

fn rule() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(WRAP_WIDTH),
        Style::default().fg(Color::DarkGray),
    ))
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Greedy word wrap at [`WRAP_WIDTH`].
fn wrap(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= WRAP_WIDTH {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn push_prose(text: &str, style: Style, lines: &mut Vec<Line<'static>>) {
    for wrapped in wrap(text) {
        lines.push(Line::from(Span::styled(wrapped, style)));
    }
}

fn push_bullets(items: &[&'static str], lines: &mut Vec<Line<'static>>) {
    let bullet_style = accent();
    for item in items {
        let mut first = true;
        for wrapped in wrap(item) {
            let prefix = if first { "  ▪ " } else { "    " };
            first = false;
            lines.push(Line::from(vec![
                Span::styled(prefix, bullet_style),
                Span::raw(wrapped),
            ]));
        }
    }
}

fn push_section_title(
    eyebrow_text: &'static str,
    title: &'static str,
    lines: &mut Vec<Line<'static>>,
) {
    lines.push(Line::from(Span::styled(
        eyebrow_text.to_uppercase(),
        eyebrow(),
    )));
    lines.push(Line::from(Span::styled(title, heading())));
    lines.push(Line::from(Span::styled("━━━━━━━━━━", accent())));
    lines.push(Line::default());
}

fn push_tags(tags: &[&'static str], lines: &mut Vec<Line<'static>>) {
    let rendered = tags
        .iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(Line::from(Span::styled(format!("  {rendered}"), dim())));
}

fn push_position(position: &Position, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        position.title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", position.role),
        dim(),
    )));
    for wrapped in wrap(position.summary) {
        lines.push(Line::from(Span::raw(format!("  {wrapped}"))));
    }
    push_tags(&position.tags, lines);
    lines.push(Line::default());
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn render_hero(page: &Page, lines: &mut Vec<Line<'static>>) {
    let hero = &page.hero;

    lines.push(Line::from(Span::styled(
        hero.eyebrow.to_uppercase(),
        eyebrow(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(hero.first_name, heading()),
        Span::raw(" "),
        Span::styled(hero.last_name, accent()),
    ]));
    lines.push(Line::default());
    push_prose(
        hero.tagline,
        Style::default().add_modifier(Modifier::ITALIC),
        lines,
    );
    lines.push(Line::default());

    for stat in &hero.stats {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>3} ", stat.value), accent()),
            Span::raw(stat.label),
        ]));
    }
    lines.push(Line::default());

    push_prose(hero.intro, Style::default(), lines);
    lines.push(Line::default());

    for action in &hero.actions {
        lines.push(Line::from(vec![
            Span::styled("  → ", accent()),
            Span::raw(action.label),
            Span::styled(format!("  #{}", action.anchor), dim()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        hero.motto.to_uppercase(),
        dim().add_modifier(Modifier::ITALIC),
    )));
}

fn render_about(page: &Page, lines: &mut Vec<Line<'static>>) {
    let about = &page.about;
    push_section_title("About", about.heading, lines);

    push_bullets(&about.highlights, lines);
    lines.push(Line::default());

    for card in &about.cards {
        lines.push(Line::from(Span::styled(card.title, heading())));
        push_prose(card.body, Style::default(), lines);
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Research Interests", heading())));
    push_bullets(&about.interests, lines);
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Core Skills", heading())));
    for skill in &about.skills {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", skill.name), accent()),
            Span::styled(skill.detail, dim()),
        ]));
    }
}

fn render_projects(page: &Page, lines: &mut Vec<Line<'static>>) {
    let projects = &page.projects;
    push_section_title("Projects", projects.heading, lines);
    push_prose(projects.blurb, dim(), lines);
    lines.push(Line::default());

    for project in &projects.entries {
        render_project(project, lines);
    }
}

fn render_project(project: &Project, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        project.title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for wrapped in wrap(project.summary) {
        lines.push(Line::from(Span::raw(format!("  {wrapped}"))));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", project.stack.join(" • ")),
        accent(),
    )));
    lines.push(Line::default());
}

fn render_teaching(page: &Page, lines: &mut Vec<Line<'static>>) {
    let teaching = &page.teaching;
    push_section_title("Teaching & Research", teaching.heading, lines);
    push_prose(teaching.blurb, dim(), lines);
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Teaching Experience", heading())));
    lines.push(Line::default());
    for course in &teaching.courses {
        push_position(course, lines);
    }

    lines.push(Line::from(Span::styled("Teaching Philosophy", heading())));
    push_bullets(&teaching.philosophy, lines);
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Lab Contributions", heading())));
    lines.push(Line::default());
    for lab in &teaching.labs {
        push_position(lab, lines);
    }

    lines.push(Line::from(Span::styled(
        "Research Contributions",
        heading(),
    )));
    for contribution in &teaching.contributions {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", contribution.year), accent()),
            Span::raw(contribution.title),
        ]));
    }
}

fn render_contact(page: &Page, lines: &mut Vec<Line<'static>>) {
    let contact = &page.contact;
    push_section_title("Contact", contact.heading, lines);
    push_prose(contact.blurb, Style::default(), lines);
    lines.push(Line::default());

    for channel in &contact.channels {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10} ", channel.label), accent()),
            Span::raw(channel.value),
        ]));
    }
    lines.push(Line::default());

    // The form is presentational; in the terminal it reads as a summary of
    // the fields a message would carry.
    lines.push(Line::from(Span::styled(contact.form_title, heading())));
    for field in &contact.form_fields {
        let kind = match field.kind {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Textarea => "textarea",
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", field.label), Style::default()),
            Span::styled(format!("({kind}) "), dim()),
            Span::styled(field.placeholder, dim().add_modifier(Modifier::ITALIC)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("  [ {} ]", contact.submit_label.to_uppercase()),
        accent(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "© {} Nicholas Terek. All rights reserved.",
            page.copyright_year
        ),
        dim(),
    )));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
