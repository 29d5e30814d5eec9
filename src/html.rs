//! HTML generation for serve mode.
//!
//! Assembles the complete single-page document from the content model:
//! header with navigation (including the compact-menu button and drawer),
//! the five anchorable sections, the contact form, and the footer. All
//! interpolated content goes through [`html_escape`]; the active-section
//! highlight and menu behavior are applied client-side by `folio.js`.

use crate::content::{FieldKind, Page};
use crate::observer::SectionId;

/// Sections listed in the navigation bar and drawer. The hero is reached
/// through the brand link instead.
const NAV_SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Projects,
    SectionId::Teaching,
    SectionId::Contact,
];

/// Minimal HTML entity escaping for text content and attribute values.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

fn nav_links_html(class: &str) -> String {
    let mut html = String::new();
    for section in NAV_SECTIONS {
        html.push_str(&format!(
            "<a class=\"{class}\" data-section=\"{anchor}\" href=\"#{anchor}\">{label}</a>\n",
            anchor = section.anchor(),
            label = section.label(),
        ));
    }
    html
}

fn header_html(page: &Page) -> String {
    format!(
        "<header class=\"site-header\">\n\
<div class=\"header-inner\">\n\
<a class=\"brand\" href=\"#home\"><span class=\"brand-first\">{first}</span> <span class=\"brand-last\">{last}</span></a>\n\
<nav class=\"site-nav\" aria-label=\"Sections\">\n\
{links}</nav>\n\
<button id=\"menu-toggle\" class=\"menu-toggle\" aria-label=\"Toggle menu\" aria-expanded=\"false\">☰</button>\n\
</div>\n\
<nav id=\"menu-drawer\" class=\"menu-drawer\" aria-label=\"Sections\" hidden>\n\
{drawer_links}</nav>\n\
</header>\n",
        first = html_escape(page.hero.first_name),
        last = html_escape(page.hero.last_name),
        links = nav_links_html("nav-link"),
        drawer_links = nav_links_html("drawer-link"),
    )
}

fn hero_html(page: &Page) -> String {
    let hero = &page.hero;
    let mut stats = String::new();
    for stat in &hero.stats {
        stats.push_str(&format!(
            "<div class=\"stat\"><span class=\"stat-value\">{}</span> <span class=\"stat-label\">{}</span></div>\n",
            html_escape(stat.value),
            html_escape(stat.label),
        ));
    }
    let mut actions = String::new();
    for action in &hero.actions {
        actions.push_str(&format!(
            "<a class=\"cta\" href=\"#{}\">{}</a>\n",
            html_escape(action.anchor),
            html_escape(action.label).to_uppercase(),
        ));
    }
    format!(
        "<section id=\"home\" class=\"hero\">\n\
<p class=\"eyebrow\">{eyebrow}</p>\n\
<h1>{first} <span class=\"accent\">{last}</span></h1>\n\
<p class=\"tagline\">{tagline}</p>\n\
<div class=\"stats\">\n{stats}</div>\n\
<p class=\"intro\">{intro}</p>\n\
<div class=\"actions\">\n{actions}</div>\n\
<p class=\"motto\">{motto}</p>\n\
</section>\n",
        eyebrow = html_escape(hero.eyebrow),
        first = html_escape(hero.first_name),
        last = html_escape(hero.last_name),
        tagline = html_escape(hero.tagline),
        intro = html_escape(hero.intro),
        motto = html_escape(hero.motto).to_uppercase(),
    )
}

fn about_html(page: &Page) -> String {
    let about = &page.about;
    let mut highlights = String::from("<ul class=\"highlights\">\n");
    for item in &about.highlights {
        highlights.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    highlights.push_str("</ul>\n");

    let mut cards = String::new();
    for card in &about.cards {
        cards.push_str(&format!(
            "<article class=\"card\">\n<h3>{}</h3>\n<p>{}</p>\n</article>\n",
            html_escape(card.title),
            html_escape(card.body),
        ));
    }

    let mut interests = String::from("<ul class=\"interests\">\n");
    for interest in &about.interests {
        interests.push_str(&format!("<li>{}</li>\n", html_escape(interest)));
    }
    interests.push_str("</ul>\n");

    let mut skills = String::from("<div class=\"skills\">\n");
    for skill in &about.skills {
        skills.push_str(&format!(
            "<div class=\"skill\"><h4>{}</h4><p>{}</p></div>\n",
            html_escape(skill.name),
            html_escape(skill.detail),
        ));
    }
    skills.push_str("</div>\n");

    format!(
        "<section id=\"about\" class=\"about\">\n\
<p class=\"eyebrow\">ABOUT</p>\n\
<h2>{heading}</h2>\n\
{highlights}\
<div class=\"cards\">\n{cards}</div>\n\
<h3>Research Interests</h3>\n\
{interests}\
<h3>Core Skills</h3>\n\
{skills}\
</section>\n",
        heading = html_escape(about.heading),
    )
}

fn projects_html(page: &Page) -> String {
    let projects = &page.projects;
    let mut entries = String::new();
    for project in &projects.entries {
        let stack = project
            .stack
            .iter()
            .map(|s| html_escape(s))
            .collect::<Vec<_>>()
            .join(" • ");
        entries.push_str(&format!(
            "<article class=\"project\">\n\
<h3>{title}</h3>\n\
<p>{summary}</p>\n\
<p class=\"stack\">{stack}</p>\n\
</article>\n",
            title = html_escape(project.title),
            summary = html_escape(project.summary),
        ));
    }
    format!(
        "<section id=\"projects\" class=\"projects\">\n\
<p class=\"eyebrow\">PROJECTS</p>\n\
<h2>{heading}</h2>\n\
<p class=\"blurb\">{blurb}</p>\n\
<div class=\"project-grid\">\n{entries}</div>\n\
</section>\n",
        heading = html_escape(projects.heading),
        blurb = html_escape(projects.blurb),
    )
}

fn position_html(title: &str, role: &str, summary: &str, tags: &[&str]) -> String {
    let tags_html = tags
        .iter()
        .map(|t| format!("<span class=\"tag\">{}</span>", html_escape(t)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<article class=\"position\">\n\
<h4>{}</h4>\n\
<p class=\"role\">{}</p>\n\
<p>{}</p>\n\
<div class=\"tags\">{}</div>\n\
</article>\n",
        html_escape(title),
        html_escape(role),
        html_escape(summary),
        tags_html,
    )
}

fn teaching_html(page: &Page) -> String {
    let teaching = &page.teaching;
    let mut courses = String::new();
    for course in &teaching.courses {
        courses.push_str(&position_html(
            course.title,
            course.role,
            course.summary,
            &course.tags,
        ));
    }
    let mut philosophy = String::from("<ul class=\"philosophy\">\n");
    for item in &teaching.philosophy {
        philosophy.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    philosophy.push_str("</ul>\n");

    let mut labs = String::new();
    for lab in &teaching.labs {
        labs.push_str(&position_html(lab.title, lab.role, lab.summary, &lab.tags));
    }
    let mut contributions = String::from("<ul class=\"contributions\">\n");
    for c in &teaching.contributions {
        contributions.push_str(&format!(
            "<li><span class=\"year\">{}</span> {}</li>\n",
            html_escape(c.year),
            html_escape(c.title),
        ));
    }
    contributions.push_str("</ul>\n");

    format!(
        "<section id=\"teaching\" class=\"teaching\">\n\
<p class=\"eyebrow\">TEACHING &amp; RESEARCH</p>\n\
<h2>{heading}</h2>\n\
<p class=\"blurb\">{blurb}</p>\n\
<div class=\"columns\">\n\
<div class=\"column\">\n<h3>Teaching Experience</h3>\n{courses}\
<h4>Teaching Philosophy</h4>\n{philosophy}</div>\n\
<div class=\"column\">\n<h3>Lab Contributions</h3>\n{labs}\
<h4>Research Contributions</h4>\n{contributions}</div>\n\
</div>\n\
</section>\n",
        heading = html_escape(teaching.heading),
        blurb = html_escape(teaching.blurb),
    )
}

fn contact_html(page: &Page) -> String {
    let contact = &page.contact;
    let mut channels = String::new();
    for channel in &contact.channels {
        channels.push_str(&format!(
            "<div class=\"channel\">\n\
<h4>{label}</h4>\n\
<a href=\"{href}\">{value}</a>\n\
</div>\n",
            label = html_escape(channel.label),
            href = html_escape(channel.href),
            value = html_escape(channel.value),
        ));
    }

    // Purely presentational: no action attribute, no submission endpoint.
    let mut fields = String::new();
    for field in &contact.form_fields {
        let id = html_escape(field.id);
        let label = html_escape(field.label);
        let placeholder = html_escape(field.placeholder);
        let control = match field.kind {
            FieldKind::Text => {
                format!("<input id=\"{id}\" name=\"{id}\" type=\"text\" placeholder=\"{placeholder}\">")
            }
            FieldKind::Email => {
                format!("<input id=\"{id}\" name=\"{id}\" type=\"email\" placeholder=\"{placeholder}\">")
            }
            FieldKind::Textarea => format!(
                "<textarea id=\"{id}\" name=\"{id}\" rows=\"6\" placeholder=\"{placeholder}\"></textarea>"
            ),
        };
        fields.push_str(&format!(
            "<div class=\"field\">\n<label for=\"{id}\">{label}</label>\n{control}\n</div>\n",
        ));
    }

    format!(
        "<section id=\"contact\" class=\"contact\">\n\
<p class=\"eyebrow\">CONTACT</p>\n\
<h2>{heading}</h2>\n\
<p class=\"blurb\">{blurb}</p>\n\
<div class=\"contact-grid\">\n\
<div class=\"channels\">\n{channels}</div>\n\
<div class=\"form-panel\">\n\
<h3>{form_title}</h3>\n\
<form class=\"contact-form\">\n\
{fields}\
<button type=\"submit\">{submit}</button>\n\
</form>\n\
</div>\n\
</div>\n\
<footer class=\"site-footer\">\n\
<p>© {year} Nicholas Terek. All rights reserved.</p>\n\
</footer>\n\
</section>\n",
        heading = html_escape(contact.heading),
        blurb = html_escape(contact.blurb),
        form_title = html_escape(contact.form_title),
        submit = html_escape(contact.submit_label).to_uppercase(),
        year = html_escape(page.copyright_year),
    )
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full single-page document.
pub fn build_page(page: &Page) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\" class=\"scroll-smooth\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<meta name=\"description\" content=\"{description}\">\n\
<title>{title}</title>\n\
<link rel=\"stylesheet\" href=\"/assets/folio.css\">\n\
</head>\n\
<body>\n\
{header}\
<main>\n\
{hero}\
{about}\
{projects}\
{teaching}\
{contact}\
</main>\n\
<script src=\"/assets/folio.js\"></script>\n\
</body>\n\
</html>\n",
        description = html_escape(page.meta.description),
        title = html_escape(page.meta.title),
        header = header_html(page),
        hero = hero_html(page),
        about = about_html(page),
        projects = projects_html(page),
        teaching = teaching_html(page),
        contact = contact_html(page),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
