//! The page content.
//!
//! Everything the site says lives here as one static, immutable model,
//! assembled once at startup and shared by both renderers (`render` for the
//! terminal, `html` for the browser). Layout and styling stay in the
//! renderers; this module is copy and structure only.

use serde::{Deserialize, Serialize};

/// Site-wide metadata.
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// One headline statistic shown under the hero tagline.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A call-to-action link in the hero; `anchor` names a section.
pub struct CallToAction {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct Hero {
    pub eyebrow: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub stats: Vec<Stat>,
    pub actions: Vec<CallToAction>,
    pub motto: &'static str,
}

/// A titled prose card in the about section.
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// One entry of the core-skills grid.
pub struct Skill {
    pub name: &'static str,
    pub detail: &'static str,
}

pub struct About {
    pub heading: &'static str,
    pub highlights: Vec<&'static str>,
    pub cards: Vec<AboutCard>,
    pub interests: Vec<&'static str>,
    pub skills: Vec<Skill>,
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: Vec<&'static str>,
}

pub struct Projects {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub entries: Vec<Project>,
}

/// A teaching or research position with its tags.
pub struct Position {
    pub title: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub tags: Vec<&'static str>,
}

/// A dated research contribution.
pub struct Contribution {
    pub year: &'static str,
    pub title: &'static str,
}

pub struct Teaching {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub courses: Vec<Position>,
    pub philosophy: Vec<&'static str>,
    pub labs: Vec<Position>,
    pub contributions: Vec<Contribution>,
}

/// An external contact channel (email, profile link, …).
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// The kind of input a form field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

/// One presentational field of the contact form.
///
/// The form has no submission endpoint; these fields exist so the markup can
/// be rendered and so the payload contract below stays honest.
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

pub struct Contact {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub channels: Vec<ContactChannel>,
    pub form_title: &'static str,
    pub form_fields: Vec<FormField>,
    pub submit_label: &'static str,
}

/// The message payload a future mail relay would consume.
///
/// Nothing in this crate sends it anywhere; the type pins the wire shape
/// (`{name, email, subject, message}`) for that integration.
// Reserved for the mail-relay integration; constructed by it, not by this
// binary.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The whole page.
pub struct Page {
    pub meta: SiteMeta,
    pub hero: Hero,
    pub about: About,
    pub projects: Projects,
    pub teaching: Teaching,
    pub contact: Contact,
    pub copyright_year: &'static str,
}

/// Build the site content.
pub fn page() -> Page {
    Page {
        meta: SiteMeta {
            title: "Nicholas Terek - Researcher & Engineer",
            description: "Personal academic website of Nicholas Terek, featuring \
                          research, projects, teaching, and more.",
        },
        hero: hero(),
        about: about(),
        projects: projects(),
        teaching: teaching(),
        contact: contact(),
        copyright_year: "2025",
    }
}

fn hero() -> Hero {
    Hero {
        eyebrow: "Software Engineer & Researcher",
        first_name: "Nicholas",
        last_name: "Terek",
        tagline: "Exploring the intersections of machine learning, database \
                  management systems, and distributed systems.",
        intro: "I build AI systems that understand natural language, automate \
                document processing, and solve complex mathematical problems. \
                My research has been featured at conferences and I've developed \
                tools used by 1000+ students across campus.",
        stats: vec![
            Stat {
                value: "3",
                label: "SWE Internships",
            },
            Stat {
                value: "2",
                label: "Research Positions",
            },
            Stat {
                value: "5+",
                label: "GitHub Projects",
            },
        ],
        actions: vec![
            CallToAction {
                label: "Get in touch",
                anchor: "contact",
            },
            CallToAction {
                label: "View projects",
                anchor: "projects",
            },
        ],
        motto: "Building the future",
    }
}

fn about() -> About {
    About {
        heading: "Academic Journey",
        highlights: vec![
            "Undergraduate student in Computer Science with a focus on machine \
             learning and AI",
            "Minor in Mathematics with honors",
            "Active in multiple research labs on campus",
        ],
        cards: vec![
            AboutCard {
                title: "Background",
                body: "Nicholas Terek is an undergraduate student passionate about \
                       machine learning, natural language processing, and \
                       mathematical applications. With a strong foundation in both \
                       theoretical concepts and practical implementation, Nicholas \
                       is developing expertise at the intersection of these fields.",
            },
            AboutCard {
                title: "Experience",
                body: "Nicholas has worked as a research assistant in multiple \
                       labs, contributing to projects in AI and machine learning. \
                       He also serves as a teaching assistant for two computer \
                       science courses, helping fellow students master complex \
                       concepts.",
            },
        ],
        interests: vec![
            "Conversational AI & Natural Language Processing",
            "Machine Learning Applications",
            "Automated Systems & Form Filling",
            "Mathematical Conjectures & Proofs",
            "Algorithmic Trading Strategies",
            "Ethical AI Development",
        ],
        skills: vec![
            Skill {
                name: "Machine Learning",
                detail: "Neural Networks, Deep Learning, Model Training",
            },
            Skill {
                name: "NLP",
                detail: "Text Analysis, Language Models, Chatbots",
            },
            Skill {
                name: "Programming",
                detail: "Python, JavaScript, TensorFlow, PyTorch",
            },
            Skill {
                name: "Mathematics",
                detail: "Statistics, Linear Algebra, Calculus",
            },
            Skill {
                name: "Web Development",
                detail: "React, Next.js, Node.js, Databases",
            },
            Skill {
                name: "Research Methods",
                detail: "Data Analysis, Experimental Design",
            },
        ],
    }
}

fn projects() -> Projects {
    Projects {
        heading: "Bringing Ideas to Life",
        blurb: "A showcase of my technical projects, from AI applications to web \
                development and research implementations.",
        entries: vec![
            Project {
                title: "AI Assistant",
                summary: "A conversational AI assistant that helps with \
                          scheduling, information retrieval, and task management \
                          using natural language processing.",
                stack: vec!["Python", "TensorFlow"],
            },
            Project {
                title: "Document Parser",
                summary: "An application that leverages machine learning to \
                          automatically extract, categorize, and process \
                          information from various document types.",
                stack: vec!["Python", "OpenCV"],
            },
            Project {
                title: "Trading Algorithm",
                summary: "Development of algorithmic trading strategies using \
                          statistical methods and machine learning for market \
                          prediction and portfolio optimization.",
                stack: vec!["Python", "Pandas"],
            },
            Project {
                title: "Math Visualization Tool",
                summary: "A web-based platform for visualizing and interacting \
                          with complex mathematical concepts, making abstract \
                          ideas more accessible to students.",
                stack: vec!["JavaScript", "D3.js"],
            },
            Project {
                title: "NLP Toolkit",
                summary: "A comprehensive library of natural language processing \
                          tools, implementing cutting-edge algorithms for text \
                          analysis and generation.",
                stack: vec!["Python", "NLTK", "spaCy"],
            },
            Project {
                title: "Personal Website",
                summary: "A creative web application showcasing my portfolio, \
                          projects, and research interests with a unique design \
                          inspired by Asian architecture.",
                stack: vec!["Next.js", "Tailwind CSS"],
            },
        ],
    }
}

fn teaching() -> Teaching {
    Teaching {
        heading: "Academic Contributions",
        blurb: "My work as a teaching assistant and contributions to research \
                labs as an undergraduate student.",
        courses: vec![
            Position {
                title: "Introduction to Object-Oriented Programming",
                role: "Teaching Assistant",
                summary: "Assisting students with understanding machine learning \
                          concepts, algorithms, and applications. Leading lab \
                          sessions, grading assignments, and holding office hours.",
                tags: vec!["Lab Instructor", "45+ Students"],
            },
            Position {
                title: "Data Structures and Algorithms",
                role: "Teaching Assistant",
                summary: "Supporting students in mastering fundamental algorithms \
                          and data structures. Conducting review sessions, \
                          providing feedback on coding assignments, and mentoring \
                          students.",
                tags: vec!["Lab Instructor", "60+ Students"],
            },
        ],
        philosophy: vec![
            "Emphasizing practical applications of theoretical concepts",
            "Creating an inclusive and supportive learning environment",
        ],
        labs: vec![
            Position {
                title: "AI Research Lab",
                role: "Research Assistant",
                summary: "Contributing to research on improving conversational \
                          agents through better context understanding and memory \
                          mechanisms. Assisting with data collection, model \
                          training, and evaluation.",
                tags: vec!["NLP", "Dialogue Systems"],
            },
            Position {
                title: "CARGO LAB",
                role: "Undergraduate Researcher",
                summary: "Working on machine learning approaches to automate the \
                          extraction and understanding of information in complex \
                          forms and documents. Developing algorithms for document \
                          classification.",
                tags: vec!["Computer Vision", "Information Extraction"],
            },
        ],
        contributions: vec![
            Contribution {
                year: "2023",
                title: "Improving Context Retention in Conversational Agents",
            },
            Contribution {
                year: "2022",
                title: "Automated Form Understanding: A Neural Approach",
            },
        ],
    }
}

fn contact() -> Contact {
    Contact {
        heading: "Get in Touch",
        blurb: "Interested in collaboration, research opportunities, or just want \
                to connect? I'm always open to new conversations and connections.",
        channels: vec![
            ContactChannel {
                label: "Email",
                value: "nicholas.terek@example.edu",
                href: "mailto:nicholas.terek@example.edu",
            },
            ContactChannel {
                label: "LinkedIn",
                value: "linkedin.com/in/nicholas-terek",
                href: "https://linkedin.com/in/nicholas-terek",
            },
            ContactChannel {
                label: "GitHub",
                value: "github.com/nicholas-terek",
                href: "https://github.com/nicholas-terek",
            },
            ContactChannel {
                label: "Twitter/X",
                value: "twitter.com/nicholas_terek",
                href: "https://twitter.com/nicholas_terek",
            },
        ],
        form_title: "Send a Message",
        form_fields: vec![
            FormField {
                id: "name",
                label: "Your Name",
                placeholder: "Enter your name",
                kind: FieldKind::Text,
            },
            FormField {
                id: "email",
                label: "Email Address",
                placeholder: "Enter your email",
                kind: FieldKind::Email,
            },
            FormField {
                id: "subject",
                label: "Subject",
                placeholder: "Enter subject",
                kind: FieldKind::Text,
            },
            FormField {
                id: "message",
                label: "Message",
                placeholder: "Your message",
                kind: FieldKind::Textarea,
            },
        ],
        submit_label: "Send Message",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
