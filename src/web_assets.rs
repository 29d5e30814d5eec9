//! Embedded static web assets for the folio serve mode.
//!
//! Both files are compiled into the binary via `include_str!` so the binary
//! is fully self-contained; no external asset files need to be distributed.

/// Stylesheet for the served page. The palette and font stack are the site's
/// static theme configuration; the page is fixed light.
///
/// Loaded from `src/assets/folio.css` at compile time.
pub const CSS: &str = include_str!("assets/folio.css");

/// JavaScript for the served page.
///
/// Drives the navigation highlight via `IntersectionObserver` (threshold
/// 0.5, later entries in a batch win) and the compact-menu toggle/close
/// behavior. Loaded from `src/assets/folio.js` at compile time.
pub const JS: &str = include_str!("assets/folio.js");
