//! GitHub-flavored markdown anchor/slug generation for the function index.

/// Generate a TOC list item linking to a function heading.
pub fn render_toc_item(title: &str) -> String {
    format!("* [{}](#{})", title, github_slug(title))
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - drop everything except alphanumerics, spaces and hyphens
/// - spaces become hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
