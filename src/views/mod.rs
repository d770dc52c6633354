// src/views/mod.rs
//! Server-side HTML rendering: layout, components and full pages

pub mod components;
pub mod pages;

use crate::auth::Role;

pub const APP_NAME: &str = "Hire-Archy";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f6fa;color:#1d1d2b}\
.container{max-width:1100px;margin:0 auto;padding:1rem}\
nav{display:flex;gap:1rem;align-items:center;padding:1rem;background:#1d1d2b}\
nav a{color:#fff;text-decoration:none}nav .brand{font-weight:700;margin-right:auto}\
.card{background:#fff;border-radius:8px;padding:1rem;margin:.75rem 0;box-shadow:0 1px 3px #0002}\
.card.highlighted{border:2px solid #6c5ce7}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1rem}\
.skill{display:inline-block;background:#eceafd;border-radius:4px;padding:.1rem .5rem;margin:.15rem}\
.match{color:#6c5ce7;font-weight:600}.error{color:#c0392b}.success{color:#27ae60}\
form{display:flex;flex-direction:column;gap:.5rem;max-width:480px}\
form.inline{flex-direction:row;flex-wrap:wrap;max-width:none}\
.banner{background:#6c5ce7;color:#fff;border-radius:8px;padding:1.5rem}\
.banner a{color:#fff}.avatar{width:64px;height:64px;border-radius:50%}";

/// Entry of the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

pub const SIGN_IN: NavLink = NavLink::new("SignIn", "/signin");
pub const SIGN_UP: NavLink = NavLink::new("SignUp", "/signup");
pub const CANDIDATE_HOME: NavLink = NavLink::new("Candidate Home", "/userhome");
pub const RECRUITER_HOME: NavLink = NavLink::new("Recruiter Home", "/recruiterhome");
pub const NEW_JOB: NavLink = NavLink::new("New Job", "/newjob");
pub const PROFILE: NavLink = NavLink::new("Profile", "/profile");
pub const LOGOUT: NavLink = NavLink::new("Logout", "/logout");

/// Navigation for pages shared between roles.
pub fn nav_for_role(role: Option<Role>) -> Vec<NavLink> {
    match role {
        Some(Role::Recruiter) => vec![RECRUITER_HOME, NEW_JOB, LOGOUT],
        Some(Role::Candidate) => vec![CANDIDATE_HOME, LOGOUT],
        None => vec![SIGN_IN, SIGN_UP],
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

pub fn navbar(links: &[NavLink]) -> String {
    let items: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link.href, escape(link.label)))
        .collect();

    format!(
        r#"<nav><a class="brand" href="/">{}</a>{}</nav>"#,
        APP_NAME, items
    )
}

/// Full HTML document around `body`.
pub fn layout(title: &str, links: &[NavLink], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {app}</title>
<style>{style}</style>
</head>
<body>
{nav}
<main class="container">
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        app = APP_NAME,
        style = STYLE,
        nav = navbar(links),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_nav_for_role() {
        assert_eq!(
            nav_for_role(Some(Role::Recruiter)),
            vec![RECRUITER_HOME, NEW_JOB, LOGOUT]
        );
        assert_eq!(nav_for_role(Some(Role::Candidate)), vec![CANDIDATE_HOME, LOGOUT]);
        assert_eq!(nav_for_role(None), vec![SIGN_IN, SIGN_UP]);
    }

    #[test]
    fn test_layout_contains_nav_and_body() {
        let html = layout("Jobs <all>", &[LOGOUT], "<p>hi</p>");
        assert!(html.contains("<title>Jobs &lt;all&gt; | Hire-Archy</title>"));
        assert!(html.contains(r#"<a href="/logout">Logout</a>"#));
        assert!(html.contains("<p>hi</p>"));
    }
}
