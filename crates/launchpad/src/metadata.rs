// File: src/metadata.rs
// Purpose: Document metadata rendered into every page head

use maud::{html, Markup};

use crate::constants::{APP_DESCRIPTION, APP_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: String,
    pub locale: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub fn content(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{}, {}", index, follow)
    }
}

/// Site-wide metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub creator: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            description: APP_DESCRIPTION.to_string(),
            keywords: ["Rust", "axum", "Maud", "Tailwind CSS"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            authors: vec!["Your Agency Name".to_string()],
            creator: "Your Agency Name".to_string(),
            open_graph: OpenGraph {
                kind: "website".to_string(),
                locale: "en_US".to_string(),
                url: "https://your-domain.com".to_string(),
                title: APP_NAME.to_string(),
                description: APP_DESCRIPTION.to_string(),
                site_name: APP_NAME.to_string(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: APP_NAME.to_string(),
                description: APP_DESCRIPTION.to_string(),
            },
            robots: Robots {
                index: true,
                follow: true,
            },
        }
    }
}

impl SiteMetadata {
    /// Title for a page: "<page> | <site>" or just the site title
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.is_empty() => format!("{} | {}", page, self.title),
            _ => self.title.clone(),
        }
    }

    /// Meta tags for the document head
    pub fn render(&self, page: Option<&str>) -> Markup {
        html! {
            title { (self.page_title(page)) }
            meta name="description" content=(self.description);
            meta name="keywords" content=(self.keywords.join(", "));
            @for author in &self.authors {
                meta name="author" content=(author);
            }
            meta name="creator" content=(self.creator);
            meta name="robots" content=(self.robots.content());
            meta property="og:type" content=(self.open_graph.kind);
            meta property="og:locale" content=(self.open_graph.locale);
            meta property="og:url" content=(self.open_graph.url);
            meta property="og:title" content=(self.open_graph.title);
            meta property="og:description" content=(self.open_graph.description);
            meta property="og:site_name" content=(self.open_graph.site_name);
            meta name="twitter:card" content=(self.twitter.card);
            meta name="twitter:title" content=(self.twitter.title);
            meta name="twitter:description" content=(self.twitter.description);
        }
    }
}
