//! Hypermedia links attached to read responses

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single `{rel, href}` link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// An entity with its links, flattened into one JSON object
///
/// ```json
/// { "clientId": "…", "name": "Ana", "links": [{ "rel": "self", "href": "/clients/…" }] }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub item: T,
    pub links: Vec<Link>,
}

impl<T> Linked<T> {
    pub fn new(item: T, link: Link) -> Self {
        Self {
            item,
            links: vec![link],
        }
    }
}

/// Builds hrefs under the configured public base URL
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `self` link of one entity, e.g. `/clients/{id}`
    pub fn item(&self, collection: &str, id: impl Display) -> Link {
        Link {
            rel: "self".to_string(),
            href: format!("{}{collection}/{id}", self.base),
        }
    }

    /// Link back to a whole collection, e.g. `Clients List` → `/clients`
    pub fn collection(&self, rel: &str, collection: &str) -> Link {
        Link {
            rel: rel.to_string(),
            href: format!("{}{collection}", self.base),
        }
    }
}
