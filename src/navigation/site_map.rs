use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("navigation target not found: {0:?}")]
    UnknownTarget(String),
}

/// Key naming a page or section. It is the `id` of the container and the
/// `data-page` value of every entry that links to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavigationTarget {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    pub key: &'static str,
    pub label: &'static str,
    pub show_in_nav: bool,
}

pub const DESTINATIONS: &[Destination] = &[
    Destination { key: "home", label: "Home", show_in_nav: true },
    Destination { key: "services", label: "Services", show_in_nav: true },
    Destination { key: "about", label: "About", show_in_nav: true },
    Destination { key: "contact", label: "Contact", show_in_nav: true },
];

/// Lookup from target key to destination, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteMap {
    destinations: Vec<Destination>,
    index: HashMap<&'static str, usize>,
}

impl SiteMap {
    pub fn new(destinations: &[Destination]) -> Self {
        let mut index = HashMap::with_capacity(destinations.len());
        for (i, destination) in destinations.iter().enumerate() {
            // First declaration wins if markup repeats a key.
            index.entry(destination.key).or_insert(i);
        }
        Self {
            destinations: destinations.to_vec(),
            index,
        }
    }

    pub fn resolve(&self, target: &NavigationTarget) -> Result<&Destination, NavError> {
        self.index
            .get(target.as_str())
            .map(|&i| &self.destinations[i])
            .ok_or_else(|| NavError::UnknownTarget(target.as_str().to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// The landing destination, shown before any navigation.
    pub fn first(&self) -> Option<&Destination> {
        self.destinations.first()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.destinations.iter().map(|d| d.key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Destination> + '_ {
        self.destinations.iter().filter(|d| d.show_in_nav)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Default for SiteMap {
    fn default() -> Self {
        Self::new(DESTINATIONS)
    }
}
