// ── Selector catalog ──
//
// Known drink names offered by the selector. Purely a convenience: the
// name field accepts anything, listed or not.

/// Built-in catalog, in display order.
pub const DEFAULT_DRINKS: [&str; 15] = [
    "Margarita",
    "Martini",
    "Mojito",
    "Old Fashioned",
    "Daiquiri",
    "Negroni",
    "Manhattan",
    "Whiskey Sour",
    "Mai Tai",
    "Cosmopolitan",
    "Pina Colada",
    "Bloody Mary",
    "Gin Tonic",
    "Long Island Tea",
    "Caipirinha",
];

/// Ordered set of drink names, unique by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Build from any name sequence. Blank entries and repeats are dropped;
    /// the first occurrence keeps its position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self { names: Vec::new() };
        catalog.extend(names);
        catalog
    }

    /// Append names not already present.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let name = name.trim();
            if name.is_empty() || self.contains(name) {
                continue;
            }
            self.names.push(name.to_owned());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_DRINKS)
    }
}
