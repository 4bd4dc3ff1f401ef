/// Records that can be narrowed by the list views.
pub trait Filterable {
    /// Categorical filter keys this record understands.
    const CATEGORY_KEYS: &'static [&'static str];

    /// Fields tested by the free-text search.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self, key: &str) -> Option<&str>;
}

/// A categorical filter value. `all` (or blank) admits every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    All,
    Only(String),
}

impl Choice {
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() || t == "all" {
            Choice::All
        } else {
            Choice::Only(t.to_string())
        }
    }

    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(want) => value == Some(want.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    query: String,
    categories: Vec<(String, Choice)>,
}

impl ListFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            categories: Vec::new(),
        }
    }

    pub fn with(mut self, key: &str, choice: Choice) -> Self {
        self.categories.retain(|(k, _)| k != key);
        self.categories.push((key.to_string(), choice));
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn text_matches<T: Filterable>(&self, item: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        item.search_fields()
            .iter()
            .any(|f| f.to_lowercase().contains(&self.query))
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.text_matches(item)
            && self
                .categories
                .iter()
                .all(|(key, choice)| choice.admits(item.category(key)))
    }
}

/// Visible subset in original order.
pub fn apply<'a, T: Filterable>(items: &'a [T], filter: &ListFilter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}
