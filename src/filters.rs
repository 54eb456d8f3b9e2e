use clap::ValueEnum;

/// Fallback search term when the user clears the query entirely.
pub const DEFAULT_QUERY: &str = "react";

/// Sentinel meaning "no filter" for language and license.
pub const ANY: &str = "any";

/// Page size for every search request.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Languages offered by the `languages` helper. Any other value typed by
/// the user is passed through to GitHub unchanged.
pub const LANGUAGES: &[&str] = &[
    "any", "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "PHP",
    "Ruby", "Go", "Rust", "Swift", "Kotlin", "Dart", "Shell", "HTML", "CSS",
    "Vue", "React", "Angular",
];

/// License identifiers offered by the `licenses` helper.
pub const LICENSES: &[&str] = &[
    "any",
    "mit",
    "apache-2.0",
    "gpl-3.0",
    "bsd-3-clause",
    "bsd-2-clause",
    "lgpl-3.0",
    "mpl-2.0",
    "cc0-1.0",
    "unlicense",
];

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Stars,
    Forks,
    Updated,
}

impl SortBy {
    /// GitHub's `sort` query parameter value.
    pub fn as_param(self) -> &'static str {
        match self {
            SortBy::Stars => "stars",
            SortBy::Forks => "forks",
            SortBy::Updated => "updated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stars" => Some(SortBy::Stars),
            "forks" => Some(SortBy::Forks),
            "updated" => Some(SortBy::Updated),
            _ => None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_param(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Order::Asc),
            "desc" => Some(Order::Desc),
            _ => None,
        }
    }
}

/// The filter/sort/pagination selections driving every search request.
///
/// One instance lives for the whole session, owned by the dashboard loop
/// (or built once for a one-shot search). All mutation goes through the
/// setters below; every setter except [`set_page`](Self::set_page) snaps
/// the page back to 1 so a changed filter never points at a page that no
/// longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub language: String,
    pub license: String,
    pub stars_min: String,
    pub stars_max: String,
    pub sort_by: SortBy,
    pub order: Order,
    pub page: u32,
    pub per_page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: DEFAULT_QUERY.to_string(),
            language: ANY.to_string(),
            license: ANY.to_string(),
            stars_min: String::new(),
            stars_max: String::new(),
            sort_by: SortBy::Stars,
            order: Order::Desc,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        self.page = 1;
    }

    pub fn set_license(&mut self, license: impl Into<String>) {
        self.license = license.into();
        self.page = 1;
    }

    pub fn set_stars_min(&mut self, min: impl Into<String>) {
        self.stars_min = min.into();
        self.page = 1;
    }

    pub fn set_stars_max(&mut self, max: impl Into<String>) {
        self.stars_max = max.into();
        self.page = 1;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.page = 1;
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
        self.page = 1;
    }

    /// Changes only the page; every other field is left untouched.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Back to defaults, keeping the current query.
    pub fn reset(&mut self) {
        let query = std::mem::take(&mut self.query);
        *self = FilterState {
            query,
            ..FilterState::default()
        };
    }
}
