use crate::filters::{FilterState, ANY, DEFAULT_QUERY};

/// Builds the GitHub search query string for the current filters.
///
/// Pure and total: always returns a string. Clause order is fixed so the
/// output is reproducible: base query, language, license, stars minimum,
/// stars maximum.
pub fn build_query(state: &FilterState) -> String {
    let mut query = if state.query.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        state.query.clone()
    };

    if state.language != ANY {
        query.push_str(" language:");
        query.push_str(&state.language);
    }

    if state.license != ANY {
        query.push_str(" license:");
        query.push_str(&state.license);
    }

    if !state.stars_min.is_empty() {
        query.push_str(" stars:>=");
        query.push_str(&state.stars_min);
    }

    if !state.stars_max.is_empty() {
        query.push_str(" stars:<=");
        query.push_str(&state.stars_max);
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_order_and_empty_max() {
        let mut state = FilterState::default();
        state.set_query("react");
        state.set_language("Go");
        state.set_license("mit");
        state.set_stars_min("100");
        assert_eq!(build_query(&state), "react language:Go license:mit stars:>=100");
    }

    #[test]
    fn test_empty_query_falls_back_to_default() {
        let mut state = FilterState::default();
        state.set_query("");
        assert_eq!(build_query(&state), "react");
    }

    #[test]
    fn test_all_clauses() {
        let mut state = FilterState::default();
        state.set_query("cli");
        state.set_language("Rust");
        state.set_license("apache-2.0");
        state.set_stars_min("10");
        state.set_stars_max("5000");
        assert_eq!(
            build_query(&state),
            "cli language:Rust license:apache-2.0 stars:>=10 stars:<=5000"
        );
    }

    #[test]
    fn test_any_sentinels_add_nothing() {
        let state = FilterState::default();
        assert_eq!(build_query(&state), "react");
    }

    #[test]
    fn test_stars_max_only() {
        let mut state = FilterState::default();
        state.set_query("game of life");
        state.set_stars_max("50");
        assert_eq!(build_query(&state), "game of life stars:<=50");
    }
}
