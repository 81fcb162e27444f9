//! Case-insensitive substring filtering shared by every list screen. The
//! filter derives a new view on each call and never mutates the loaded list.

pub trait Searchable {
    /// Concatenation of the record's display fields; the search term is
    /// matched against this as a substring.
    fn search_text(&self) -> String;
}

/// An empty or whitespace-only term yields the unfiltered list, in source
/// order.
pub fn filter_records<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.search_text().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record(&'static str);

    impl Searchable for Record {
        fn search_text(&self) -> String {
            self.0.to_string()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            Record("Ana Pérez 30111222"),
            Record("Juan Gómez 28999000"),
            Record("María Duarte 31555777"),
        ]
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let items = sample();
        assert_eq!(filter_records(&items, ""), items);
        assert_eq!(filter_records(&items, "   "), items);
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let items = sample();
        assert_eq!(filter_records(&items, "PÉREZ"), vec![items[0].clone()]);
        assert_eq!(filter_records(&items, "uar"), vec![items[2].clone()]);
    }

    #[test]
    fn matches_identity_number_fragments() {
        let items = sample();
        assert_eq!(filter_records(&items, "28999"), vec![items[1].clone()]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_records(&sample(), "zzz").is_empty());
    }
}
