//! Per-document service frequency aggregation.

use std::collections::BTreeMap;

/// Canonical service → occurrence count for one document.
///
/// A `BTreeMap` keeps keys in lexicographic order, which is the required row
/// emission order; re-running on the same input yields identical iteration.
pub type ServiceTally = BTreeMap<String, usize>;

/// Count canonical service occurrences across all packages of one document.
pub fn tally_services<I>(services: I) -> ServiceTally
where
    I: IntoIterator<Item = String>,
{
    let mut tally = ServiceTally::new();
    for service in services {
        *tally.entry(service).or_insert(0) += 1;
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_services() {
        let tally = tally_services(
            ["Potency", "Pesticides", "Pesticides"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(tally.get("Potency"), Some(&1));
        assert_eq!(tally.get("Pesticides"), Some(&2));
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn keys_iterate_lexicographically() {
        let tally = tally_services(
            ["Water Activity", "Metals", "Potency"]
                .into_iter()
                .map(String::from),
        );
        let keys: Vec<&str> = tally.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Metals", "Potency", "Water Activity"]);
    }
}
