use std::collections::HashMap;

use crate::shared::types::CategoryMap;

/// Label of the category that occurs most often in `category_ids`.
///
/// Ties go to the id seen first. Returns an empty string when there are no ids
/// or the winning id has no label.
pub fn most_common_category<I>(categories: &CategoryMap, category_ids: I) -> String
where
    I: IntoIterator<Item = i32>,
{
    // id -> (count, first position)
    let mut counts: HashMap<i32, (usize, usize)> = HashMap::new();
    for (position, id) in category_ids.into_iter().enumerate() {
        counts.entry(id).or_insert((0, position)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .and_then(|(id, _)| categories.get(&id).cloned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> CategoryMap {
        CategoryMap::from([
            (1, "science".to_string()),
            (2, "art".to_string()),
            (3, "history".to_string()),
        ])
    }

    #[test]
    fn test_empty_input_gives_empty_label() {
        assert_eq!(most_common_category(&categories(), Vec::new()), "");
    }

    #[test]
    fn test_picks_most_frequent() {
        assert_eq!(most_common_category(&categories(), vec![2, 1, 2, 3, 2, 1]), "art");
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        assert_eq!(most_common_category(&categories(), vec![3, 1, 1, 3]), "history");
        assert_eq!(most_common_category(&categories(), vec![1, 3, 3, 1]), "science");
    }

    #[test]
    fn test_unknown_category_gives_empty_label() {
        assert_eq!(most_common_category(&categories(), vec![9, 9, 1]), "");
    }
}
