//! Fixed-size windowing over an id-ordered result set.

use crate::names;

/// Return page `page` (1-based) of `items`, `page_size` items at most.
///
/// A page past the end is empty rather than an error. Page 0 is treated as
/// page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Parse the raw `page` query value. Absent, non-numeric and non-positive
/// values all fall back to the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(names::DEFAULT_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_contiguous_and_disjoint() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(&items, 1, 10);
        let second = paginate(&items, 2, 10);
        let third = paginate(&items, 3, 10);

        assert_eq!(first, &items[0..10]);
        assert_eq!(second, &items[10..20]);
        assert_eq!(third, &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
        assert!(paginate::<u32>(&[], 1, 10).is_empty());
    }

    #[test]
    fn page_zero_is_first_page() {
        let items: Vec<u32> = (1..=3).collect();
        assert_eq!(paginate(&items, 0, 10), &[1, 2, 3]);
    }

    #[test]
    fn every_item_lands_on_exactly_one_page() {
        let items: Vec<u32> = (0..97).collect();
        let mut seen = Vec::new();
        let mut page = 1;
        loop {
            let window = paginate(&items, page, names::QUESTIONS_PER_PAGE);
            if window.is_empty() {
                break;
            }
            assert!(window.len() <= names::QUESTIONS_PER_PAGE);
            seen.extend_from_slice(window);
            page += 1;
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn parse_page_defaults() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 2 ")), 2);
    }
}
