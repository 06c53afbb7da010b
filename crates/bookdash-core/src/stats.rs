//! Descriptive statistics over a harvested collection.
//!
//! Everything here is a pure function over `&[CatalogueItem]`. These produce
//! the numbers downstream presentation draws from (rating distributions,
//! price histograms, top-N rankings); rendering is the consumer's concern.

use std::collections::BTreeMap;

use crate::catalogue::CatalogueItem;

/// One equal-width bucket of a price histogram. `upper` is exclusive except
/// for the last bin, which includes the maximum observed price.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Arithmetic mean price per rating bucket. Buckets with no records are
/// absent from the result.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_price_by_rating(items: &[CatalogueItem]) -> BTreeMap<u8, f64> {
    let mut sums: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for item in items {
        let entry = sums.entry(item.rating).or_insert((0.0, 0));
        entry.0 += item.price;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(rating, (sum, count))| (rating, sum / count as f64))
        .collect()
}

/// Number of records per rating bucket. Buckets with no records are absent.
#[must_use]
pub fn rating_counts(items: &[CatalogueItem]) -> BTreeMap<u8, usize> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.rating).or_insert(0) += 1;
    }
    counts
}

/// Pearson correlation coefficient between price and rating.
///
/// Returns `None` for degenerate inputs: fewer than two records, or zero
/// variance in either dimension (the coefficient is undefined there).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn price_rating_correlation(items: &[CatalogueItem]) -> Option<f64> {
    if items.len() < 2 {
        return None;
    }

    let n = items.len() as f64;
    let mean_price = items.iter().map(|i| i.price).sum::<f64>() / n;
    let mean_rating = items.iter().map(|i| f64::from(i.rating)).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_price = 0.0;
    let mut var_rating = 0.0;
    for item in items {
        let dp = item.price - mean_price;
        let dr = f64::from(item.rating) - mean_rating;
        cov += dp * dr;
        var_price += dp * dp;
        var_rating += dr * dr;
    }

    if var_price == 0.0 || var_rating == 0.0 {
        return None;
    }
    Some(cov / (var_price.sqrt() * var_rating.sqrt()))
}

/// Equal-width price histogram over the observed range.
///
/// Returns an empty vector when `bins` is zero or there are no records.
/// When every record has the same price, all counts land in the first bin.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn price_histogram(items: &[CatalogueItem], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 || items.is_empty() {
        return Vec::new();
    }

    let min = items.iter().map(|i| i.price).fold(f64::INFINITY, f64::min);
    let max = items
        .iter()
        .map(|i| i.price)
        .fold(f64::NEG_INFINITY, f64::max);

    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for item in items {
        let idx = if width > 0.0 {
            let raw = ((item.price - min) / width) as usize;
            raw.min(bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// The `n` most expensive records, descending by price. Ties keep their
/// collection order (the sort is stable).
#[must_use]
pub fn top_by_price(items: &[CatalogueItem], n: usize) -> Vec<&CatalogueItem> {
    let mut ranked: Vec<&CatalogueItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.price.total_cmp(&a.price));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, price: f64, rating: u8) -> CatalogueItem {
        CatalogueItem {
            title: title.to_owned(),
            price,
            availability: "In stock".to_owned(),
            rating,
        }
    }

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn mean_price_by_rating_matches_arithmetic_mean() {
        let items = vec![
            item("a", 10.0, 1),
            item("b", 20.0, 1),
            item("c", 31.5, 3),
            item("d", 0.5, 3),
            item("e", 7.25, 5),
        ];
        let means = mean_price_by_rating(&items);
        assert!((means[&1] - 15.0).abs() < TOLERANCE);
        assert!((means[&3] - 16.0).abs() < TOLERANCE);
        assert!((means[&5] - 7.25).abs() < TOLERANCE);
        assert!(!means.contains_key(&2));
    }

    #[test]
    fn mean_price_by_rating_empty_input() {
        assert!(mean_price_by_rating(&[]).is_empty());
    }

    #[test]
    fn rating_counts_counts_each_bucket() {
        let items = vec![
            item("a", 1.0, 0),
            item("b", 1.0, 4),
            item("c", 1.0, 4),
            item("d", 1.0, 4),
        ];
        let counts = rating_counts(&items);
        assert_eq!(counts[&0], 1);
        assert_eq!(counts[&4], 3);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn correlation_is_one_for_perfectly_linear_data() {
        let items = vec![
            item("a", 10.0, 1),
            item("b", 20.0, 2),
            item("c", 30.0, 3),
            item("d", 40.0, 4),
        ];
        let r = price_rating_correlation(&items).unwrap();
        assert!((r - 1.0).abs() < TOLERANCE, "expected r ≈ 1.0, got {r}");
    }

    #[test]
    fn correlation_is_negative_for_inverse_data() {
        let items = vec![item("a", 40.0, 1), item("b", 30.0, 2), item("c", 20.0, 3)];
        let r = price_rating_correlation(&items).unwrap();
        assert!((r + 1.0).abs() < TOLERANCE, "expected r ≈ -1.0, got {r}");
    }

    #[test]
    fn correlation_none_for_single_record() {
        assert!(price_rating_correlation(&[item("a", 5.0, 3)]).is_none());
    }

    #[test]
    fn correlation_none_for_zero_variance() {
        let items = vec![item("a", 10.0, 3), item("b", 20.0, 3)];
        assert!(price_rating_correlation(&items).is_none());
    }

    #[test]
    fn histogram_distributes_counts_across_bins() {
        let items = vec![
            item("a", 0.0, 0),
            item("b", 2.5, 0),
            item("c", 5.0, 0),
            item("d", 9.9, 0),
            item("e", 10.0, 0),
        ];
        let bins = price_histogram(&items, 2);
        assert_eq!(bins.len(), 2);
        assert!((bins[0].lower - 0.0).abs() < TOLERANCE);
        assert!((bins[1].upper - 10.0).abs() < TOLERANCE);
        // 0.0 and 2.5 fall in [0,5); the rest in [5,10].
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[1].count, 3);
    }

    #[test]
    fn histogram_max_price_lands_in_last_bin() {
        let items = vec![item("a", 1.0, 0), item("b", 3.0, 0)];
        let bins = price_histogram(&items, 4);
        assert_eq!(bins[3].count, 1);
    }

    #[test]
    fn histogram_uniform_prices_collapse_to_first_bin() {
        let items = vec![item("a", 7.0, 0), item("b", 7.0, 0)];
        let bins = price_histogram(&items, 3);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[1].count, 0);
        assert_eq!(bins[2].count, 0);
    }

    #[test]
    fn histogram_empty_for_zero_bins_or_no_items() {
        assert!(price_histogram(&[], 10).is_empty());
        assert!(price_histogram(&[item("a", 1.0, 0)], 0).is_empty());
    }

    #[test]
    fn top_by_price_orders_descending_and_truncates() {
        let items = vec![
            item("cheap", 1.0, 0),
            item("dear", 50.0, 0),
            item("middle", 25.0, 0),
        ];
        let top = top_by_price(&items, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].title, "dear");
        assert_eq!(top[1].title, "middle");
    }

    #[test]
    fn top_by_price_handles_n_larger_than_input() {
        let items = vec![item("only", 9.0, 0)];
        assert_eq!(top_by_price(&items, 10).len(), 1);
    }
}
