//! Running per-action aggregate

use crate::error::InvalidInputError;

/// Running summary of every time folded for one action.
///
/// Only the sum and count are kept; the average is derived on demand so
/// folding stays commutative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Aggregate {
    /// Seed an aggregate from its first sample
    pub fn new(time: f64) -> Self {
        Self {
            count: 1,
            sum: time,
            min: time,
            max: time,
        }
    }

    /// Fold one more sample into the aggregate.
    ///
    /// A sample that would push the sum past the largest finite value is
    /// rejected and the aggregate is left as it was.
    pub fn fold(&mut self, time: f64) -> Result<(), InvalidInputError> {
        let sum = self.sum + time;
        if !sum.is_finite() {
            return Err(InvalidInputError::sum_overflow(time));
        }

        self.count += 1;
        self.sum = sum;
        self.min = self.min.min(time);
        self.max = self.max.max(time);
        Ok(())
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Mean of every folded sample; `count` is never zero
    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_aggregate_is_seeded() {
        let agg = Aggregate::new(100.0);
        assert_eq!(agg.count(), 1);
        assert_eq!(agg.sum(), 100.0);
        assert_eq!(agg.min(), 100.0);
        assert_eq!(agg.max(), 100.0);
        assert_eq!(agg.average(), 100.0);
    }

    #[test]
    fn test_fold_updates_all_fields() {
        let mut agg = Aggregate::new(2.0);
        agg.fold(1.0).unwrap();
        agg.fold(3.0).unwrap();

        assert_eq!(agg.count(), 3);
        assert_eq!(agg.sum(), 6.0);
        assert_eq!(agg.min(), 1.0);
        assert_eq!(agg.max(), 3.0);
        assert_eq!(agg.average(), 2.0);
    }

    #[test]
    fn test_fold_order_does_not_matter() {
        let orders = [[1.0, 2.0, 3.0], [3.0, 1.0, 2.0], [2.0, 3.0, 1.0]];
        let results: Vec<Aggregate> = orders
            .iter()
            .map(|times| {
                let mut agg = Aggregate::new(times[0]);
                times[1..].iter().for_each(|t| agg.fold(*t).unwrap());
                agg
            })
            .collect();

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_fold_rejects_sum_overflow() {
        let mut agg = Aggregate::new(1e308);
        let before = agg;

        assert!(agg.fold(1e308).is_err());
        assert_eq!(agg, before);

        agg.fold(1.0).unwrap();
        assert_eq!(agg.count(), 2);
        assert!(agg.average().is_finite());
    }
}
