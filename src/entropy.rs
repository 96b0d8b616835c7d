use crate::{DatasetView, Id3Error, Id3Result};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Number of occurrences of every distinct label, in ascending label order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelDistribution {
    counts: BTreeMap<OrderedFloat<f64>, usize>,
    total: usize,
}

impl LabelDistribution {
    pub fn from_labels(labels: impl IntoIterator<Item = f64>) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for label in labels {
            *counts.entry(OrderedFloat(label)).or_insert(0) += 1;
            total += 1;
        }
        LabelDistribution { counts, total }
    }

    pub fn from_view(data: &DatasetView) -> Self {
        Self::from_labels(data.labels())
    }

    /// Number of labels counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn n_classes(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, label: f64) -> usize {
        self.counts.get(&OrderedFloat(label)).cloned().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts.iter().map(|(label, &count)| (label.into_inner(), count))
    }

    pub fn probabilities(&self) -> Vec<(f64, f64)> {
        let total = self.total as f64;
        self.iter()
            .map(|(label, count)| (label, count as f64 / total))
            .collect()
    }

    /// Most frequent label. On a tie, the smallest one.
    pub fn majority(&self) -> Option<f64> {
        let max_count = self.counts.values().cloned().max()?;
        self.iter()
            .find(|&(_, count)| count == max_count)
            .map(|(label, _)| label)
    }

    /// All the labels are equal.
    pub fn is_pure(&self) -> bool {
        self.counts.len() == 1
    }

    /// Shannon entropy of the labels, in bits.
    pub fn entropy(&self) -> Id3Result<f64> {
        if self.total == 0 {
            return Err(Id3Error::EmptyDataset);
        }
        let total = self.total as f64;
        // Fold from +0. so that a pure set gives 0. and not -0.
        let entropy = self
            .counts
            .values()
            .map(|&count| count as f64 / total)
            .filter(|&p| p > 0.)
            .fold(0., |acc, p| acc - p * p.log2());
        Ok(entropy)
    }

    /// Upper bound of the entropy for this number of classes.
    pub fn max_entropy(&self) -> f64 {
        match self.n_classes() {
            0 => 0.,
            n => (n as f64).log2(),
        }
    }
}

/// Shannon entropy, in bits, of the labels of the rows.
///
/// Fails with `EmptyDataset` when the view has no row.
pub fn entropy(data: &DatasetView) -> Id3Result<f64> {
    LabelDistribution::from_view(data).entropy()
}
