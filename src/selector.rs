use crate::gain::{check_decimals, gain_from_entropy};
use crate::{entropy, DatasetView, Id3Error, Id3Result, DEFAULT_DECIMALS, DEFAULT_PARALLEL};
use itertools::Itertools;
use log::debug;
use ord_subset::OrdSubsetIterExt;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectParams {
    /// Number of decimals kept in the information gains.
    pub decimals: i32,
    /// Compute the gains of the attributes in parallel.
    pub parallel: bool,
}

impl SelectParams {
    pub fn new() -> Self {
        SelectParams {
            decimals: DEFAULT_DECIMALS,
            parallel: DEFAULT_PARALLEL,
        }
    }
}

impl Default for SelectParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Information gain of every attribute, in attribute order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GainReport {
    gains: Vec<f64>,
}

impl GainReport {
    pub fn get(&self, attribute: usize) -> Option<f64> {
        self.gains.get(attribute).cloned()
    }

    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.gains.iter().cloned().enumerate()
    }

    pub fn max_gain(&self) -> Option<f64> {
        self.gains.iter().cloned().ord_subset_max()
    }

    /// First attribute reaching the maximal gain.
    pub fn best_attribute(&self) -> Option<usize> {
        let max_gain = self.max_gain()?;
        self.gains.iter().position(|&gain| gain == max_gain)
    }

    /// Attributes sorted by decreasing gain. Equal gains keep the attribute order.
    pub fn ranked(&self) -> Vec<(usize, f64)> {
        self.iter()
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
            .collect()
    }
}

impl fmt::Display for GainReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .format_with(", ", |(attribute, gain), f| f(&format_args!(
                    "{}: {}",
                    attribute, gain
                )))
        )
    }
}

/// Choose the attribute to split on, by information gain.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AttributeSelector {
    pub params: SelectParams,
}

impl AttributeSelector {
    pub fn new(params: SelectParams) -> Self {
        AttributeSelector { params }
    }

    /// Information gain of `attribute` with the configured rounding.
    pub fn information_gain(&self, data: &DatasetView, attribute: usize) -> Id3Result<f64> {
        crate::information_gain_rounded(data, attribute, self.params.decimals)
    }

    /// Gains of all the attributes.
    pub fn gain_report(&self, data: &DatasetView) -> Id3Result<GainReport> {
        check_decimals(self.params.decimals)?;
        if data.n_features() == 0 {
            return Err(Id3Error::NoFeatures {
                n_cols: data.n_cols(),
            });
        }
        // The entropy of the whole view doesn't depend on the attribute
        let dataset_entropy = entropy(data)?;
        let decimals = self.params.decimals;
        let gain = |attribute| gain_from_entropy(data, attribute, dataset_entropy, decimals);

        let gains = if self.params.parallel {
            (0..data.n_features())
                .into_par_iter()
                .map(gain)
                .collect::<Id3Result<Vec<f64>>>()?
        } else {
            (0..data.n_features())
                .map(gain)
                .collect::<Id3Result<Vec<f64>>>()?
        };
        Ok(GainReport { gains })
    }

    /// Gains of all the attributes and the attribute with the highest gain.
    ///
    /// On a tie the attribute with the lowest index wins.
    pub fn select(&self, data: &DatasetView) -> Id3Result<(GainReport, usize)> {
        let report = self.gain_report(data)?;
        let best = report.best_attribute().ok_or(Id3Error::NoFeatures {
            n_cols: data.n_cols(),
        })?;
        debug!(
            "gains {} on {} row(s): selected attribute {}",
            report,
            data.n_rows(),
            best
        );
        Ok((report, best))
    }
}

/// Gains of all the attributes and the attribute to split on, with the default parameters.
pub fn select_attribute(data: &DatasetView) -> Id3Result<(GainReport, usize)> {
    AttributeSelector::default().select(data)
}
