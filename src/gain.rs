use crate::{
    entropy, round_decimals, weighted_sum, DatasetView, Id3Error, Id3Result, DEFAULT_DECIMALS,
    MAX_DECIMALS,
};
use log::trace;

/// Average entropy of the labels once the rows are split on `attribute`.
///
/// Every distinct value of the attribute gives one partition, weighted by its share of the rows.
pub fn average_info(data: &DatasetView, attribute: usize) -> Id3Result<f64> {
    data.check_attribute(attribute)?;
    if data.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    let n_rows = data.n_rows() as f64;
    let partitions = data.partition(attribute)?;

    let mut entropies = Vec::with_capacity(partitions.len());
    let mut weights = Vec::with_capacity(partitions.len());
    for (value, part) in &partitions {
        let part_entropy = entropy(part)?;
        trace!(
            "attribute {} = {}: {} row(s), entropy {}",
            attribute,
            value,
            part.n_rows(),
            part_entropy
        );
        entropies.push(part_entropy);
        weights.push(part.n_rows() as f64 / n_rows);
    }
    Ok(weighted_sum(&entropies, &weights))
}

/// Information gain of `attribute`, rounded to `DEFAULT_DECIMALS` decimals.
pub fn information_gain(data: &DatasetView, attribute: usize) -> Id3Result<f64> {
    information_gain_rounded(data, attribute, DEFAULT_DECIMALS)
}

/// Information gain of `attribute`, rounded to `decimals` decimals (ties to even).
pub fn information_gain_rounded(
    data: &DatasetView,
    attribute: usize,
    decimals: i32,
) -> Id3Result<f64> {
    check_decimals(decimals)?;
    data.check_attribute(attribute)?;
    let dataset_entropy = entropy(data)?;
    gain_from_entropy(data, attribute, dataset_entropy, decimals)
}

pub(crate) fn check_decimals(decimals: i32) -> Id3Result<()> {
    if !(0..=MAX_DECIMALS).contains(&decimals) {
        return Err(Id3Error::InvalidDecimals {
            decimals,
            max: MAX_DECIMALS,
        });
    }
    Ok(())
}

/// Same as `information_gain_rounded` when the entropy of the whole view is already known.
pub(crate) fn gain_from_entropy(
    data: &DatasetView,
    attribute: usize,
    dataset_entropy: f64,
    decimals: i32,
) -> Id3Result<f64> {
    let gain = dataset_entropy - average_info(data, attribute)?;
    Ok(round_decimals(gain, decimals))
}
