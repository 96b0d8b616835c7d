use crate::{ColumnMajorMatrix, Id3Error, Id3Result, StridedVecView};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Util for parsing a CSV without headers into a dataset.
///
/// The last column of the CSV must be the label. Empty lines are skipped.
pub fn parse_csv(data: &str, sep: &str) -> Id3Result<Dataset> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (n_line, l) in data.lines().enumerate() {
        if l.trim().is_empty() {
            continue;
        }
        let row = l
            .split(sep)
            .map(|item| {
                item.trim().parse::<f64>().map_err(|e| Id3Error::Parse {
                    line: n_line + 1,
                    message: format!("{:?}: {}", item, e),
                })
            })
            .collect::<Id3Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Dataset::from_rows(rows)
}

/// Store the raw data: the features and the label of every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: ColumnMajorMatrix<f64>,
    target: Vec<f64>,
}

impl Dataset {
    /// Dataset without any row.
    pub fn empty(n_features: usize) -> Self {
        Dataset {
            features: ColumnMajorMatrix::empty(n_features),
            target: Vec::new(),
        }
    }

    /// Build a dataset from rows whose last item is the label.
    ///
    /// All the rows must have the same length, hold at least the label and no NaN.
    /// Without any row the dataset has no feature.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Id3Result<Self> {
        let n_cols = match rows.first() {
            None => return Ok(Self::empty(0)),
            Some(row) => row.len(),
        };
        let mut features = Vec::with_capacity(rows.len());
        let mut target = Vec::with_capacity(rows.len());
        for (row_id, mut row) in rows.into_iter().enumerate() {
            if row.len() != n_cols && !row.is_empty() {
                return Err(Id3Error::RaggedRows {
                    row: row_id,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|v| v.is_nan()) {
                return Err(Id3Error::NanValue { row: row_id, col });
            }
            match row.pop() {
                Some(label) => target.push(label),
                None => return Err(Id3Error::MissingLabel { row: row_id }),
            }
            features.push(row);
        }

        Ok(Dataset {
            features: ColumnMajorMatrix::from_rows(features, n_cols - 1),
            target,
        })
    }

    pub fn features(&self) -> &ColumnMajorMatrix<f64> {
        &self.features
    }

    pub fn target(&self) -> &[f64] {
        &self.target
    }

    pub fn n_rows(&self) -> usize {
        self.target.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.n_cols()
    }

    /// Length of a row, label included.
    pub fn n_cols(&self) -> usize {
        self.n_features() + 1
    }

    /// Row `row`, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<Row> {
        if row < self.n_rows() {
            Some(self.row_at(row))
        } else {
            None
        }
    }

    /// Row of an id known to be in range, as the ids of a view are.
    fn row_at(&self, row: usize) -> Row {
        Row {
            features: self.features.row(row),
            label: self.target[row],
        }
    }

    /// View over all the rows.
    pub fn view(&self) -> DatasetView {
        DatasetView {
            dataset: self,
            indices: (0..self.n_rows()).collect(),
        }
    }
}

/// One row of a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub features: StridedVecView<'a, f64>,
    pub label: f64,
}

impl<'a> Row<'a> {
    /// Value of the feature `attribute`, or `None` when the row has no such feature.
    pub fn feature(&self, attribute: usize) -> Option<f64> {
        self.features.get(attribute).cloned()
    }
}

/// Subset of the rows of a dataset.
///
/// Sub-datasets never copy the features: they only keep the ids of their rows, in the order of
/// the original dataset.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> From<&'a Dataset> for DatasetView<'a> {
    fn from(dataset: &'a Dataset) -> Self {
        dataset.view()
    }
}

impl<'a> DatasetView<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Ids of the rows in the underlying dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn n_rows(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.dataset.n_features()
    }

    pub fn n_cols(&self) -> usize {
        self.dataset.n_cols()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| dataset.row_at(i))
    }

    pub fn labels(&self) -> impl Iterator<Item = f64> + '_ {
        let target = &self.dataset.target;
        self.indices.iter().map(move |&i| target[i])
    }

    pub(crate) fn check_attribute(&self, attribute: usize) -> Id3Result<()> {
        if attribute >= self.n_features() {
            return Err(Id3Error::InvalidAttributeIndex {
                attribute,
                n_features: self.n_features(),
            });
        }
        Ok(())
    }

    /// Values of the feature `attribute` for the rows of the view.
    pub fn column(&self, attribute: usize) -> Id3Result<impl Iterator<Item = f64> + '_> {
        self.check_attribute(attribute)?;
        let column = self.dataset.features.column(attribute);
        Ok(self.indices.iter().map(move |&i| column[i]))
    }

    /// Keep the rows matching `predicate`.
    pub fn filter_rows(&self, predicate: impl Fn(&Row<'a>) -> bool) -> DatasetView<'a> {
        let dataset = self.dataset;
        let indices = self
            .indices
            .iter()
            .cloned()
            .filter(|&i| predicate(&dataset.row_at(i)))
            .collect();
        DatasetView { dataset, indices }
    }

    /// Split the rows by the distinct values of the feature `attribute`.
    ///
    /// Values are compared exactly, and the partitions are returned in ascending order of value.
    /// None of them is empty.
    pub fn partition(&self, attribute: usize) -> Id3Result<Vec<(f64, DatasetView<'a>)>> {
        self.check_attribute(attribute)?;
        let column = self.dataset.features.column(attribute);
        let mut groups: BTreeMap<OrderedFloat<f64>, Vec<usize>> = BTreeMap::new();
        for &i in &self.indices {
            groups.entry(OrderedFloat(column[i])).or_default().push(i);
        }
        let dataset = self.dataset;
        Ok(groups
            .into_iter()
            .map(|(value, indices)| (value.into_inner(), DatasetView { dataset, indices }))
            .collect())
    }

    /// Copy the rows of the view into a new dataset.
    pub fn to_dataset(&self) -> Dataset {
        let n_features = self.n_features();
        let features: Vec<Vec<f64>> = self.rows().map(|row| row.features.to_vec()).collect();
        Dataset {
            features: ColumnMajorMatrix::from_rows(features, n_features),
            target: self.labels().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Dataset {
        Dataset::from_rows(vec![
            vec![0., 1., 0.],
            vec![1., 1., 1.],
            vec![0., 2., 0.],
            vec![2., 2., 1.],
            vec![1., 1., 0.],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows() {
        let data = toy();
        assert_eq!(data.n_rows(), 5);
        assert_eq!(data.n_features(), 2);
        assert_eq!(data.n_cols(), 3);
        assert_eq!(data.target(), &[0., 1., 0., 1., 0.]);
        assert_eq!(data.features().column(0), &[0., 1., 0., 2., 1.]);
        let row = data.row(3).unwrap();
        assert_eq!(row.feature(1), Some(2.));
        assert_eq!(row.label, 1.);
    }

    #[test]
    fn test_from_rows_errors() {
        let ragged = Dataset::from_rows(vec![vec![0., 1., 0.], vec![1., 1.]]);
        assert_eq!(
            ragged,
            Err(Id3Error::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            })
        );

        let missing = Dataset::from_rows(vec![vec![0., 1.], vec![]]);
        assert_eq!(missing, Err(Id3Error::MissingLabel { row: 1 }));
        let missing = Dataset::from_rows(vec![vec![]]);
        assert_eq!(missing, Err(Id3Error::MissingLabel { row: 0 }));

        let nan = Dataset::from_rows(vec![vec![0., 1.], vec![f64::NAN, 0.]]);
        assert_eq!(nan, Err(Id3Error::NanValue { row: 1, col: 0 }));
    }

    #[test]
    fn test_from_rows_empty_or_label_only() {
        let empty = Dataset::from_rows(vec![]).unwrap();
        assert_eq!(empty.n_rows(), 0);
        assert_eq!(empty.n_features(), 0);

        let labels_only = Dataset::from_rows(vec![vec![1.], vec![0.]]).unwrap();
        assert_eq!(labels_only.n_features(), 0);
        assert_eq!(labels_only.target(), &[1., 0.]);
        assert!(labels_only.row(0).unwrap().features.is_empty());
    }

    #[test]
    fn test_filter_rows() {
        let data = toy();
        let view = data.view();
        let filtered = view.filter_rows(|row| row.feature(1) == Some(1.));
        assert_eq!(filtered.indices(), &[0, 1, 4]);
        assert_eq!(filtered.labels().collect::<Vec<_>>(), vec![0., 1., 0.]);

        // Filtering a view only looks at the rows of the view
        let again = filtered.filter_rows(|row| row.label == 0.);
        assert_eq!(again.indices(), &[0, 4]);

        let none = view.filter_rows(|_| false);
        assert!(none.is_empty());
        assert_eq!(none.n_features(), 2);
    }

    #[test]
    fn test_out_of_range_access() {
        let data = toy();
        assert!(data.row(5).is_none());
        assert!(data.row(99).is_none());
        let row = data.row(4).unwrap();
        assert_eq!(row.feature(1), Some(1.));
        assert_eq!(row.feature(2), None);
        assert_eq!(row.feature(5), None);

        // A predicate on a missing feature matches no row
        let filtered = data.view().filter_rows(|row| row.feature(5) == Some(0.));
        assert!(filtered.is_empty());
        assert_eq!(filtered.n_features(), 2);

        assert!(Dataset::empty(3).row(0).is_none());
    }

    #[test]
    fn test_partition() {
        let data = toy();
        let parts = data.view().partition(0).unwrap();
        let parts: Vec<_> = parts
            .iter()
            .map(|(value, view)| (*value, view.indices().to_vec()))
            .collect();
        assert_eq!(
            parts,
            vec![(0., vec![0, 2]), (1., vec![1, 4]), (2., vec![3])]
        );

        assert_eq!(
            data.view().partition(2).unwrap_err(),
            Id3Error::InvalidAttributeIndex {
                attribute: 2,
                n_features: 2
            }
        );
    }

    #[test]
    fn test_partition_signed_zero() {
        let data = Dataset::from_rows(vec![vec![0., 0.], vec![-0., 1.], vec![1., 1.]]).unwrap();
        let parts = data.view().partition(0).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].1.indices(), &[0, 1]);
    }

    #[test]
    fn test_column() {
        let data = toy();
        let view = data.view().filter_rows(|row| row.label == 1.);
        assert_eq!(view.column(1).unwrap().collect::<Vec<_>>(), vec![1., 2.]);
        assert!(view.column(5).is_err());
    }

    #[test]
    fn test_to_dataset() {
        let data = toy();
        let copy = data.view().filter_rows(|row| row.feature(0) != Some(0.)).to_dataset();
        let expected =
            Dataset::from_rows(vec![vec![1., 1., 1.], vec![2., 2., 1.], vec![1., 1., 0.]]).unwrap();
        assert_eq!(copy, expected);
        assert_eq!(data.view().to_dataset(), data);
    }

    #[test]
    fn test_parse_csv() {
        let data = parse_csv("0,1,0\n\n1, 2 ,1\n", ",").unwrap();
        assert_eq!(data.n_rows(), 2);
        assert_eq!(data.target(), &[0., 1.]);
        assert_eq!(data.row(1).unwrap().features.to_vec(), vec![1., 2.]);

        match parse_csv("0\t1\n0\tyes\n", "\t") {
            Err(Id3Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
