/// Slice of data with a stride.
///
/// Used to look at one row of a `ColumnMajorMatrix` without copying it.
#[derive(Debug, Clone, Copy)]
pub struct StridedVecView<'a, A: 'a> {
    data: &'a [A],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, A: 'a> StridedVecView<'a, A> {
    pub fn new(data: &'a [A], start: usize, stride: usize, len: usize) -> Self {
        debug_assert!(len == 0 || start + (len - 1) * stride < data.len());
        Self {
            data,
            start,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Item at `pos`, or `None` past the end of the view.
    pub fn get(&self, pos: usize) -> Option<&'a A> {
        if pos < self.len {
            self.data.get(self.start + pos * self.stride)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a A> {
        let (data, start, stride) = (self.data, self.start, self.stride);
        (0..self.len).map(move |pos| &data[start + pos * stride])
    }

    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Store a dense matrix in a column-major way.
///
/// Attribute selection reads one column at a time, so the columns are contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMajorMatrix<A> {
    /// Number of rows in the matrix
    n_rows: usize,
    /// Number of columns in the matrix
    n_cols: usize,
    /// Values used by the algorithm. Format is column first
    values: Vec<A>,
}

impl<A> ColumnMajorMatrix<A> {
    /// Matrix with `n_cols` columns and no row.
    pub fn empty(n_cols: usize) -> Self {
        Self {
            n_rows: 0,
            n_cols,
            values: Vec::new(),
        }
    }

    /// Build from rows that must all have `n_cols` items.
    pub fn from_rows(rows: Vec<Vec<A>>, n_cols: usize) -> Self {
        let n_rows = rows.len();
        let mut rows: Vec<_> = rows
            .into_iter()
            .map(|row| {
                assert_eq!(row.len(), n_cols);
                row.into_iter()
            })
            .collect();
        let mut values: Vec<A> = Vec::with_capacity(n_rows * n_cols);
        for _ in 0..n_cols {
            for row in &mut rows {
                if let Some(item) = row.next() {
                    values.push(item)
                }
            }
        }
        assert_eq!(n_rows * n_cols, values.len());
        Self {
            n_rows,
            n_cols,
            values,
        }
    }

    pub fn column(&self, col: usize) -> &[A] {
        assert!(col < self.n_cols);
        let start = col * self.n_rows;
        &self.values[start..start + self.n_rows]
    }

    pub fn row(&self, row: usize) -> StridedVecView<A> {
        assert!(row < self.n_rows);
        StridedVecView::new(&self.values, row, self.n_rows, self.n_cols)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }
}
