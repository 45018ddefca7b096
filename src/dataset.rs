use crate::error::{RegressionError, Result};
use crate::linear_model::{rows_to_matrix, Regression, RegressionKind};
use crate::{Matrix, Vector};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Feature rows paired with one label per row.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(RegressionError::RowLabelMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }

        Ok(Self { features, labels })
    }

    /// Parses whitespace-separated decimal values, one training case per line.
    ///
    /// The last value of a line is its label and the preceding ones its
    /// features:
    ///
    /// ```text
    /// X11 X12 ... X1N Y1
    /// X21 X22 ... X2N Y2
    /// ```
    ///
    /// Parsing stops at the first blank line or at end of input.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut rows = Vec::new();
        let mut labels = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                break;
            }

            let mut values = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| RegressionError::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            // non-empty after the blank-line check
            let label = values.pop().unwrap_or_default();
            labels.push(label);
            rows.push(values);
        }

        let features = rows_to_matrix(&rows)?;
        Self::new(features, Vector::from(labels))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Builds a model over this data with zero-initialized parameters.
    pub fn into_regression(self, kind: RegressionKind) -> Regression {
        Regression::new(self.features, self.labels, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Cursor;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_label_mismatch() {
        let err = Dataset::new(array![[1.0], [2.0]], array![1.0]).unwrap_err();
        assert!(matches!(err, RegressionError::RowLabelMismatch { rows: 2, labels: 1 }));
    }

    #[test]
    fn test_from_reader_splits_label_column() {
        let input = "1 0.5 2 1\n1 1.5 -3 0\n";

        let dataset = Dataset::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dataset.features, array![[1.0, 0.5, 2.0], [1.0, 1.5, -3.0]]);
        assert_eq!(dataset.labels, array![1.0, 0.0]);
    }

    #[test]
    fn test_from_reader_stops_at_blank_line() {
        let input = "1 2 3\n1 4 5\n\n1 6 7\n";

        let dataset = Dataset::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dataset.n_samples(), 2);
        assert_eq!(dataset.labels, array![3.0, 5.0]);
    }

    #[test]
    fn test_from_reader_accepts_any_whitespace() {
        let input = "1\t2   3\n  1 4\t5";

        let dataset = Dataset::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dataset.features, array![[1.0, 2.0], [1.0, 4.0]]);
    }

    #[test]
    fn test_from_reader_reports_bad_token() {
        let err = Dataset::from_reader(Cursor::new("1 2 3\n1 x 5\n")).unwrap_err();

        match err {
            RegressionError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_reader_rejects_ragged_lines() {
        let err = Dataset::from_reader(Cursor::new("1 2 3\n1 2\n")).unwrap_err();
        assert!(matches!(err, RegressionError::RaggedRows { row: 1, .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Dataset::from_file("/nonexistent/regression/data.txt").unwrap_err();
        assert!(matches!(err, RegressionError::Io(_)));
    }

    #[test]
    fn test_into_regression() {
        let dataset = Dataset::from_reader(Cursor::new("1 1 2\n1 2 4\n")).unwrap();

        let model = dataset.into_regression(RegressionKind::Linear);

        assert!(model.is_linear());
        assert_eq!(model.theta, array![0.0, 0.0]);
        assert!(model.cost(0.0, false).is_ok());
    }
}
