use crate::model::InvalidInputError;

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Sample thickness [mm].
    pub thickness: f64,
    /// Raw detector power per trial [mW].
    pub trials: Vec<f64>,
}

/// Rectangular table of trial readings, one row per phantom sample.
///
/// Construction guarantees at least one row, at least one trial per row and
/// the same trial count on every row.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    rows: Vec<MeasurementRow>,
    n_trials: usize,
}

impl MeasurementTable {
    /// Builds a table from raw numeric rows laid out as
    /// `thickness, trial1, ..., trialN`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InvalidInputError> {
        if rows.is_empty() {
            return Err(InvalidInputError::EmptyTable);
        }

        let n_trials = rows[0].len().saturating_sub(1);
        let mut out = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            let sample = idx + 1;
            if row.len() < 2 {
                return Err(InvalidInputError::NoTrials { sample });
            }
            let found = row.len() - 1;
            if found != n_trials {
                return Err(InvalidInputError::RaggedRow {
                    sample,
                    expected: n_trials,
                    found,
                });
            }
            if let Some(col) = row.iter().position(|v| !v.is_finite()) {
                return Err(InvalidInputError::NonFinite {
                    sample,
                    column: col + 1,
                });
            }
            let mut values = row.into_iter();
            let thickness = values.next().unwrap_or_default();
            out.push(MeasurementRow {
                thickness,
                trials: values.collect(),
            });
        }

        Ok(Self {
            rows: out,
            n_trials,
        })
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_trials(&self) -> usize {
        self.n_trials
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/measurement.rs"]
mod tests;
