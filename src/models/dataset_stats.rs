use serde::{Deserialize, Serialize};

/// Summary statistics computed over the whole reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub n_variables: u64,
    pub n_observations: u64,
    pub missing_cells: u64,
    pub missing_cells_perc: f64,
    pub duplicate_rows: u64,
    pub duplicate_rows_perc: f64,
    /// Column counts by inferred kind.
    pub numeric: u64,
    pub categorical: u64,
    pub datetime: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_casing() {
        let json = r#"{
            "nVariables": 7,
            "nObservations": 10,
            "missingCells": 3,
            "missingCellsPerc": 4.28,
            "duplicateRows": 0,
            "duplicateRowsPerc": 0.0,
            "numeric": 4,
            "categorical": 2,
            "datetime": 1
        }"#;

        let stats: DatasetStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.n_variables, 7);
        assert_eq!(stats.n_observations, 10);
        assert_eq!(stats.missing_cells, 3);
        assert_eq!(stats.numeric, 4);
    }
}
