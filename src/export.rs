use std::fs::File;

use anyhow::Result;
use serde::Serialize;

use crate::model::{monthly_breakdown, LoanParameters, PaymentBreakdown};

/// Currently displayed figures, written out as-is. Export is one-way; the
/// file is never read back.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub parameters: LoanParameters,
    pub breakdown: PaymentBreakdown,
}

impl Snapshot {
    pub fn new(params: &LoanParameters) -> Self {
        Self {
            parameters: *params,
            breakdown: monthly_breakdown(params),
        }
    }
}

pub fn export_snapshot(params: &LoanParameters, filename: &str) -> Result<()> {
    let file = File::create(filename)?;
    serde_json::to_writer_pretty(file, &Snapshot::new(params))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_parameters_and_breakdown() {
        let snapshot = Snapshot::new(&LoanParameters::default());
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["parameters"]["home_price"], 312_500.0);
        assert_eq!(json["parameters"]["loan_term_years"], 30.0);
        let total = json["breakdown"]["total"].as_f64().unwrap();
        assert!((total - 1995.63).abs() < 0.07);
    }

    #[test]
    fn snapshot_tracks_current_parameters() {
        let params = LoanParameters {
            down_payment: 100_000.0,
            ..LoanParameters::default()
        };
        let snapshot = Snapshot::new(&params);
        assert_eq!(snapshot.parameters.down_payment, 100_000.0);
        assert_eq!(snapshot.breakdown, monthly_breakdown(&params));
    }
}
