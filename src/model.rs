use serde::Serialize;

/// The six loan parameters driving the calculator. All independently
/// settable; out-of-range combinations are not rejected, the arithmetic
/// degrades instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    pub home_price: f64,
    pub down_payment: f64,
    pub annual_interest_rate: f64,
    pub loan_term_years: f64,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self {
            home_price: 312_500.0,
            down_payment: 62_500.0,
            annual_interest_rate: 4.0,
            loan_term_years: 30.0,
            annual_property_tax: 8_594.0,
            annual_insurance: 1_031.0,
        }
    }
}

/// Monthly payment split. A pure projection of `LoanParameters`, recomputed
/// on every read and never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentBreakdown {
    pub principal_and_interest: f64,
    pub tax: f64,
    pub insurance: f64,
    pub total: f64,
}

/// Compute the current month's payment split using the standard mortgage
/// formula. No rounding here; display rounds to cents. A zero loan term
/// divides by zero and the IEEE result propagates.
pub fn monthly_breakdown(params: &LoanParameters) -> PaymentBreakdown {
    let principal = params.home_price - params.down_payment;
    let monthly_rate = params.annual_interest_rate / 100.0 / 12.0;
    let num_payments = params.loan_term_years * 12.0;

    let principal_and_interest = if monthly_rate != 0.0 {
        principal * (monthly_rate * (1.0 + monthly_rate).powf(num_payments))
            / ((1.0 + monthly_rate).powf(num_payments) - 1.0)
    } else {
        principal / num_payments
    };

    let tax = params.annual_property_tax / 12.0;
    let insurance = params.annual_insurance / 12.0;

    PaymentBreakdown {
        principal_and_interest,
        tax,
        insurance,
        total: principal_and_interest + tax + insurance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_year_fixed_matches_published_payment() {
        let params = LoanParameters::default();
        let breakdown = monthly_breakdown(&params);

        // 250k principal at 4% over 360 payments
        assert!((breakdown.principal_and_interest - 1193.54).abs() < 0.05);
        assert!((breakdown.tax - 716.17).abs() < 0.01);
        assert!((breakdown.insurance - 85.92).abs() < 0.01);
        assert!((breakdown.total - 1995.63).abs() < 0.07);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let params = LoanParameters {
            home_price: 200_000.0,
            down_payment: 0.0,
            annual_interest_rate: 0.0,
            loan_term_years: 20.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
        };
        let breakdown = monthly_breakdown(&params);
        assert_eq!(breakdown.principal_and_interest, 200_000.0 / 240.0);
    }

    #[test]
    fn zero_term_degenerates_without_panicking() {
        let params = LoanParameters {
            loan_term_years: 0.0,
            annual_interest_rate: 0.0,
            ..LoanParameters::default()
        };
        let breakdown = monthly_breakdown(&params);
        assert!(breakdown.principal_and_interest.is_infinite());
    }

    #[test]
    fn total_is_sum_of_components() {
        let params = LoanParameters::default();
        let breakdown = monthly_breakdown(&params);
        assert_eq!(
            breakdown.total,
            breakdown.principal_and_interest + breakdown.tax + breakdown.insurance
        );
    }

    #[test]
    fn positive_principal_means_positive_payment() {
        let params = LoanParameters {
            home_price: 400_000.0,
            down_payment: 100_000.0,
            annual_interest_rate: 6.5,
            loan_term_years: 15.0,
            ..LoanParameters::default()
        };
        let breakdown = monthly_breakdown(&params);
        assert!(breakdown.principal_and_interest > 0.0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let params = LoanParameters::default();
        assert_eq!(monthly_breakdown(&params), monthly_breakdown(&params));
    }

    #[test]
    fn larger_down_payment_lowers_payment() {
        let base = LoanParameters::default();
        let more_down = LoanParameters {
            down_payment: 100_000.0,
            ..base
        };
        assert!(
            monthly_breakdown(&more_down).principal_and_interest
                < monthly_breakdown(&base).principal_and_interest
        );
    }
}
