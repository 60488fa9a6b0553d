use crate::model::{monthly_breakdown, LoanParameters, PaymentBreakdown};

/// Stable key names for the six controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    HomePrice,
    DownPayment,
    AnnualInterestRate,
    LoanTermYears,
    AnnualPropertyTax,
    AnnualInsurance,
}

pub const PARAM_KEYS: [ParamKey; 6] = [
    ParamKey::HomePrice,
    ParamKey::DownPayment,
    ParamKey::AnnualInterestRate,
    ParamKey::LoanTermYears,
    ParamKey::AnnualPropertyTax,
    ParamKey::AnnualInsurance,
];

impl ParamKey {
    pub fn label(self) -> &'static str {
        match self {
            ParamKey::HomePrice => "Home Price (USD)",
            ParamKey::DownPayment => "Down Payment (USD)",
            ParamKey::AnnualInterestRate => "Annual Interest Rate (%)",
            ParamKey::LoanTermYears => "Loan Term (years)",
            ParamKey::AnnualPropertyTax => "Annual Property Tax (USD)",
            ParamKey::AnnualInsurance => "Annual Insurance (USD)",
        }
    }

    pub fn min(self) -> f64 {
        match self {
            ParamKey::HomePrice => 50_000.0,
            ParamKey::DownPayment => 0.0,
            ParamKey::AnnualInterestRate => 0.0,
            ParamKey::LoanTermYears => 5.0,
            ParamKey::AnnualPropertyTax => 0.0,
            ParamKey::AnnualInsurance => 0.0,
        }
    }

    /// Upper bound of the control. The down payment tracks the current home
    /// price, so it needs the full parameter set.
    pub fn max(self, params: &LoanParameters) -> f64 {
        match self {
            ParamKey::HomePrice => 1_000_000.0,
            ParamKey::DownPayment => params.home_price,
            ParamKey::AnnualInterestRate => 15.0,
            ParamKey::LoanTermYears => 40.0,
            ParamKey::AnnualPropertyTax => 30_000.0,
            ParamKey::AnnualInsurance => 10_000.0,
        }
    }

    pub fn step(self) -> f64 {
        match self {
            ParamKey::HomePrice => 1_000.0,
            ParamKey::DownPayment => 500.0,
            ParamKey::AnnualInterestRate => 0.1,
            ParamKey::LoanTermYears => 1.0,
            ParamKey::AnnualPropertyTax => 100.0,
            ParamKey::AnnualInsurance => 50.0,
        }
    }

    pub fn get(self, params: &LoanParameters) -> f64 {
        match self {
            ParamKey::HomePrice => params.home_price,
            ParamKey::DownPayment => params.down_payment,
            ParamKey::AnnualInterestRate => params.annual_interest_rate,
            ParamKey::LoanTermYears => params.loan_term_years,
            ParamKey::AnnualPropertyTax => params.annual_property_tax,
            ParamKey::AnnualInsurance => params.annual_insurance,
        }
    }
}

// std's clamp panics when the bounds are unordered, which happens once a
// bound itself went NaN (the down-payment ceiling is the home price).
// Degenerate values pass through untouched instead.
fn clamp_to_bounds(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() && min <= max {
        value.clamp(min, max)
    } else {
        value
    }
}

/// Pure reducer: overwrite one field with a new numeric value. No
/// validation, matching the controls' own coercion-only policy.
pub fn apply(mut params: LoanParameters, key: ParamKey, value: f64) -> LoanParameters {
    match key {
        ParamKey::HomePrice => params.home_price = value,
        ParamKey::DownPayment => params.down_payment = value,
        ParamKey::AnnualInterestRate => params.annual_interest_rate = value,
        ParamKey::LoanTermYears => params.loan_term_years = value,
        ParamKey::AnnualPropertyTax => params.annual_property_tax = value,
        ParamKey::AnnualInsurance => params.annual_insurance = value,
    }
    params
}

pub struct App {
    pub params: LoanParameters,
    pub selected: usize,
    /// Numeric-entry buffer for the selected control; `Some` while editing.
    pub entry: Option<String>,
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            params: LoanParameters::default(),
            selected: 0,
            entry: None,
            status: None,
        }
    }
}

impl App {
    pub fn selected_key(&self) -> ParamKey {
        PARAM_KEYS[self.selected]
    }

    pub fn set_parameter(&mut self, key: ParamKey, value: f64) {
        self.params = apply(self.params, key, value);
    }

    pub fn breakdown(&self) -> PaymentBreakdown {
        monthly_breakdown(&self.params)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % PARAM_KEYS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + PARAM_KEYS.len() - 1) % PARAM_KEYS.len();
    }

    /// Move the selected control by `steps` steps, clamped to its bounds.
    pub fn nudge(&mut self, steps: f64) {
        let key = self.selected_key();
        let current = key.get(&self.params);
        let next = current + steps * key.step();
        let next = clamp_to_bounds(next, key.min(), key.max(&self.params));
        self.set_parameter(key, next);
    }

    pub fn begin_entry(&mut self) {
        self.entry = Some(String::new());
        self.status = None;
    }

    pub fn push_entry(&mut self, c: char) {
        if let Some(buffer) = &mut self.entry {
            buffer.push(c);
        }
    }

    pub fn pop_entry(&mut self) {
        if let Some(buffer) = &mut self.entry {
            buffer.pop();
        }
    }

    pub fn cancel_entry(&mut self) {
        self.entry = None;
    }

    /// Commit the entry buffer. An empty buffer is a cancel; unparseable
    /// text coerces to NaN and propagates into the arithmetic; parseable
    /// values are clamped to the control's bounds the way a range control
    /// clamps assignment.
    pub fn commit_entry(&mut self) {
        let Some(buffer) = self.entry.take() else {
            return;
        };
        if buffer.is_empty() {
            return;
        }
        let key = self.selected_key();
        let value = buffer.parse::<f64>().unwrap_or(f64::NAN);
        let value = clamp_to_bounds(value, key.min(), key.max(&self.params));
        self.set_parameter(key, value);
    }
}
