use serde::Serialize;

/// Monthly installment quote for a home loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmiQuote {
    pub monthly_installment: u64,
    pub total_payment: u64,
    pub total_interest: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    #[error("loan tenure must be at least one year")]
    InvalidTenure,
    #[error("interest rate must be a non-negative percentage")]
    InvalidRate,
}

/// Reducing-balance EMI: `P·r·(1+r)^n / ((1+r)^n − 1)` with monthly rate
/// `r` and `n` monthly installments, rounded to whole rupees. A zero rate
/// degrades to straight-line repayment instead of dividing by zero.
pub fn emi_quote(
    principal: u64,
    annual_rate_pct: f64,
    tenure_years: u32,
) -> Result<EmiQuote, FinanceError> {
    if tenure_years == 0 {
        return Err(FinanceError::InvalidTenure);
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(FinanceError::InvalidRate);
    }

    let installments = u64::from(tenure_years) * 12;
    let monthly_rate = annual_rate_pct / 12.0 / 100.0;

    let monthly_installment = if monthly_rate == 0.0 {
        (principal as f64 / installments as f64).round() as u64
    } else {
        let growth = (1.0 + monthly_rate).powi(installments as i32);
        (principal as f64 * monthly_rate * growth / (growth - 1.0)).round() as u64
    };

    let total_payment = monthly_installment * installments;
    let total_interest = total_payment.saturating_sub(principal);

    Ok(EmiQuote {
        monthly_installment,
        total_payment,
        total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_the_standard_reducing_balance_installment() {
        // ₹50 L at 8.5% over 20 years.
        let quote = emi_quote(5_000_000, 8.5, 20).expect("quote");

        assert_eq!(quote.monthly_installment, 43_391);
        assert_eq!(quote.total_payment, 43_391 * 240);
        assert_eq!(quote.total_interest, quote.total_payment - 5_000_000);
    }

    #[test]
    fn zero_rate_degrades_to_straight_line() {
        let quote = emi_quote(1_200_000, 0.0, 10).expect("quote");

        assert_eq!(quote.monthly_installment, 10_000);
        assert_eq!(quote.total_payment, 1_200_000);
        assert_eq!(quote.total_interest, 0);
    }

    #[test]
    fn zero_tenure_is_rejected() {
        let error = emi_quote(5_000_000, 8.5, 0).expect_err("expected tenure error");
        match error {
            FinanceError::InvalidTenure => {}
            other => panic!("expected tenure error, got {other:?}"),
        }
    }

    #[test]
    fn negative_and_non_finite_rates_are_rejected() {
        assert!(matches!(
            emi_quote(5_000_000, -1.0, 20),
            Err(FinanceError::InvalidRate)
        ));
        assert!(matches!(
            emi_quote(5_000_000, f64::NAN, 20),
            Err(FinanceError::InvalidRate)
        ));
    }
}
