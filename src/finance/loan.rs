use super::revenue::MONTHS_PER_YEAR;
use super::{FinanceError, FinanceResult};

/// 고정 상환액 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanPayment {
    /// 연간 상환액 [₹/year]
    pub annual: f64,
    /// 월 상환액 [₹/month] (연간 상환액 / 12)
    pub monthly: f64,
}

/// 상환 스케줄의 한 해.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    /// 1부터 시작하는 연차
    pub year: u32,
    pub opening_balance: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// 총 사업비 = MW 수 × MW당 단가.
pub fn total_cost(total_mw: u32, cost_per_mw: f64) -> f64 {
    f64::from(total_mw) * cost_per_mw
}

/// 대출 원금 = 총 사업비 × 부채비율(%).
pub fn loan_amount(total_cost: f64, debt_percent: f64) -> f64 {
    total_cost * (debt_percent / 100.0)
}

/// 원리금 균등 상환 기준 연간 상환액을 계산한다.
///
/// 이자율이 0이면 원금을 상환기간으로 나눈 정액 상환으로 처리한다.
/// 상환기간 0년은 정의되지 않으므로 `InvalidInput`을 반환한다.
pub fn annual_loan_payment(
    loan_amount: f64,
    interest_rate_percent: f64,
    loan_term_years: u32,
) -> FinanceResult<f64> {
    if loan_term_years == 0 {
        return Err(FinanceError::InvalidInput(
            "상환기간은 1년 이상이어야 합니다".into(),
        ));
    }
    let r = interest_rate_percent / 100.0;
    let n = f64::from(loan_term_years);
    if r > 0.0 {
        Ok((loan_amount * r) / (1.0 - (1.0 + r).powf(-n)))
    } else {
        Ok(loan_amount / n)
    }
}

/// 연간/월간 상환액을 함께 계산한다.
pub fn loan_payment(
    loan_amount: f64,
    interest_rate_percent: f64,
    loan_term_years: u32,
) -> FinanceResult<LoanPayment> {
    let annual = annual_loan_payment(loan_amount, interest_rate_percent, loan_term_years)?;
    Ok(LoanPayment {
        annual,
        monthly: annual / MONTHS_PER_YEAR,
    })
}

/// 연 단위 상환 스케줄(이자/원금/잔액)을 만든다.
pub fn amortization_schedule(
    loan_amount: f64,
    interest_rate_percent: f64,
    loan_term_years: u32,
) -> FinanceResult<Vec<AmortizationRow>> {
    let payment = annual_loan_payment(loan_amount, interest_rate_percent, loan_term_years)?;
    let r = (interest_rate_percent / 100.0).max(0.0);
    let mut balance = loan_amount;
    let mut rows = Vec::with_capacity(loan_term_years as usize);
    for year in 1..=loan_term_years {
        let interest = balance * r;
        // 마지막 해는 부동소수 오차를 잔액에 남기지 않는다
        let principal = if year == loan_term_years {
            balance
        } else {
            payment - interest
        };
        let closing = balance - principal;
        rows.push(AmortizationRow {
            year,
            opening_balance: balance,
            interest,
            principal,
            closing_balance: closing,
        });
        balance = closing;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_straight_line() {
        let p = annual_loan_payment(1_000_000.0, 0.0, 10).unwrap();
        assert!((p - 100_000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_term_fails_fast() {
        let err = annual_loan_payment(1_000_000.0, 10.0, 0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput(_)));
    }

    #[test]
    fn one_year_loan_repays_principal_plus_interest() {
        let p = annual_loan_payment(1_000_000.0, 10.0, 1).unwrap();
        assert!((p - 1_100_000.0).abs() < 1e-3);
    }

    #[test]
    fn monthly_is_a_twelfth_of_annual() {
        let lp = loan_payment(224_000_000.0, 10.0, 25).unwrap();
        assert!((lp.monthly * 12.0 - lp.annual).abs() < 1e-6);
    }

    #[test]
    fn schedule_closes_at_zero() {
        let rows = amortization_schedule(224_000_000.0, 10.0, 25).unwrap();
        assert_eq!(rows.len(), 25);
        let last = rows.last().unwrap();
        assert!(last.closing_balance.abs() < 1e-6);
        let payment = annual_loan_payment(224_000_000.0, 10.0, 25).unwrap();
        for row in &rows {
            assert!(
                (row.interest + row.principal - payment).abs() < 1.0,
                "year {} paid {}",
                row.year,
                row.interest + row.principal
            );
        }
    }

    #[test]
    fn zero_rate_schedule_has_no_interest() {
        let rows = amortization_schedule(500_000.0, 0.0, 5).unwrap();
        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert!(rows.iter().all(|r| (r.principal - 100_000.0).abs() < 1e-9));
    }
}
