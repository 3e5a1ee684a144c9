//! 재무 모델 기준값 회귀 테스트. 기본 대시보드 입력(8 MW, 3.11 ₹/kWh, 부채 80%, 10%, 25년)을 사용한다.
use solar_plant_dashboard::finance::{
    annual_loan_payment, compute, loan_amount, revenue, roi_percent, total_cost, FinanceError,
};
use proptest::prelude::*;
use solar_plant_dashboard::inputs::{InputField, PlantInputs};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn revenue_reference_point() {
    let r = revenue(5500.0, 3.11, 8);
    assert_close("per_day", r.per_day, 136_840.0, 1e-12);
    assert_close("per_year", r.per_year, 49_946_600.0, 1e-12);
    assert_close("per_month", r.per_month, 4_162_216.666_666_666_5, 1e-12);
}

#[test]
fn capital_reference_point() {
    let total = total_cost(8, 35_000_000.0);
    assert_eq!(total, 280_000_000.0);
    assert_eq!(loan_amount(total, 80.0), 224_000_000.0);
}

#[test]
fn annuity_reference_point() {
    // 연금현가계수 (1 - 1.1^-25) / 0.1 ≈ 9.077
    let payment = annual_loan_payment(224_000_000.0, 10.0, 25).unwrap();
    assert_close("annual_payment", payment, 24_680_000.0, 0.01);
    assert_close("annual_payment exact", payment, 24_677_648.170_564_66, 1e-9);
}

#[test]
fn cumulative_sum_identity() {
    let inputs = PlantInputs::default();
    let m = compute(&inputs).unwrap();
    let n = f64::from(inputs.loan_term_years);
    let expected = -m.total_cost + n * m.income.annual;
    let last = *m.cumulative_cash_flow.last().unwrap();
    assert_close("cumulative[-1]", last, expected, 1e-9);
    assert_eq!(m.cash_flows[0], -m.total_cost);
    assert!(m.cash_flows[1..].iter().all(|v| *v == m.income.annual));
}

#[test]
fn net_income_and_roi_follow_from_components() {
    let m = compute(&PlantInputs::default()).unwrap();
    assert_close(
        "annual_income",
        m.income.annual,
        m.revenue.per_year - (m.working_cost.per_year + m.loan.annual),
        1e-12,
    );
    assert_close(
        "monthly_income",
        m.income.monthly,
        m.revenue.per_month - (m.working_cost.per_month + m.loan.monthly),
        1e-12,
    );
    assert_close("roi", m.roi_percent, m.income.annual / m.total_cost * 100.0, 1e-12);
}

#[test]
fn roi_is_zero_without_project_cost() {
    assert_eq!(roi_percent(21_000_000.0, 0.0), 0.0);
    let inputs = PlantInputs {
        total_mw: 0,
        ..PlantInputs::default()
    };
    let m = compute(&inputs).unwrap();
    assert_eq!(m.total_cost, 0.0);
    assert_eq!(m.roi_percent, 0.0);
}

#[test]
fn zero_interest_uses_straight_line() {
    let inputs = PlantInputs {
        interest_rate_percent: 0.0,
        loan_term_years: 20,
        ..PlantInputs::default()
    };
    let m = compute(&inputs).unwrap();
    assert_close("annual", m.loan.annual, 224_000_000.0 / 20.0, 1e-12);
}

#[test]
fn zero_term_is_invalid_input() {
    let inputs = PlantInputs {
        loan_term_years: 0,
        ..PlantInputs::default()
    };
    assert!(matches!(compute(&inputs), Err(FinanceError::InvalidInput(_))));
}

#[test]
fn land_costs_for_default_plant() {
    let m = compute(&PlantInputs::default()).unwrap();
    assert_eq!(m.land.land_cost, 48_000_000.0);
    assert_eq!(m.land.land_factored_cost, 328_000_000.0);
    assert_eq!(m.land.after_loan_cost, 104_000_000.0);
}

#[test]
fn default_inputs_pay_back_in_year_thirteen() {
    // 연 순이익 ≈ ₹2,20,28,952 → 12년 누적 ₹26.4 Cr, 13년 누적 ₹28.6 Cr
    let m = compute(&PlantInputs::default()).unwrap();
    assert!(m.income.annual > 0.0);
    assert_eq!(m.payback_year, Some(13));
}

#[test]
fn payback_is_never_reached_when_losing_money() {
    let inputs = PlantInputs {
        avg_production_per_mw_day: 0.0,
        ..PlantInputs::default()
    };
    let m = compute(&inputs).unwrap();
    assert!(m.income.annual < 0.0);
    assert_eq!(m.payback_year, None);
}

#[test]
fn payback_year_matches_first_non_negative_cumulative() {
    let inputs = PlantInputs {
        avg_production_per_mw_day: 7000.0,
        rate_per_unit: 5.0,
        debt_percent: 0.0,
        ..PlantInputs::default()
    };
    let m = compute(&inputs).unwrap();
    let year = m.payback_year.expect("payback within term") as usize;
    assert!(m.cumulative_cash_flow[year] >= 0.0);
    assert!(m.cumulative_cash_flow[year - 1] < 0.0);
}

/// 각 입력 항목을 슬라이더 범위 안의 비율(0~1)로 뽑는다.
fn inputs_from_fractions(fractions: &[f64]) -> PlantInputs {
    let mut inputs = PlantInputs::default();
    for (field, t) in InputField::ALL.iter().zip(fractions) {
        let b = field.bounds();
        inputs.set(*field, b.min + t * (b.max - b.min));
    }
    inputs
}

proptest! {
    #[test]
    fn cumulative_identity_holds_across_slider_ranges(
        fractions in prop::collection::vec(0.0f64..=1.0, InputField::ALL.len())
    ) {
        let inputs = inputs_from_fractions(&fractions);
        let m = compute(&inputs).unwrap();
        let n = inputs.loan_term_years as usize;

        prop_assert_eq!(m.cash_flows.len(), n + 1);
        prop_assert_eq!(m.cumulative_cash_flow.len(), n + 1);

        let expected = -m.total_cost + n as f64 * m.income.annual;
        let last = *m.cumulative_cash_flow.last().unwrap();
        let scale = m.total_cost.abs().max((n as f64 * m.income.annual).abs()).max(1.0);
        prop_assert!((last - expected).abs() <= 1e-9 * scale, "{} vs {}", last, expected);

        let loan = m.total_cost * inputs.debt_percent / 100.0;
        prop_assert!((m.loan_amount - loan).abs() <= 1e-9 * m.total_cost.max(1.0));
        prop_assert!(m.loan_amount <= m.total_cost);
    }
}
