//! 태양광 발전소 투자 재무 모델.
//!
//! 모든 함수는 순수 함수이며, `compute`가 입력 스냅샷 하나로 전체 지표를 다시 계산한다.

pub mod land;
pub mod loan;
pub mod returns;
pub mod revenue;

pub use land::*;
pub use loan::*;
pub use returns::*;
pub use revenue::*;

use log::debug;
use thiserror::Error;

use crate::inputs::PlantInputs;

/// 재무 계산 중 발생 가능한 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinanceError {
    /// 호출자 전제조건 위반 (예: 상환기간 0년)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

pub type FinanceResult<T> = Result<T, FinanceError>;

/// 한 번의 계산 패스에서 도출되는 모든 지표.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantMetrics {
    pub revenue: Revenue,
    pub working_cost: WorkingCost,
    /// 총 사업비 [₹]
    pub total_cost: f64,
    /// 대출 원금 [₹]
    pub loan_amount: f64,
    pub loan: LoanPayment,
    pub income: NetIncome,
    /// 연간 순이익 / 총 사업비 [%]
    pub roi_percent: f64,
    /// 연차별 현금흐름. 0년차는 -총사업비, 이후 연간 순이익.
    pub cash_flows: Vec<f64>,
    pub cumulative_cash_flow: Vec<f64>,
    /// 누적 현금흐름이 처음 0 이상이 되는 연차
    pub payback_year: Option<u32>,
    /// 연간 운영비 + 연간 대출 상환액
    pub total_annual_costs: f64,
    pub land: LandCosts,
}

/// 입력 스냅샷으로부터 모든 지표를 계산한다.
pub fn compute(inputs: &PlantInputs) -> FinanceResult<PlantMetrics> {
    let revenue = revenue(
        inputs.avg_production_per_mw_day,
        inputs.rate_per_unit,
        inputs.total_mw,
    );
    let working_cost = working_cost(inputs.labor_cost_month, inputs.electricity_cost_month);

    let total_cost = total_cost(inputs.total_mw, inputs.cost_per_mw);
    let loan_amount = loan_amount(total_cost, inputs.debt_percent);
    let loan = loan_payment(
        loan_amount,
        inputs.interest_rate_percent,
        inputs.loan_term_years,
    )?;

    let income = net_income(&revenue, &working_cost, &loan);
    let roi_percent = roi_percent(income.annual, total_cost);
    let cash_flows = cash_flows(total_cost, income.annual, inputs.loan_term_years);
    let cumulative_cash_flow = cumulative(&cash_flows);
    let payback_year = payback_year(&cumulative_cash_flow);
    let land = land_costs(total_cost, loan_amount, inputs.cost_per_acre, inputs.total_mw);

    debug!(
        "recomputed: revenue/yr={:.0} annual_payment={:.0} roi={:.2}%",
        revenue.per_year, loan.annual, roi_percent
    );

    Ok(PlantMetrics {
        total_annual_costs: working_cost.per_year + loan.annual,
        revenue,
        working_cost,
        total_cost,
        loan_amount,
        loan,
        income,
        roi_percent,
        cash_flows,
        cumulative_cash_flow,
        payback_year,
        land,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_produce_consistent_metrics() {
        let m = compute(&PlantInputs::default()).unwrap();
        assert_eq!(m.total_cost, 280_000_000.0);
        assert_eq!(m.loan_amount, 224_000_000.0);
        assert_eq!(m.cash_flows.len(), 26);
        assert_eq!(m.cumulative_cash_flow.len(), 26);
        assert!((m.total_annual_costs - (m.working_cost.per_year + m.loan.annual)).abs() < 1e-6);
    }

    #[test]
    fn zero_term_is_rejected() {
        let inputs = PlantInputs {
            loan_term_years: 0,
            ..PlantInputs::default()
        };
        assert!(matches!(compute(&inputs), Err(FinanceError::InvalidInput(_))));
    }
}
