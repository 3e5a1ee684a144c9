use super::loan::LoanPayment;
use super::revenue::{Revenue, WorkingCost};

/// 대출 상환 후 순이익.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetIncome {
    /// 월 순이익 [₹/month]
    pub monthly: f64,
    /// 연 순이익 [₹/year]
    pub annual: f64,
}

/// 매출에서 운영비와 대출 상환액을 뺀 순이익.
pub fn net_income(revenue: &Revenue, working_cost: &WorkingCost, loan: &LoanPayment) -> NetIncome {
    NetIncome {
        monthly: revenue.per_month - (working_cost.per_month + loan.monthly),
        annual: revenue.per_year - (working_cost.per_year + loan.annual),
    }
}

/// ROI(%) = 연 순이익 / 총 사업비 × 100. 총 사업비가 0이면 0.
pub fn roi_percent(annual_income: f64, total_cost: f64) -> f64 {
    if total_cost != 0.0 {
        (annual_income / total_cost) * 100.0
    } else {
        0.0
    }
}

/// `[-총사업비, 연순이익 × n]` 길이 n+1 현금흐름.
pub fn cash_flows(total_cost: f64, annual_income: f64, years: u32) -> Vec<f64> {
    std::iter::once(-total_cost)
        .chain(std::iter::repeat(annual_income).take(years as usize))
        .collect()
}

/// 누적합.
pub fn cumulative(flows: &[f64]) -> Vec<f64> {
    flows
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// 누적 현금흐름이 처음 0 이상이 되는 연차. 0년차는 초기 투자 시점이라 제외한다.
pub fn payback_year(cumulative: &[f64]) -> Option<u32> {
    cumulative
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, v)| **v >= 0.0)
        .map(|(i, _)| i as u32)
}
