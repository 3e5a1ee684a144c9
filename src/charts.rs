//! 차트용 (x, y) 시리즈.

use crate::finance::{LandCostSeries, PlantMetrics};

/// 연 매출 대 연간 총비용 막대 두 개.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueVsCost {
    pub annual_revenue: f64,
    /// 연 운영비 + 연 대출 상환액
    pub annual_costs: f64,
}

pub fn revenue_vs_cost(metrics: &PlantMetrics) -> RevenueVsCost {
    RevenueVsCost {
        annual_revenue: metrics.revenue.per_year,
        annual_costs: metrics.total_annual_costs,
    }
}

/// 연차별 누적 현금흐름 (0..=n년).
pub fn cumulative_cash_flow_points(metrics: &PlantMetrics) -> Vec<(f64, f64)> {
    metrics
        .cumulative_cash_flow
        .iter()
        .enumerate()
        .map(|(year, v)| (year as f64, *v))
        .collect()
}

/// 설비 용량별 부지비 (1..=30 MW).
pub fn land_cost_points(cost_per_acre: f64) -> Vec<(f64, f64)> {
    LandCostSeries::new(cost_per_acre)
        .map(|(mw, cost)| (f64::from(mw), cost))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::compute;
    use crate::inputs::PlantInputs;

    #[test]
    fn cumulative_points_are_indexed_by_year() {
        let m = compute(&PlantInputs::default()).unwrap();
        let pts = cumulative_cash_flow_points(&m);
        assert_eq!(pts.len(), 26);
        assert_eq!(pts[0], (0.0, -m.total_cost));
        assert_eq!(pts[25].0, 25.0);
    }

    #[test]
    fn land_points_span_thirty_mw() {
        let pts = land_cost_points(2_000_000.0);
        assert_eq!(pts.len(), 30);
        assert_eq!(pts[9], (10.0, 80_000_000.0));
    }

    #[test]
    fn bars_use_total_annual_costs() {
        let m = compute(&PlantInputs::default()).unwrap();
        let bars = revenue_vs_cost(&m);
        assert_eq!(bars.annual_revenue, m.revenue.per_year);
        assert_eq!(bars.annual_costs, m.working_cost.per_year + m.loan.annual);
    }
}
