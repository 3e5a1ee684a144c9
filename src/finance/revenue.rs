/// 연간 일수
pub const DAYS_PER_YEAR: f64 = 365.0;
/// 연간 개월 수
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 매출 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revenue {
    /// 일 매출 [₹/day]
    pub per_day: f64,
    /// 월 매출 [₹/month] (연 매출 / 12)
    pub per_month: f64,
    /// 연 매출 [₹/year]
    pub per_year: f64,
}

/// 운영비 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingCost {
    /// 월 운영비 [₹/month]
    pub per_month: f64,
    /// 연 운영비 [₹/year]
    pub per_year: f64,
}

/// MW당 일 발전량, 판매 단가, 설비 용량으로 매출을 계산한다.
pub fn revenue(avg_production_per_mw_day: f64, rate_per_unit: f64, total_mw: u32) -> Revenue {
    let per_day = avg_production_per_mw_day * rate_per_unit * f64::from(total_mw);
    let per_year = per_day * DAYS_PER_YEAR;
    Revenue {
        per_day,
        per_month: per_year / MONTHS_PER_YEAR,
        per_year,
    }
}

/// 인건비와 전기료로 월/연 운영비를 계산한다.
pub fn working_cost(labor_cost_month: f64, electricity_cost_month: f64) -> WorkingCost {
    let per_month = labor_cost_month + electricity_cost_month;
    WorkingCost {
        per_month,
        per_year: per_month * MONTHS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_revenue_is_a_twelfth_of_annual() {
        let r = revenue(5500.0, 3.11, 8);
        assert!((r.per_month * 12.0 - r.per_year).abs() < 1e-6);
    }

    #[test]
    fn zero_production_means_zero_revenue() {
        let r = revenue(0.0, 3.11, 8);
        assert_eq!(r.per_day, 0.0);
        assert_eq!(r.per_year, 0.0);
    }

    #[test]
    fn working_cost_sums_labor_and_electricity() {
        let w = working_cost(250_000.0, 20_000.0);
        assert_eq!(w.per_month, 270_000.0);
        assert_eq!(w.per_year, 3_240_000.0);
    }
}
