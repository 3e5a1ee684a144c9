/// MW당 필요 부지 면적 [acre]
pub const ACRES_PER_MW: f64 = 4.0;
/// 부지비 차트의 최대 설비 용량 [MW]
pub const LAND_SERIES_MAX_MW: u32 = 30;

/// 부지비를 반영한 사업비.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandCosts {
    /// 현재 설비 용량의 부지비 [₹]
    pub land_cost: f64,
    /// 총 사업비 + 부지비 [₹]
    pub land_factored_cost: f64,
    /// 부지비 포함 사업비 - 대출 원금 [₹]
    pub after_loan_cost: f64,
}

/// 설비 용량 `mw`의 부지비.
pub fn land_cost(mw: u32, cost_per_acre: f64) -> f64 {
    f64::from(mw) * ACRES_PER_MW * cost_per_acre
}

pub fn land_costs(
    total_cost: f64,
    loan_amount: f64,
    cost_per_acre: f64,
    total_mw: u32,
) -> LandCosts {
    let land_cost = ACRES_PER_MW * cost_per_acre * f64::from(total_mw);
    let land_factored_cost = total_cost + land_cost;
    LandCosts {
        land_cost,
        land_factored_cost,
        after_loan_cost: land_factored_cost - loan_amount,
    }
}

/// 1..=30 MW 구간의 (MW, 부지비) 를 지연 생성하는 반복자.
///
/// `Clone`으로 처음부터 다시 순회할 수 있다.
#[derive(Debug, Clone)]
pub struct LandCostSeries {
    cost_per_acre: f64,
    next_mw: u32,
    max_mw: u32,
}

impl LandCostSeries {
    pub fn new(cost_per_acre: f64) -> Self {
        Self::up_to(cost_per_acre, LAND_SERIES_MAX_MW)
    }

    pub fn up_to(cost_per_acre: f64, max_mw: u32) -> Self {
        Self {
            cost_per_acre,
            next_mw: 1,
            max_mw,
        }
    }
}

impl Iterator for LandCostSeries {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_mw > self.max_mw {
            return None;
        }
        let mw = self.next_mw;
        self.next_mw += 1;
        Some((mw, land_cost(mw, self.cost_per_acre)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_mw + 1).saturating_sub(self.next_mw) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LandCostSeries {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_thirty_points_and_restarts() {
        let series = LandCostSeries::new(1_500_000.0);
        assert_eq!(series.len(), 30);
        let first: Vec<_> = series.clone().collect();
        let again: Vec<_> = series.collect();
        assert_eq!(first, again);
        assert_eq!(first[0], (1, 6_000_000.0));
        assert_eq!(first[29], (30, 180_000_000.0));
    }

    #[test]
    fn land_factored_and_after_loan() {
        let l = land_costs(280_000_000.0, 224_000_000.0, 1_500_000.0, 8);
        assert_eq!(l.land_cost, 48_000_000.0);
        assert_eq!(l.land_factored_cost, 328_000_000.0);
        assert_eq!(l.after_loan_cost, 104_000_000.0);
    }
}
