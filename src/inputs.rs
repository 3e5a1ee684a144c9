use log::warn;
use serde::{Deserialize, Serialize};

use crate::i18n::keys;

/// 대시보드 입력값 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantInputs {
    /// MW당 일 평균 발전량 [kWh/day/MW]
    pub avg_production_per_mw_day: f64,
    /// 판매 단가 [₹/kWh]
    pub rate_per_unit: f64,
    /// 설비 용량 [MW]
    pub total_mw: u32,
    /// 월 인건비 [₹]
    pub labor_cost_month: f64,
    /// 월 전기료 [₹]
    pub electricity_cost_month: f64,
    /// MW당 건설 단가 [₹]
    pub cost_per_mw: f64,
    /// 총 사업비 중 부채 비율 [%]
    pub debt_percent: f64,
    /// 연 이자율 [%]
    pub interest_rate_percent: f64,
    /// 상환기간 [년]
    pub loan_term_years: u32,
    /// 에이커당 부지비 [₹]
    pub cost_per_acre: f64,
}

impl Default for PlantInputs {
    fn default() -> Self {
        Self {
            avg_production_per_mw_day: 5500.0,
            rate_per_unit: 3.11,
            total_mw: 8,
            labor_cost_month: 250_000.0,
            electricity_cost_month: 20_000.0,
            cost_per_mw: 35_000_000.0,
            debt_percent: 80.0,
            interest_rate_percent: 10.0,
            loan_term_years: 25,
            cost_per_acre: 1_500_000.0,
        }
    }
}

/// 입력 항목 식별자. 슬라이더/CLI 메뉴가 같은 순서로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    AvgProduction,
    RatePerUnit,
    TotalMw,
    LaborCost,
    ElectricityCost,
    CostPerMw,
    DebtPercent,
    InterestRate,
    LoanTerm,
    CostPerAcre,
}

impl InputField {
    pub const ALL: [InputField; 10] = [
        InputField::AvgProduction,
        InputField::RatePerUnit,
        InputField::TotalMw,
        InputField::LaborCost,
        InputField::ElectricityCost,
        InputField::CostPerMw,
        InputField::DebtPercent,
        InputField::InterestRate,
        InputField::LoanTerm,
        InputField::CostPerAcre,
    ];

    /// 정수 입력 항목 여부
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            InputField::TotalMw | InputField::LoanTerm | InputField::DebtPercent
        )
    }

    /// 번역 키
    pub fn label_key(self) -> &'static str {
        match self {
            InputField::AvgProduction => keys::INPUT_AVG_PRODUCTION,
            InputField::RatePerUnit => keys::INPUT_RATE_PER_UNIT,
            InputField::TotalMw => keys::INPUT_TOTAL_MW,
            InputField::LaborCost => keys::INPUT_LABOR_COST,
            InputField::ElectricityCost => keys::INPUT_ELECTRICITY_COST,
            InputField::CostPerMw => keys::INPUT_COST_PER_MW,
            InputField::DebtPercent => keys::INPUT_DEBT_PERCENT,
            InputField::InterestRate => keys::INPUT_INTEREST_RATE,
            InputField::LoanTerm => keys::INPUT_LOAN_TERM,
            InputField::CostPerAcre => keys::INPUT_COST_PER_ACRE,
        }
    }

    /// 슬라이더 범위와 간격.
    pub fn bounds(self) -> InputBounds {
        let b = |min, max, step| InputBounds { min, max, step };
        match self {
            InputField::AvgProduction => b(0.0, 7000.0, 10.0),
            InputField::RatePerUnit => b(2.0, 5.0, 0.01),
            InputField::TotalMw => b(1.0, 25.0, 1.0),
            InputField::LaborCost => b(100_000.0, 1_000_000.0, 1000.0),
            InputField::ElectricityCost => b(5000.0, 50_000.0, 500.0),
            InputField::CostPerMw => b(35_000_000.0, 50_000_000.0, 1_000_000.0),
            InputField::DebtPercent => b(0.0, 100.0, 1.0),
            InputField::InterestRate => b(1.0, 20.0, 0.1),
            InputField::LoanTerm => b(1.0, 30.0, 1.0),
            InputField::CostPerAcre => b(1_500_000.0, 4_000_000.0, 50_000.0),
        }
    }
}

/// 입력값의 허용 범위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputBounds {
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_nan() {
            return self.min;
        }
        v.clamp(self.min, self.max)
    }
}

impl PlantInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::AvgProduction => self.avg_production_per_mw_day,
            InputField::RatePerUnit => self.rate_per_unit,
            InputField::TotalMw => f64::from(self.total_mw),
            InputField::LaborCost => self.labor_cost_month,
            InputField::ElectricityCost => self.electricity_cost_month,
            InputField::CostPerMw => self.cost_per_mw,
            InputField::DebtPercent => self.debt_percent,
            InputField::InterestRate => self.interest_rate_percent,
            InputField::LoanTerm => f64::from(self.loan_term_years),
            InputField::CostPerAcre => self.cost_per_acre,
        }
    }

    /// 값을 범위 안으로 맞춰 설정한다. 정수 항목은 반올림한다.
    pub fn set(&mut self, field: InputField, value: f64) {
        let bounds = field.bounds();
        let mut v = bounds.clamp(value);
        if field.is_integer() {
            v = v.round();
        }
        if v != value {
            warn!("{field:?} 값 {value} 을(를) {v} (으)로 조정");
        }
        match field {
            InputField::AvgProduction => self.avg_production_per_mw_day = v,
            InputField::RatePerUnit => self.rate_per_unit = v,
            InputField::TotalMw => self.total_mw = v as u32,
            InputField::LaborCost => self.labor_cost_month = v,
            InputField::ElectricityCost => self.electricity_cost_month = v,
            InputField::CostPerMw => self.cost_per_mw = v,
            InputField::DebtPercent => self.debt_percent = v,
            InputField::InterestRate => self.interest_rate_percent = v,
            InputField::LoanTerm => self.loan_term_years = v as u32,
            InputField::CostPerAcre => self.cost_per_acre = v,
        }
    }

    /// 모든 항목을 슬라이더 범위 안으로 맞춘 사본.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for field in InputField::ALL {
            out.set(field, self.get(field));
        }
        out
    }
}
