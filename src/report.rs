//! 화면 표시용 지표 묶음. CLI와 GUI가 같은 섹션 구성을 공유한다.

use crate::currency::{format_inr, format_percent};
use crate::finance::PlantMetrics;
use crate::i18n::{keys, Translator};
use crate::inputs::PlantInputs;

/// 표시 값. 언어에 따라 달라지는 부분만 렌더링 시점에 번역한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportValue {
    Currency(f64),
    Percent { value: f64, decimals: usize },
    /// 회수 연차. `None`이면 상환기간 내 회수 불가.
    Years(Option<u32>),
}

impl ReportValue {
    pub fn render(&self, tr: &Translator) -> String {
        match *self {
            ReportValue::Currency(v) => format_inr(v),
            ReportValue::Percent { value, decimals } => format_percent(value, decimals),
            ReportValue::Years(Some(n)) => format!("{n} {}", tr.t(keys::UNIT_YEARS)),
            ReportValue::Years(None) => tr.t(keys::PAYBACK_NOT_REACHED).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label_key: &'static str,
    pub value: ReportValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title_key: &'static str,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub sections: Vec<ReportSection>,
}

fn row(label_key: &'static str, value: ReportValue) -> ReportRow {
    ReportRow { label_key, value }
}

fn section(title_key: &'static str, rows: Vec<ReportRow>) -> ReportSection {
    ReportSection { title_key, rows }
}

/// 지표를 대시보드 섹션 순서대로 배치한다.
pub fn build(inputs: &PlantInputs, m: &PlantMetrics) -> DashboardReport {
    use ReportValue::*;
    DashboardReport {
        sections: vec![
            section(
                keys::SECTION_REVENUE,
                vec![
                    row(keys::METRIC_MONTHLY_REVENUE, Currency(m.revenue.per_month)),
                    row(keys::METRIC_ANNUAL_REVENUE, Currency(m.revenue.per_year)),
                ],
            ),
            section(
                keys::SECTION_WORKING_COST,
                vec![
                    row(keys::METRIC_MONTHLY_WORKING_COST, Currency(m.working_cost.per_month)),
                    row(keys::METRIC_ANNUAL_WORKING_COST, Currency(m.working_cost.per_year)),
                ],
            ),
            section(
                keys::SECTION_CAPITAL,
                vec![
                    row(keys::METRIC_TOTAL_COST, Currency(m.total_cost)),
                    row(keys::METRIC_LOAN_AMOUNT, Currency(m.loan_amount)),
                    row(
                        keys::METRIC_DEBT_PERCENT,
                        Percent {
                            value: inputs.debt_percent,
                            decimals: 0,
                        },
                    ),
                    row(keys::METRIC_ANNUAL_LOAN_PAYMENT, Currency(m.loan.annual)),
                    row(keys::METRIC_MONTHLY_LOAN_PAYMENT, Currency(m.loan.monthly)),
                ],
            ),
            section(
                keys::SECTION_NET_INCOME,
                vec![
                    row(keys::METRIC_MONTHLY_NET_INCOME, Currency(m.income.monthly)),
                    row(keys::METRIC_ANNUAL_NET_INCOME, Currency(m.income.annual)),
                ],
            ),
            section(
                keys::SECTION_RETURNS,
                vec![
                    row(
                        keys::METRIC_ROI,
                        Percent {
                            value: m.roi_percent,
                            decimals: 2,
                        },
                    ),
                    row(keys::METRIC_PAYBACK_YEAR, Years(m.payback_year)),
                ],
            ),
            section(
                keys::SECTION_LAND,
                vec![
                    row(keys::METRIC_LAND_COST, Currency(m.land.land_cost)),
                    row(keys::METRIC_LAND_FACTORED_COST, Currency(m.land.land_factored_cost)),
                    row(keys::METRIC_AFTER_LOAN_COST, Currency(m.land.after_loan_cost)),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::compute;

    #[test]
    fn every_currency_row_is_formatted_with_glyph() {
        let inputs = PlantInputs::default();
        let m = compute(&inputs).unwrap();
        let report = build(&inputs, &m);
        let tr = Translator::new("en");
        for s in &report.sections {
            for r in &s.rows {
                if let ReportValue::Currency(_) = r.value {
                    assert!(r.value.render(&tr).contains('₹'), "{}", r.label_key);
                }
            }
        }
    }

    #[test]
    fn capital_section_shows_debt_percent() {
        let inputs = PlantInputs::default();
        let m = compute(&inputs).unwrap();
        let report = build(&inputs, &m);
        let capital = &report.sections[2];
        assert_eq!(capital.title_key, keys::SECTION_CAPITAL);
        let tr = Translator::new("en");
        assert_eq!(capital.rows[2].value.render(&tr), "80%");
        assert_eq!(capital.rows[0].value.render(&tr), "₹28,00,00,000");
    }

    #[test]
    fn payback_renders_localized() {
        let en = Translator::new("en");
        assert_eq!(ReportValue::Years(Some(7)).render(&en), "7 years");
        assert_eq!(
            ReportValue::Years(None).render(&en),
            "Not within loan term"
        );
    }
}
