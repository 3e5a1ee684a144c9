use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_EDIT: &str = "main_menu.edit";
    pub const MAIN_MENU_SCHEDULE: &str = "main_menu.schedule";
    pub const MAIN_MENU_CHARTS: &str = "main_menu.charts";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const GROUP_REVENUES: &str = "input.group_revenues";
    pub const GROUP_WORKING_COSTS: &str = "input.group_working_costs";
    pub const GROUP_DEBT: &str = "input.group_debt";
    pub const GROUP_LAND: &str = "input.group_land";
    pub const INPUT_AVG_PRODUCTION: &str = "input.avg_production";
    pub const INPUT_RATE_PER_UNIT: &str = "input.rate_per_unit";
    pub const INPUT_TOTAL_MW: &str = "input.total_mw";
    pub const INPUT_LABOR_COST: &str = "input.labor_cost";
    pub const INPUT_ELECTRICITY_COST: &str = "input.electricity_cost";
    pub const INPUT_COST_PER_MW: &str = "input.cost_per_mw";
    pub const INPUT_DEBT_PERCENT: &str = "input.debt_percent";
    pub const INPUT_INTEREST_RATE: &str = "input.interest_rate";
    pub const INPUT_LOAN_TERM: &str = "input.loan_term";
    pub const INPUT_COST_PER_ACRE: &str = "input.cost_per_acre";

    pub const EDIT_HEADING: &str = "edit.heading";
    pub const EDIT_PROMPT_FIELD: &str = "edit.prompt_field";
    pub const EDIT_PROMPT_VALUE: &str = "edit.prompt_value";
    pub const EDIT_RANGE: &str = "edit.range";
    pub const EDIT_DONE: &str = "edit.done";
    pub const RESET_DONE: &str = "edit.reset_done";

    pub const SECTION_REVENUE: &str = "section.revenue";
    pub const SECTION_WORKING_COST: &str = "section.working_cost";
    pub const SECTION_CAPITAL: &str = "section.capital";
    pub const SECTION_NET_INCOME: &str = "section.net_income";
    pub const SECTION_RETURNS: &str = "section.returns";
    pub const SECTION_LAND: &str = "section.land";

    pub const METRIC_MONTHLY_REVENUE: &str = "metric.monthly_revenue";
    pub const METRIC_ANNUAL_REVENUE: &str = "metric.annual_revenue";
    pub const METRIC_MONTHLY_WORKING_COST: &str = "metric.monthly_working_cost";
    pub const METRIC_ANNUAL_WORKING_COST: &str = "metric.annual_working_cost";
    pub const METRIC_TOTAL_COST: &str = "metric.total_cost";
    pub const METRIC_LOAN_AMOUNT: &str = "metric.loan_amount";
    pub const METRIC_DEBT_PERCENT: &str = "metric.debt_percent";
    pub const METRIC_ANNUAL_LOAN_PAYMENT: &str = "metric.annual_loan_payment";
    pub const METRIC_MONTHLY_LOAN_PAYMENT: &str = "metric.monthly_loan_payment";
    pub const METRIC_MONTHLY_NET_INCOME: &str = "metric.monthly_net_income";
    pub const METRIC_ANNUAL_NET_INCOME: &str = "metric.annual_net_income";
    pub const METRIC_ROI: &str = "metric.roi";
    pub const METRIC_PAYBACK_YEAR: &str = "metric.payback_year";
    pub const METRIC_LAND_COST: &str = "metric.land_cost";
    pub const METRIC_LAND_FACTORED_COST: &str = "metric.land_factored_cost";
    pub const METRIC_AFTER_LOAN_COST: &str = "metric.after_loan_cost";
    pub const UNIT_YEARS: &str = "unit.years";
    pub const PAYBACK_NOT_REACHED: &str = "metric.payback_not_reached";

    pub const CHART_REVENUE_VS_COST: &str = "chart.revenue_vs_cost";
    pub const CHART_BAR_REVENUE: &str = "chart.bar_revenue";
    pub const CHART_BAR_COSTS: &str = "chart.bar_costs";
    pub const CHART_CUMULATIVE: &str = "chart.cumulative";
    pub const CHART_LAND: &str = "chart.land";
    pub const AXIS_AMOUNT: &str = "chart.axis_amount";
    pub const AXIS_YEAR: &str = "chart.axis_year";
    pub const AXIS_SIZE_MW: &str = "chart.axis_size_mw";
    pub const AXIS_LAND_COST: &str = "chart.axis_land_cost";

    pub const SCHEDULE_HEADING: &str = "schedule.heading";
    pub const SCHEDULE_COL_YEAR: &str = "schedule.col_year";
    pub const SCHEDULE_COL_OPENING: &str = "schedule.col_opening";
    pub const SCHEDULE_COL_INTEREST: &str = "schedule.col_interest";
    pub const SCHEDULE_COL_PRINCIPAL: &str = "schedule.col_principal";
    pub const SCHEDULE_COL_CLOSING: &str = "schedule.col_closing";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SAVE_DEFAULTS: &str = "settings.save_defaults";
    pub const SETTINGS_ALPHA: &str = "settings.alpha";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_SAVE_ERROR: &str = "settings.save_error";

    pub const GUI_SETTINGS: &str = "gui.settings";
    pub const GUI_ABOUT: &str = "gui.about";
    pub const GUI_FORMULA: &str = "gui.formula";
    pub const GUI_RESET_INPUTS: &str = "gui.reset_inputs";
    pub const GUI_SHOW_SCHEDULE: &str = "gui.show_schedule";
    pub const ABOUT_BODY: &str = "gui.about_body";
    pub const IRR_NOTE: &str = "gui.irr_note";
    pub const FORMULA_REVENUE: &str = "formula.revenue";
    pub const FORMULA_LOAN: &str = "formula.loan";
    pub const FORMULA_INCOME: &str = "formula.income";
    pub const FORMULA_LAND: &str = "formula.land";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 내장 문자열만 쓰는 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩, 그것도 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        info!(
            "language resolved: {lang_code}, overrides_loaded={}",
            overrides.is_some()
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순. 한국어 번역이 없으면 영어를 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" | "en-in" => Some("en-us".into()),
        "hi" | "hi-in" => Some("hi-in".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("hi") => Some("hi-in".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "hi" => Some("hi-in".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        debug!("language pack: {}", path.display());
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "hi-in" | "hi" => parse_toml_to_map(include_str!("../locales/hi-in.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "태양광 발전소 재무 대시보드",
        APP_SUBTITLE => "태양광 투자 사업의 매출, 비용, 부채, 수익 지표를 한눈에 확인합니다.",
        MAIN_MENU_TITLE => "\n=== 태양광 발전소 재무 대시보드 ===",
        MAIN_MENU_REPORT => "1) 지표 보기",
        MAIN_MENU_EDIT => "2) 입력값 변경",
        MAIN_MENU_SCHEDULE => "3) 대출 상환 스케줄",
        MAIN_MENU_CHARTS => "4) 차트 데이터",
        MAIN_MENU_RESET => "5) 입력값 초기화",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INPUT_HEADING => "입력 항목",
        GROUP_REVENUES => "매출",
        GROUP_WORKING_COSTS => "운영비",
        GROUP_DEBT => "부채",
        GROUP_LAND => "부지",
        INPUT_AVG_PRODUCTION => "MW당 일 평균 발전량 (kWh)",
        INPUT_RATE_PER_UNIT => "판매 단가 (₹/kWh)",
        INPUT_TOTAL_MW => "설비 용량 (MW)",
        INPUT_LABOR_COST => "월 인건비 (₹)",
        INPUT_ELECTRICITY_COST => "월 전기료 (₹)",
        INPUT_COST_PER_MW => "MW당 건설비 (₹)",
        INPUT_DEBT_PERCENT => "총 사업비 대비 부채 비율 (%)",
        INPUT_INTEREST_RATE => "연 이자율 (%)",
        INPUT_LOAN_TERM => "상환기간 (년)",
        INPUT_COST_PER_ACRE => "에이커당 부지비 (₹)",
        EDIT_HEADING => "\n-- 입력값 변경 --",
        EDIT_PROMPT_FIELD => "변경할 항목 번호 (취소하려면 엔터): ",
        EDIT_PROMPT_VALUE => "새 값: ",
        EDIT_RANGE => "허용 범위",
        EDIT_DONE => "변경되었습니다:",
        RESET_DONE => "입력값을 기본값으로 되돌렸습니다.",
        SECTION_REVENUE => "매출 요약",
        SECTION_WORKING_COST => "운영비 요약",
        SECTION_CAPITAL => "자본 및 대출",
        SECTION_NET_INCOME => "순이익 요약",
        SECTION_RETURNS => "사업 수익성",
        SECTION_LAND => "부지비 반영 사업비",
        METRIC_MONTHLY_REVENUE => "월 매출",
        METRIC_ANNUAL_REVENUE => "연 매출",
        METRIC_MONTHLY_WORKING_COST => "월 운영비",
        METRIC_ANNUAL_WORKING_COST => "연 운영비",
        METRIC_TOTAL_COST => "총 사업비",
        METRIC_LOAN_AMOUNT => "대출 원금",
        METRIC_DEBT_PERCENT => "부채 비율",
        METRIC_ANNUAL_LOAN_PAYMENT => "연 대출 상환액",
        METRIC_MONTHLY_LOAN_PAYMENT => "월 대출 상환액",
        METRIC_MONTHLY_NET_INCOME => "월 순이익",
        METRIC_ANNUAL_NET_INCOME => "연 순이익",
        METRIC_ROI => "ROI (%)",
        METRIC_PAYBACK_YEAR => "투자 회수 연차",
        METRIC_LAND_COST => "부지비",
        METRIC_LAND_FACTORED_COST => "부지비 포함 총 사업비",
        METRIC_AFTER_LOAN_COST => "대출 제외 사업비",
        UNIT_YEARS => "년",
        PAYBACK_NOT_REACHED => "상환기간 내 회수 불가",
        CHART_REVENUE_VS_COST => "연 매출 대 연간 총비용",
        CHART_BAR_REVENUE => "연 매출",
        CHART_BAR_COSTS => "연간 비용",
        CHART_CUMULATIVE => "연차별 누적 현금흐름",
        CHART_LAND => "설비 용량별 부지비",
        AXIS_AMOUNT => "금액 (₹)",
        AXIS_YEAR => "연차",
        AXIS_SIZE_MW => "설비 용량 (MW)",
        AXIS_LAND_COST => "총 부지비 (₹)",
        SCHEDULE_HEADING => "\n-- 대출 상환 스케줄 --",
        SCHEDULE_COL_YEAR => "연차",
        SCHEDULE_COL_OPENING => "기초 잔액",
        SCHEDULE_COL_INTEREST => "이자",
        SCHEDULE_COL_PRINCIPAL => "원금",
        SCHEDULE_COL_CLOSING => "기말 잔액",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en-us/hi-in, 취소하려면 엔터): ",
        SETTINGS_SAVE_DEFAULTS => "현재 입력값을 시작값으로 저장할까요? (y/N): ",
        SETTINGS_ALPHA => "창 투명도",
        SETTINGS_SAVE => "설정 저장",
        SETTINGS_SAVED => "저장되었습니다.",
        SETTINGS_SAVE_ERROR => "저장 오류",
        GUI_SETTINGS => "설정",
        GUI_ABOUT => "도움말 / 정보",
        GUI_FORMULA => "계산식",
        GUI_RESET_INPUTS => "입력값 초기화",
        GUI_SHOW_SCHEDULE => "대출 상환 스케줄 보기",
        ABOUT_BODY => "태양광 발전소 투자 계산기. 입력값을 바꾸면 모든 지표와 차트가 즉시 다시 계산됩니다.",
        IRR_NOTE => "IRR은 계산하지 않습니다. ROI = 연 순이익 / 총 사업비.",
        FORMULA_REVENUE => "매출: 일 = 발전량 × 단가 × MW, 연 = 일 × 365, 월 = 연 / 12",
        FORMULA_LOAN => "상환액: A = P·r / (1 - (1 + r)^-n), r = 0이면 A = P / n",
        FORMULA_INCOME => "순이익 = 매출 - (운영비 + 상환액), ROI = 연 순이익 / 총 사업비 × 100",
        FORMULA_LAND => "부지비 = MW × 4 acre × 에이커당 단가",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Solar Power Plant: Financial Dashboard",
        APP_SUBTITLE => "Get a quick overview of project revenue, costs, debt, and return metrics for your solar investment.",
        MAIN_MENU_TITLE => "\n=== Solar Power Plant: Financial Dashboard ===",
        MAIN_MENU_REPORT => "1) Show metrics",
        MAIN_MENU_EDIT => "2) Edit inputs",
        MAIN_MENU_SCHEDULE => "3) Loan amortization schedule",
        MAIN_MENU_CHARTS => "4) Chart data",
        MAIN_MENU_RESET => "5) Reset inputs",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INPUT_HEADING => "Input Parameters",
        GROUP_REVENUES => "Revenues",
        GROUP_WORKING_COSTS => "Working Costs",
        GROUP_DEBT => "Debt",
        GROUP_LAND => "Land",
        INPUT_AVG_PRODUCTION => "Average Production per MW per Day (kWh)",
        INPUT_RATE_PER_UNIT => "Rate per Unit (₹)",
        INPUT_TOTAL_MW => "Number of MW Production",
        INPUT_LABOR_COST => "Labor Cost per month (₹)",
        INPUT_ELECTRICITY_COST => "Electricity Cost per month (₹)",
        INPUT_COST_PER_MW => "Cost per MW (₹)",
        INPUT_DEBT_PERCENT => "Debt Percentage of Total Cost (%)",
        INPUT_INTEREST_RATE => "Annual Interest Rate (%)",
        INPUT_LOAN_TERM => "Loan Payoff Period (Years)",
        INPUT_COST_PER_ACRE => "Cost of Land per Acre (₹)",
        EDIT_HEADING => "\n-- Edit Inputs --",
        EDIT_PROMPT_FIELD => "Item number to change (enter to cancel): ",
        EDIT_PROMPT_VALUE => "New value: ",
        EDIT_RANGE => "Allowed range",
        EDIT_DONE => "Updated:",
        RESET_DONE => "Inputs reset to defaults.",
        SECTION_REVENUE => "Revenue Summary",
        SECTION_WORKING_COST => "Working Cost Summary",
        SECTION_CAPITAL => "Capital & Loan Breakdown",
        SECTION_NET_INCOME => "Net Income Summary",
        SECTION_RETURNS => "Project Returns",
        SECTION_LAND => "Project Cost with Land",
        METRIC_MONTHLY_REVENUE => "Monthly Revenue",
        METRIC_ANNUAL_REVENUE => "Annual Revenue",
        METRIC_MONTHLY_WORKING_COST => "Monthly Working Cost",
        METRIC_ANNUAL_WORKING_COST => "Annual Working Cost",
        METRIC_TOTAL_COST => "Total Project Cost",
        METRIC_LOAN_AMOUNT => "Loan Amount",
        METRIC_DEBT_PERCENT => "Debt Percentage",
        METRIC_ANNUAL_LOAN_PAYMENT => "Annual Loan Payment",
        METRIC_MONTHLY_LOAN_PAYMENT => "Monthly Loan Payment",
        METRIC_MONTHLY_NET_INCOME => "Monthly Net Income",
        METRIC_ANNUAL_NET_INCOME => "Annual Net Income",
        METRIC_ROI => "ROI (%)",
        METRIC_PAYBACK_YEAR => "Payback Year",
        METRIC_LAND_COST => "Land Cost",
        METRIC_LAND_FACTORED_COST => "Total Cost of Project with Land Factor",
        METRIC_AFTER_LOAN_COST => "Total Cost of Project after Loan",
        UNIT_YEARS => "years",
        PAYBACK_NOT_REACHED => "Not within loan term",
        CHART_REVENUE_VS_COST => "Annual Revenue vs Total Annual Costs",
        CHART_BAR_REVENUE => "Annual Revenue",
        CHART_BAR_COSTS => "Annual Costs",
        CHART_CUMULATIVE => "Cumulative Cash Flow by Year",
        CHART_LAND => "Estimated Land Cost vs Project Size (MW)",
        AXIS_AMOUNT => "Amount (₹)",
        AXIS_YEAR => "Year",
        AXIS_SIZE_MW => "Project Size (MW)",
        AXIS_LAND_COST => "Total Land Cost (₹)",
        SCHEDULE_HEADING => "\n-- Loan Amortization Schedule --",
        SCHEDULE_COL_YEAR => "Year",
        SCHEDULE_COL_OPENING => "Opening",
        SCHEDULE_COL_INTEREST => "Interest",
        SCHEDULE_COL_PRINCIPAL => "Principal",
        SCHEDULE_COL_CLOSING => "Closing",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en-us/hi-in, enter to cancel): ",
        SETTINGS_SAVE_DEFAULTS => "Save current inputs as startup values? (y/N): ",
        SETTINGS_ALPHA => "Window transparency",
        SETTINGS_SAVE => "Save settings",
        SETTINGS_SAVED => "Saved.",
        SETTINGS_SAVE_ERROR => "Save error",
        GUI_SETTINGS => "Settings",
        GUI_ABOUT => "Help / About",
        GUI_FORMULA => "Formula reference",
        GUI_RESET_INPUTS => "Reset inputs",
        GUI_SHOW_SCHEDULE => "Show loan amortization schedule",
        ABOUT_BODY => "Solar plant investment calculator. Every metric and chart is recomputed as soon as an input changes.",
        IRR_NOTE => "IRR is not computed. ROI = annual net income / total project cost.",
        FORMULA_REVENUE => "Revenue: day = production × rate × MW, year = day × 365, month = year / 12",
        FORMULA_LOAN => "Payment: A = P·r / (1 - (1 + r)^-n); A = P / n when r = 0",
        FORMULA_INCOME => "Net income = revenue - (working cost + loan payment); ROI = annual income / total cost × 100",
        FORMULA_LAND => "Land cost = MW × 4 acres × cost per acre",
        _ => "[missing translation]",
    }
}
