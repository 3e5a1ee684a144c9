use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::charts;
use crate::config::Config;
use crate::currency::format_inr;
use crate::finance::{self, amortization_schedule};
use crate::i18n::{keys, Translator};
use crate::inputs::{InputField, PlantInputs};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report,
    EditInputs,
    Schedule,
    Charts,
    Reset,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_EDIT,
        keys::MAIN_MENU_SCHEDULE,
        keys::MAIN_MENU_CHARTS,
        keys::MAIN_MENU_RESET,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    select_menu(&mut io::stdin().lock(), tr)
}

/// 메뉴 번호를 읽는다. 입력 스트림이 끝나면 종료로 본다.
fn select_menu<R: BufRead>(reader: &mut R, tr: &Translator) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(reader, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::InputClosed) => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Report),
            "2" => return Ok(MenuChoice::EditInputs),
            "3" => return Ok(MenuChoice::Schedule),
            "4" => return Ok(MenuChoice::Charts),
            "5" => return Ok(MenuChoice::Reset),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력값과 전체 지표를 섹션별로 출력한다.
pub fn print_report(tr: &Translator, inputs: &PlantInputs) -> Result<(), AppError> {
    let metrics = finance::compute(inputs)?;
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    print_inputs(tr, inputs);
    for section in report::build(inputs, &metrics).sections {
        println!("\n[{}]", tr.t(section.title_key));
        for row in section.rows {
            println!("  {:<40} {:>20}", tr.t(row.label_key), row.value.render(tr));
        }
    }
    println!("\n{}", tr.t(keys::IRR_NOTE));
    Ok(())
}

fn print_inputs(tr: &Translator, inputs: &PlantInputs) {
    println!("\n[{}]", tr.t(keys::INPUT_HEADING));
    for (i, field) in InputField::ALL.iter().enumerate() {
        println!(
            "  {:>2}) {:<45} {}",
            i + 1,
            tr.t(field.label_key()),
            display_input(*field, inputs.get(*field))
        );
    }
}

fn display_input(field: InputField, v: f64) -> String {
    match field {
        InputField::TotalMw | InputField::LoanTerm | InputField::DebtPercent => format!("{v:.0}"),
        InputField::RatePerUnit => format!("{v:.2}"),
        InputField::InterestRate => format!("{v:.1}"),
        InputField::AvgProduction => format!("{v:.0}"),
        _ => format_inr(v),
    }
}

/// 입력 항목 하나를 골라 값을 바꾼다. 범위를 벗어나면 경계값으로 맞춘다.
pub fn handle_edit_inputs(tr: &Translator, inputs: &mut PlantInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EDIT_HEADING));
    print_inputs(tr, inputs);
    let field = loop {
        let sel = read_line(tr.t(keys::EDIT_PROMPT_FIELD))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(());
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=InputField::ALL.len()).contains(&n) => break InputField::ALL[n - 1],
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let b = field.bounds();
    println!(
        "{}: {} ~ {} (step {})",
        tr.t(keys::EDIT_RANGE),
        b.min,
        b.max,
        b.step
    );
    let value = read_f64_from(&mut io::stdin().lock(), tr, tr.t(keys::EDIT_PROMPT_VALUE))?;
    inputs.set(field, value);
    println!(
        "{} {} = {}",
        tr.t(keys::EDIT_DONE),
        tr.t(field.label_key()),
        display_input(field, inputs.get(field))
    );
    Ok(())
}

/// 연 단위 대출 상환 스케줄을 표로 출력한다.
pub fn print_schedule(tr: &Translator, inputs: &PlantInputs) -> Result<(), AppError> {
    let total = finance::total_cost(inputs.total_mw, inputs.cost_per_mw);
    let loan = finance::loan_amount(total, inputs.debt_percent);
    let rows = amortization_schedule(loan, inputs.interest_rate_percent, inputs.loan_term_years)?;
    println!("{}", tr.t(keys::SCHEDULE_HEADING));
    println!(
        "{:>6} {:>18} {:>18} {:>18} {:>18}",
        tr.t(keys::SCHEDULE_COL_YEAR),
        tr.t(keys::SCHEDULE_COL_OPENING),
        tr.t(keys::SCHEDULE_COL_INTEREST),
        tr.t(keys::SCHEDULE_COL_PRINCIPAL),
        tr.t(keys::SCHEDULE_COL_CLOSING)
    );
    for r in rows {
        println!(
            "{:>6} {:>18} {:>18} {:>18} {:>18}",
            r.year,
            format_inr(r.opening_balance),
            format_inr(r.interest),
            format_inr(r.principal),
            format_inr(r.closing_balance)
        );
    }
    Ok(())
}

/// 차트 세 개의 원자료를 텍스트로 출력한다.
pub fn print_chart_data(tr: &Translator, inputs: &PlantInputs) -> Result<(), AppError> {
    let metrics = finance::compute(inputs)?;
    let bars = charts::revenue_vs_cost(&metrics);
    println!("\n-- {} --", tr.t(keys::CHART_REVENUE_VS_COST));
    println!("  {:<20} {:>20}", tr.t(keys::CHART_BAR_REVENUE), format_inr(bars.annual_revenue));
    println!("  {:<20} {:>20}", tr.t(keys::CHART_BAR_COSTS), format_inr(bars.annual_costs));

    println!("\n-- {} --", tr.t(keys::CHART_CUMULATIVE));
    println!("  {:>6} {:>22}", tr.t(keys::AXIS_YEAR), tr.t(keys::AXIS_AMOUNT));
    for (year, v) in charts::cumulative_cash_flow_points(&metrics) {
        println!("  {:>6.0} {:>22}", year, format_inr(v));
    }

    println!("\n-- {} --", tr.t(keys::CHART_LAND));
    println!("  {:>6} {:>22}", "MW", tr.t(keys::AXIS_LAND_COST));
    for (mw, cost) in charts::land_cost_points(inputs.cost_per_acre) {
        println!("  {:>6.0} {:>22}", mw, format_inr(cost));
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true. 저장은 호출 측에서 한다.
pub fn handle_settings<R: BufRead>(
    reader: &mut R,
    tr: &Translator,
    cfg: &mut Config,
    inputs: &PlantInputs,
) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let sel = read_line_from(reader, tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let changed = !sel.trim().is_empty() && sel.trim() != cfg.language;
    if changed {
        cfg.language = sel.trim().to_string();
    }
    let save = read_line_from(reader, tr.t(keys::SETTINGS_SAVE_DEFAULTS))?;
    if matches!(save.trim(), "y" | "Y") {
        cfg.inputs = *inputs;
    }
    Ok(changed)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 한 줄을 읽는다. 0바이트(EOF)면 `AppError::InputClosed`.
fn read_line_from<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64_from<R: BufRead>(
    reader: &mut R,
    tr: &Translator,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(reader, prompt)?;
        match s.trim().replace(',', "").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tr() -> Translator {
        Translator::new("en")
    }

    #[test]
    fn menu_skips_invalid_entries() {
        let mut input = Cursor::new("9\nabc\n3\n");
        assert_eq!(select_menu(&mut input, &tr()).unwrap(), MenuChoice::Schedule);
    }

    #[test]
    fn closed_input_exits_menu() {
        let mut input = Cursor::new("");
        assert_eq!(select_menu(&mut input, &tr()).unwrap(), MenuChoice::Exit);
        let mut input = Cursor::new("x\n");
        assert_eq!(select_menu(&mut input, &tr()).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn number_prompt_stops_on_closed_input() {
        let mut input = Cursor::new("abc\n");
        assert!(matches!(
            read_f64_from(&mut input, &tr(), "> "),
            Err(AppError::InputClosed)
        ));
        let mut input = Cursor::new("x\n1,25,000\n");
        assert_eq!(read_f64_from(&mut input, &tr(), "> ").unwrap(), 125_000.0);
    }

    #[test]
    fn settings_update_language_and_default_inputs() {
        let mut cfg = Config::default();
        let inputs = PlantInputs {
            total_mw: 12,
            ..PlantInputs::default()
        };
        let mut input = Cursor::new("en-us\ny\n");
        let changed = handle_settings(&mut input, &tr(), &mut cfg, &inputs).unwrap();
        assert!(changed);
        assert_eq!(cfg.language, "en-us");
        assert_eq!(cfg.inputs.total_mw, 12);
    }

    #[test]
    fn settings_with_closed_input_change_nothing() {
        let mut cfg = Config::default();
        let mut input = Cursor::new("");
        let res = handle_settings(&mut input, &tr(), &mut cfg, &PlantInputs::default());
        assert!(matches!(res, Err(AppError::InputClosed)));
        assert_eq!(cfg, Config::default());
    }
}
