#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 대시보드 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};
use image::GenericImageView;
use log::{info, warn};
use solar_plant_dashboard::{
    charts, config,
    currency::format_inr,
    finance::{self, amortization_schedule, FinanceError, PlantMetrics},
    i18n::{self, keys},
    inputs::{InputField, PlantInputs},
    report,
};
use std::ops::RangeInclusive;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko/hi-in)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Solar Plant Dashboard")
        .with_inner_size(egui::vec2(1280.0, 860.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    // --lang은 이번 실행에만 적용하고 config.language에는 쓰지 않는다.
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("설정 로드 실패, 기본값 사용: {e}");
        config::Config::default()
    });
    eframe::run_native(
        "Solar Plant Dashboard",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref()) {
                warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), cli_lang.as_deref()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 폰트 바이트를 기본 폰트 뒤의 대체 폰트로 등록한다.
fn add_fallback_fonts(ctx: &egui::Context, fonts_found: Vec<(String, Vec<u8>)>) {
    let mut fonts = egui::FontDefinitions::default();
    for (name, bytes) in fonts_found {
        fonts
            .font_data
            .insert(name.clone(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(name.clone());
        }
    }
    ctx.set_fonts(fonts);
}

/// ₹ 기호, 한글, 데바나가리를 표시하기 위한 대체 폰트를 찾는다.
/// 1) 설정의 사용자 폰트
/// 2) assets/fonts/
/// 3) 시스템 폰트 (Windows/Linux/macOS 순)
fn setup_fonts(ctx: &egui::Context, user_font: Option<&str>) -> Result<(), String> {
    let mut candidates: Vec<String> = Vec::new();
    if let Some(p) = user_font {
        candidates.push(p.to_string());
    }
    let bundled = [
        "NotoSans-Regular.ttf",
        "NotoSansKR-Regular.ttf",
        "NotoSansDevanagari-Regular.ttf",
    ];
    for name in bundled {
        candidates.push(format!("assets/fonts/{name}"));
    }
    if let Some(windir) = env::var_os("WINDIR") {
        let dir = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "Nirmala.ttf", "segoeui.ttf"] {
            candidates.push(dir.join(name).display().to_string());
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(String::from),
    );

    let found: Vec<(String, Vec<u8>)> = candidates
        .iter()
        .filter(|p| Path::new(p.as_str()).exists())
        .filter_map(|p| fs::read(p).ok().map(|bytes| (p.clone(), bytes)))
        .collect();
    if found.is_empty() {
        return Err("Font not found. Please set font_path in config.toml.".into());
    }
    info!("fallback fonts: {}", found.len());
    add_fallback_fonts(ctx, found);
    Ok(())
}

fn rupee_axis(mark: GridMark, _max_chars: usize, _range: &RangeInclusive<f64>) -> String {
    format_inr(mark.value)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    save_status: Option<String>,
    window_alpha: f32,
    inputs: PlantInputs,
    metrics: Result<PlantMetrics, FinanceError>,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    show_schedule: bool,
    save_inputs_as_default: bool,
}

impl GuiApp {
    /// `cli_lang`이 있으면 설정의 언어보다 우선한다.
    fn new(config: config::Config, cli_lang: Option<&str>) -> Self {
        let lang_code =
            i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let inputs = config.inputs.clamped();
        Self {
            lang_input: config.language.clone(),
            window_alpha: config.effective_alpha(),
            config,
            tr,
            save_status: None,
            metrics: finance::compute(&inputs),
            inputs,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            show_schedule: false,
            save_inputs_as_default: false,
        }
    }

    /// 입력값이 바뀔 때마다 전체 지표를 다시 계산한다.
    fn recompute(&mut self) {
        self.metrics = finance::compute(&self.inputs);
    }

    fn set_input(&mut self, field: InputField, value: f64) {
        self.inputs.set(field, value);
        self.recompute();
    }

    fn reset_inputs(&mut self) {
        self.inputs = PlantInputs::default();
        self.recompute();
    }

    /// 슬라이더 하나. 값이 바뀌면 true.
    fn input_slider(&mut self, ui: &mut egui::Ui, field: InputField) -> bool {
        let b = field.bounds();
        let mut v = self.inputs.get(field);
        ui.label(self.tr.t(field.label_key()));
        let mut slider = egui::Slider::new(&mut v, b.min..=b.max).step_by(b.step);
        if field.is_integer() {
            slider = slider.integer();
        }
        let changed = ui.add(slider).changed();
        if changed {
            self.set_input(field, v);
        }
        ui.add_space(4.0);
        changed
    }

    /// 좌측 입력 패널.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::INPUT_HEADING));
        ui.separator();
        let groups: [(&str, &[InputField]); 3] = [
            (
                keys::GROUP_REVENUES,
                &[
                    InputField::AvgProduction,
                    InputField::RatePerUnit,
                    InputField::TotalMw,
                ],
            ),
            (
                keys::GROUP_WORKING_COSTS,
                &[InputField::LaborCost, InputField::ElectricityCost],
            ),
            (
                keys::GROUP_DEBT,
                &[
                    InputField::CostPerMw,
                    InputField::DebtPercent,
                    InputField::InterestRate,
                    InputField::LoanTerm,
                ],
            ),
        ];
        for (title, fields) in groups {
            ui.strong(self.tr.t(title));
            for field in fields {
                self.input_slider(ui, *field);
            }
            ui.separator();
        }
        if ui.button(self.tr.t(keys::GUI_RESET_INPUTS)).clicked() {
            self.reset_inputs();
        }
    }

    fn ui_report(&self, ui: &mut egui::Ui, metrics: &PlantMetrics) {
        let tr = &self.tr;
        for section in report::build(&self.inputs, metrics).sections {
            ui.separator();
            ui.heading(tr.t(section.title_key));
            let n = section.rows.len().min(3);
            for chunk in section.rows.chunks(n) {
                ui.columns(n, |cols| {
                    for (col, row) in cols.iter_mut().zip(chunk) {
                        col.label(egui::RichText::new(tr.t(row.label_key)).weak());
                        col.label(egui::RichText::new(row.value.render(tr)).size(24.0).strong());
                    }
                });
            }
        }
        ui.label(egui::RichText::new(tr.t(keys::IRR_NOTE)).small().weak());
    }

    fn ui_revenue_vs_cost(&self, ui: &mut egui::Ui, metrics: &PlantMetrics) {
        let tr = &self.tr;
        let bars = charts::revenue_vs_cost(metrics);
        ui.separator();
        ui.heading(tr.t(keys::CHART_REVENUE_VS_COST));
        let chart = BarChart::new(vec![
            Bar::new(0.0, bars.annual_revenue)
                .name(tr.t(keys::CHART_BAR_REVENUE))
                .fill(egui::Color32::from_rgb(46, 160, 67))
                .width(0.6),
            Bar::new(1.0, bars.annual_costs)
                .name(tr.t(keys::CHART_BAR_COSTS))
                .fill(egui::Color32::from_rgb(220, 53, 69))
                .width(0.6),
        ])
        .element_formatter(Box::new(|bar, _| {
            format!("{}\n{}", bar.name, format_inr(bar.value))
        }));
        Plot::new("revenue_vs_cost")
            .height(320.0)
            .y_axis_label(tr.t(keys::AXIS_AMOUNT))
            .y_axis_formatter(rupee_axis)
            .show_x(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| plot_ui.bar_chart(chart));
        ui.horizontal(|ui| {
            let revenue = format_inr(bars.annual_revenue);
            ui.label(format!("{}: {revenue}", tr.t(keys::CHART_BAR_REVENUE)));
            ui.separator();
            let costs = format_inr(bars.annual_costs);
            ui.label(format!("{}: {costs}", tr.t(keys::CHART_BAR_COSTS)));
        });
    }

    fn ui_cumulative(&self, ui: &mut egui::Ui, metrics: &PlantMetrics) {
        let tr = &self.tr;
        ui.separator();
        ui.heading(tr.t(keys::CHART_CUMULATIVE));
        let points: Vec<[f64; 2]> = charts::cumulative_cash_flow_points(metrics)
            .into_iter()
            .map(|(x, y)| [x, y])
            .collect();
        let zero: Vec<[f64; 2]> = vec![[0.0, 0.0], [points.len().saturating_sub(1) as f64, 0.0]];
        Plot::new("cumulative_cash_flow")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_label(tr.t(keys::AXIS_YEAR))
            .y_axis_label(tr.t(keys::AXIS_AMOUNT))
            .y_axis_formatter(rupee_axis)
            .label_formatter(|_, p| format!("{:.0}\n{}", p.x, format_inr(p.y)))
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(tr.t(keys::CHART_CUMULATIVE))
                        .width(3.0),
                );
                plot_ui.points(Points::new(PlotPoints::from(points)).radius(3.0));
                plot_ui.line(Line::new(PlotPoints::from(zero)).color(egui::Color32::GRAY));
            });
    }

    fn ui_land(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.heading(self.tr.t(keys::CHART_LAND));
        ui.label(egui::RichText::new(self.tr.t(keys::GROUP_LAND)).strong());
        self.input_slider(ui, InputField::CostPerAcre);
        let tr = &self.tr;
        let points: Vec<[f64; 2]> = charts::land_cost_points(self.inputs.cost_per_acre)
            .into_iter()
            .map(|(x, y)| [x, y])
            .collect();
        Plot::new("land_cost")
            .height(300.0)
            .x_axis_label(tr.t(keys::AXIS_SIZE_MW))
            .y_axis_label(tr.t(keys::AXIS_LAND_COST))
            .y_axis_formatter(rupee_axis)
            .label_formatter(|_, p| format!("{:.0} MW\n{}", p.x, format_inr(p.y)))
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .color(egui::Color32::DARK_BLUE)
                        .width(3.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .color(egui::Color32::DARK_BLUE)
                        .radius(3.0),
                );
            });
    }

    fn ui_schedule_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let inputs = self.inputs;
        egui::Window::new(tr.t(keys::GUI_SHOW_SCHEDULE))
            .open(&mut self.show_schedule)
            .resizable(true)
            .default_height(480.0)
            .show(ctx, |ui| {
                let total = finance::total_cost(inputs.total_mw, inputs.cost_per_mw);
                let loan = finance::loan_amount(total, inputs.debt_percent);
                let rows = match amortization_schedule(
                    loan,
                    inputs.interest_rate_percent,
                    inputs.loan_term_years,
                ) {
                    Ok(rows) => rows,
                    Err(e) => {
                        ui.colored_label(egui::Color32::RED, e.to_string());
                        return;
                    }
                };
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("schedule_grid")
                        .striped(true)
                        .num_columns(5)
                        .show(ui, |ui| {
                            for key in [
                                keys::SCHEDULE_COL_YEAR,
                                keys::SCHEDULE_COL_OPENING,
                                keys::SCHEDULE_COL_INTEREST,
                                keys::SCHEDULE_COL_PRINCIPAL,
                                keys::SCHEDULE_COL_CLOSING,
                            ] {
                                ui.strong(tr.t(key));
                            }
                            ui.end_row();
                            for r in rows {
                                ui.label(r.year.to_string());
                                ui.label(format_inr(r.opening_balance));
                                ui.label(format_inr(r.interest));
                                ui.label(format_inr(r.principal));
                                ui.label(format_inr(r.closing_balance));
                                ui.end_row();
                            }
                        });
                });
            });
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let mut open = self.show_settings_modal;
        egui::Window::new(tr.t(keys::GUI_SETTINGS))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::SETTINGS_ALPHA));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        ui.selectable_value(&mut self.lang_input, "hi-in".into(), "हिन्दी");
                    });
                ui.checkbox(
                    &mut self.save_inputs_as_default,
                    tr.t(keys::SETTINGS_SAVE_DEFAULTS).trim_end_matches(" (y/N): "),
                );
                if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                    self.save_settings();
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        if self.save_inputs_as_default {
            self.config.inputs = self.inputs;
        }
        // 즉시 번역기 반영
        let resolved = i18n::resolve_language(&self.config.language, None);
        let pack_dir = self.config.language_pack_dir.as_deref();
        self.tr = i18n::Translator::new_with_pack(&resolved, pack_dir);
        self.save_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::SETTINGS_SAVE_ERROR)),
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 (매 프레임 누적되지 않도록 기본 테마 색 기준)
        let mut style = (*ctx.style()).clone();
        let base = if style.visuals.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.visuals.window_fill = base.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = base.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_FORMULA)).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(self.tr.t(keys::GUI_SHOW_SCHEDULE)).clicked() {
                    self.show_schedule = true;
                }
                if ui.button(self.tr.t(keys::GUI_SETTINGS)).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.tr.t(keys::GUI_ABOUT)).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }
        if self.show_schedule {
            self.ui_schedule_window(ctx);
        }

        if self.show_help_modal {
            let tr = &self.tr;
            egui::Window::new(tr.t(keys::GUI_ABOUT))
                .collapsible(false)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(tr.t(keys::APP_TITLE));
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(tr.t(keys::ABOUT_BODY));
                    ui.label(tr.t(keys::IRR_NOTE));
                });
        }

        if self.show_formula_modal {
            let tr = &self.tr;
            egui::Window::new(tr.t(keys::GUI_FORMULA))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    for key in [
                        keys::FORMULA_REVENUE,
                        keys::FORMULA_LOAN,
                        keys::FORMULA_INCOME,
                        keys::FORMULA_LAND,
                    ] {
                        ui.label(tr.t(key));
                    }
                });
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(240.0)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_inputs(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::APP_SUBTITLE));
                    match self.metrics.clone() {
                        Ok(metrics) => {
                            self.ui_report(ui, &metrics);
                            self.ui_revenue_vs_cost(ui, &metrics);
                            self.ui_cumulative(ui, &metrics);
                        }
                        Err(e) => {
                            ui.colored_label(
                                egui::Color32::RED,
                                format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                            );
                        }
                    }
                    self.ui_land(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_with_computed_defaults() {
        let app = GuiApp::new(config::Config::default(), None);
        let m = app.metrics.as_ref().unwrap();
        assert_eq!(m.total_cost, 280_000_000.0);
        assert_eq!(app.window_alpha, 1.0);
    }

    #[test]
    fn slider_change_recomputes_metrics() {
        let mut app = GuiApp::new(config::Config::default(), None);
        app.set_input(InputField::TotalMw, 10.0);
        let m = app.metrics.as_ref().unwrap();
        assert_eq!(m.total_cost, 350_000_000.0);
        assert_eq!(m.loan_amount, 280_000_000.0);
    }

    #[test]
    fn reset_restores_default_inputs() {
        let mut app = GuiApp::new(config::Config::default(), None);
        app.set_input(InputField::DebtPercent, 20.0);
        app.reset_inputs();
        assert_eq!(app.inputs, PlantInputs::default());
        assert_eq!(app.metrics.as_ref().unwrap().loan_amount, 224_000_000.0);
    }

    #[test]
    fn out_of_range_config_inputs_are_clamped() {
        let mut cfg = config::Config::default();
        cfg.inputs.loan_term_years = 0;
        cfg.inputs.total_mw = 99;
        let app = GuiApp::new(cfg, None);
        assert_eq!(app.inputs.loan_term_years, 1);
        assert_eq!(app.inputs.total_mw, 25);
        assert!(app.metrics.is_ok());
    }

    #[test]
    fn cli_language_does_not_overwrite_config() {
        let cfg = config::Config {
            language: "ko".into(),
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg, Some("en-us"));
        assert_eq!(app.tr.language(), i18n::Language::En);
        assert_eq!(app.config.language, "ko");
        assert_eq!(app.lang_input, "ko");
    }

    #[test]
    fn rupee_axis_uses_indian_grouping() {
        let mark = GridMark {
            value: 12_345_678.0,
            step_size: 1_000_000.0,
        };
        assert_eq!(rupee_axis(mark, 12, &(0.0..=1.0)), "₹1,23,45,678");
    }
}
