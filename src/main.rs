use clap::Parser;
use log::info;
use solar_plant_dashboard::{
    app, config, i18n,
    inputs::{InputField, PlantInputs},
    ui_cli,
};

/// 태양광 발전소 재무 대시보드 CLI.
#[derive(Debug, Parser)]
#[command(name = "solar_plant_dashboard_cli", version, about)]
struct Cli {
    /// 언어 (auto/ko/en-us/hi-in)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 대화형 메뉴 실행
    #[arg(short, long)]
    interactive: bool,
    /// 대출 상환 스케줄도 출력
    #[arg(long)]
    schedule: bool,
    /// MW당 일 평균 발전량 [kWh]
    #[arg(long)]
    production: Option<f64>,
    /// 판매 단가 [₹/kWh]
    #[arg(long)]
    rate: Option<f64>,
    /// 설비 용량 [MW]
    #[arg(long)]
    mw: Option<u32>,
    /// 월 인건비 [₹]
    #[arg(long)]
    labor: Option<f64>,
    /// 월 전기료 [₹]
    #[arg(long)]
    electricity: Option<f64>,
    /// MW당 건설비 [₹]
    #[arg(long)]
    cost_per_mw: Option<f64>,
    /// 부채 비율 [%]
    #[arg(long)]
    debt: Option<f64>,
    /// 연 이자율 [%]
    #[arg(long)]
    interest: Option<f64>,
    /// 상환기간 [년]
    #[arg(long)]
    term: Option<u32>,
    /// 에이커당 부지비 [₹]
    #[arg(long)]
    acre_cost: Option<f64>,
}

impl Cli {
    /// 명령행에서 지정한 값만 덮어쓴다.
    fn apply_overrides(&self, inputs: &mut PlantInputs) {
        let overrides = [
            (InputField::AvgProduction, self.production),
            (InputField::RatePerUnit, self.rate),
            (InputField::TotalMw, self.mw.map(f64::from)),
            (InputField::LaborCost, self.labor),
            (InputField::ElectricityCost, self.electricity),
            (InputField::CostPerMw, self.cost_per_mw),
            (InputField::DebtPercent, self.debt),
            (InputField::InterestRate, self.interest),
            (InputField::LoanTerm, self.term.map(f64::from)),
            (InputField::CostPerAcre, self.acre_cost),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                inputs.set(field, v);
            }
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 보고서를 출력하거나 대화형 메뉴를 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let mut cfg = config::load_or_default().unwrap_or_else(|e| {
        log::warn!("설정 로드 실패, 기본값 사용: {e}");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if let Err(err) = try_run(&cli, &mut cfg, &mut tr) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(
    cli: &Cli,
    cfg: &mut config::Config,
    tr: &mut i18n::Translator,
) -> Result<(), app::AppError> {
    let mut inputs = cfg.inputs.clamped();
    cli.apply_overrides(&mut inputs);
    if cli.interactive {
        info!("starting interactive CLI");
        return app::run(cfg, tr, inputs);
    }
    ui_cli::print_report(tr, &inputs)?;
    if cli.schedule {
        ui_cli::print_schedule(tr, &inputs)?;
    }
    Ok(())
}
