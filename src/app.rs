use log::info;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::config::{Config, ConfigError, CONFIG_FILE};
use crate::finance::FinanceError;
use crate::i18n::{self, Translator};
use crate::inputs::PlantInputs;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 재무 계산 오류
    #[error("계산 오류: {0}")]
    Finance(#[from] FinanceError),
    /// 표준 입력이 닫힘 (EOF)
    #[error("입력 스트림이 닫혔습니다")]
    InputClosed,
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 입력값은 세션 동안만 유지되고, 설정 메뉴에서 저장을 선택했을 때만 config에 기록된다.
pub fn run(config: &mut Config, tr: &mut Translator, start: PlantInputs) -> Result<(), AppError> {
    match run_menu(config, tr, start) {
        Err(AppError::InputClosed) => {
            info!("입력 스트림 종료, 세션을 닫습니다");
            config.save()?;
            Ok(())
        }
        other => other,
    }
}

fn run_menu(config: &mut Config, tr: &mut Translator, start: PlantInputs) -> Result<(), AppError> {
    let mut inputs = start.clamped();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Report => ui_cli::print_report(tr, &inputs)?,
            MenuChoice::EditInputs => ui_cli::handle_edit_inputs(tr, &mut inputs)?,
            MenuChoice::Schedule => ui_cli::print_schedule(tr, &inputs)?,
            MenuChoice::Charts => ui_cli::print_chart_data(tr, &inputs)?,
            MenuChoice::Reset => {
                inputs = PlantInputs::default();
                println!("{}", tr.t(i18n::keys::RESET_DONE));
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&mut io::stdin().lock(), tr, config, &inputs)? {
                    let resolved = i18n::resolve_language(&config.language, None);
                    let pack_dir = config.language_pack_dir.as_deref();
                    *tr = Translator::new_with_pack(&resolved, pack_dir);
                }
                save_settings(config, Path::new(CONFIG_FILE), tr)?;
            }
            MenuChoice::Exit => {
                config.save()?;
                info!("CLI session closed");
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 설정을 저장하고, 성공했을 때만 저장 완료를 알린다.
fn save_settings(config: &Config, path: &Path, tr: &Translator) -> Result<(), AppError> {
    config.save_to(path)?;
    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_save_is_reported_as_error() {
        let path = std::env::temp_dir()
            .join("solar_plant_dashboard_missing_dir")
            .join("nested")
            .join("config.toml");
        let tr = Translator::new("en");
        let res = save_settings(&Config::default(), &path, &tr);
        assert!(matches!(res, Err(AppError::Config(ConfigError::Io(_)))));
        assert!(!path.exists());
    }

    #[test]
    fn successful_save_writes_file() {
        let path = std::env::temp_dir()
            .join(format!("solar_plant_dashboard_{}_settings.toml", std::process::id()));
        let tr = Translator::new("en");
        save_settings(&Config::default(), &path, &tr).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
