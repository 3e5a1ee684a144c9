use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::inputs::PlantInputs;

/// 기본 설정 파일 이름
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us ...)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도 (0.3~1.0)
    pub window_alpha: f32,
    /// 사용자 지정 폰트 경로 (.ttf/.otf)
    pub font_path: Option<String>,
    /// 시작 시 사용할 입력값
    pub inputs: PlantInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            window_alpha: 1.0,
            font_path: None,
            inputs: PlantInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)?;
        info!("설정 저장: {}", path.display());
        Ok(())
    }

    /// 적용 가능한 범위로 맞춘 창 투명도.
    pub fn effective_alpha(&self) -> f32 {
        self.window_alpha.clamp(0.3, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("solar_plant_dashboard_{}_{name}", std::process::id()))
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: Config = toml::from_str("language = \"ko\"\n[inputs]\ntotal_mw = 12\n").unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.window_alpha, 1.0);
        assert_eq!(cfg.inputs.total_mw, 12);
        assert_eq!(cfg.inputs.rate_per_unit, 3.11);
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let path = temp_path("roundtrip.toml");
        let mut cfg = Config::default();
        cfg.language = "en-us".into();
        cfg.inputs.debt_percent = 60.0;
        cfg.save_to(&path).unwrap();
        let loaded = load_or_create(&path).unwrap();
        assert_eq!(loaded, cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn creates_default_file_when_missing() {
        let path = temp_path("created.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_or_create(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let path = temp_path("broken.toml");
        fs::write(&path, "language = ").unwrap();
        assert!(matches!(load_or_create(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn alpha_is_clamped() {
        let cfg = Config {
            window_alpha: 0.1,
            ..Config::default()
        };
        assert_eq!(cfg.effective_alpha(), 0.3);
    }
}
