//! 핵심 재무 계산을 라이브러리로 분리하여 CLI와 GUI가 같은 계산을 공유한다.

pub mod app;
pub mod charts;
pub mod config;
pub mod currency;
pub mod finance;
pub mod i18n;
pub mod inputs;
pub mod report;
pub mod ui_cli;
