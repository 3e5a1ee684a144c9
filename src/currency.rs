//! 인도식(남아시아) 자릿수 구분 통화 포맷.
//!
//! 마지막 세 자리를 한 묶음으로, 그 앞자리는 두 자리씩 묶는다: 1234567 → ₹12,34,567

/// 통화 기호 (인도 루피)
pub const CURRENCY_GLYPH: &str = "₹";

/// 금액을 반올림해 `₹12,34,567` 형태 문자열로 만든다.
///
/// 음수는 기호 앞에 부호를 붙인다(`-₹1,000`). 반올림 결과가 0이면 부호 없이 `₹0`.
/// NaN/무한대는 `₹0`으로 표시한다.
pub fn format_inr(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_indian(&digits);
    if negative {
        format!("-{CURRENCY_GLYPH}{grouped}")
    } else {
        format!("{CURRENCY_GLYPH}{grouped}")
    }
}

/// 부호 없는 십진 숫자열에 인도식 구분 쉼표를 넣는다.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (rest, last3) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut rest = rest;
    while rest.len() > 2 {
        let (head, tail) = rest.split_at(rest.len() - 2);
        parts.push(tail);
        rest = head;
    }
    if !rest.is_empty() {
        parts.push(rest);
    }
    parts.reverse();
    parts.push(last3);
    parts.join(",")
}

/// 백분율 표시. `decimals`가 0이면 정수로 (`80%`), 아니면 소수점 자리까지 (`12.34%`).
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}
