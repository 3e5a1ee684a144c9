//! 인도식 통화 포맷 속성 테스트 (proptest).
use proptest::prelude::*;
use solar_plant_dashboard::currency::{format_inr, group_indian, CURRENCY_GLYPH};

#[test]
fn reference_strings() {
    assert_eq!(format_inr(0.0), "₹0");
    assert_eq!(format_inr(999.0), "₹999");
    assert_eq!(format_inr(1000.0), "₹1,000");
    assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
    assert_eq!(format_inr(49_946_600.0), "₹4,99,46,600");
}

proptest! {
    /// 맨 오른쪽 묶음은 3자리, 나머지는 1~2자리(맨 왼쪽) 또는 2자리.
    #[test]
    fn group_widths_are_indian(amount in 0.0f64..1e15) {
        let s = format_inr(amount);
        let body = s.strip_prefix(CURRENCY_GLYPH).unwrap();
        let groups: Vec<&str> = body.split(',').collect();
        let last = groups.len() - 1;
        for (i, g) in groups.iter().enumerate() {
            prop_assert!(g.chars().all(|c| c.is_ascii_digit()));
            if i == last {
                prop_assert!(g.len() <= 3);
                if groups.len() > 1 {
                    prop_assert_eq!(g.len(), 3);
                }
            } else if i == 0 {
                prop_assert!((1..=2).contains(&g.len()));
            } else {
                prop_assert_eq!(g.len(), 2);
            }
        }
    }

    /// 기호와 쉼표를 지우면 반올림한 정수로 되돌아간다.
    #[test]
    fn stripping_separators_recovers_rounded_value(amount in 0.0f64..1e15) {
        let s = format_inr(amount);
        let digits: String = s
            .trim_start_matches(CURRENCY_GLYPH)
            .chars()
            .filter(|c| *c != ',')
            .collect();
        let parsed: u64 = digits.parse().unwrap();
        prop_assert_eq!(parsed, amount.round() as u64);
    }

    /// 음수는 부호만 다르다.
    #[test]
    fn negative_mirrors_positive(amount in 1.0f64..1e12) {
        let pos = format_inr(amount);
        let neg = format_inr(-amount);
        prop_assert_eq!(neg, format!("-{pos}"));
    }

    #[test]
    fn grouping_keeps_all_digits(n in 0u64..u64::MAX) {
        let digits = n.to_string();
        let grouped = group_indian(&digits);
        prop_assert_eq!(grouped.replace(',', ""), digits);
    }
}
