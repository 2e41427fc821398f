use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponKind {
    Percent,
    Fixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CouponRule {
    pub code: String,
    pub kind: CouponKind,
    pub value: Decimal,
}

impl CouponRule {
    pub fn new(code: impl Into<String>, kind: CouponKind, value: Decimal) -> Self {
        Self {
            code: code.into().to_uppercase(),
            kind,
            value,
        }
    }
}

/// Immutable promo-code table, injected at wiring time so tests can supply
/// their own rule sets. Lookup never fails; unknown codes simply miss.
pub struct CouponRegistry {
    rules: HashMap<String, CouponRule>,
}

impl CouponRegistry {
    pub fn new(rules: impl IntoIterator<Item = CouponRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| (rule.code.clone(), rule))
            .collect();
        Self { rules }
    }

    pub fn lookup(&self, code: &str) -> Option<&CouponRule> {
        self.rules.get(code.trim().to_uppercase().as_str())
    }
}

impl Default for CouponRegistry {
    fn default() -> Self {
        Self::new([
            CouponRule::new("SAVE10", CouponKind::Percent, Decimal::from(10)),
            CouponRule::new("SAVE20", CouponKind::Percent, Decimal::from(20)),
            CouponRule::new("NEWUSER", CouponKind::Percent, Decimal::from(15)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = CouponRegistry::default();

        let rule = registry.lookup("save10").unwrap();
        assert_eq!(rule.code, "SAVE10");
        assert_eq!(rule.kind, CouponKind::Percent);
        assert_eq!(rule.value, dec!(10));

        assert_eq!(registry.lookup("SAVE10"), registry.lookup("  save10  "));
    }

    #[test]
    fn unknown_code_misses_without_error() {
        let registry = CouponRegistry::default();
        assert!(registry.lookup("BADCODE").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn injected_rule_set_replaces_defaults() {
        let registry = CouponRegistry::new([CouponRule::new(
            "flat25",
            CouponKind::Fixed,
            dec!(25),
        )]);

        let rule = registry.lookup("FLAT25").unwrap();
        assert_eq!(rule.kind, CouponKind::Fixed);
        assert_eq!(rule.value, dec!(25));
        assert!(registry.lookup("SAVE10").is_none());
    }
}
