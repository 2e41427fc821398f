use crate::model::coupon::{CouponKind, CouponRule};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Price breakdown for a stay. Amounts stay unrounded here; callers round
/// to two decimal places at persistence and presentation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub nights: i64,
    pub original: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl Quote {
    /// Pure calculation, never fails. A non-positive night count yields the
    /// all-zero "no charge" quote. The discount is clamped to the original
    /// amount so the total cannot go negative.
    pub fn calculate(
        price_per_night: Decimal,
        check_in: NaiveDate,
        check_out: NaiveDate,
        coupon: Option<&CouponRule>,
    ) -> Self {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Self::zero();
        }

        let original = price_per_night * Decimal::from(nights);
        let discount = match coupon {
            Some(rule) => raw_discount(rule, original).min(original),
            None => Decimal::ZERO,
        };

        Self {
            nights,
            original,
            discount,
            total: original - discount,
        }
    }

    fn zero() -> Self {
        Self {
            nights: 0,
            original: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

fn raw_discount(rule: &CouponRule, original: Decimal) -> Decimal {
    match rule.kind {
        CouponKind::Percent => original * rule.value / Decimal::ONE_HUNDRED,
        CouponKind::Fixed => rule.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_nights_with_ten_percent_coupon() {
        let coupon = CouponRule::new("SAVE10", CouponKind::Percent, dec!(10));
        let quote = Quote::calculate(
            dec!(100),
            date(2025, 12, 1),
            date(2025, 12, 4),
            Some(&coupon),
        );

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.original, dec!(300));
        assert_eq!(quote.discount, dec!(30));
        assert_eq!(quote.total, dec!(270));
    }

    #[test]
    fn no_coupon_charges_full_price() {
        let quote = Quote::calculate(dec!(89.50), date(2025, 6, 10), date(2025, 6, 12), None);

        assert_eq!(quote.nights, 2);
        assert_eq!(quote.original, dec!(179));
        assert_eq!(quote.discount, dec!(0));
        assert_eq!(quote.total, dec!(179));
    }

    #[test]
    fn non_positive_stay_is_no_charge() {
        let same_day = Quote::calculate(dec!(100), date(2025, 12, 1), date(2025, 12, 1), None);
        assert_eq!(same_day.nights, 0);
        assert_eq!(same_day.total, dec!(0));

        let inverted = Quote::calculate(dec!(100), date(2025, 12, 4), date(2025, 12, 1), None);
        assert_eq!(inverted.nights, 0);
        assert_eq!(inverted.original, dec!(0));
        assert_eq!(inverted.discount, dec!(0));
        assert_eq!(inverted.total, dec!(0));
    }

    #[test]
    fn fixed_coupon_subtracts_flat_amount() {
        let coupon = CouponRule::new("FLAT25", CouponKind::Fixed, dec!(25));
        let quote = Quote::calculate(
            dec!(100),
            date(2025, 12, 1),
            date(2025, 12, 3),
            Some(&coupon),
        );

        assert_eq!(quote.original, dec!(200));
        assert_eq!(quote.discount, dec!(25));
        assert_eq!(quote.total, dec!(175));
    }

    #[test]
    fn oversized_fixed_coupon_clamps_at_zero() {
        let coupon = CouponRule::new("BIG", CouponKind::Fixed, dec!(500));
        let quote = Quote::calculate(
            dec!(100),
            date(2025, 12, 1),
            date(2025, 12, 3),
            Some(&coupon),
        );

        assert_eq!(quote.original, dec!(200));
        assert_eq!(quote.discount, dec!(200));
        assert_eq!(quote.total, dec!(0));
    }

    #[test]
    fn percent_discount_matches_formula() {
        for (value, expected_total) in [
            (dec!(10), dec!(270)),
            (dec!(20), dec!(240)),
            (dec!(100), dec!(0)),
        ] {
            let coupon = CouponRule::new("C", CouponKind::Percent, value);
            let quote = Quote::calculate(
                dec!(100),
                date(2025, 12, 1),
                date(2025, 12, 4),
                Some(&coupon),
            );
            assert_eq!(quote.total, expected_total);
        }
    }
}
