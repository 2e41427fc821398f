use kernel::model::coupon::{CouponKind, CouponRule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCouponRequest {
    pub code: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKindName {
    Percent,
    Fixed,
}

impl From<CouponKind> for CouponKindName {
    fn from(value: CouponKind) -> Self {
        match value {
            CouponKind::Percent => Self::Percent,
            CouponKind::Fixed => Self::Fixed,
        }
    }
}

#[derive(Serialize)]
pub struct CouponResponse {
    #[serde(rename = "type")]
    pub kind: CouponKindName,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

impl From<&CouponRule> for CouponResponse {
    fn from(value: &CouponRule) -> Self {
        Self {
            kind: value.kind.into(),
            value: value.value,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponValidationResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<CouponResponse>,
}
