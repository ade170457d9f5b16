//! Benefits attached to a member.
//!
//! Both variants carry the same fields, so a payload shape alone cannot tell
//! them apart. When a variant is requested by type ([`DiscountBenefit`] or
//! [`GiftBenefit`] decoded on their own) no tag is needed. Inside a
//! heterogeneous sequence the [`Benefit`] wrapper reads the `type` property,
//! which is the same property a variant exposes when serialized.
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::json_codec::omit;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BenefitType {
    Discount,
    Gift,
    /// Only ever the default; no concrete benefit reports it.
    #[default]
    None,
}

impl AsRef<str> for BenefitType {
    fn as_ref(&self) -> &str {
        match self {
            BenefitType::Discount => "DISCOUNT",
            BenefitType::Gift => "GIFT",
            BenefitType::None => "NONE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Benefit {
    Discount(DiscountBenefit),
    Gift(GiftBenefit),
}

impl Benefit {
    pub fn benefit_type(&self) -> BenefitType {
        match self {
            Benefit::Discount(benefit) => benefit.benefit_type(),
            Benefit::Gift(benefit) => benefit.benefit_type(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Benefit::Discount(benefit) => benefit.code(),
            Benefit::Gift(benefit) => benefit.code(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Benefit::Discount(benefit) => benefit.name(),
            Benefit::Gift(benefit) => benefit.name(),
        }
    }
}

impl From<DiscountBenefit> for Benefit {
    fn from(benefit: DiscountBenefit) -> Self {
        Benefit::Discount(benefit)
    }
}

impl From<GiftBenefit> for Benefit {
    fn from(benefit: GiftBenefit) -> Self {
        Benefit::Gift(benefit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BenefitBuilder<DiscountBenefit>")]
pub struct DiscountBenefit {
    #[serde(skip_serializing_if = "omit::if_unset")]
    code: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    name: Option<String>,
}

impl DiscountBenefit {
    pub fn builder() -> BenefitBuilder<DiscountBenefit> {
        BenefitBuilder::default()
    }

    pub fn benefit_type(&self) -> BenefitType {
        BenefitType::Discount
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<BenefitBuilder<DiscountBenefit>> for DiscountBenefit {
    fn from(builder: BenefitBuilder<DiscountBenefit>) -> Self {
        DiscountBenefit {
            code: builder.code,
            name: builder.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BenefitBuilder<GiftBenefit>")]
pub struct GiftBenefit {
    #[serde(skip_serializing_if = "omit::if_unset")]
    code: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    name: Option<String>,
}

impl GiftBenefit {
    pub fn builder() -> BenefitBuilder<GiftBenefit> {
        BenefitBuilder::default()
    }

    pub fn benefit_type(&self) -> BenefitType {
        BenefitType::Gift
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<BenefitBuilder<GiftBenefit>> for GiftBenefit {
    fn from(builder: BenefitBuilder<GiftBenefit>) -> Self {
        GiftBenefit {
            code: builder.code,
            name: builder.name,
        }
    }
}

/// Builder shared by every benefit variant; `T` picks the variant `build`
/// produces.
#[derive(Debug, Deserialize)]
#[serde(default, bound = "")]
pub struct BenefitBuilder<T> {
    code: Option<String>,
    name: Option<String>,
    #[serde(skip)]
    variant: PhantomData<T>,
}

impl<T> Default for BenefitBuilder<T> {
    fn default() -> Self {
        BenefitBuilder {
            code: None,
            name: None,
            variant: PhantomData,
        }
    }
}

impl<T> BenefitBuilder<T>
where
    T: From<BenefitBuilder<T>>,
{
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> T {
        T::from(self)
    }
}
