use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::address::Address;
use crate::domain::benefit::Benefit;
use crate::domain::status_type::StatusType;
use crate::json_codec::omit;

/// Member profile as served by the upstream member-info service.
///
/// Values are only produced by [`MemberInfoBuilder::build`], either directly or
/// while deserializing, and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MemberInfoBuilder")]
pub struct MemberInfo {
    #[serde(skip_serializing_if = "omit::if_unset")]
    id: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset_or_zero")]
    member_id: Option<i64>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    status_type: Option<StatusType>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    given_name: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    family_name: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    address: Option<Address>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    products: Option<Vec<Benefit>>,
    #[serde(skip_serializing_if = "omit::if_zero")]
    creation_millis: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberInfoBuilder {
    id: Option<String>,
    member_id: Option<i64>,
    status_type: Option<StatusType>,
    given_name: Option<String>,
    family_name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    address: Option<Address>,
    products: Option<Vec<Benefit>>,
    creation_millis: i64,
}

impl MemberInfo {
    pub fn builder() -> MemberInfoBuilder {
        MemberInfoBuilder::default()
    }

    pub fn to_builder(&self) -> MemberInfoBuilder {
        MemberInfoBuilder {
            id: self.id.clone(),
            member_id: self.member_id,
            status_type: self.status_type,
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            date_of_birth: self.date_of_birth,
            address: self.address.clone(),
            products: self.products.clone(),
            creation_millis: self.creation_millis,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn member_id(&self) -> Option<i64> {
        self.member_id
    }

    pub fn status_type(&self) -> Option<StatusType> {
        self.status_type
    }

    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn products(&self) -> Option<&[Benefit]> {
        self.products.as_deref()
    }

    pub fn creation_millis(&self) -> i64 {
        self.creation_millis
    }
}

impl MemberInfoBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn member_id(mut self, member_id: i64) -> Self {
        self.member_id = Some(member_id);
        self
    }

    pub fn status_type(mut self, status_type: StatusType) -> Self {
        self.status_type = Some(status_type);
        self
    }

    pub fn given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    pub fn family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn products(mut self, products: Vec<Benefit>) -> Self {
        self.products = Some(products);
        self
    }

    pub fn creation_millis(mut self, creation_millis: i64) -> Self {
        self.creation_millis = creation_millis;
        self
    }

    pub fn build(self) -> MemberInfo {
        MemberInfo {
            id: self.id,
            member_id: self.member_id,
            status_type: self.status_type,
            given_name: self.given_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            address: self.address,
            products: self.products,
            creation_millis: self.creation_millis,
        }
    }
}

impl From<MemberInfoBuilder> for MemberInfo {
    fn from(builder: MemberInfoBuilder) -> Self {
        builder.build()
    }
}
