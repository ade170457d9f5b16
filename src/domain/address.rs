use serde::{Deserialize, Serialize};

use crate::json_codec::omit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AddressBuilder")]
pub struct Address {
    #[serde(skip_serializing_if = "omit::if_unset")]
    city: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    state: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    country: Option<String>,
    #[serde(skip_serializing_if = "omit::if_unset")]
    postal_code: Option<String>,
}

/// Unknown fields are dropped while the builder is filled.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressBuilder {
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    pub fn to_builder(&self) -> AddressBuilder {
        AddressBuilder {
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
        }
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }
}

impl AddressBuilder {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.postal_code,
        }
    }
}

impl From<AddressBuilder> for Address {
    fn from(builder: AddressBuilder) -> Self {
        builder.build()
    }
}
