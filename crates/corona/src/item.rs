use crate::error::ConfigurationError;
use crate::{MAX_OPTIONS, MIN_OPTIONS};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconRef(String);

crate::impl_token_newtype!(IconRef);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ColorRef(String);

crate::impl_token_newtype!(ColorRef);

/// One option of the selector. Both references are resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionItem {
    pub icon: IconRef,
    pub color: ColorRef,
}

impl SelectionItem {
    pub fn new(icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: IconRef::new(icon),
            color: ColorRef::new(color),
        }
    }
}

/// Ordered options; index `i` is the `i`-th sector clockwise from 0°.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct OptionSet(Vec<SelectionItem>);

impl OptionSet {
    pub fn new(items: Vec<SelectionItem>) -> Result<Self, ConfigurationError> {
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&items.len()) {
            return Err(ConfigurationError::OptionCount(items.len()));
        }
        Ok(Self(items))
    }
}

impl TryFrom<Vec<SelectionItem>> for OptionSet {
    type Error = ConfigurationError;

    fn try_from(items: Vec<SelectionItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}
