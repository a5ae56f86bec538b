use serde::{Deserialize, Deserializer, Serialize};

use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub i64);

impl From<i64> for MenuItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads an id that may be `null`. A null id is the unassigned one.
fn nullable_id<'de, D>(deserializer: D) -> Result<MenuItemId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?
        .map(MenuItemId)
        .unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSize {
    Small,
    Medium,
    Large,
}

/// A named group of options the customer picks from, e.g. "Milk Type".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub options: Vec<String>,
}

/// A promotion attached to an item.
///
/// Carried through the service untouched. On the wire the variant is chosen by a `type` tag:
/// `{"type": "discount", "amount": 1.5}` or `{"type": "bogo", "description": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Promotion {
    #[serde(rename = "discount")]
    Discount { amount: f64 },
    #[serde(rename = "bogo")]
    BuyOneGetOne { description: String },
}

/// A sellable item on the menu.
///
/// # Record Store
/// This struct implements the [`Record`](record_store::Record) trait (see
/// [`menu_actor::entity`](crate::menu_actor::entity)), so it can be owned by a
/// [`StoreActor`](record_store::StoreActor).
///
/// The JSON shape uses camelCase keys (`extraItems`). `id` is server-assigned: a request body may
/// omit it, and whatever it carries is replaced on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default, deserialize_with = "nullable_id")]
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub size: Option<ItemSize>,
    #[serde(default)]
    pub extra_items: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub promotion: Option<Promotion>,
}

impl MenuItem {
    /// Creates an item with only the required fields set and no id assigned yet.
    ///
    /// # Arguments
    /// * `name` - Display name, 3 to 50 characters
    /// * `price` - Non-negative price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: MenuItemId::default(),
            name: name.into(),
            description: None,
            price,
            size: None,
            extra_items: Vec::new(),
            modifiers: Vec::new(),
            promotion: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_size(mut self, size: ItemSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_extra_items<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_items = extras.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_modifier<I, S>(mut self, name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers.push(Modifier {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

/// Payload for the partial update.
///
/// Only these three fields are ever rewritten by an update. `size`, `extraItems`, `modifiers` and
/// `promotion` keep their stored values.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemPatch {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<MenuItem> for MenuItemPatch {
    fn from(item: MenuItem) -> Self {
        Self {
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}

/// A create or update request as it arrives on the wire.
///
/// Every field may be absent or `null`. [`MenuItemBody::validate`] decides whether the body is
/// acceptable and turns it into an unsaved [`MenuItem`]. The `id` is read but never used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItemBody {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub size: Option<ItemSize>,
    pub extra_items: Option<Vec<String>>,
    pub modifiers: Option<Vec<Modifier>>,
    pub promotion: Option<Promotion>,
}
