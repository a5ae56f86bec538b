//! Field constraints for request bodies.
//!
//! Checks run in a fixed field order and stop at the first violation, so a response always names
//! exactly one field. Request bodies arrive as [`MenuItemBody`], where `name` and `price` may still
//! be missing.

use thiserror::Error;

use super::menu_item::{MenuItem, MenuItemBody, MenuItemId, Modifier};

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 100;
const EXTRA_ITEMS_MAX: usize = 5;

/// The first constraint a body violated.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Validation failed for field '{field}': {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

const NOT_NULL: &str = "must not be null";

fn size_between(field: &str, len: usize, min: usize, max: usize) -> Result<(), ValidationError> {
    if len < min || len > max {
        return Err(ValidationError::new(
            field,
            format!("size must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    size_between("name", name.chars().count(), NAME_MIN, NAME_MAX)
}

fn check_description(description: Option<&str>) -> Result<(), ValidationError> {
    match description {
        Some(d) => size_between("description", d.chars().count(), 0, DESCRIPTION_MAX),
        None => Ok(()),
    }
}

fn check_price(price: f64) -> Result<(), ValidationError> {
    if price < 0.0 {
        return Err(ValidationError::new(
            "price",
            "must be greater than or equal to 0",
        ));
    }
    Ok(())
}

fn check_extras(extra_items: &[String], modifiers: &[Modifier]) -> Result<(), ValidationError> {
    size_between("extraItems", extra_items.len(), 0, EXTRA_ITEMS_MAX)?;

    for (i, modifier) in modifiers.iter().enumerate() {
        if modifier.options.is_empty() {
            return Err(ValidationError::new(
                format!("modifiers[{}].options", i),
                "must not be empty",
            ));
        }
    }
    Ok(())
}

impl MenuItem {
    /// Checks the body constraints in order: `name`, `description`, `price`, `extraItems`,
    /// then each modifier's `options`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_description(self.description.as_deref())?;
        check_price(self.price)?;
        check_extras(&self.extra_items, &self.modifiers)
    }
}

impl MenuItemBody {
    /// Checks a request body and builds the unsaved item from it.
    ///
    /// Same order as [`MenuItem::validate`]. A missing or `null` `name` or `price` is reported
    /// before that field's other constraints. The body's `id` is dropped.
    pub fn validate(self) -> Result<MenuItem, ValidationError> {
        let name = self
            .name
            .ok_or_else(|| ValidationError::new("name", NOT_NULL))?;
        check_name(&name)?;
        check_description(self.description.as_deref())?;

        let price = self
            .price
            .ok_or_else(|| ValidationError::new("price", NOT_NULL))?;
        check_price(price)?;

        let extra_items = self.extra_items.unwrap_or_default();
        let modifiers = self.modifiers.unwrap_or_default();
        check_extras(&extra_items, &modifiers)?;

        Ok(MenuItem {
            id: MenuItemId::default(),
            name,
            description: self.description,
            price,
            size: self.size,
            extra_items,
            modifiers,
            promotion: self.promotion,
        })
    }
}
