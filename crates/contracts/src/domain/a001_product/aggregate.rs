use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки создания товара
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("Product code is required")]
    MissingCode,

    #[error("Product name is required")]
    MissingName,

    #[error("Product price cannot be negative")]
    NegativePrice,
}

// ============================================================================
// Product
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Код товара ("CA", "TA", ...)
    pub code: String,
    pub name: String,
    /// Цена за единицу
    pub price: f64,
    /// Единица измерения ("unit", "g")
    pub unit: String,
}

impl Product {
    pub const DEFAULT_UNIT: &'static str = "unit";

    /// Создаёт товар с проверкой полей
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        unit: Option<String>,
    ) -> Result<Self, ProductError> {
        let product = Self {
            code: code.into(),
            name: name.into(),
            price,
            unit: unit
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_UNIT.to_string()),
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.code.is_empty() {
            return Err(ProductError::MissingCode);
        }
        if self.name.is_empty() {
            return Err(ProductError::MissingName);
        }
        if self.price < 0.0 {
            return Err(ProductError::NegativePrice);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new("CA", "Creme Affinante", 25000.0, None).unwrap();
        assert_eq!(product.unit, "unit");

        let soap = Product::new("BS", "Base de Savon", 50.0, Some("g".into())).unwrap();
        assert_eq!(soap.unit, "g");
    }

    #[test]
    fn test_invalid_product() {
        assert_eq!(
            Product::new("", "Gaine", 1.0, None),
            Err(ProductError::MissingCode)
        );
        assert_eq!(Product::new("G", "", 1.0, None), Err(ProductError::MissingName));
        assert_eq!(
            Product::new("G", "Gaine", -1.0, None),
            Err(ProductError::NegativePrice)
        );
    }
}
