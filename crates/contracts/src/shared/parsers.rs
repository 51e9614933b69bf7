//! Разбор свободного текста поля "Product(s)"

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Код товара, затем необязательный разделитель (x, X, :, пробел) и количество со знаком
static PRODUCT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9]+)\s*(?:[:xX]?\s*(-?[0-9]+))?").unwrap());

static ITEM_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;,]").unwrap());

/// Одна позиция из поля товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub code: String,
    pub qty: i64,
}

impl ProductQuantity {
    pub fn new(code: impl Into<String>, qty: i64) -> Self {
        Self {
            code: code.into(),
            qty,
        }
    }
}

/// Разбирает текст вида "CA x 2, TA:1" в список позиций
///
/// Поддерживаемые формы: `CA x 2`, `TA:3`, `CG`, `BS 100`, несколько через `,` или `;`.
/// Коды приводятся к верхнему регистру, дубликаты не объединяются,
/// отрицательные количества (возвраты) допустимы.
pub fn parse_product_field(field_text: &str) -> Vec<ProductQuantity> {
    if field_text.trim().is_empty() {
        return Vec::new();
    }

    let mut parsed = Vec::new();

    for item in ITEM_SEPARATOR.split(field_text) {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }

        match PRODUCT_PATTERN.captures(item) {
            Some(caps) => {
                let code = caps[1].to_uppercase();
                let qty = caps
                    .get(2)
                    .and_then(|m| m.as_str().parse::<i64>().ok())
                    .unwrap_or(1);
                parsed.push(ProductQuantity::new(code, qty));
            }
            None => parsed.push(parse_by_whitespace(item)),
        }
    }

    parsed
}

// Запасной вариант, когда токен начинается не с буквы/цифры
fn parse_by_whitespace(item: &str) -> ProductQuantity {
    let tokens: Vec<&str> = item.split_whitespace().collect();
    if let [code, qty] = tokens.as_slice() {
        if let Ok(qty) = qty.parse::<i64>() {
            return ProductQuantity::new(code.to_uppercase(), qty);
        }
    }
    ProductQuantity::new(item.to_uppercase(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_items() {
        assert_eq!(
            parse_product_field("CA x 2, TA:1"),
            vec![ProductQuantity::new("CA", 2), ProductQuantity::new("TA", 1)]
        );
    }

    #[test]
    fn test_code_only() {
        assert_eq!(parse_product_field("CG"), vec![ProductQuantity::new("CG", 1)]);
    }

    #[test]
    fn test_separators() {
        assert_eq!(parse_product_field("BS 100"), vec![ProductQuantity::new("BS", 100)]);
        assert_eq!(parse_product_field("ta:3"), vec![ProductQuantity::new("TA", 3)]);
        assert_eq!(parse_product_field("sg X 4"), vec![ProductQuantity::new("SG", 4)]);
        assert_eq!(
            parse_product_field("CA;G x 1; ;"),
            vec![ProductQuantity::new("CA", 1), ProductQuantity::new("G", 1)]
        );
    }

    #[test]
    fn test_negative_and_duplicates() {
        assert_eq!(
            parse_product_field("CA x -1, CA x 3"),
            vec![ProductQuantity::new("CA", -1), ProductQuantity::new("CA", 3)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_product_field("").is_empty());
        assert!(parse_product_field("   ").is_empty());
        assert!(parse_product_field(" , ;").is_empty());
    }

    #[test]
    fn test_whitespace_fallback() {
        assert_eq!(parse_product_field("#ca 5"), vec![ProductQuantity::new("#CA", 5)]);
        assert_eq!(
            parse_product_field("-- promo"),
            vec![ProductQuantity::new("-- PROMO", 1)]
        );
    }

    #[test]
    fn test_quantity_overflow_defaults_to_one() {
        assert_eq!(
            parse_product_field("CA x 99999999999999999999"),
            vec![ProductQuantity::new("CA", 1)]
        );
    }
}
