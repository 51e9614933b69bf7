//! Валидаторы полей заказа
//!
//! Каждый валидатор возвращает флаг и сообщение для пользователя и никогда не падает.

use serde::{Deserialize, Serialize};

use super::constants::{PHONE_MAX_LENGTH, PHONE_MIN_LENGTH};

/// Результат проверки одного поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: "OK".into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Телефон: несколько номеров через "/", в каждом 8-15 цифр, допускаются
/// пробелы, дефисы, скобки и ведущий "+"
pub fn validate_phone(phone: &str) -> ValidationResult {
    let parts: Vec<&str> = phone
        .split('/')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return ValidationResult::fail("Empty phone field");
    }

    for part in parts {
        let cleaned: String = part
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return ValidationResult::fail(format!("Phone '{}' contains invalid characters", part));
        }

        let len = digits.len();
        if !(PHONE_MIN_LENGTH..=PHONE_MAX_LENGTH).contains(&len) {
            return ValidationResult::fail(format!(
                "Phone '{}' length must be {}–{} digits",
                part, PHONE_MIN_LENGTH, PHONE_MAX_LENGTH
            ));
        }
    }

    ValidationResult::ok()
}

pub fn validate_address(address: &str) -> ValidationResult {
    if address.trim().is_empty() {
        return ValidationResult::fail("Address cannot be empty");
    }
    ValidationResult::ok()
}

/// Число из ячейки доставки; тот же разбор, что в `validate_delivery_fee`
pub fn parse_delivery_fee(fee: &str) -> Option<f64> {
    fee.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Стоимость доставки: обязательна, число, не меньше нуля
pub fn validate_delivery_fee(fee: &str) -> ValidationResult {
    if fee.is_empty() {
        return ValidationResult::fail("Delivery fee is required");
    }

    match parse_delivery_fee(fee) {
        Some(value) if value < 0.0 => ValidationResult::fail("Delivery fee cannot be negative"),
        Some(_) => ValidationResult::ok(),
        None => ValidationResult::fail("Delivery fee must be a valid number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone_multiple_numbers() {
        let result = validate_phone("034 12 345 67 / +261321234567");
        assert!(result.is_valid);
        assert_eq!(result.message, "OK");
    }

    #[test]
    fn test_validate_phone_invalid() {
        let result = validate_phone("abc");
        assert!(!result.is_valid);
        assert_eq!(result.message, "Phone 'abc' contains invalid characters");

        assert!(!validate_phone("").is_valid);
        assert_eq!(validate_phone(" / ").message, "Empty phone field");
        assert_eq!(validate_phone("+").message, "Phone '+' contains invalid characters");
    }

    #[test]
    fn test_validate_phone_length() {
        assert!(validate_phone("(034) 12-345-67").is_valid);
        let short = validate_phone("1234567");
        assert!(!short.is_valid);
        assert_eq!(short.message, "Phone '1234567' length must be 8–15 digits");
        assert!(!validate_phone("1234567890123456").is_valid);
        assert!(!validate_phone("0341234567 / 12").is_valid);
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("Lot II M 85 Antananarivo").is_valid);
        assert!(!validate_address("   ").is_valid);
    }

    #[test]
    fn test_validate_delivery_fee() {
        assert!(validate_delivery_fee("3000").is_valid);
        assert!(validate_delivery_fee(" 0 ").is_valid);
        assert!(validate_delivery_fee("2500.5").is_valid);
        assert_eq!(validate_delivery_fee("").message, "Delivery fee is required");
        assert_eq!(
            validate_delivery_fee("-1").message,
            "Delivery fee cannot be negative"
        );
        assert_eq!(
            validate_delivery_fee("free").message,
            "Delivery fee must be a valid number"
        );
        assert!(!validate_delivery_fee("NaN").is_valid);
        assert!(validate_delivery_fee("1e3").is_valid);
    }

    #[test]
    fn test_parse_delivery_fee() {
        assert_eq!(parse_delivery_fee(" 4000 "), Some(4000.0));
        assert_eq!(parse_delivery_fee("1e3"), Some(1000.0));
        assert_eq!(parse_delivery_fee("-500"), Some(-500.0));
        assert_eq!(parse_delivery_fee("NaN"), None);
        assert_eq!(parse_delivery_fee("3 000 Ar"), None);
        assert_eq!(parse_delivery_fee(""), None);
    }
}
