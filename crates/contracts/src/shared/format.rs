//! Форматирование сумм и разбор чисел из ячеек

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::CURRENCY_SUFFIX;

static CURRENCY_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ar").unwrap());

/// Число, разобранное из текста ячейки
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(&self) -> f64 {
        match self {
            Numeric::Int(v) => *v as f64,
            Numeric::Float(v) => *v,
        }
    }

    fn is_negative(&self) -> bool {
        match self {
            Numeric::Int(v) => *v < 0,
            Numeric::Float(v) => *v < 0.0,
        }
    }
}

/// Вставляет пробел каждые 3 цифры с конца
///
/// ```
/// use contracts::shared::format::group_thousands;
/// assert_eq!(group_thousands("1234567"), "1 234 567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Форматирует сумму: разделитель тысяч (пробел), копейки только для дробных, суффикс "Ar"
///
/// # Примеры
///
/// ```
/// use contracts::shared::format::format_currency;
/// assert_eq!(format_currency(25000.0), "25 000 Ar");
/// assert_eq!(format_currency(-1000.5), "-1 000.50 Ar");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let prefix = if value < 0.0 { "-" } else { "" };
    let v_abs = value.abs();

    let formatted = if (v_abs - v_abs.round()).abs() < 0.0001 {
        group_thousands(&format!("{:.0}", v_abs.round()))
    } else {
        let fixed = format!("{:.2}", v_abs);
        match fixed.split_once('.') {
            Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
            None => group_thousands(&fixed),
        }
    };

    format!("{}{} {}", prefix, formatted, CURRENCY_SUFFIX)
}

/// То же для произвольного текста; нечисловой текст возвращается как есть
pub fn format_currency_text(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => format_currency(v),
        _ => value.to_string(),
    }
}

/// Разбор числа из форматов "25000", "25 000", "25,000", "25000 Ar"
///
/// Возвращает `None` если разобрать не удалось (или число отрицательное
/// при `allow_negative == false`).
pub fn parse_numeric(value: &str, allow_negative: bool) -> Option<Numeric> {
    let cleaned = value.trim().replace(' ', "");
    let cleaned = CURRENCY_MARK.replace_all(&cleaned, "").replace(',', "");

    if cleaned.is_empty() {
        return None;
    }

    let parsed = if cleaned.contains('.') {
        cleaned.parse::<f64>().ok().map(Numeric::Float)
    } else {
        cleaned.parse::<i64>().ok().map(Numeric::Int)
    }?;

    if !allow_negative && parsed.is_negative() {
        return None;
    }
    Some(parsed)
}

/// Каждое слово имени с заглавной буквы
pub fn capitalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(25000.0), "25 000 Ar");
        assert_eq!(format_currency(-1000.5), "-1 000.50 Ar");
        assert_eq!(format_currency(0.0), "0 Ar");
        assert_eq!(format_currency(999.0), "999 Ar");
        assert_eq!(format_currency(1234567.891), "1 234 567.89 Ar");
        assert_eq!(format_currency(53000.00001), "53 000 Ar");
    }

    #[test]
    fn test_format_currency_text() {
        assert_eq!(format_currency_text("3000"), "3 000 Ar");
        assert_eq!(format_currency_text("abc"), "abc");
        assert_eq!(format_currency_text(""), "");
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("25000", true), Some(Numeric::Int(25000)));
        assert_eq!(parse_numeric("25 000", true), Some(Numeric::Int(25000)));
        assert_eq!(parse_numeric("25,000", true), Some(Numeric::Int(25000)));
        assert_eq!(parse_numeric("25 000 Ar", true), Some(Numeric::Int(25000)));
        assert_eq!(parse_numeric("1 000.50 AR", true), Some(Numeric::Float(1000.5)));
        assert_eq!(parse_numeric("-1 000 Ar", true), Some(Numeric::Int(-1000)));
        assert_eq!(parse_numeric("-1 000 Ar", false), None);
        assert_eq!(parse_numeric("   ", true), None);
        assert_eq!(parse_numeric("abc", true), None);
    }

    #[test]
    fn test_capitalize_name() {
        assert_eq!(capitalize_name("jean  RAKOTO"), "Jean Rakoto");
        assert_eq!(capitalize_name(""), "");
    }
}
