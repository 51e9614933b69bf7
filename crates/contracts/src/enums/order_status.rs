use serde::{Deserialize, Serialize};

/// Статусы заказа доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Ok")]
    Ok,
    #[serde(rename = "Ok with retour")]
    OkWithRetour,
    #[serde(rename = "Cancelled")]
    Cancelled,
    #[serde(rename = "Reported")]
    Reported,
    #[serde(rename = "Pending")]
    Pending,
}

impl OrderStatus {
    /// Текст статуса, как он хранится в ячейке и в CSV
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Ok => "Ok",
            OrderStatus::OkWithRetour => "Ok with retour",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Reported => "Reported",
            OrderStatus::Pending => "Pending",
        }
    }

    /// Цвет фона строки для статуса
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "#fffce6",
            OrderStatus::Ok => "#e6ffed",
            OrderStatus::OkWithRetour => "#fff7e6",
            OrderStatus::Cancelled => "#ffe6e6",
            OrderStatus::Reported => "#ffe8f0",
        }
    }

    /// Все статусы в порядке кнопок панели
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Ok,
            OrderStatus::OkWithRetour,
            OrderStatus::Cancelled,
            OrderStatus::Reported,
            OrderStatus::Pending,
        ]
    }

    /// Парсинг из текста ячейки (точное совпадение)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Ok" => Some(OrderStatus::Ok),
            "Ok with retour" => Some(OrderStatus::OkWithRetour),
            "Cancelled" => Some(OrderStatus::Cancelled),
            "Reported" => Some(OrderStatus::Reported),
            "Pending" => Some(OrderStatus::Pending),
            _ => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
