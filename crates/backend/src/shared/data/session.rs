use std::sync::Mutex;

use once_cell::sync::OnceCell;

use crate::domain::a002_order::service::DeliveryApp;

/// Одна сессия приложения на процесс, как одно окно
static APP: OnceCell<Mutex<DeliveryApp>> = OnceCell::new();

pub fn initialize(app: DeliveryApp) -> anyhow::Result<()> {
    APP.set(Mutex::new(app))
        .map_err(|_| anyhow::anyhow!("Delivery session already initialized"))
}

/// Выполняет действие над сессией под блокировкой
pub fn with_app<R>(f: impl FnOnce(&mut DeliveryApp) -> R) -> anyhow::Result<R> {
    let cell = APP
        .get()
        .ok_or_else(|| anyhow::anyhow!("Delivery session has not been initialized"))?;
    let mut app = cell
        .lock()
        .map_err(|_| anyhow::anyhow!("Delivery session lock poisoned"))?;
    Ok(f(&mut app))
}
