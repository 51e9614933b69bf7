use std::path::{Path, PathBuf};

use contracts::shared::constants::MAX_ADDRESS_HISTORY;

use crate::shared::data::line_file;

/// История адресов для автодополнения (новые сверху)
#[derive(Debug, Clone)]
pub struct AddressManager {
    addresses_file: PathBuf,
}

impl AddressManager {
    pub fn new(addresses_file: impl Into<PathBuf>) -> Self {
        Self {
            addresses_file: addresses_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.addresses_file
    }

    /// Ошибка чтения не пробрасывается: история просто пустая
    pub fn load_addresses(&self) -> Vec<String> {
        match line_file::read_lines(&self.addresses_file) {
            Ok(lines) => lines.unwrap_or_default(),
            Err(e) => {
                tracing::error!(
                    "Error loading addresses from {}: {}",
                    self.addresses_file.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Поднимает адрес наверх истории (без дублей, не больше MAX_ADDRESS_HISTORY)
    pub fn save_address(&self, address: &str) {
        let address = address.trim();
        if address.is_empty() {
            return;
        }

        let mut addresses = self.load_addresses();
        addresses.retain(|a| a != address);
        addresses.insert(0, address.to_string());
        addresses.truncate(MAX_ADDRESS_HISTORY);

        if let Err(e) = line_file::write_lines(&self.addresses_file, &addresses) {
            tracing::error!("Error saving address: {}", e);
        }
    }

    pub fn clear_history(&self) {
        if !self.addresses_file.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.addresses_file) {
            tracing::error!("Error clearing address history: {}", e);
        }
    }

    /// Подсказки для ввода адреса: совпадение без учёта регистра, порядок истории
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        self.load_addresses()
            .into_iter()
            .filter(|a| needle.is_empty() || a.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (tempfile::TempDir, AddressManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = AddressManager::new(dir.path().join("addresses.txt"));
        (dir, manager)
    }

    #[test]
    fn test_missing_file_gives_empty_history() {
        let (_dir, manager) = manager();
        assert!(manager.load_addresses().is_empty());
    }

    #[test]
    fn test_most_recent_first_without_duplicates() {
        let (_dir, manager) = manager();
        manager.save_address("Analakely");
        manager.save_address("  Ivandry ");
        manager.save_address("Analakely");
        manager.save_address("   ");

        assert_eq!(
            manager.load_addresses(),
            vec!["Analakely".to_string(), "Ivandry".to_string()]
        );
    }

    #[test]
    fn test_history_is_capped() {
        let (_dir, manager) = manager();
        let many: Vec<String> = (0..MAX_ADDRESS_HISTORY).map(|i| format!("Lot {}", i)).collect();
        line_file::write_lines(manager.path(), &many).unwrap();

        manager.save_address("Behoririka");
        let loaded = manager.load_addresses();
        assert_eq!(loaded.len(), MAX_ADDRESS_HISTORY);
        assert_eq!(loaded[0], "Behoririka");
        assert_eq!(loaded[1], "Lot 0");
        assert!(!loaded.contains(&format!("Lot {}", MAX_ADDRESS_HISTORY - 1)));
    }

    #[test]
    fn test_clear_and_suggest() {
        let (_dir, manager) = manager();
        manager.save_address("Ambohijatovo");
        manager.save_address("Ivato Aeroport");
        manager.save_address("Ambanidia");

        assert_eq!(
            manager.suggest("amb", 10),
            vec!["Ambanidia".to_string(), "Ambohijatovo".to_string()]
        );
        assert_eq!(manager.suggest("", 1), vec!["Ambanidia".to_string()]);

        manager.clear_history();
        assert!(!manager.path().exists());
        assert!(manager.load_addresses().is_empty());
        manager.clear_history();
    }
}
