use std::path::{Path, PathBuf};

use contracts::shared::constants::DEFAULT_AGENTS;

use crate::shared::data::line_file;

/// Список курьеров в текстовом файле
#[derive(Debug, Clone)]
pub struct AgentManager {
    agents_file: PathBuf,
}

impl AgentManager {
    pub fn new(agents_file: impl Into<PathBuf>) -> Self {
        Self {
            agents_file: agents_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.agents_file
    }

    /// Нет файла, он пустой или не читается: список по умолчанию
    pub fn load_agents(&self) -> Vec<String> {
        match line_file::read_lines(&self.agents_file) {
            Ok(Some(agents)) if !agents.is_empty() => agents,
            Ok(_) => Self::default_agents(),
            Err(e) => {
                tracing::error!("Error loading agents: {}", e);
                Self::default_agents()
            }
        }
    }

    pub fn save_agents(&self, agents: &[String]) {
        if let Err(e) = line_file::write_lines(&self.agents_file, agents) {
            tracing::error!("Error saving agents: {}", e);
        }
    }

    pub fn default_agents() -> Vec<String> {
        DEFAULT_AGENTS.iter().map(|a| a.to_string()).collect()
    }
}
