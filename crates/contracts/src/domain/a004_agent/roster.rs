use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки редактирования списка курьеров
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentRosterError {
    #[error("Agent name cannot be empty.")]
    EmptyName,

    #[error("This agent already exists.")]
    Duplicate,

    #[error("Agent '{0}' not found.")]
    NotFound(String),

    #[error("You must have at least one agent.")]
    EmptyRoster,
}

/// Список курьеров, редактируемый в диалоге "Manage Agents"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRoster {
    agents: Vec<String>,
}

impl AgentRoster {
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn into_agents(self) -> Vec<String> {
        self.agents
    }

    pub fn add(&mut self, name: &str) -> Result<(), AgentRosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AgentRosterError::EmptyName);
        }
        if self.agents.iter().any(|a| a == name) {
            return Err(AgentRosterError::Duplicate);
        }
        self.agents.push(name.to_string());
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), AgentRosterError> {
        match self.agents.iter().position(|a| a == name) {
            Some(index) => {
                self.agents.remove(index);
                Ok(())
            }
            None => Err(AgentRosterError::NotFound(name.to_string())),
        }
    }

    /// Сохранять можно только непустой список
    pub fn validate_for_save(&self) -> Result<(), AgentRosterError> {
        if self.agents.is_empty() {
            return Err(AgentRosterError::EmptyRoster);
        }
        Ok(())
    }

    /// Собирает список из присланных имён с теми же проверками, что и `add`
    pub fn from_names<I, S>(names: I) -> Result<Self, AgentRosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::default();
        for name in names {
            roster.add(name.as_ref())?;
        }
        roster.validate_for_save()?;
        Ok(roster)
    }
}
