use crate::enums::AlmKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Binding definitions
// ============================================================================

/// Общий интерфейс сохранённой конфигурации ALM
pub trait AlmBindingDefinition {
    /// Уникальный ключ конфигурации
    fn key(&self) -> &str;

    /// URL экземпляра платформы (у Azure и GitLab может отсутствовать)
    fn url(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubBindingDefinition {
    pub key: String,
    pub url: String,
    pub app_id: String,
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub private_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitbucketBindingDefinition {
    pub key: String,
    pub url: String,
    #[serde(default)]
    pub personal_access_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBindingDefinition {
    pub key: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub personal_access_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitlabBindingDefinition {
    pub key: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub personal_access_token: String,
}

impl AlmBindingDefinition for GithubBindingDefinition {
    fn key(&self) -> &str {
        &self.key
    }

    fn url(&self) -> Option<&str> {
        Some(&self.url)
    }
}

impl AlmBindingDefinition for BitbucketBindingDefinition {
    fn key(&self) -> &str {
        &self.key
    }

    fn url(&self) -> Option<&str> {
        Some(&self.url)
    }
}

impl AlmBindingDefinition for AzureBindingDefinition {
    fn key(&self) -> &str {
        &self.key
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl AlmBindingDefinition for GitlabBindingDefinition {
    fn key(&self) -> &str {
        &self.key
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Конфигурации одной платформы в исходном виде
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlmPlatformDefinitions {
    GitHub(Vec<GithubBindingDefinition>),
    Bitbucket(Vec<BitbucketBindingDefinition>),
    Azure(Vec<AzureBindingDefinition>),
    GitLab(Vec<GitlabBindingDefinition>),
}

impl AlmPlatformDefinitions {
    pub fn alm(&self) -> AlmKey {
        match self {
            Self::GitHub(_) => AlmKey::GitHub,
            Self::Bitbucket(_) => AlmKey::Bitbucket,
            Self::Azure(_) => AlmKey::Azure,
            Self::GitLab(_) => AlmKey::GitLab,
        }
    }

    /// Записи в исходном порядке через общий интерфейс
    pub fn entries(&self) -> Vec<&dyn AlmBindingDefinition> {
        match self {
            Self::GitHub(defs) => defs.iter().map(|d| d as &dyn AlmBindingDefinition).collect(),
            Self::Bitbucket(defs) => defs.iter().map(|d| d as &dyn AlmBindingDefinition).collect(),
            Self::Azure(defs) => defs.iter().map(|d| d as &dyn AlmBindingDefinition).collect(),
            Self::GitLab(defs) => defs.iter().map(|d| d as &dyn AlmBindingDefinition).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::GitHub(defs) => defs.len(),
            Self::Bitbucket(defs) => defs.len(),
            Self::Azure(defs) => defs.len(),
            Self::GitLab(defs) => defs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Все сохранённые конфигурации, сгруппированные по платформам
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmBindingDefinitions {
    #[serde(default)]
    pub github: Vec<GithubBindingDefinition>,
    #[serde(default)]
    pub bitbucket: Vec<BitbucketBindingDefinition>,
    #[serde(default)]
    pub azure: Vec<AzureBindingDefinition>,
    #[serde(default)]
    pub gitlab: Vec<GitlabBindingDefinition>,
}

impl AlmBindingDefinitions {
    /// Список одной платформы без преобразований
    pub fn definitions_for(&self, alm: AlmKey) -> AlmPlatformDefinitions {
        match alm {
            AlmKey::GitHub => AlmPlatformDefinitions::GitHub(self.github.clone()),
            AlmKey::Bitbucket => AlmPlatformDefinitions::Bitbucket(self.bitbucket.clone()),
            AlmKey::Azure => AlmPlatformDefinitions::Azure(self.azure.clone()),
            AlmKey::GitLab => AlmPlatformDefinitions::GitLab(self.gitlab.clone()),
        }
    }

    pub fn count_for(&self, alm: AlmKey) -> usize {
        match alm {
            AlmKey::GitHub => self.github.len(),
            AlmKey::Bitbucket => self.bitbucket.len(),
            AlmKey::Azure => self.azure.len(),
            AlmKey::GitLab => self.gitlab.len(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.github
            .iter()
            .map(|d| d.key.as_str())
            .chain(self.bitbucket.iter().map(|d| d.key.as_str()))
            .chain(self.azure.iter().map(|d| d.key.as_str()))
            .chain(self.gitlab.iter().map(|d| d.key.as_str()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.owner_of(key).is_some()
    }

    /// Платформа, которой принадлежит конфигурация с данным ключом
    pub fn owner_of(&self, key: &str) -> Option<AlmKey> {
        if self.github.iter().any(|d| d.key == key) {
            Some(AlmKey::GitHub)
        } else if self.bitbucket.iter().any(|d| d.key == key) {
            Some(AlmKey::Bitbucket)
        } else if self.azure.iter().any(|d| d.key == key) {
            Some(AlmKey::Azure)
        } else if self.gitlab.iter().any(|d| d.key == key) {
            Some(AlmKey::GitLab)
        } else {
            None
        }
    }

    /// Удаляет конфигурацию по ключу. Возвращает `true`, если что-то удалено.
    pub fn remove_key(&mut self, key: &str) -> bool {
        let before = self.total();
        self.github.retain(|d| d.key != key);
        self.bitbucket.retain(|d| d.key != key);
        self.azure.retain(|d| d.key != key);
        self.gitlab.retain(|d| d.key != key);
        self.total() != before
    }

    fn total(&self) -> usize {
        AlmKey::all().iter().map(|alm| self.count_for(*alm)).sum()
    }
}

// ============================================================================
// Binding status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlmBindingStatusType {
    Validating,
    Success,
    Failure,
    Warning,
}

/// Результат проверки конфигурации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlmBindingStatus {
    #[serde(rename = "type")]
    pub status_type: AlmBindingStatusType,
    #[serde(default)]
    pub failure_message: String,
    #[serde(default)]
    pub alert_success: bool,
}

impl AlmBindingStatus {
    pub fn validating() -> Self {
        Self {
            status_type: AlmBindingStatusType::Validating,
            failure_message: String::new(),
            alert_success: false,
        }
    }
}

/// Статусы по ключу конфигурации
pub type AlmBindingStatusMap = HashMap<String, AlmBindingStatus>;
