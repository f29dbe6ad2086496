use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Платформы ALM (хостинг кода / CI), с которыми настраивается интеграция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlmKey {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "bitbucket")]
    Bitbucket,
    #[serde(rename = "azure")]
    Azure,
    #[serde(rename = "gitlab")]
    GitLab,
}

impl AlmKey {
    /// Код платформы (совпадает с ключом в JSON и в query `?alm=`)
    pub fn code(&self) -> &'static str {
        match self {
            AlmKey::GitHub => "github",
            AlmKey::Bitbucket => "bitbucket",
            AlmKey::Azure => "azure",
            AlmKey::GitLab => "gitlab",
        }
    }

    /// Человекочитаемое название
    pub const fn display_name(&self) -> &'static str {
        match self {
            AlmKey::GitHub => "GitHub",
            AlmKey::Bitbucket => "Bitbucket Server",
            AlmKey::Azure => "Azure DevOps Server",
            AlmKey::GitLab => "GitLab",
        }
    }

    /// Имя файла иконки в `/images/alm/`
    pub fn icon_file(&self) -> &'static str {
        match self {
            AlmKey::GitHub => "github.svg",
            AlmKey::Bitbucket => "bitbucket.svg",
            AlmKey::Azure => "azure.svg",
            AlmKey::GitLab => "gitlab.svg",
        }
    }

    /// Все платформы в порядке объявления
    pub fn all() -> [AlmKey; 4] {
        [AlmKey::GitHub, AlmKey::Bitbucket, AlmKey::Azure, AlmKey::GitLab]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "github" => Some(AlmKey::GitHub),
            "bitbucket" => Some(AlmKey::Bitbucket),
            "azure" => Some(AlmKey::Azure),
            "gitlab" => Some(AlmKey::GitLab),
            _ => None,
        }
    }
}

impl fmt::Display for AlmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AlmKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| anyhow::anyhow!("unknown ALM code: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for alm in AlmKey::all() {
            assert_eq!(AlmKey::from_code(alm.code()), Some(alm));
            assert_eq!(alm.to_string(), alm.code());
        }
    }

    #[test]
    fn test_all_keeps_declaration_order() {
        assert_eq!(
            AlmKey::all(),
            [AlmKey::GitHub, AlmKey::Bitbucket, AlmKey::Azure, AlmKey::GitLab]
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_code() {
        let err = "svn".parse::<AlmKey>().unwrap_err();
        assert!(err.to_string().contains("svn"));
        assert_eq!("gitlab".parse::<AlmKey>().unwrap(), AlmKey::GitLab);
        // регистр имеет значение
        assert!("GitHub".parse::<AlmKey>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&AlmKey::Azure).unwrap(), "\"azure\"");
        let alm: AlmKey = serde_json::from_str("\"bitbucket\"").unwrap();
        assert_eq!(alm, AlmKey::Bitbucket);
    }

    #[test]
    fn test_icon_files() {
        let files: Vec<_> = AlmKey::all().iter().map(|a| a.icon_file()).collect();
        assert_eq!(
            files,
            vec!["github.svg", "bitbucket.svg", "azure.svg", "gitlab.svg"]
        );
    }
}
