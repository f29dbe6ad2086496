use super::bootstrap::AlmSettingsBootstrap;
use contracts::domain::a001_alm_settings::{
    AlmBindingDefinitions, AlmBindingStatus, AlmBindingStatusMap,
};
use contracts::enums::AlmKey;
use std::collections::{HashMap, HashSet};

/// Состояние страницы интеграций, которым владеет контейнер.
///
/// Рендерер получает из него только срезы; все переходы - здесь.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlmIntegrationState {
    pub current_alm: Option<AlmKey>,
    pub definitions: AlmBindingDefinitions,
    pub definition_status: AlmBindingStatusMap,
    pub definition_key_for_deletion: Option<String>,
    pub project_count: Option<u32>,
    pub loading_alm_definitions: bool,
    pub loading_project_count: bool,
    /// Количество привязанных проектов по ключу конфигурации
    bound_projects: HashMap<String, u32>,
    /// Удалённые на этой странице ключи; повторная загрузка их не возвращает
    deleted_keys: HashSet<String>,
}

impl AlmIntegrationState {
    pub fn new(current_alm: Option<AlmKey>, bootstrap: &AlmSettingsBootstrap) -> Self {
        Self {
            current_alm,
            definitions: bootstrap.definitions.clone(),
            definition_status: bootstrap.definition_status.clone(),
            bound_projects: bootstrap.bound_projects.clone(),
            ..Default::default()
        }
    }

    pub fn select_alm(&mut self, alm: AlmKey) {
        self.current_alm = Some(alm);
    }

    /// Запрос на удаление: открывает окно подтверждения и начинает
    /// загрузку числа привязанных проектов.
    pub fn request_delete(&mut self, key: &str) {
        self.definition_key_for_deletion = Some(key.to_string());
        self.project_count = None;
        self.loading_project_count = true;
    }

    /// Завершает загрузку числа проектов для ожидающего удаления ключа.
    /// Если число неизвестно, окно покажет это явно.
    pub fn resolve_project_count(&mut self) {
        if !self.loading_project_count {
            return;
        }
        if let Some(key) = &self.definition_key_for_deletion {
            self.project_count = self.bound_projects.get(key).copied();
        }
        self.loading_project_count = false;
    }

    pub fn cancel_delete(&mut self) {
        self.definition_key_for_deletion = None;
        self.project_count = None;
        self.loading_project_count = false;
    }

    /// Удаляет конфигурацию и закрывает окно. Возвращает `true`, если
    /// конфигурация существовала.
    pub fn confirm_delete(&mut self, key: &str) -> bool {
        let removed = self.definitions.remove_key(key);
        self.definition_status.remove(key);
        self.bound_projects.remove(key);
        self.deleted_keys.insert(key.to_string());
        self.cancel_delete();
        removed
    }

    /// Помечает конфигурацию как проверяемую. Итоговый статус выставляет
    /// сервис валидации.
    pub fn check(&mut self, key: &str) -> bool {
        if !self.definitions.contains_key(key) {
            return false;
        }
        self.definition_status
            .insert(key.to_string(), AlmBindingStatus::validating());
        true
    }

    pub fn begin_refresh(&mut self) {
        self.loading_alm_definitions = true;
    }

    /// Новый набор конфигураций. Удалённые ранее ключи не возвращаются,
    /// статусы исчезнувших ключей отбрасываются.
    pub fn replace_definitions(&mut self, mut definitions: AlmBindingDefinitions) {
        for key in &self.deleted_keys {
            definitions.remove_key(key);
        }
        self.definition_status
            .retain(|key, _| definitions.contains_key(key));
        self.definitions = definitions;
        self.loading_alm_definitions = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_alm_settings::{
        AlmBindingStatusType, BitbucketBindingDefinition, GithubBindingDefinition,
    };

    fn bootstrap() -> AlmSettingsBootstrap {
        AlmSettingsBootstrap {
            definitions: AlmBindingDefinitions {
                github: vec![GithubBindingDefinition {
                    key: "gh-1".into(),
                    url: "https://api.github.com".into(),
                    ..Default::default()
                }],
                bitbucket: vec![BitbucketBindingDefinition {
                    key: "key-1".into(),
                    url: "https://bitbucket.example".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            bound_projects: HashMap::from([("key-1".to_string(), 3)]),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_alm() {
        let mut state = AlmIntegrationState::new(None, &bootstrap());
        state.select_alm(AlmKey::GitLab);
        assert_eq!(state.current_alm, Some(AlmKey::GitLab));
    }

    #[test]
    fn test_request_delete_sets_target_and_project_count() {
        let mut state = AlmIntegrationState::new(Some(AlmKey::Bitbucket), &bootstrap());
        state.request_delete("key-1");
        assert_eq!(state.definition_key_for_deletion.as_deref(), Some("key-1"));
        assert!(state.loading_project_count);
        assert_eq!(state.project_count, None);

        state.resolve_project_count();
        assert!(!state.loading_project_count);
        assert_eq!(state.project_count, Some(3));

        state.request_delete("gh-1");
        state.resolve_project_count();
        assert_eq!(state.project_count, None);
    }

    #[test]
    fn test_cancel_delete_keeps_definitions() {
        let mut state = AlmIntegrationState::new(Some(AlmKey::Bitbucket), &bootstrap());
        state.request_delete("key-1");
        state.cancel_delete();
        assert_eq!(state.definition_key_for_deletion, None);
        assert_eq!(state.project_count, None);
        assert!(state.definitions.contains_key("key-1"));
    }

    #[test]
    fn test_confirm_delete_removes_definition_and_status() {
        let mut state = AlmIntegrationState::new(Some(AlmKey::Bitbucket), &bootstrap());
        state.check("key-1");
        state.request_delete("key-1");

        assert!(state.confirm_delete("key-1"));
        assert!(!state.definitions.contains_key("key-1"));
        assert!(!state.definition_status.contains_key("key-1"));
        assert_eq!(state.definition_key_for_deletion, None);

        assert!(!state.confirm_delete("key-1"));
    }

    #[test]
    fn test_project_count_ignored_after_cancel() {
        let mut state = AlmIntegrationState::new(Some(AlmKey::Bitbucket), &bootstrap());
        state.request_delete("key-1");
        state.cancel_delete();
        state.resolve_project_count();
        assert_eq!(state.project_count, None);
        assert!(!state.loading_project_count);
    }

    #[test]
    fn test_refresh_does_not_bring_back_deleted_definition() {
        let boot = bootstrap();
        let mut state = AlmIntegrationState::new(Some(AlmKey::Bitbucket), &boot);
        state.request_delete("key-1");
        state.resolve_project_count();
        assert!(state.confirm_delete("key-1"));

        state.begin_refresh();
        assert!(state.loading_alm_definitions);
        state.replace_definitions(boot.definitions.clone());

        assert!(!state.loading_alm_definitions);
        assert!(!state.definitions.contains_key("key-1"));
        assert!(state.definitions.contains_key("gh-1"));
        assert_eq!(state.definition_key_for_deletion, None);
    }

    #[test]
    fn test_check_marks_known_definition_validating() {
        let mut state = AlmIntegrationState::new(Some(AlmKey::GitHub), &bootstrap());
        assert!(state.check("gh-1"));
        assert_eq!(
            state.definition_status["gh-1"].status_type,
            AlmBindingStatusType::Validating
        );
        assert!(!state.check("unknown"));
        assert!(!state.definition_status.contains_key("unknown"));
    }

    #[test]
    fn test_replace_definitions_drops_stale_statuses() {
        let mut state = AlmIntegrationState::new(Some(AlmKey::GitHub), &bootstrap());
        state.check("gh-1");
        state.check("key-1");
        state.loading_alm_definitions = true;

        let mut next = state.definitions.clone();
        next.remove_key("gh-1");
        state.replace_definitions(next);

        assert!(!state.definition_status.contains_key("gh-1"));
        assert!(state.definition_status.contains_key("key-1"));
        assert!(!state.loading_alm_definitions);
    }
}
