//! Локализация строк страницы.
//!
//! Ключи совпадают с серверными bundle-ключами, поэтому при подключении
//! серверного словаря таблицу можно заменить без правки компонентов.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("cancel", "Cancel"),
        ("delete", "Delete"),
        ("loading", "Loading..."),
        ("settings.almintegration.title", "ALM Integration"),
        (
            "settings.almintegration.description",
            "ALM integrations allow the platform to interact with your ALM. \
             This enables things like authentication, or providing analysis details and a Quality Gate status directly in your ALM.",
        ),
        ("settings.almintegration.check_configuration", "Check configuration"),
        ("settings.almintegration.refresh", "Refresh"),
        (
            "settings.almintegration.github.info",
            "Connect a GitHub App to import repositories and decorate pull requests.",
        ),
        (
            "settings.almintegration.bitbucket.info",
            "Use a personal access token with read permission on repositories.",
        ),
        (
            "settings.almintegration.azure.info",
            "Use a personal access token with Code (read and write) scope.",
        ),
        (
            "settings.almintegration.gitlab.info",
            "Use a personal access token with api scope.",
        ),
        ("settings.almintegration.empty", "No {0} configuration yet."),
        ("settings.almintegration.url_missing", "No URL configured"),
        ("settings.almintegration.github.component", "Project: {0}"),
        (
            "settings.almintegration.feature.pr_decoration.disabled",
            "Pull request decoration is unavailable: branch analysis is not enabled.",
        ),
        (
            "settings.almintegration.create.multiple_disabled",
            "Your edition allows a single configuration per ALM.",
        ),
        ("settings.almintegration.status.validating", "Checking configuration..."),
        ("settings.almintegration.status.success", "Configuration valid"),
        ("settings.almintegration.status.failure", "Configuration invalid"),
        ("settings.almintegration.status.warning", "Configuration has warnings"),
        ("settings.almintegration.delete.header", "Delete an ALM configuration"),
        (
            "settings.almintegration.delete.message",
            "Are you sure you want to delete the {0} configuration?",
        ),
        (
            "settings.almintegration.delete.info",
            "{0} project(s) currently use this configuration and will lose their binding.",
        ),
        (
            "settings.almintegration.delete.no_info",
            "The number of projects bound to this configuration could not be determined.",
        ),
    ])
});

/// Перевод по ключу. Неизвестный ключ возвращается как есть.
pub fn translate(key: &str) -> String {
    MESSAGES
        .get(key)
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Перевод с подстановкой параметров `{0}`, `{1}`, ...
pub fn translate_with_parameters(key: &str, params: &[&str]) -> String {
    params
        .iter()
        .enumerate()
        .fold(translate(key), |msg, (i, param)| {
            msg.replace(&format!("{{{i}}}"), param)
        })
}
