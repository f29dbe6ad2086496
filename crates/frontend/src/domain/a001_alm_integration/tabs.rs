//! Статическая таблица вкладок платформ и их фильтрация.

use crate::shared::components::BoxedTabItem;
use crate::shared::urls::alm_icon_url;
use contracts::enums::AlmKey;

/// Описание вкладки платформы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmTabDescriptor {
    pub key: AlmKey,
    pub label: &'static str,
    /// Вкладка видна только при включённом анализе веток
    pub requires_branches_enabled: bool,
}

/// Вкладки в фиксированном порядке отображения
pub static ALM_TABS: [AlmTabDescriptor; 4] = [
    AlmTabDescriptor {
        key: AlmKey::GitHub,
        label: AlmKey::GitHub.display_name(),
        requires_branches_enabled: false,
    },
    AlmTabDescriptor {
        key: AlmKey::Bitbucket,
        label: AlmKey::Bitbucket.display_name(),
        requires_branches_enabled: false,
    },
    AlmTabDescriptor {
        key: AlmKey::Azure,
        label: AlmKey::Azure.display_name(),
        requires_branches_enabled: false,
    },
    AlmTabDescriptor {
        key: AlmKey::GitLab,
        label: AlmKey::GitLab.display_name(),
        requires_branches_enabled: false,
    },
];

/// Оставляет вкладку, если она не требует веток или ветки включены.
/// Порядок сохраняется.
pub fn filter_tabs(
    tabs: &[AlmTabDescriptor],
    branches_enabled: bool,
) -> Vec<AlmTabDescriptor> {
    tabs.iter()
        .filter(|tab| !(tab.requires_branches_enabled && !branches_enabled))
        .copied()
        .collect()
}

pub fn visible_tabs(branches_enabled: bool) -> Vec<AlmTabDescriptor> {
    filter_tabs(&ALM_TABS, branches_enabled)
}

/// Элементы для `BoxedTabs` с иконками относительно `base_url`
pub fn tab_items(branches_enabled: bool, base_url: &str) -> Vec<BoxedTabItem<AlmKey>> {
    visible_tabs(branches_enabled)
        .into_iter()
        .map(|tab| BoxedTabItem {
            key: tab.key,
            label: tab.label.to_string(),
            icon: Some((alm_icon_url(base_url, tab.key), tab.key.code().to_string())),
        })
        .collect()
}
