//! Выбор панели платформы: таблица `AlmKey -> renderer` и проекция
//! входных данных страницы в свойства выбранной панели.

use super::ui::platform_tabs::{render_azure, render_bitbucket, render_github, render_gitlab};
use contracts::domain::a001_alm_settings::{
    AlmBindingDefinitions, AlmBindingStatusMap, AlmPlatformDefinitions,
};
use contracts::enums::AlmKey;
use leptos::prelude::*;

/// Входные данные страницы, нужные панелям (срез на момент рендера)
#[derive(Debug, Clone, Copy)]
pub struct AlmPageInputs<'a> {
    pub branches_enabled: bool,
    pub component: Option<&'a str>,
    pub definitions: &'a AlmBindingDefinitions,
    pub definition_status: &'a AlmBindingStatusMap,
    pub loading_alm_definitions: bool,
    pub loading_project_count: bool,
    pub multiple_alm_enabled: bool,
}

/// Свойства, которые получает панель платформы
#[derive(Debug, Clone, PartialEq)]
pub struct AlmPanelData {
    pub alm: AlmKey,
    pub branches_enabled: bool,
    /// Ключ проекта; передаётся только панели GitHub
    pub component: Option<String>,
    /// Конфигурации этой платформы без преобразований
    pub definitions: AlmPlatformDefinitions,
    pub definition_status: AlmBindingStatusMap,
    pub loading_alm_definitions: bool,
    pub loading_project_count: bool,
    pub multiple_alm_enabled: bool,
}

/// Обработчики, пробрасываемые в панель без изменений
#[derive(Clone, Copy)]
pub struct AlmPanelCallbacks {
    pub on_check: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_update_definitions: Callback<()>,
}

/// Запись таблицы диспетчеризации
pub struct AlmPanel {
    pub alm: AlmKey,
    pub receives_component: bool,
    pub render: fn(AlmPanelData, AlmPanelCallbacks) -> AnyView,
}

impl AlmPanel {
    pub fn project(&self, inputs: &AlmPageInputs<'_>) -> AlmPanelData {
        AlmPanelData {
            alm: self.alm,
            branches_enabled: inputs.branches_enabled,
            component: if self.receives_component {
                inputs.component.map(str::to_string)
            } else {
                None
            },
            definitions: inputs.definitions.definitions_for(self.alm),
            definition_status: inputs.definition_status.clone(),
            loading_alm_definitions: inputs.loading_alm_definitions,
            loading_project_count: inputs.loading_project_count,
            multiple_alm_enabled: inputs.multiple_alm_enabled,
        }
    }

    pub fn render(&self, data: AlmPanelData, callbacks: AlmPanelCallbacks) -> AnyView {
        (self.render)(data, callbacks)
    }
}

pub static ALM_PANELS: [AlmPanel; 4] = [
    AlmPanel {
        alm: AlmKey::GitHub,
        receives_component: true,
        render: render_github,
    },
    AlmPanel {
        alm: AlmKey::Bitbucket,
        receives_component: false,
        render: render_bitbucket,
    },
    AlmPanel {
        alm: AlmKey::Azure,
        receives_component: false,
        render: render_azure,
    },
    AlmPanel {
        alm: AlmKey::GitLab,
        receives_component: false,
        render: render_gitlab,
    },
];

/// Панель для текущего выбора. Нераспознанный выбор (`None`) - без панели.
pub fn select_panel(current_alm: Option<AlmKey>) -> Option<&'static AlmPanel> {
    let alm = current_alm?;
    ALM_PANELS.iter().find(|panel| panel.alm == alm)
}
