//! Страница "ALM Integration": заголовок, описание, вкладки платформ,
//! панель выбранной платформы и окно подтверждения удаления.
//!
//! Компонент без собственного состояния: всё приходит через свойства,
//! а что именно выводится, решает `page_layout`.

use super::delete_modal::{delete_message, DeleteModal};
use crate::domain::a001_alm_integration::panels::{
    select_panel, AlmPageInputs, AlmPanelCallbacks, AlmPanelData,
};
use crate::domain::a001_alm_integration::tabs::tab_items;
use crate::shared::components::{BoxedTabItem, BoxedTabs, PageHeader};
use crate::shared::l10n::translate;
use crate::shared::urls::base_url;
use contracts::domain::a001_alm_settings::{AlmBindingDefinitions, AlmBindingStatusMap};
use contracts::enums::AlmKey;
use leptos::prelude::*;

/// Окно удаления показывается только для непустого ключа
pub fn deletion_target(key: Option<String>) -> Option<String> {
    key.filter(|k| !k.is_empty())
}

/// Окно подтверждения удаления
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOverlay {
    pub id: String,
    pub project_count: Option<u32>,
    pub question: String,
    pub info: String,
}

/// Содержимое страницы при данных свойствах
#[derive(Debug, Clone, PartialEq)]
pub struct AlmPageLayout {
    pub title: String,
    pub description: String,
    pub tabs: Vec<BoxedTabItem<AlmKey>>,
    pub selected_tab: Option<AlmKey>,
    /// Не более одной панели; `None` для нераспознанной платформы
    pub panel: Option<AlmPanelData>,
    pub delete_overlay: Option<DeleteOverlay>,
}

pub fn page_layout(
    current_alm: Option<AlmKey>,
    inputs: &AlmPageInputs<'_>,
    base_url: &str,
    definition_key_for_deletion: Option<String>,
    project_count: Option<u32>,
) -> AlmPageLayout {
    AlmPageLayout {
        title: translate("settings.almintegration.title"),
        description: translate("settings.almintegration.description"),
        tabs: tab_items(inputs.branches_enabled, base_url),
        selected_tab: current_alm,
        panel: select_panel(current_alm).map(|panel| panel.project(inputs)),
        delete_overlay: deletion_target(definition_key_for_deletion).map(|id| {
            let (question, info) = delete_message(&id, project_count);
            DeleteOverlay {
                id,
                project_count,
                question,
                info,
            }
        }),
    }
}

#[component]
pub fn AlmIntegrationPage(
    #[prop(into)] branches_enabled: Signal<bool>,
    /// Ключ проекта (только для панели GitHub)
    #[prop(optional, into)]
    component: MaybeProp<String>,
    /// Текущая платформа; `None` - значение не распознано, панель не выводится
    #[prop(into)]
    current_alm: Signal<Option<AlmKey>>,
    #[prop(into)] definition_key_for_deletion: Signal<Option<String>>,
    #[prop(into)] definitions: Signal<AlmBindingDefinitions>,
    #[prop(into)] definition_status: Signal<AlmBindingStatusMap>,
    #[prop(into)] loading_alm_definitions: Signal<bool>,
    #[prop(into)] loading_project_count: Signal<bool>,
    #[prop(into)] multiple_alm_enabled: Signal<bool>,
    #[prop(into)] project_count: Signal<Option<u32>>,
    on_cancel: Callback<()>,
    on_check: Callback<String>,
    on_confirm_delete: Callback<String>,
    on_delete: Callback<String>,
    on_select_alm: Callback<AlmKey>,
    on_update_definitions: Callback<()>,
) -> impl IntoView {
    let base = base_url();

    let layout = Memo::new(move |_| {
        let component = component.get();
        definitions.with(|definitions| {
            definition_status.with(|definition_status| {
                let inputs = AlmPageInputs {
                    branches_enabled: branches_enabled.get(),
                    component: component.as_deref(),
                    definitions,
                    definition_status,
                    loading_alm_definitions: loading_alm_definitions.get(),
                    loading_project_count: loading_project_count.get(),
                    multiple_alm_enabled: multiple_alm_enabled.get(),
                };
                page_layout(
                    current_alm.get(),
                    &inputs,
                    &base,
                    definition_key_for_deletion.get(),
                    project_count.get(),
                )
            })
        })
    });

    let callbacks = AlmPanelCallbacks {
        on_check,
        on_delete,
        on_update_definitions,
    };

    let tabs = Signal::derive(move || layout.with(|l| l.tabs.clone()));
    let selected = Signal::derive(move || layout.with(|l| l.selected_tab));

    let panel = move || {
        let data = layout.with(|l| l.panel.clone())?;
        let panel = select_panel(Some(data.alm))?;
        Some(panel.render(data, callbacks))
    };

    let delete_modal = move || {
        layout.with(|l| l.delete_overlay.clone()).map(|overlay| {
            view! {
                <DeleteModal
                    id=overlay.id
                    project_count=overlay.project_count
                    on_cancel=on_cancel
                    on_delete=on_confirm_delete
                />
            }
        })
    };

    let (title, description) = layout.with_untracked(|l| (l.title.clone(), l.description.clone()));

    view! {
        <div class="page page--alm-integration">
            <PageHeader title=title description=description />
            <BoxedTabs tabs=tabs selected=selected on_select=on_select_alm />
            {panel}
            {delete_modal}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_alm_settings::{
        AlmPlatformDefinitions, BitbucketBindingDefinition,
    };

    fn inputs<'a>(
        definitions: &'a AlmBindingDefinitions,
        definition_status: &'a AlmBindingStatusMap,
    ) -> AlmPageInputs<'a> {
        AlmPageInputs {
            branches_enabled: true,
            component: None,
            definitions,
            definition_status,
            loading_alm_definitions: false,
            loading_project_count: false,
            multiple_alm_enabled: false,
        }
    }

    #[test]
    fn test_deletion_target() {
        assert_eq!(deletion_target(None), None);
        assert_eq!(deletion_target(Some(String::new())), None);
        assert_eq!(deletion_target(Some("key-1".into())), Some("key-1".to_string()));
    }

    #[test]
    fn test_github_with_empty_list_and_no_overlay() {
        let defs = AlmBindingDefinitions::default();
        let status = AlmBindingStatusMap::new();

        let layout = page_layout(Some(AlmKey::GitHub), &inputs(&defs, &status), "", None, None);

        assert_eq!(layout.title, "ALM Integration");
        assert!(!layout.description.is_empty());
        let tab_keys: Vec<_> = layout.tabs.iter().map(|t| t.key).collect();
        assert_eq!(
            tab_keys,
            vec![AlmKey::GitHub, AlmKey::Bitbucket, AlmKey::Azure, AlmKey::GitLab]
        );
        assert_eq!(layout.selected_tab, Some(AlmKey::GitHub));

        let panel = layout.panel.expect("github panel");
        assert_eq!(panel.alm, AlmKey::GitHub);
        assert_eq!(panel.definitions, AlmPlatformDefinitions::GitHub(vec![]));
        assert_eq!(layout.delete_overlay, None);
    }

    #[test]
    fn test_bitbucket_with_pending_deletion() {
        let defs = AlmBindingDefinitions {
            bitbucket: vec![BitbucketBindingDefinition {
                key: "key-1".into(),
                url: "https://bitbucket.example".into(),
                personal_access_token: "t".into(),
            }],
            ..Default::default()
        };
        let status = AlmBindingStatusMap::new();

        let layout = page_layout(
            Some(AlmKey::Bitbucket),
            &inputs(&defs, &status),
            "",
            Some("key-1".into()),
            Some(3),
        );

        assert_eq!(layout.panel.map(|p| p.alm), Some(AlmKey::Bitbucket));
        let overlay = layout.delete_overlay.expect("overlay");
        assert_eq!(overlay.id, "key-1");
        assert_eq!(overlay.project_count, Some(3));
        assert!(overlay.question.contains("key-1"));
        assert!(overlay.info.starts_with("3 "));
    }

    #[test]
    fn test_unrecognized_platform_shows_tabs_without_panel() {
        let defs = AlmBindingDefinitions::default();
        let status = AlmBindingStatusMap::new();

        let layout = page_layout(None, &inputs(&defs, &status), "", None, None);

        assert_eq!(layout.tabs.len(), 4);
        assert_eq!(layout.selected_tab, None);
        assert_eq!(layout.panel, None);
    }

    #[test]
    fn test_exactly_one_panel_for_each_platform() {
        let defs = AlmBindingDefinitions::default();
        let status = AlmBindingStatusMap::new();

        for alm in AlmKey::all() {
            let layout = page_layout(Some(alm), &inputs(&defs, &status), "", None, None);
            assert_eq!(layout.panel.map(|p| p.alm), Some(alm));
        }
    }
}
