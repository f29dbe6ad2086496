use crate::domain::a001_alm_integration::panels::{AlmPanelCallbacks, AlmPanelData};
use crate::shared::icons::icon;
use crate::shared::l10n::{translate, translate_with_parameters};
use contracts::domain::a001_alm_settings::{AlmBindingStatus, AlmBindingStatusType};
use leptos::prelude::*;
use thaw::*;

/// Строка списка конфигураций
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionRow {
    pub key: String,
    pub url_label: String,
    pub status: Option<AlmBindingStatus>,
}

pub fn definition_rows(data: &AlmPanelData) -> Vec<DefinitionRow> {
    data.definitions
        .entries()
        .into_iter()
        .map(|def| DefinitionRow {
            key: def.key().to_string(),
            url_label: def
                .url()
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| translate("settings.almintegration.url_missing")),
            status: data.definition_status.get(def.key()).cloned(),
        })
        .collect()
}

/// Подсказки над списком
pub fn panel_hints(data: &AlmPanelData) -> Vec<String> {
    let mut hints = Vec::new();
    if !data.branches_enabled {
        hints.push(translate("settings.almintegration.feature.pr_decoration.disabled"));
    }
    if !data.multiple_alm_enabled && !data.definitions.is_empty() {
        hints.push(translate("settings.almintegration.create.multiple_disabled"));
    }
    hints
}

fn status_color(status_type: AlmBindingStatusType) -> BadgeColor {
    match status_type {
        AlmBindingStatusType::Validating => BadgeColor::Informative,
        AlmBindingStatusType::Success => BadgeColor::Success,
        AlmBindingStatusType::Failure => BadgeColor::Danger,
        AlmBindingStatusType::Warning => BadgeColor::Warning,
    }
}

pub fn status_label_key(status_type: AlmBindingStatusType) -> &'static str {
    match status_type {
        AlmBindingStatusType::Validating => "settings.almintegration.status.validating",
        AlmBindingStatusType::Success => "settings.almintegration.status.success",
        AlmBindingStatusType::Failure => "settings.almintegration.status.failure",
        AlmBindingStatusType::Warning => "settings.almintegration.status.warning",
    }
}

/// Общая панель платформы: список конфигураций и действия над ними
#[component]
pub fn AlmTab(
    data: AlmPanelData,
    callbacks: AlmPanelCallbacks,
    /// Платформенные детали под описанием
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let alm = data.alm;
    let hints = panel_hints(&data);
    let rows = definition_rows(&data);
    let loading_definitions = data.loading_alm_definitions;
    let loading_project_count = data.loading_project_count;

    let body = if loading_definitions {
        view! { <Spinner /> }.into_any()
    } else if rows.is_empty() {
        view! {
            <p class="alm-tab__empty">
                {translate_with_parameters("settings.almintegration.empty", &[alm.display_name()])}
            </p>
        }
        .into_any()
    } else {
        view! {
            <ul class="alm-tab__list">
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <DefinitionBox row=row callbacks=callbacks loading_project_count=loading_project_count />
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class=format!("alm-tab alm-tab--{}", alm.code())>
            <div class="alm-tab__header">
                <p class="alm-tab__info">
                    {translate(&format!("settings.almintegration.{}.info", alm.code()))}
                </p>
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading_definitions
                    on_click=move |_| callbacks.on_update_definitions.run(())
                >
                    {icon("refresh")}
                    " "
                    {translate("settings.almintegration.refresh")}
                </Button>
            </div>
            {hints
                .into_iter()
                .map(|hint| view! {
                    <div class="alert alert-info">{icon("alert")} " " {hint}</div>
                })
                .collect_view()}
            {body}
        </div>
    }
}

#[component]
fn DefinitionBox(
    row: DefinitionRow,
    callbacks: AlmPanelCallbacks,
    loading_project_count: bool,
) -> impl IntoView {
    let key_check = row.key.clone();
    let key_delete = row.key.clone();

    let status_view = row.status.map(|status| {
        let failure = (status.status_type == AlmBindingStatusType::Failure
            && !status.failure_message.is_empty())
        .then(|| view! { <div class="alm-definition__failure">{status.failure_message.clone()}</div> });
        view! {
            <Badge appearance=BadgeAppearance::Tint color=status_color(status.status_type)>
                {translate(status_label_key(status.status_type))}
            </Badge>
            {failure}
        }
    });

    view! {
        <li class="alm-definition boxed-group">
            <div class="alm-definition__main">
                <h3 class="alm-definition__key">{row.key}</h3>
                <div class="alm-definition__url">{row.url_label}</div>
                {status_view}
            </div>
            <div class="alm-definition__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| callbacks.on_check.run(key_check.clone())
                >
                    {icon("check")}
                    " "
                    {translate("settings.almintegration.check_configuration")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading_project_count
                    on_click=move |_| callbacks.on_delete.run(key_delete.clone())
                >
                    {icon("delete")}
                    " "
                    {translate("delete")}
                </Button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_alm_settings::{
        AlmBindingStatusMap, AlmPlatformDefinitions, AzureBindingDefinition,
    };
    use contracts::enums::AlmKey;

    fn azure(key: &str, url: Option<&str>) -> AzureBindingDefinition {
        AzureBindingDefinition {
            key: key.into(),
            url: url.map(str::to_string),
            personal_access_token: "t".into(),
        }
    }

    fn data(definitions: Vec<AzureBindingDefinition>) -> AlmPanelData {
        AlmPanelData {
            alm: AlmKey::Azure,
            branches_enabled: true,
            component: None,
            definitions: AlmPlatformDefinitions::Azure(definitions),
            definition_status: AlmBindingStatusMap::new(),
            loading_alm_definitions: false,
            loading_project_count: false,
            multiple_alm_enabled: true,
        }
    }

    #[test]
    fn test_rows_join_status_by_key() {
        let mut d = data(vec![
            azure("a", Some("https://a")),
            azure("b", None),
            azure("c", Some("")),
        ]);
        d.definition_status
            .insert("b".into(), AlmBindingStatus::validating());

        let rows = definition_rows(&d);
        assert_eq!(rows[0].url_label, "https://a");
        assert_eq!(rows[0].status, None);
        assert_eq!(rows[1].url_label, "No URL configured");
        assert_eq!(rows[1].status, Some(AlmBindingStatus::validating()));
        assert_eq!(rows[2].url_label, "No URL configured");
    }

    #[test]
    fn test_hints() {
        let mut d = data(vec![]);
        assert!(panel_hints(&d).is_empty());

        d.branches_enabled = false;
        assert_eq!(panel_hints(&d).len(), 1);

        d.multiple_alm_enabled = false;
        // пустой список - ограничение на одну конфигурацию ещё не мешает
        assert_eq!(panel_hints(&d).len(), 1);

        d.definitions = AlmPlatformDefinitions::Azure(vec![azure("a", None)]);
        assert_eq!(panel_hints(&d).len(), 2);
    }
}
