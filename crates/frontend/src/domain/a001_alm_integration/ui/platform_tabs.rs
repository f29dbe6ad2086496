//! Панели конкретных платформ, на которые ссылается таблица `ALM_PANELS`.

use super::alm_tab::AlmTab;
use crate::domain::a001_alm_integration::panels::{AlmPanelCallbacks, AlmPanelData};
use crate::shared::l10n::translate_with_parameters;
use leptos::prelude::*;

#[component]
pub fn GithubTab(data: AlmPanelData, callbacks: AlmPanelCallbacks) -> impl IntoView {
    let component = data.component.clone();
    view! {
        <AlmTab data=data callbacks=callbacks>
            {component.map(|key| view! {
                <p class="alm-tab__component">
                    {translate_with_parameters("settings.almintegration.github.component", &[key.as_str()])}
                </p>
            })}
        </AlmTab>
    }
}

pub fn render_github(data: AlmPanelData, callbacks: AlmPanelCallbacks) -> AnyView {
    view! { <GithubTab data=data callbacks=callbacks /> }.into_any()
}

pub fn render_bitbucket(data: AlmPanelData, callbacks: AlmPanelCallbacks) -> AnyView {
    view! { <AlmTab data=data callbacks=callbacks /> }.into_any()
}

pub fn render_azure(data: AlmPanelData, callbacks: AlmPanelCallbacks) -> AnyView {
    view! { <AlmTab data=data callbacks=callbacks /> }.into_any()
}

pub fn render_gitlab(data: AlmPanelData, callbacks: AlmPanelCallbacks) -> AnyView {
    view! { <AlmTab data=data callbacks=callbacks /> }.into_any()
}
