use super::page::AlmIntegrationPage;
use crate::domain::a001_alm_integration::bootstrap::{
    current_query_alm, read_bootstrap, sync_query,
};
use crate::domain::a001_alm_integration::state::AlmIntegrationState;
use contracts::enums::AlmKey;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Контейнер страницы: владеет состоянием и передаёт рендереру срезы
/// и обработчики.
#[component]
pub fn AlmIntegration() -> impl IntoView {
    let bootstrap = read_bootstrap();
    let current_alm = current_query_alm();
    log::debug!(
        "ALM integration page: alm={:?}, branches={}, multiple={}",
        current_alm,
        bootstrap.branches_enabled,
        bootstrap.multiple_alm_enabled
    );

    let state = RwSignal::new(AlmIntegrationState::new(current_alm, &bootstrap));

    let on_select_alm = Callback::new(move |alm: AlmKey| {
        log::debug!("Select ALM: {alm}");
        state.update(|s| s.select_alm(alm));
        if let Err(e) = sync_query(alm) {
            log::warn!("Failed to update query: {e}");
        }
    });

    let on_check = Callback::new(move |key: String| {
        log::debug!("Check ALM configuration: {key}");
        state.update(|s| {
            if !s.check(&key) {
                log::warn!("Check requested for unknown configuration {key}");
            }
        });
    });

    let on_delete = Callback::new(move |key: String| {
        log::debug!("Request deletion of ALM configuration: {key}");
        state.update(|s| s.request_delete(&key));
        spawn_local(async move {
            state.update(|s| s.resolve_project_count());
        });
    });

    let on_cancel = Callback::new(move |_: ()| {
        state.update(|s| s.cancel_delete());
    });

    let on_confirm_delete = Callback::new(move |key: String| {
        state.update(|s| {
            if s.confirm_delete(&key) {
                log::info!("Deleted ALM configuration {key}");
            } else {
                log::warn!("ALM configuration {key} was already gone");
            }
        });
    });

    let on_update_definitions = Callback::new(move |_: ()| {
        state.update(|s| s.begin_refresh());
        spawn_local(async move {
            let fresh = read_bootstrap();
            state.update(|s| s.replace_definitions(fresh.definitions));
        });
    });

    view! {
        <AlmIntegrationPage
            branches_enabled=bootstrap.branches_enabled
            component=bootstrap.component.clone()
            current_alm=Signal::derive(move || state.with(|s| s.current_alm))
            definition_key_for_deletion=Signal::derive(move || {
                state.with(|s| s.definition_key_for_deletion.clone())
            })
            definitions=Signal::derive(move || state.with(|s| s.definitions.clone()))
            definition_status=Signal::derive(move || state.with(|s| s.definition_status.clone()))
            loading_alm_definitions=Signal::derive(move || state.with(|s| s.loading_alm_definitions))
            loading_project_count=Signal::derive(move || state.with(|s| s.loading_project_count))
            multiple_alm_enabled=bootstrap.multiple_alm_enabled
            project_count=Signal::derive(move || state.with(|s| s.project_count))
            on_cancel=on_cancel
            on_check=on_check
            on_confirm_delete=on_confirm_delete
            on_delete=on_delete
            on_select_alm=on_select_alm
            on_update_definitions=on_update_definitions
        />
    }
}
