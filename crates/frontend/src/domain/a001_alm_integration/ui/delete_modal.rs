use crate::shared::l10n::{translate, translate_with_parameters};
use crate::shared::modal::ConfirmModal;
use leptos::prelude::*;

/// Тексты окна удаления: вопрос и строка о затронутых проектах
pub fn delete_message(id: &str, project_count: Option<u32>) -> (String, String) {
    let question = translate_with_parameters("settings.almintegration.delete.message", &[id]);
    let info = match project_count {
        Some(count) => {
            translate_with_parameters("settings.almintegration.delete.info", &[count.to_string().as_str()])
        }
        None => translate("settings.almintegration.delete.no_info"),
    };
    (question, info)
}

/// Подтверждение удаления конфигурации `id`
#[component]
pub fn DeleteModal(
    #[prop(into)]
    id: String,
    project_count: Option<u32>,
    on_cancel: Callback<()>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let (question, info) = delete_message(&id, project_count);
    let on_confirm = Callback::new(move |_: ()| on_delete.run(id.clone()));

    view! {
        <ConfirmModal
            title=translate("settings.almintegration.delete.header")
            confirm_label=translate("delete")
            cancel_label=translate("cancel")
            on_cancel=on_cancel
            on_confirm=on_confirm
        >
            <p class="spacer-bottom">{question}</p>
            <p class="alert alert-warning">{info}</p>
        </ConfirmModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message_with_project_count() {
        let (question, info) = delete_message("key-1", Some(3));
        assert_eq!(question, "Are you sure you want to delete the key-1 configuration?");
        assert!(info.starts_with("3 project(s)"));
    }

    #[test]
    fn test_delete_message_without_project_count() {
        let (_, info) = delete_message("key-1", None);
        assert_eq!(info, translate("settings.almintegration.delete.no_info"));
    }
}
