use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Модальное окно подтверждения опасного действия.
///
/// Escape, клик по подложке и крестик вызывают `on_cancel`.
#[component]
pub fn ConfirmModal(
    /// Заголовок окна
    #[prop(into)]
    title: String,
    /// Текст кнопки подтверждения
    #[prop(into)]
    confirm_label: String,
    /// Текст кнопки отмены
    #[prop(into)]
    cancel_label: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_cancel.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--confirm" role="alertdialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                        {icon("delete")}
                        " "
                        {confirm_label}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {cancel_label}
                    </Button>
                </div>
            </div>
        </div>
    }
}
