use crate::domain::a001_alm_integration::ui::AlmIntegration;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page-container">
            <AlmIntegration />
        </div>
    }
}
