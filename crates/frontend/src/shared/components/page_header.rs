use leptos::prelude::*;

/// PageHeader - заголовок страницы настроек с описанием под ним
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Описание (блок markdown под заголовком)
    #[prop(optional, into)]
    description: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{title}</h1>
        </header>
        {move || description.get().map(|d| view! {
            <div class="markdown small spacer-top big-spacer-bottom">{d}</div>
        })}
    }
}
