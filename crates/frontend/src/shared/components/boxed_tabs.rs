use leptos::prelude::*;

/// Элемент полосы вкладок
#[derive(Debug, Clone, PartialEq)]
pub struct BoxedTabItem<K> {
    pub key: K,
    pub label: String,
    /// Иконка слева от подписи: (src, alt)
    pub icon: Option<(String, String)>,
}

/// Обработка клика по вкладке `index`: ровно один вызов `on_select` с
/// ключом этой вкладки. Клик по уже исчезнувшей вкладке игнорируется.
pub fn dispatch_tab_click<K: Copy>(
    tabs: &[BoxedTabItem<K>],
    index: usize,
    on_select: impl Fn(K),
) -> bool {
    match tabs.get(index) {
        Some(tab) => {
            on_select(tab.key);
            true
        }
        None => false,
    }
}

/// BoxedTabs - полоса вкладок "в рамке".
///
/// Сам выбор не хранит: подсвечивает `selected` и сообщает о клике через
/// `on_select` (ровно один вызов на клик).
#[component]
pub fn BoxedTabs<K>(
    /// Вкладки в порядке отображения
    #[prop(into)]
    tabs: Signal<Vec<BoxedTabItem<K>>>,
    /// Выбранный ключ; `None` - ни одна вкладка не подсвечена
    #[prop(into)]
    selected: Signal<Option<K>>,
    on_select: Callback<K>,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="boxed-tabs" role="tablist">
            {move || {
                tabs.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, tab)| {
                        let key = tab.key;
                        let is_selected = move || selected.get() == Some(key);
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || {
                                    if is_selected() { "boxed-tab boxed-tab--selected" } else { "boxed-tab" }
                                }
                                aria-selected=move || is_selected().to_string()
                                on:click=move |_| {
                                    tabs.with(|t| dispatch_tab_click(t, index, |k| on_select.run(k)));
                                }
                            >
                                {tab.icon.map(|(src, alt)| view! {
                                    <img alt=alt class="spacer-right" height="16" src=src />
                                })}
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn items() -> Vec<BoxedTabItem<char>> {
        ['a', 'b', 'c']
            .into_iter()
            .map(|key| BoxedTabItem {
                key,
                label: key.to_string(),
                icon: None,
            })
            .collect()
    }

    #[test]
    fn test_click_emits_clicked_key_once() {
        let calls = RefCell::new(Vec::new());
        let tabs = items();

        assert!(dispatch_tab_click(&tabs, 1, |k| calls.borrow_mut().push(k)));
        assert_eq!(*calls.borrow(), vec!['b']);

        assert!(dispatch_tab_click(&tabs, 2, |k| calls.borrow_mut().push(k)));
        assert_eq!(*calls.borrow(), vec!['b', 'c']);
    }

    #[test]
    fn test_click_on_missing_tab_is_ignored() {
        let calls = RefCell::new(Vec::new());
        assert!(!dispatch_tab_click(&items(), 5, |k| calls.borrow_mut().push(k)));
        assert!(calls.borrow().is_empty());
    }
}
