//! Client-side tabs.
//!
//! Buttons carry `data-tab`, panels carry `data-tab-panel`; both are scoped
//! by `data-tab-scope` so several tab sets can share a page. The first tab
//! is active in the rendered HTML.

use leptos::prelude::*;

/// Tab bar for one scope.
#[component]
pub fn TabBar(scope: &'static str, tabs: Vec<(&'static str, String)>) -> impl IntoView {
    let buttons = tabs
        .into_iter()
        .enumerate()
        .map(|(idx, (name, label))| {
            let class = if idx == 0 { "active" } else { "" };
            view! {
                <button class=class data-tab=format!("{scope}-{name}")>
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="tab-bar" role="tablist" data-tab-scope=scope>
            {buttons}
        </div>
    }
}

/// Tab content panel
#[component]
pub fn TabContent(
    scope: &'static str,
    name: &'static str,
    active: bool,
    children: Children,
) -> impl IntoView {
    let class = if active { "tab-content active" } else { "tab-content" };
    let panel_id = format!("{scope}-{name}");

    view! {
        <div class=class data-tab-panel=panel_id>
            {children()}
        </div>
    }
}
