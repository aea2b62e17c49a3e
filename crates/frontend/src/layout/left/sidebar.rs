//! Sidebar navigation, one item per page, grouped like the header menu.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<Page>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![Page::Dashboard],
        },
        MenuGroup {
            label: "Inventory",
            items: vec![Page::Stock, Page::Products, Page::Suppliers],
        },
        MenuGroup {
            label: "Sales",
            items: vec![Page::Orders, Page::Reports],
        },
        MenuGroup {
            label: "Administration",
            items: vec![Page::Users, Page::Roles, Page::Settings],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("pill")}
                <span>"Pharma Connect"</span>
            </div>
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|page| {
                            view! {
                                <a
                                    href=page.to_query()
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.active.get() == page
                                    data-page=page.key()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(page);
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(page.icon_name())}
                                        <span>{page.title()}</span>
                                    </div>
                                </a>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_in_menu_once() {
        let listed: Vec<Page> = get_menu_groups().into_iter().flat_map(|g| g.items).collect();
        assert_eq!(listed.len(), Page::all().len());
        for page in Page::all() {
            assert!(listed.contains(page), "{} missing", page.key());
        }
    }
}
