//! Sidebar navigation grouped by area.
//!
//! Items are hidden when the signed-in admin lacks view permission for the
//! underlying module.

use crate::layout::global_context::{use_app_context, Screen};
use crate::shared::icons::icon;
use crate::system::auth::context::{can_view, use_auth};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(Screen, &'static str, &'static str)>, // (screen, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Catalog",
            items: vec![
                (Screen::Categories, "Categories", "grid"),
                (Screen::Products, "Products", "package"),
            ],
        },
        MenuGroup {
            label: "Marketing",
            items: vec![
                (Screen::Banners, "Banners", "image"),
                (Screen::Advertisements, "Advertisements", "megaphone"),
            ],
        },
        MenuGroup {
            label: "Billing",
            items: vec![(Screen::Subscriptions, "Subscription plans", "credit-card")],
        },
        MenuGroup {
            label: "Administration",
            items: vec![
                (Screen::Staff, "Staff", "shield"),
                (Screen::Customers, "Customers", "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    view! {
        <nav class="sidebar">
            {move || {
                let state = auth_state.get();
                get_menu_groups()
                    .into_iter()
                    .filter_map(|group| {
                        let items: Vec<_> = group
                            .items
                            .into_iter()
                            .filter(|(screen, _, _)| can_view(&state, screen.module()))
                            .collect();
                        if items.is_empty() {
                            return None;
                        }
                        Some(view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-label">{group.label}</div>
                                {items.into_iter().map(|(screen, label, icon_name)| {
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=move || {
                                                ctx.active_screen.get() == screen
                                            }
                                            on:click=move |_| ctx.navigate(screen)
                                        >
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        })
                    })
                    .collect_view()
            }}
        </nav>
    }
}
