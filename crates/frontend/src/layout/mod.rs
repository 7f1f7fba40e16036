pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = global_context::use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Show when=move || ctx.sidebar_open.get()>
                    <sidebar::Sidebar />
                </Show>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
