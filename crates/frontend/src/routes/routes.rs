use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_banner::ui::list::BannerList;
use crate::domain::a004_advertisement::ui::list::AdvertisementList;
use crate::domain::a005_subscription::ui::list::SubscriptionList;
use crate::domain::a006_staff::ui::list::StaffList;
use crate::domain::a006_staff::ui::permissions::StaffPermissionsScreen;
use crate::domain::a007_customer::ui::list::CustomerList;
use crate::layout::global_context::{use_app_context, Screen};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn ActiveScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || match ctx.active_screen.get() {
            Screen::Categories => view! {
                <RequirePermission module="categories">
                    <CategoryList />
                </RequirePermission>
            }
            .into_any(),
            Screen::Products => view! {
                <RequirePermission module="products">
                    <ProductList />
                </RequirePermission>
            }
            .into_any(),
            Screen::Banners => view! {
                <RequirePermission module="banners">
                    <BannerList />
                </RequirePermission>
            }
            .into_any(),
            Screen::Advertisements => view! {
                <RequirePermission module="advertisements">
                    <AdvertisementList />
                </RequirePermission>
            }
            .into_any(),
            Screen::Subscriptions => view! {
                <RequirePermission module="subscriptions">
                    <SubscriptionList />
                </RequirePermission>
            }
            .into_any(),
            Screen::Staff => view! {
                <RequirePermission module="staff">
                    <StaffList />
                </RequirePermission>
            }
            .into_any(),
            Screen::StaffPermissions(staff_id) => view! {
                <RequirePermission module="staff">
                    <StaffPermissionsScreen staff_id=staff_id />
                </RequirePermission>
            }
            .into_any(),
            Screen::Customers => view! {
                <RequirePermission module="customers">
                    <CustomerList />
                </RequirePermission>
            }
            .into_any(),
        }}
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell center=|| view! { <ActiveScreen /> }.into_any() />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
