use leptos::prelude::*;

/// Screens reachable from the sidebar.
///
/// Each CRUD screen carries the permission-module key the backend uses for
/// staff grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Categories,
    Products,
    Banners,
    Advertisements,
    Subscriptions,
    Staff,
    /// Permission editor for one staff member, opened from the staff list
    StaffPermissions(i64),
    Customers,
}

impl Screen {
    /// Permission-module key for this screen
    pub fn module(&self) -> &'static str {
        match self {
            Screen::Categories => "categories",
            Screen::Products => "products",
            Screen::Banners => "banners",
            Screen::Advertisements => "advertisements",
            Screen::Subscriptions => "subscriptions",
            Screen::Staff | Screen::StaffPermissions(_) => "staff",
            Screen::Customers => "customers",
        }
    }
}

/// App-wide UI state provided via context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_screen: RwSignal<Screen>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_screen: RwSignal::new(Screen::Categories),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, screen: Screen) {
        self.active_screen.set(screen);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
