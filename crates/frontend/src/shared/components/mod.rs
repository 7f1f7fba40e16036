pub mod confirm_dialog;
pub mod details_popup;
pub mod error_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod toggle_switch;
