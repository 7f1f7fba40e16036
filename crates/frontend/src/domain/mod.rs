pub mod a001_category;
pub mod a002_product;
pub mod a003_banner;
pub mod a004_advertisement;
pub mod a005_subscription;
pub mod a006_staff;
pub mod a007_customer;
