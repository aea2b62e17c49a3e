pub mod common;

pub mod a001_stock;
pub mod a002_product;
pub mod a003_user;
pub mod a004_order;
pub mod a005_role;
pub mod a006_supplier;
pub mod a007_report;
