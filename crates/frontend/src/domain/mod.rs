pub mod egg_production;
pub mod egg_sale;
pub mod expense;
pub mod feed_purchase;
