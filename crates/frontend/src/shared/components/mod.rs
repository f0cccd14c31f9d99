pub mod filter_bar;
pub mod pagination_controls;
pub mod stat_card;
