pub mod pagination_controls;
pub mod settings_card;
pub mod table;
