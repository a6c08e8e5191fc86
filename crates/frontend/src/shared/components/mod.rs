pub mod page_header;
pub mod search_input;
pub mod stat_card;
pub mod ui;
