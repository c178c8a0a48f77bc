pub mod charts;
pub mod delete_dialog;
pub mod joke_dialog;
pub mod jokes_page;
pub mod overview_page;
pub mod skeleton;
pub mod stat_card;
pub mod toast;
