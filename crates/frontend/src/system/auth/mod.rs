pub mod api;
pub mod context;
pub mod guard;
pub mod login_page;
pub mod storage;
