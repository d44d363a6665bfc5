pub mod cache;
pub mod dispatch;
pub mod input;
pub mod render;
pub mod restore;
pub mod save;
pub mod show;
pub mod status;
pub mod what_if;
