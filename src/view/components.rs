pub mod form;
pub mod notification;
pub mod page;
