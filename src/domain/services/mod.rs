pub mod notification;
pub mod selection;
pub mod widget;
