pub mod config;
pub mod contract;
pub mod countdown;
pub mod gallery;
pub mod widget;
