pub mod api;
pub mod config;
pub mod hooks;
pub mod model;
pub mod resolve;
pub mod state;
pub mod submit;
pub mod validation;
pub mod view;
