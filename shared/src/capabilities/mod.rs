//! Render and HTTP capability re-exports.
//!
//! The core needs nothing beyond Crux's built-in Render capability and the
//! `crux_http` client for the advisor completion call.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;
pub type AppRender = Render<Event>;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}

impl Capabilities {
    pub fn http(&self) -> &AppHttp {
        &self.http
    }

    pub fn render(&self) -> &AppRender {
        &self.render
    }
}
