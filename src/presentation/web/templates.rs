use askama::Template;

use crate::domain::banners::{Banner, BannerFields};

/// The editor page. The banner defaults seed the form's color pickers and
/// font-size inputs so the page and the renderer agree.
#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub defaults: Banner,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            version: crate::VERSION,
            defaults: Banner::default(),
        }
    }
}

/// Table-based markup that survives email clients.
#[derive(Template)]
#[template(path = "partials/banner_email.html")]
pub struct BannerEmailTemplate {
    pub banner: Banner,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}

pub fn render_banner(fields: BannerFields) -> Result<String, askama::Error> {
    render_template(BannerEmailTemplate {
        banner: fields.resolve(),
    })
}
