//! Page templates
//!
//! Templates are embedded at compile time and rendered with Tera.

use domain::Classification;
use tera::{Context, Tera};

/// Name shown in the page header
pub const APP_NAME: &str = "Mail Triage";

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Compiled template set for the form page
#[derive(Debug)]
pub struct PageTemplates {
    tera: Tera,
}

/// Everything the index page can show
#[derive(Debug, Default)]
pub struct IndexPage<'a> {
    /// Warning banner for input errors
    pub warning: Option<&'a str>,
    /// Classification outcome, when one was produced
    pub result: Option<&'a Classification>,
    /// The text that was classified, echoed back
    pub text: &'a str,
}

impl PageTemplates {
    /// Compile the embedded templates
    ///
    /// # Errors
    ///
    /// Returns the Tera error when a template fails to compile; this is a
    /// startup-time failure, not a per-request one.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the index page
    pub fn render_index(&self, page: &IndexPage<'_>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("app_name", APP_NAME);
        context.insert("warning", &page.warning);
        context.insert(
            "result",
            &page.result.map(|classification| ResultView {
                category: classification.category.label(),
                needs_action: classification.category.needs_action(),
                reply: &classification.reply,
                text: page.text,
            }),
        );
        self.tera.render("index.html", &context)
    }
}

#[derive(Debug, serde::Serialize)]
struct ResultView<'a> {
    category: &'a str,
    needs_action: bool,
    reply: &'a str,
    text: &'a str,
}
