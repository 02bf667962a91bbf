//! Page rendering through `minijinja`.

use super::model::TaskView;
use super::templates::{TEMPLATE_NAMES, default_templates};
use minijinja::value::Value;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for view rendering operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors returned while loading or rendering templates.
#[derive(Debug, Error)]
pub enum ViewError {
    /// No template is registered under the name.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// Template rendering failed.
    #[error("template render failed for {name}: {reason}")]
    Render {
        /// Template file name.
        name: String,
        /// Renderer failure description.
        reason: String,
    },

    /// The override directory could not be read.
    #[error("failed to load template overrides: {0}")]
    OverrideLoad(#[source] std::io::Error),
}

/// Renders the page surface from embedded or overridden templates.
#[derive(Debug, Clone)]
pub struct ViewRenderer {
    templates: BTreeMap<&'static str, String>,
}

#[derive(Serialize)]
struct ListContext<'a> {
    tasks: &'a [TaskView],
}

#[derive(Serialize)]
struct DetailContext<'a> {
    task: &'a TaskView,
}

#[derive(Serialize)]
struct FormContext<'a> {
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateFormContext<'a> {
    task: &'a TaskView,
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct EmptyContext {}

impl ViewRenderer {
    /// Creates a renderer over the embedded template set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: default_templates(),
        }
    }

    /// Creates a renderer with file overrides from a template directory.
    ///
    /// Any file matching an embedded template name replaces it; missing
    /// files keep the embedded default.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OverrideLoad`] when the directory cannot be
    /// opened or an existing override file cannot be read.
    pub fn with_overrides(template_dir: &str) -> ViewResult<Self> {
        let authority = cap_std::ambient_authority();
        let dir = cap_std::fs_utf8::Dir::open_ambient_dir(template_dir, authority)
            .map_err(ViewError::OverrideLoad)?;

        let mut templates = default_templates();
        for name in TEMPLATE_NAMES {
            match dir.read_to_string(name) {
                Ok(source) => {
                    templates.insert(name, source);
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(ViewError::OverrideLoad(err)),
            }
        }
        Ok(Self { templates })
    }

    /// Renders the open-tasks landing page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_index(&self, tasks: &[TaskView]) -> ViewResult<String> {
        self.render("index.html", &ListContext { tasks })
    }

    /// Renders the every-task listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_all_tasks(&self, tasks: &[TaskView]) -> ViewResult<String> {
        self.render("tasks.html", &ListContext { tasks })
    }

    /// Renders the completed-tasks listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_completed_tasks(&self, tasks: &[TaskView]) -> ViewResult<String> {
        self.render("tasks_completed.html", &ListContext { tasks })
    }

    /// Renders the overdue-tasks listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_overdue_tasks(&self, tasks: &[TaskView]) -> ViewResult<String> {
        self.render("tasks_overdue.html", &ListContext { tasks })
    }

    /// Renders the due-soon listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_due_soon_tasks(&self, tasks: &[TaskView]) -> ViewResult<String> {
        self.render("tasks_deadline.html", &ListContext { tasks })
    }

    /// Renders a single task's detail page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_task_detail(&self, task: &TaskView) -> ViewResult<String> {
        self.render("task_detail.html", &DetailContext { task })
    }

    /// Renders the task creation form.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_create_form(&self, notice: Option<&str>) -> ViewResult<String> {
        self.render("create_task.html", &FormContext { notice })
    }

    /// Renders the task edit form prefilled from the view model.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_update_form(&self, task: &TaskView, notice: Option<&str>) -> ViewResult<String> {
        self.render("update_task.html", &UpdateFormContext { task, notice })
    }

    /// Renders the login page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_login(&self, notice: Option<&str>) -> ViewResult<String> {
        self.render("login.html", &FormContext { notice })
    }

    /// Renders the registration page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_register(&self, notice: Option<&str>) -> ViewResult<String> {
        self.render("register.html", &FormContext { notice })
    }

    /// Renders the about page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn render_about(&self) -> ViewResult<String> {
        self.render("about.html", &EmptyContext {})
    }

    fn render(&self, name: &str, context: impl Serialize) -> ViewResult<String> {
        let source = self
            .templates
            .get(name)
            .ok_or_else(|| ViewError::UnknownTemplate(name.to_owned()))?;

        let mut environment = Environment::new();
        environment.set_auto_escape_callback(|_| AutoEscape::Html);
        environment.add_filter("linebreaks", linebreaks);
        environment
            .render_str(source, context)
            .map_err(|error| ViewError::Render {
                name: name.to_owned(),
                reason: error.to_string(),
            })
    }
}

impl Default for ViewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes the value, then turns line breaks into `<br>` tags.
fn linebreaks(value: String) -> Value {
    let escaped = escape_html(&value);
    let markup = escaped.replace("\r\n", "<br>").replace('\n', "<br>");
    Value::from_safe_string(markup)
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
