//! Embedded default templates.
//!
//! Each template is self-contained so pages can render without a shared
//! loader; an override directory may replace any of them by file name.

use std::collections::BTreeMap;

/// Navigation fragment repeated across pages.
const NAV: &str = r#"<nav><a href="/">Open</a> | <a href="/tasks">All</a> | <a href="/tasks/completed">Completed</a> | <a href="/tasks/overdue">Overdue</a> | <a href="/tasks/deadline">Due soon</a> | <a href="/create_task">New task</a> | <a href="/about">About</a> | <a href="/logout">Log out</a></nav>"#;

const TASK_ROWS: &str = r#"<ul class="tasks">
{% for task in tasks %}  <li class="task {{ task.status }}"><a href="/tasks/{{ task.id }}">{{ task.title }}</a> <span class="status">{{ task.status }}</span> <span class="deadline">{{ task.deadline }}</span></li>
{% endfor %}</ul>"#;

const INDEX: &str = r#"<!doctype html>
<title>Open tasks</title>
{NAV}
<h1>Open tasks</h1>
{ROWS}"#;

const TASKS: &str = r#"<!doctype html>
<title>All tasks</title>
{NAV}
<h1>All tasks</h1>
{ROWS}"#;

const TASKS_COMPLETED: &str = r#"<!doctype html>
<title>Completed tasks</title>
{NAV}
<h1>Completed tasks</h1>
{ROWS}"#;

const TASKS_OVERDUE: &str = r#"<!doctype html>
<title>Overdue tasks</title>
{NAV}
<h1>Overdue tasks</h1>
{ROWS}"#;

const TASKS_DEADLINE: &str = r#"<!doctype html>
<title>Tasks due soon</title>
{NAV}
<h1>Tasks due soon</h1>
{ROWS}"#;

const TASK_DETAIL: &str = r#"<!doctype html>
<title>{{ task.title }}</title>
{NAV}
<h1>{{ task.title }}</h1>
<p class="status">Status: {{ task.status }}</p>
<p class="deadline">Deadline: {{ task.deadline }}</p>
<p class="created">Created: {{ task.created_at }}</p>
<div class="body">{{ task.body | linebreaks }}</div>
<p>
  <a href="/tasks/{{ task.id }}/update">Edit</a>
  {% if task.completed %}<a href="/tasks/{{ task.id }}/reopen">Reopen</a>{% else %}<a href="/tasks/{{ task.id }}/complete">Mark done</a>{% endif %}
  <a href="/tasks/{{ task.id }}/delete">Delete</a>
</p>"#;

const CREATE_TASK: &str = r#"<!doctype html>
<title>New task</title>
{NAV}
<h1>New task</h1>
{% if notice %}<p class="notice">{{ notice }}</p>{% endif %}
<form method="post" action="/create_task">
  <label>Title <input name="title" maxlength="100" required></label>
  <label>Details <textarea name="body" required></textarea></label>
  <label>Deadline <input name="deadline" type="datetime-local" required></label>
  <button type="submit">Create</button>
</form>"#;

const UPDATE_TASK: &str = r#"<!doctype html>
<title>Edit task</title>
{NAV}
<h1>Edit task</h1>
{% if notice %}<p class="notice">{{ notice }}</p>{% endif %}
<form method="post" action="/tasks/{{ task.id }}/update">
  <label>Title <input name="title" maxlength="100" value="{{ task.title }}" required></label>
  <label>Details <textarea name="body" required>{{ task.body }}</textarea></label>
  <label>Deadline <input name="deadline" type="datetime-local" value="{{ task.deadline_input }}" required></label>
  <button type="submit">Save</button>
</form>"#;

const LOGIN: &str = r#"<!doctype html>
<title>Log in</title>
<h1>Log in</h1>
{% if notice %}<p class="notice">{{ notice }}</p>{% endif %}
<form method="post" action="/login">
  <label>Username <input name="username" required></label>
  <label>Password <input name="password" type="password" required></label>
  <button type="submit">Log in</button>
</form>
<p><a href="/register">Register</a></p>"#;

const REGISTER: &str = r#"<!doctype html>
<title>Register</title>
<h1>Register</h1>
{% if notice %}<p class="notice">{{ notice }}</p>{% endif %}
<form method="post" action="/register">
  <label>Username <input name="username" maxlength="100" required></label>
  <label>Password <input name="password" type="password" required></label>
  <label>Repeat password <input name="password_confirm" type="password" required></label>
  <button type="submit">Register</button>
</form>
<p><a href="/login">Log in</a></p>"#;

const ABOUT: &str = r#"<!doctype html>
<title>About</title>
{NAV}
<h1>About</h1>
<p>A small personal task tracker: create tasks with deadlines, and the
lists sort out what is done, due soon, or overdue on their own.</p>"#;

/// Template file names, in rendering-surface order.
pub const TEMPLATE_NAMES: [&str; 11] = [
    "index.html",
    "tasks.html",
    "tasks_completed.html",
    "tasks_overdue.html",
    "tasks_deadline.html",
    "task_detail.html",
    "create_task.html",
    "update_task.html",
    "login.html",
    "register.html",
    "about.html",
];

/// Returns the embedded template set keyed by file name.
#[must_use]
pub fn default_templates() -> BTreeMap<&'static str, String> {
    let expand = |source: &str| source.replace("{NAV}", NAV).replace("{ROWS}", TASK_ROWS);
    BTreeMap::from([
        ("index.html", expand(INDEX)),
        ("tasks.html", expand(TASKS)),
        ("tasks_completed.html", expand(TASKS_COMPLETED)),
        ("tasks_overdue.html", expand(TASKS_OVERDUE)),
        ("tasks_deadline.html", expand(TASKS_DEADLINE)),
        ("task_detail.html", expand(TASK_DETAIL)),
        ("create_task.html", expand(CREATE_TASK)),
        ("update_task.html", expand(UPDATE_TASK)),
        ("login.html", LOGIN.to_owned()),
        ("register.html", REGISTER.to_owned()),
        ("about.html", expand(ABOUT)),
    ])
}
