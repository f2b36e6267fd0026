//! Reply rendering.
//!
//! Replies are Telegram-flavoured HTML. Every template is rendered with HTML
//! auto-escaping, so task descriptions and echoed input are always escaped.
//! Echoed text is capped at [`PREVIEW_CHARS`] so that any single line of a
//! reply fits in one Telegram message even after escaping.

use std::borrow::Cow;

use minijinja::{AutoEscape, Environment, context};
use serde::Serialize;

use crate::task::domain::{Task, TaskId};

const HELP: &str = concat!(
    "Hi! I keep track of your tasks.\n\n",
    "<b>/add</b> &lt;text&gt; - add a task in one message\n",
    "<b>/new</b> - add a task step by step, with an optional deadline\n",
    "<b>/list</b> - show your tasks\n",
    "<b>/done</b> &lt;id&gt; - mark a task as done (for example: /done 3)\n",
    "<b>/cancel</b> - stop adding a task",
);
const ADD_USAGE: &str = "Write the task after the command, for example:\n<code>/add Read a book</code>";
const TASK_ADDED: &str = concat!(
    "✅ Task #{{ id }} added: {{ description }}",
    "{% if deadline %} (due {{ deadline }}){% endif %}",
);
const ASK_DESCRIPTION: &str = "📝 What needs to be done? Send the description, or /cancel to stop.";
const ASK_DEADLINE: &str =
    "📅 When is it due? Send a date as YYYY-MM-DD, or /skip for no deadline.";
const EMPTY_DESCRIPTION: &str =
    "The description cannot be empty. Send some text, or /cancel to stop.";
const SKIP_DESCRIPTION: &str =
    "The description cannot be skipped. Send some text, or /cancel to stop.";
const INVALID_DEADLINE: &str = concat!(
    "❗ <code>{{ input }}</code> is not a date I understand. ",
    "Use YYYY-MM-DD (for example 2025-06-01), or /skip for no deadline.",
);
const TASK_LIST: &str = concat!(
    "<b>📋 Your tasks:</b>\n",
    "{% for task in tasks %}",
    "{{ task.id }}. {{ task.description }} {% if task.is_done %}✅{% else %}⏳{% endif %}",
    "{% if task.deadline %} (due {{ task.deadline }}){% endif %}\n",
    "{% endfor %}",
);
const EMPTY_LIST: &str = "🗒️ You have no tasks yet. Add one with /add or /new.";
const DONE_USAGE: &str = "❗ Usage: /done &lt;task id&gt;\nFor example: <code>/done 2</code>";
const MARKED_DONE: &str = "✅ Task #{{ id }} marked as done.";
const NOT_FOUND: &str = "❗ Task #{{ id }} was not found.";
const CANCELLED: &str = "Okay, the new task was discarded.";
const NOTHING_TO_CANCEL: &str = "There is nothing to cancel.";
const NOTHING_TO_SKIP: &str = "There is nothing to skip. Start a new task with /new.";
const UNKNOWN_COMMAND: &str = "Unknown command /{{ name }}. Send /help to see what I can do.";
const TEXT_HINT: &str = "To add a task, send <code>/add your task</code> or start with /new.";
const FAILURE: &str = "⚠️ Something went wrong. Please try again later.";

/// Longest message body Telegram accepts, in UTF-16 code units.
pub const MESSAGE_LIMIT: usize = 4096;

/// Characters of user text echoed back in one reply line.
///
/// Escaping grows a character to at most six (`&quot;`), which keeps a
/// capped line well under [`MESSAGE_LIMIT`].
pub const PREVIEW_CHARS: usize = 500;

const ELLIPSIS: char = '…';

/// Outgoing message body in Telegram HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    text: String,
}

impl Reply {
    /// Wraps already formatted HTML.
    #[must_use]
    pub fn html(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Generic reply sent when a command could not be completed.
    #[must_use]
    pub fn failure() -> Self {
        Self::html(FAILURE)
    }

    /// Returns the HTML body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splits the body into messages that each fit in [`MESSAGE_LIMIT`].
    ///
    /// Splits happen at line breaks so markup on one line stays together.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        split_messages(&self.text, MESSAGE_LIMIT)
    }
}

/// Packs whole lines of `text` into messages of at most `limit` UTF-16
/// code units.
///
/// A line longer than `limit` is cut between characters. Blank messages are
/// dropped.
pub(crate) fn split_messages(text: &str, limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for line in text.split_inclusive('\n') {
        let line_len = line.encode_utf16().count();
        if current_len + line_len > limit {
            flush(&mut messages, &mut current);
            current_len = 0;
        }
        if line_len <= limit {
            current.push_str(line);
            current_len += line_len;
            continue;
        }
        for character in line.chars() {
            let char_len = character.len_utf16();
            if current_len + char_len > limit {
                flush(&mut messages, &mut current);
                current_len = 0;
            }
            current.push(character);
            current_len += char_len;
        }
    }
    flush(&mut messages, &mut current);
    messages
}

fn flush(messages: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim_end();
    if !trimmed.is_empty() {
        messages.push(trimmed.to_owned());
    }
    current.clear();
}

/// Shortens `text` to [`PREVIEW_CHARS`], marking the cut with an ellipsis.
fn preview(text: &str) -> Cow<'_, str> {
    if text.chars().count() <= PREVIEW_CHARS {
        return Cow::Borrowed(text);
    }
    let mut shortened: String = text.chars().take(PREVIEW_CHARS - 1).collect();
    shortened.push(ELLIPSIS);
    Cow::Owned(shortened)
}

#[derive(Debug, Serialize)]
struct TaskView<'a> {
    id: i64,
    description: Cow<'a, str>,
    is_done: bool,
    deadline: Option<String>,
}

impl<'a> TaskView<'a> {
    fn from_task(task: &'a Task) -> Self {
        Self {
            id: task.id().value(),
            description: preview(task.description().as_str()),
            is_done: task.is_done(),
            deadline: task.deadline().map(|deadline| deadline.to_string()),
        }
    }
}

/// Renders user-facing replies from the built-in templates.
#[derive(Debug)]
pub struct ReplyRenderer {
    environment: Environment<'static>,
}

impl Default for ReplyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyRenderer {
    /// Creates a renderer that HTML-escapes every interpolated value.
    #[must_use]
    pub fn new() -> Self {
        let mut environment = Environment::new();
        environment.set_auto_escape_callback(|_| AutoEscape::Html);
        Self { environment }
    }

    /// Command overview sent for `/start` and `/help`.
    #[must_use]
    pub fn help(&self) -> Reply {
        Reply::html(HELP)
    }

    /// Usage hint for `/add` without text.
    #[must_use]
    pub fn add_usage(&self) -> Reply {
        Reply::html(ADD_USAGE)
    }

    /// Confirmation for a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn task_added(&self, task: &Task) -> Result<Reply, minijinja::Error> {
        let view = TaskView::from_task(task);
        self.render(
            TASK_ADDED,
            context! {
                id => view.id,
                description => view.description,
                deadline => view.deadline,
            },
        )
    }

    /// Prompt for the description step.
    #[must_use]
    pub fn ask_description(&self) -> Reply {
        Reply::html(ASK_DESCRIPTION)
    }

    /// Prompt for the deadline step.
    #[must_use]
    pub fn ask_deadline(&self) -> Reply {
        Reply::html(ASK_DEADLINE)
    }

    /// Rejection of a blank description.
    #[must_use]
    pub fn empty_description(&self) -> Reply {
        Reply::html(EMPTY_DESCRIPTION)
    }

    /// Rejection of `/skip` during the description step.
    #[must_use]
    pub fn skip_description(&self) -> Reply {
        Reply::html(SKIP_DESCRIPTION)
    }

    /// Rejection of a malformed deadline, echoing the input.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn invalid_deadline(&self, input: &str) -> Result<Reply, minijinja::Error> {
        self.render(INVALID_DEADLINE, context! { input => preview(input.trim()) })
    }

    /// Task list, or an informational message when it is empty.
    ///
    /// Long lists exceed one Telegram message; see [`Reply::messages`].
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn task_list(&self, tasks: &[Task]) -> Result<Reply, minijinja::Error> {
        if tasks.is_empty() {
            return Ok(Reply::html(EMPTY_LIST));
        }
        let views: Vec<TaskView<'_>> = tasks.iter().map(TaskView::from_task).collect();
        self.render(TASK_LIST, context! { tasks => views })
    }

    /// Usage hint for `/done` without a numeric id.
    #[must_use]
    pub fn done_usage(&self) -> Reply {
        Reply::html(DONE_USAGE)
    }

    /// Confirmation of the mark-done transition.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn marked_done(&self, task_id: TaskId) -> Result<Reply, minijinja::Error> {
        self.render(MARKED_DONE, context! { id => task_id.value() })
    }

    /// Reply for an id that is missing or owned by someone else.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn not_found(&self, task_id: TaskId) -> Result<Reply, minijinja::Error> {
        self.render(NOT_FOUND, context! { id => task_id.value() })
    }

    /// Confirmation that the open draft was discarded.
    #[must_use]
    pub fn cancelled(&self) -> Reply {
        Reply::html(CANCELLED)
    }

    /// Reply for `/cancel` without an open draft.
    #[must_use]
    pub fn nothing_to_cancel(&self) -> Reply {
        Reply::html(NOTHING_TO_CANCEL)
    }

    /// Reply for `/skip` without an open draft.
    #[must_use]
    pub fn nothing_to_skip(&self) -> Reply {
        Reply::html(NOTHING_TO_SKIP)
    }

    /// Reply for an unrecognised command.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn unknown_command(&self, name: &str) -> Result<Reply, minijinja::Error> {
        self.render(UNKNOWN_COMMAND, context! { name => name })
    }

    /// Hint for plain text sent without an open draft.
    #[must_use]
    pub fn text_hint(&self) -> Reply {
        Reply::html(TEXT_HINT)
    }

    fn render(
        &self,
        template: &str,
        context: minijinja::Value,
    ) -> Result<Reply, minijinja::Error> {
        let rendered = self.environment.render_str(template, context)?;
        Ok(Reply::html(rendered.trim_end()))
    }
}
