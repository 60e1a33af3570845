//! Scripted user input for testing

use super::input::{Result, TextValidator, UserInput};
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One scripted answer, consumed by the next prompt of the matching kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer for `prompt_text`; `None` cancels
    Text(Option<String>),
    /// Answer for `prompt_confirm`
    Confirm(Option<bool>),
    /// Answer for `prompt_select`, matched by item label
    Select(Option<String>),
    /// Answer for `prompt_multi_select`, matched by item labels
    MultiSelect(Option<Vec<String>>),
}

impl Answer {
    pub fn text(value: &str) -> Self {
        Self::Text(Some(value.to_string()))
    }

    pub fn select(label: &str) -> Self {
        Self::Select(Some(label.to_string()))
    }

    pub fn check(labels: &[&str]) -> Self {
        Self::MultiSelect(Some(labels.iter().map(ToString::to_string).collect()))
    }
}

/// A prompt that was shown, recorded for assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownPrompt {
    pub prompt: String,
    pub items: Vec<String>,
    pub default: Option<String>,
}

/// User input double that replays a fixed list of answers
///
/// Text answers that fail the prompt's validator are dropped and the next
/// text answer is tried, the way an interactive prompt asks again. Opened
/// paths are only recorded.
///
/// # Panics
///
/// Panics when the script runs out or an answer does not fit the prompt.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: Mutex<VecDeque<Answer>>,
    shown: Mutex<Vec<ShownPrompt>>,
    opened: Mutex<Vec<PathBuf>>,
}

impl ScriptedInput {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            shown: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt shown so far
    pub fn shown(&self) -> Vec<ShownPrompt> {
        self.shown.lock().unwrap().clone()
    }

    /// Paths handed to `open_path`
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }

    /// Number of answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for prompt '{prompt}'"))
    }

    fn record(&self, prompt: &str, items: &[String], default: Option<String>) {
        self.shown.lock().unwrap().push(ShownPrompt {
            prompt: prompt.to_string(),
            items: items.to_vec(),
            default,
        });
    }
}

fn position(items: &[String], label: &str) -> usize {
    items
        .iter()
        .position(|item| item == label)
        .unwrap_or_else(|| panic!("'{label}' is not one of {items:?}"))
}

impl UserInput for ScriptedInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: Option<TextValidator<'_>>,
    ) -> Result<Option<String>> {
        self.record(prompt, &[], default.map(ToString::to_string));
        loop {
            match self.next(prompt) {
                Answer::Text(None) => return Ok(None),
                Answer::Text(Some(text)) => {
                    let text = if text.is_empty() {
                        default.map_or(text, ToString::to_string)
                    } else {
                        text
                    };
                    if validate.is_none_or(|check| check(text.as_str()).is_ok()) {
                        return Ok(Some(text));
                    }
                }
                other => panic!("expected text answer for '{prompt}', got {other:?}"),
            }
        }
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        self.record(prompt, &[], None);
        match self.next(prompt) {
            Answer::Confirm(answer) => Ok(answer),
            other => panic!("expected confirm answer for '{prompt}', got {other:?}"),
        }
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        self.record(prompt, items, None);
        match self.next(prompt) {
            Answer::Select(label) => Ok(label.map(|label| position(items, &label))),
            other => panic!("expected select answer for '{prompt}', got {other:?}"),
        }
    }

    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        _checked: &[usize],
    ) -> Result<Option<Vec<usize>>> {
        self.record(prompt, items, None);
        match self.next(prompt) {
            Answer::MultiSelect(labels) => Ok(labels.map(|labels| {
                let mut picked: Vec<usize> =
                    labels.iter().map(|label| position(items, label)).collect();
                picked.sort_unstable();
                picked
            })),
            other => panic!("expected multi-select answer for '{prompt}', got {other:?}"),
        }
    }

    fn open_path(&self, path: &Path) -> io::Result<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_scripted_select_by_label() {
        let input = ScriptedInput::new(vec![Answer::select("b")]);
        let picked = input.prompt_select("pick", &items(&["a", "b"]), None).unwrap();
        assert_eq!(picked, Some(1));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_multi_select_returns_list_order() {
        let input = ScriptedInput::new(vec![Answer::check(&["c", "a"])]);
        let picked = input
            .prompt_multi_select("pick", &items(&["a", "b", "c"]), &[])
            .unwrap();
        assert_eq!(picked, Some(vec![0, 2]));
    }

    #[test]
    fn test_scripted_text_reprompts_on_invalid() {
        let input = ScriptedInput::new(vec![Answer::text("abc"), Answer::text("42")]);
        let numeric = |s: &str| s.parse::<i64>().map(|_| ()).map_err(|e| e.to_string());
        let check: TextValidator<'_> = &numeric;
        let text = input.prompt_text("number", None, Some(check)).unwrap();
        assert_eq!(text.as_deref(), Some("42"));
    }

    #[test]
    fn test_scripted_text_empty_uses_default() {
        let input = ScriptedInput::new(vec![Answer::text("")]);
        let text = input.prompt_text("name", Some("fallback"), None).unwrap();
        assert_eq!(text.as_deref(), Some("fallback"));
        assert_eq!(input.shown()[0].default.as_deref(), Some("fallback"));
    }
}
