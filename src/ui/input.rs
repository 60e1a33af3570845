//! User input abstraction layer
//!
//! This module provides a backend-agnostic interface for the prompts the
//! wizard asks, so the query builder and the action menu can be driven by
//! dialoguer in the terminal and by scripted answers in tests. Handing a
//! file to the desktop's default application goes through the same seam.

use std::io;
use std::path::Path;

/// Validation callback for text prompts
///
/// Returns `Err(message)` to reject the input; the prompt is shown again.
pub type TextValidator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Trait for user input operations
///
/// Every method returns `Ok(None)` when the user cancels the prompt. Callers
/// decide whether a missing answer aborts the running command.
///
/// # Examples
///
/// ```no_run
/// use stacwiz::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(name) = input.prompt_text("Enter name:", None, None).unwrap() {
///     println!("Hello, {}!", name);
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for text input
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `default` - Optional pre-filled value
    /// * `validate` - Optional validator; invalid input re-prompts
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered valid text
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: Option<TextValidator<'_>>,
    ) -> Result<Option<String>>;

    /// Prompt user for confirmation (yes/no)
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Prompt user to select one item from a list
    ///
    /// Returns the index of the selected item.
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;

    /// Prompt user to check any number of items from a list
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `items` - List of items to choose from
    /// * `checked` - Items pre-checked (by index); may be empty
    ///
    /// Returns the indices of the checked items in list order.
    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[usize],
    ) -> Result<Option<Vec<usize>>>;

    /// Open `path` with the system's default application
    fn open_path(&self, path: &Path) -> io::Result<()>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

fn dialoguer_error(err: dialoguer::Error) -> InputError {
    InputError::Io(io::Error::other(err))
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: Option<TextValidator<'_>>,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        if let Some(check) = validate {
            input = input.validate_with(move |text: &String| check(text.as_str()));
        }

        input.interact_text().map(Some).map_err(dialoguer_error)
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(dialoguer_error)
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select.interact_opt().map_err(dialoguer_error)
    }

    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[usize],
    ) -> Result<Option<Vec<usize>>> {
        use dialoguer::MultiSelect;

        let defaults: Vec<bool> = (0..items.len()).map(|i| checked.contains(&i)).collect();

        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(&defaults)
            .interact_opt()
            .map_err(dialoguer_error)
    }

    fn open_path(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}
