//! User interaction port and its terminal adapter.

use std::io::{self, BufRead, Write};

use donor_schema::{BloodType, ContactType, FormField};
use tracing::warn;

use crate::form::DonorForm;

/// What the console needs from whoever is in front of it.
pub trait UserInterface {
    /// Blocking notice.
    fn alert(&mut self, message: &str);

    /// Yes/no question; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;

    /// Send the user back to `field`.
    fn focus(&mut self, field: FormField);

    /// Display a rendered view.
    fn show(&mut self, view: &str);
}

/// Line-based terminal over any reader and writer.
///
/// ```
/// use std::io::Cursor;
/// use donor_console::{TerminalUi, UserInterface};
///
/// let mut ui = TerminalUi::new(Cursor::new("y\n"), Vec::new());
/// assert!(ui.confirm("Delete?"));
/// ```
#[derive(Debug)]
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    /// Wrap `input` and `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the adapter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Walk through the form fields, keeping the current value on a blank
    /// answer. Unknown picker values are re-asked. Changing the contact type
    /// clears the contact before it is asked for.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures. Returns `Ok(None)` at end of input.
    pub fn prompt_form(&mut self, current: &DonorForm) -> io::Result<Option<DonorForm>> {
        let mut form = current.clone();

        let Some(name) = self.read_line(&format!("Name [{}]: ", form.name))? else {
            return Ok(None);
        };
        if !name.is_empty() {
            form.name = name;
        }

        let Some(blood_type) = self.prompt_choice::<BloodType>("Blood type", form.blood_type)?
        else {
            return Ok(None);
        };
        form.blood_type = Some(blood_type);

        let Some(contact_type) =
            self.prompt_choice::<ContactType>("Contact type", Some(form.contact_type))?
        else {
            return Ok(None);
        };
        if contact_type != form.contact_type {
            form.set_contact_type(contact_type);
        }

        let prompt = format!(
            "Contact ({}; {}) [{}]: ",
            form.contact_type.placeholder(),
            form.contact_type.hint(),
            form.contact
        );
        let Some(contact) = self.read_line(&prompt)? else {
            return Ok(None);
        };
        if !contact.is_empty() {
            form.contact = contact;
        }
        Ok(Some(form))
    }

    fn prompt_choice<T>(&mut self, label: &str, current: Option<T>) -> io::Result<Option<T>>
    where
        T: std::str::FromStr + std::fmt::Display + Copy,
        T::Err: std::fmt::Display,
    {
        let shown = current.map(|value| value.to_string()).unwrap_or_default();
        loop {
            let Some(answer) = self.read_line(&format!("{label} [{shown}]: "))? else {
                return Ok(None);
            };
            if answer.is_empty() {
                if let Some(value) = current {
                    return Ok(Some(value));
                }
                continue;
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(error = %err, "terminal write failed");
        }
    }
}

impl<R: BufRead, W: Write> UserInterface for TerminalUi<R, W> {
    fn alert(&mut self, message: &str) {
        self.write_line(&format!("! {message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N]: ")) {
            Ok(Some(answer)) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "terminal read failed");
                false
            }
        }
    }

    fn focus(&mut self, field: FormField) {
        self.write_line(&format!("> check the {field} field"));
    }

    fn show(&mut self, view: &str) {
        self.write_line(view);
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use std::io::Cursor;

    use rstest::rstest;

    use super::*;

    fn ui(input: &str) -> TerminalUi<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalUi::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(ui: TerminalUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.into_output()).expect("utf-8 output")
    }

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("", false)]
    fn confirm_accepts_only_yes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(ui(input).confirm("Delete?"), expected);
    }

    #[rstest]
    fn prompt_form_fills_a_blank_form() {
        let mut terminal = ui("Jane Doe\nO-\nemail\njane@gmail.com\n");

        let form = terminal
            .prompt_form(&DonorForm::default())
            .expect("io")
            .expect("complete form");

        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.blood_type, Some(BloodType::ONegative));
        assert_eq!(form.contact_type, ContactType::Email);
        assert_eq!(form.contact, "jane@gmail.com");
    }

    #[rstest]
    fn prompt_form_reasks_unknown_blood_types_and_keeps_blank_answers() {
        let current = DonorForm {
            name: "Ada".to_owned(),
            blood_type: None,
            contact_type: ContactType::Phone,
            contact: "9876543210".to_owned(),
        };
        let mut terminal = ui("\nX+\nAB+\n\n\n");

        let form = terminal
            .prompt_form(&current)
            .expect("io")
            .expect("complete form");

        assert_eq!(form.name, "Ada");
        assert_eq!(form.blood_type, Some(BloodType::AbPositive));
        assert_eq!(form.contact, "9876543210");
        assert!(output(terminal).contains("`X+` is not a valid blood type"));
    }

    #[rstest]
    fn prompt_form_stops_at_end_of_input() {
        let mut terminal = ui("Ada\n");
        assert!(terminal
            .prompt_form(&DonorForm::default())
            .expect("io")
            .is_none());
    }

    #[rstest]
    fn alerts_and_views_are_written_on_their_own_lines() {
        let mut terminal = ui("");
        terminal.alert("Donor added successfully!");
        terminal.focus(FormField::Contact);
        terminal.show("No donors added yet");

        assert_eq!(
            output(terminal),
            "! Donor added successfully!\n> check the contact field\nNo donors added yet\n"
        );
    }
}
