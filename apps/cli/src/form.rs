//! Terminal form for editing a [`SettingsRecord`].

use crate::error::{Result, WrapErr};
use profile::{Setting, SettingsRecord};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Accepted input range per setting.
pub fn limits(setting: Setting) -> RangeInclusive<f64> {
    match setting {
        Setting::FieldOfView => 5.0..=180.0,
        Setting::FullscreenRefreshRate | Setting::WindowedRefreshRate => 5.0..=5000.0,
    }
}

pub fn validate(setting: Setting, value: f64) -> std::result::Result<f64, String> {
    let range = limits(setting);
    if !value.is_finite() {
        return Err(format!("{} must be a finite number", setting.label()));
    }
    if !range.contains(&value) {
        return Err(format!(
            "{} must be between {} and {}, got {}",
            setting.label(),
            range.start(),
            range.end(),
            value
        ));
    }
    Ok(value)
}

pub fn display_value(value: Option<f64>) -> String {
    value.map_or_else(|| "unset".to_string(), profile::store::format_value)
}

pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Walks through every setting and returns the edited record, or `None`
    /// when the user aborted (end of input or declined to save).
    pub fn run(&mut self, mut record: SettingsRecord) -> Result<Option<SettingsRecord>> {
        writeln!(self.output, "Press Enter to keep the current value.")?;

        for setting in Setting::ALL {
            match self.ask(setting, record.get(setting))? {
                Some(Some(value)) => record.set(setting, value),
                Some(None) => {}
                None => return Ok(None),
            }
        }

        if self.confirm()? { Ok(Some(record)) } else { Ok(None) }
    }

    /// `None` on end of input, `Some(None)` to keep the current value.
    fn ask(&mut self, setting: Setting, current: Option<f64>) -> Result<Option<Option<f64>>> {
        let range = limits(setting);
        loop {
            write!(
                self.output,
                "{} [{}] ({}-{}): ",
                setting.label(),
                display_value(current),
                range.start(),
                range.end()
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(None));
            }

            match answer.parse::<f64>() {
                Ok(value) => match validate(setting, value) {
                    Ok(value) => return Ok(Some(Some(value))),
                    Err(reason) => writeln!(self.output, "{}", reason)?,
                },
                Err(_) => writeln!(self.output, "'{}' is not a number", answer)?,
            }
        }
    }

    fn confirm(&mut self) -> Result<bool> {
        write!(self.output, "Save? [Y/n]: ")?;
        self.output.flush()?;

        let answer = self.read_answer()?;
        Ok(matches!(answer.as_deref(), Some("" | "y" | "Y" | "yes")))
    }

    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).wrap_err("Read answer error")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> SettingsRecord {
        SettingsRecord {
            field_of_view: Some(90.0),
            fullscreen_refresh_rate: Some(60.0),
            windowed_refresh_rate: Some(60.0),
        }
    }

    fn run_form(input: &str, record: SettingsRecord) -> (Option<SettingsRecord>, String) {
        let mut output = Vec::new();
        let result = Form::new(input.as_bytes(), &mut output).run(record).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[rstest]
    #[case(Setting::FieldOfView, 5.0, true)]
    #[case(Setting::FieldOfView, 180.0, true)]
    #[case(Setting::FieldOfView, 181.0, false)]
    #[case(Setting::FieldOfView, 4.5, false)]
    #[case(Setting::WindowedRefreshRate, 5000.0, true)]
    #[case(Setting::FullscreenRefreshRate, 5000.5, false)]
    #[case(Setting::FullscreenRefreshRate, f64::NAN, false)]
    #[case(Setting::FullscreenRefreshRate, f64::INFINITY, false)]
    fn test_validate(#[case] setting: Setting, #[case] value: f64, #[case] ok: bool) {
        assert_eq!(validate(setting, value).is_ok(), ok);
    }

    #[test]
    fn test_keep_all_values() {
        let (result, _) = run_form("\n\n\n\n", sample());
        assert_eq!(result, Some(sample()));
    }

    #[test]
    fn test_change_field_of_view() {
        let (result, output) = run_form("110\n\n\ny\n", sample());
        let expected = SettingsRecord {
            field_of_view: Some(110.0),
            ..sample()
        };
        assert_eq!(result, Some(expected));
        assert!(output.contains("Field of View [90.0] (5-180): "));
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let (result, output) = run_form("wide\n500\n100\n\n144\n\n", sample());
        assert_eq!(
            result,
            Some(SettingsRecord {
                field_of_view: Some(100.0),
                fullscreen_refresh_rate: Some(60.0),
                windowed_refresh_rate: Some(144.0),
            })
        );
        assert!(output.contains("'wide' is not a number"));
        assert!(output.contains("Field of View must be between 5 and 180, got 500"));
    }

    #[test]
    fn test_declined_save() {
        let (result, _) = run_form("100\n\n\nn\n", sample());
        assert_eq!(result, None);
    }

    #[test]
    fn test_end_of_input_aborts() {
        let (result, _) = run_form("100\n", sample());
        assert_eq!(result, None);
    }

    #[test]
    fn test_unset_value_is_shown() {
        let (result, output) = run_form("\n\n\n\n", SettingsRecord::default());
        assert_eq!(result, Some(SettingsRecord::default()));
        assert!(output.contains("Windowed Refresh Rate [unset]"));
    }
}
