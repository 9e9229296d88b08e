use super::Command;
use crate::error::{Result, WrapErr};
use crate::form::display_value;
use crate::target::Target;
use profile::SettingsRecord;

pub struct ShowCommand {
    target: Target,
    json: bool,
}

impl ShowCommand {
    pub fn new(target: Target, json: bool) -> Self {
        Self { target, json }
    }

    fn render(record: &SettingsRecord) -> String {
        record
            .iter()
            .map(|(setting, value)| format!("{}: {}", setting.label(), display_value(value)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Command for ShowCommand {
    fn execute(&self) -> Result<()> {
        let path = self.target.resolve()?;
        let record = profile::load(&path).wrap_err("Load profile error")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!("{}", Self::render(&record));
        }
        Ok(())
    }
}
