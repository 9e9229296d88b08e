use super::Command;
use crate::error::{Result, WrapErr};
use crate::form::Form;
use crate::target::Target;
use std::io;

pub struct EditCommand {
    target: Target,
}

impl EditCommand {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl Command for EditCommand {
    fn execute(&self) -> Result<()> {
        let path = self.target.resolve()?;
        let record = profile::load(&path).wrap_err("Load profile error")?;

        println!("Editing {}", path.display());
        let mut form = Form::new(io::stdin().lock(), io::stdout());
        match form.run(record)? {
            Some(edited) if edited == record => println!("Nothing changed."),
            Some(edited) => {
                profile::save(&path, &edited).wrap_err("Save profile error")?;
                println!("Saved.");
            }
            None => println!("Aborted, profile left unchanged."),
        }
        Ok(())
    }
}
