use super::Command;
use crate::error::Result;
use crate::target::Target;

pub struct LocateCommand {
    target: Target,
}

impl LocateCommand {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl Command for LocateCommand {
    fn execute(&self) -> Result<()> {
        let path = self.target.resolve()?;
        println!("{}", path.display());
        Ok(())
    }
}
