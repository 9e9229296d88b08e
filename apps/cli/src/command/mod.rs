pub mod edit;
pub mod locate;
pub mod set;
pub mod show;

use crate::error::Result;

pub use edit::EditCommand;
pub use locate::LocateCommand;
pub use set::SetCommand;
pub use show::ShowCommand;

pub trait Command {
    fn execute(&self) -> Result<()>;
}
