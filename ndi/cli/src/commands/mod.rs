mod get;
mod init;
mod inspect;

pub use self::get::GetCommand;
pub use self::init::InitCommand;
pub use self::inspect::InspectCommand;
