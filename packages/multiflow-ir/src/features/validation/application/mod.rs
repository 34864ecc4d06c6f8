mod init_analysis;
mod validator;

pub use init_analysis::{initialization_state_before, InitState};
pub use validator::check;
