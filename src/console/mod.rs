//! Interactive console flows
//!
//! Registration, login, transport selection and the main menu. All flows
//! take a `Console` so they can run against stdin/stdout or scripted input.

mod error;
mod menu;
mod prompt;
mod registration;
mod session;

pub use error::{ConsoleError, InputError};
pub use menu::{buy_ticket, choose_transport, run_menu, show_transport_info, MenuChoice, MenuState};
pub use prompt::Console;
pub use registration::{parse_age, register_user, validate_username};
pub use session::{lookup_user, start_session, Lookup};
