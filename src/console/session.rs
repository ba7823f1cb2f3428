//! Login by username, falling back to registration

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use super::prompt::Console;
use super::registration::register_user;
use crate::store::UserStore;
use crate::transit::Person;

/// Outcome of looking a username up in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Person),
    /// Caller should run registration
    NotRegistered,
}

/// Read-only lookup of `username`
pub fn lookup_user(store: &UserStore, username: &str) -> Result<Lookup> {
    let found = store
        .find(username)
        .with_context(|| format!("Failed to look up user {}", username))?;
    Ok(match found {
        Some(person) => Lookup::Found(person),
        None => Lookup::NotRegistered,
    })
}

/// Identify the user at the console, registering them if needed
pub fn start_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &UserStore,
) -> Result<Person> {
    console.say("\n=== Jamoat transporti boshqaruv tizimi ===")?;
    let username = console.prompt("Foydalanuvchi nomingizni kiriting: ")?;

    let user = match lookup_user(store, &username)? {
        Lookup::Found(person) => person,
        Lookup::NotRegistered => {
            console.say("Siz ro'yxatdan o'tmagansiz. Iltimos, ro'yxatdan o'ting.")?;
            register_user(console, store)?
        }
    };

    info!("User logged in: {}", user.username);
    console.say(format!("\nXush kelibsiz, {}!", user.full_name()))?;
    console.say(format!(
        "Siz {} sifatida ro'yxatdan o'tgansiz.",
        user.role_title()
    ))?;
    Ok(user)
}
