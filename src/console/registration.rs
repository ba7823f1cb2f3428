//! Interactive registration of a new passenger or driver

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use super::error::InputError;
use super::prompt::Console;
use crate::store::UserStore;
use crate::transit::{Person, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleChoice {
    Passenger,
    Driver,
}

fn parse_role_choice(answer: &str) -> Result<RoleChoice, InputError> {
    match answer.trim() {
        "1" => Ok(RoleChoice::Passenger),
        "2" => Ok(RoleChoice::Driver),
        other => Err(InputError::InvalidMenuSelection(other.to_string())),
    }
}

/// Parse an age as a non-negative integer
pub fn parse_age(answer: &str) -> Result<u32, InputError> {
    answer
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber(answer.to_string()))
}

/// Accept `answer` as a username unless it is blank or already taken
pub fn validate_username<'a>(
    answer: &str,
    taken: impl IntoIterator<Item = &'a str>,
) -> Result<String, InputError> {
    if answer.trim().is_empty() {
        return Err(InputError::EmptyUsername);
    }
    if taken.into_iter().any(|existing| existing == answer) {
        return Err(InputError::DuplicateUsername(answer.to_string()));
    }
    Ok(answer.to_string())
}

/// Ask for the new user's details, persist them and return the person
pub fn register_user<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &UserStore,
) -> Result<Person> {
    console.say("\n--- Ro'yxatdan o'tish ---")?;
    console.say("1. Yo'lovchi")?;
    console.say("2. Haydovchi")?;
    let choice = console.ask_until("Tanlovni kiriting (1 yoki 2): ", parse_role_choice)?;

    let first_name = console.prompt("Ismingizni kiriting: ")?;
    let last_name = console.prompt("Familiyangizni kiriting: ")?;
    let age = console.ask_until("Yoshingizni kiriting: ", parse_age)?;

    let existing = store
        .load()
        .with_context(|| format!("Failed to read users from {}", store.path().display()))?;
    let username = console.ask_until("Foydalanuvchi nomini kiriting: ", |answer| {
        validate_username(answer, existing.iter().map(|r| r.username.as_str()))
    })?;

    let role = match choice {
        RoleChoice::Passenger => Role::Passenger,
        RoleChoice::Driver => Role::Driver {
            license_number: console.prompt("Haydovchilik guvohnomasi raqamini kiriting: ")?,
        },
    };

    let person = Person {
        first_name,
        last_name,
        age,
        username,
        role,
    };

    store
        .append(&person)
        .with_context(|| format!("Failed to save user {}", person.username))?;
    info!(
        "User registered: {} ({})",
        person.username,
        person.role_title()
    );

    console.say(format!(
        "\n{}, siz {} sifatida ro'yxatdan o'tdingiz!",
        person.full_name(),
        person.role_title()
    ))?;
    Ok(person)
}
