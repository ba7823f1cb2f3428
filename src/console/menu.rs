//! Transport selection and the main menu loop

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use super::error::InputError;
use super::prompt::Console;
use crate::transit::{Person, Ticket, TransitNetwork, TransportKind};

/// A recognised main menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TransportMovement,
    RouteInfo,
    Schedule,
    BuyTicket,
    Exit,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Result<MenuChoice, InputError> {
        match token.trim() {
            "1" => Ok(MenuChoice::TransportMovement),
            "2" => Ok(MenuChoice::RouteInfo),
            "3" => Ok(MenuChoice::Schedule),
            "4" => Ok(MenuChoice::BuyTicket),
            "5" => Ok(MenuChoice::Exit),
            other => Err(InputError::InvalidMenuSelection(other.to_string())),
        }
    }
}

/// Menu loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Exiting,
}

/// Ask which kind of transport the user is interested in
pub fn choose_transport<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<TransportKind> {
    console.say("\n=== Transport turini tanlang ===")?;
    for (index, kind) in TransportKind::ALL.iter().enumerate() {
        console.say(format!("{}. {}", index + 1, kind.label()))?;
    }
    let kind = console.ask_until("Tanlovni kiriting (1-5): ", |answer| {
        TransportKind::from_menu_token(answer.trim())
            .ok_or_else(|| InputError::InvalidMenuSelection(answer.to_string()))
    })?;
    Ok(kind)
}

/// Print how the selected vehicle moves followed by the timetable
pub fn show_transport_info<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    network: &TransitNetwork,
    kind: TransportKind,
) -> Result<()> {
    match network.transport_of_kind(kind) {
        Some(transport) => {
            console.say(format!("\nTanlangan transport: {}", kind.label()))?;
            console.say(transport.describe_movement())?;
            console.say("")?;
            console.say(network.schedule().get_schedule())?;
        }
        None => console.say("Noto'g'ri tanlov!")?,
    }
    Ok(())
}

/// Sell `user` a ticket on the selected vehicle along the network's route
pub fn buy_ticket<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    network: &TransitNetwork,
    user: &Person,
    kind: TransportKind,
) -> Result<()> {
    let (Some(transport), Some(route)) =
        (network.transport_of_kind(kind), network.default_route())
    else {
        console.say("Chipta sotib bo'lmadi: transport yoki yo'nalish topilmadi.")?;
        return Ok(());
    };

    let ticket = Ticket::issue(transport, user, route);
    info!(
        "Ticket purchased: {} on {} for {} so'm",
        user.username, transport.name, ticket.price
    );
    console.say(format!("\n{}", ticket.ticket_info()))?;
    Ok(())
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("\n=== Menyu ===")?;
    console.say("1. Transport harakati haqida ma'lumot")?;
    console.say("2. Yo'nalish haqida ma'lumot")?;
    console.say("3. Jadvalni ko'rish")?;
    console.say("4. Chipta sotib olish")?;
    console.say("5. Dasturdan chiqish")?;
    Ok(())
}

fn handle_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    network: &TransitNetwork,
    user: &Person,
    kind: TransportKind,
    choice: MenuChoice,
) -> Result<MenuState> {
    debug!("Menu choice {:?} by {}", choice, user.username);
    match choice {
        MenuChoice::TransportMovement => show_transport_info(console, network, kind)?,
        MenuChoice::RouteInfo => match network.default_route() {
            Some(route) => console.say(route.route_info())?,
            None => console.say("Yo'nalish mavjud emas.")?,
        },
        MenuChoice::Schedule => console.say(network.schedule().get_schedule())?,
        MenuChoice::BuyTicket => buy_ticket(console, network, user, kind)?,
        MenuChoice::Exit => {
            info!("User logged out: {}", user.username);
            console.say("Dastur tugatildi.")?;
            return Ok(MenuState::Exiting);
        }
    }
    Ok(MenuState::AwaitingChoice)
}

/// Run the main menu until the user exits
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    network: &TransitNetwork,
    user: &Person,
    kind: TransportKind,
) -> Result<()> {
    let mut state = MenuState::AwaitingChoice;
    while state == MenuState::AwaitingChoice {
        print_menu(console)?;
        let token = console.prompt("Tanlovni kiriting: ")?;
        state = match MenuChoice::parse(&token) {
            Ok(choice) => handle_choice(console, network, user, kind, choice)?,
            Err(rejection) => {
                debug!("Rejected menu token {:?}", token);
                console.say(rejection.to_string())?;
                MenuState::AwaitingChoice
            }
        };
    }
    Ok(())
}
