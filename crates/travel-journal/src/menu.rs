use std::io::{BufRead, Write};

use chrono::NaiveDate;
use journal_output::NO_USERS_MESSAGE;
use journal_store::RecordStore;
use tracing::{debug, warn};

use crate::console::{Console, PromptError};
use crate::handlers::{
    handle_list_trips, handle_list_users, handle_register_trip, handle_register_user, CommandError,
};

const MENU: &str = "\nWhat would you like to do?
1. Add a new user
2. Add a new trip
3. Display all users
4. Display trips for a user
5. Quit";

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddUser,
    AddTrip,
    ListUsers,
    ListTrips,
    Quit,
}

impl MenuChoice {
    /// Matches the raw line; `" 1"` is not a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddUser),
            "2" => Some(MenuChoice::AddTrip),
            "3" => Some(MenuChoice::ListUsers),
            "4" => Some(MenuChoice::ListTrips),
            "5" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// The interactive session: owns the store and loops over the menu until the
/// user quits or input runs out.
pub struct Journal<C> {
    store: RecordStore,
    clock: C,
}

impl<C: Clock> Journal<C> {
    pub fn new(store: RecordStore, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CommandError> {
        console.say("Welcome to your Travel Journal!")?;

        loop {
            console.say(MENU)?;
            let input = console.prompt("Enter your choice (1-5): ")?;

            let Some(choice) = MenuChoice::parse(&input) else {
                console.say("Invalid choice. Please try again.")?;
                continue;
            };
            debug!("Menu choice {:?}", choice);

            if choice == MenuChoice::Quit {
                console.say("Thank you for using the Travel Journal. Goodbye!")?;
                return Ok(());
            }

            match self.dispatch(choice, console) {
                Ok(()) => {}
                Err(CommandError::Prompt(e @ PromptError::TooManyAttempts { .. })) => {
                    warn!("{}", e);
                    console.say("Too many invalid attempts; returning to menu.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<(), CommandError> {
        match choice {
            MenuChoice::AddUser => {
                handle_register_user(&mut self.store, console, self.clock.today())
            }
            MenuChoice::AddTrip => {
                if !self.store.has_users() {
                    console.say("Please add a user first.")?;
                    return Ok(());
                }
                let username = console.prompt("Enter the username to add a trip for: ")?;
                if self.store.contains_user(&username) {
                    handle_register_trip(&mut self.store, console, &username)
                } else {
                    console.say("User not found.")?;
                    Ok(())
                }
            }
            MenuChoice::ListUsers => handle_list_users(&self.store, console),
            MenuChoice::ListTrips => {
                if !self.store.has_users() {
                    console.say(NO_USERS_MESSAGE)?;
                    return Ok(());
                }
                let username = console.prompt("Enter the username to display trips for: ")?;
                if self.store.contains_user(&username) {
                    handle_list_trips(&self.store, console, &username)
                } else {
                    console.say("User not found.")?;
                    Ok(())
                }
            }
            MenuChoice::Quit => Ok(()),
        }
    }
}
