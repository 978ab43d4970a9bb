use std::io::{BufRead, Write};

use chrono::NaiveDate;
use journal_output::{format_trips, format_users};
use journal_store::{RecordStore, StoreError};
use journal_types::{Trip, User};
use thiserror::Error;
use tracing::info;

use crate::console::{Console, PromptError};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn handle_register_user<R: BufRead, W: Write>(
    store: &mut RecordStore,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<(), CommandError> {
    let name = console.prompt("Enter your name: ")?;
    if let Err(e) = store.check_new_name(&name) {
        console.say(&e.to_string())?;
        return Ok(());
    }
    let age = console.prompt_age("Enter your age: ")?;
    let favorite_color = console.prompt("Enter your favorite color: ")?;

    let user = store.register_user(User::new(name, age, favorite_color, today))?;
    let message = format!("User {} added successfully!", user.name);
    info!("Added user, {} registered", store.user_count());
    console.say(&message)?;
    Ok(())
}

/// Callers check that `username` is known before calling this; an unknown
/// name still fails, but only after every prompt has been answered.
pub fn handle_register_trip<R: BufRead, W: Write>(
    store: &mut RecordStore,
    console: &mut Console<R, W>,
    username: &str,
) -> Result<(), CommandError> {
    let name = console.prompt("Enter trip name: ")?;
    let start_date = console.prompt_date("Enter start date (YYYY-MM-DD): ")?;
    let end_date = console.prompt_date("Enter end date (YYYY-MM-DD): ")?;
    let city = console.prompt("Enter city: ")?;
    let country = console.prompt("Enter country: ")?;

    store.register_trip(username, Trip::new(name, start_date, end_date, city, country))?;
    info!("Added trip");
    console.say("Trip added successfully!")?;
    Ok(())
}

pub fn handle_list_users<R: BufRead, W: Write>(
    store: &RecordStore,
    console: &mut Console<R, W>,
) -> Result<(), CommandError> {
    console.say(&format_users(store.users()))?;
    Ok(())
}

pub fn handle_list_trips<R: BufRead, W: Write>(
    store: &RecordStore,
    console: &mut Console<R, W>,
    username: &str,
) -> Result<(), CommandError> {
    let trips = store.trips_for(username)?;
    console.say(&format_trips(username, trips))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_types::DuplicateUserPolicy;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), None)
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 28).unwrap()
    }

    #[test]
    fn test_register_user() {
        let mut store = RecordStore::default();
        let mut c = console("Alice\n30\nblue\n");
        handle_register_user(&mut store, &mut c, today()).unwrap();

        assert_eq!(store.users(), &[User::new("Alice", 30, "blue", today())]);
        assert!(store.trips_for("Alice").unwrap().is_empty());
        assert_eq!(
            output(c),
            "Enter your name: Enter your age: Enter your favorite color: \
             User Alice added successfully!\n"
        );
    }

    #[test]
    fn test_register_user_rejects_duplicate_before_asking_more() {
        let mut store = RecordStore::new(DuplicateUserPolicy::Reject);
        handle_register_user(&mut store, &mut console("Bob\n20\nred\n"), today()).unwrap();

        let mut c = console("Bob\n");
        handle_register_user(&mut store, &mut c, today()).unwrap();

        assert_eq!(store.user_count(), 1);
        assert_eq!(output(c), "Enter your name: User Bob already exists.\n");
    }

    #[test]
    fn test_register_trip() {
        let mut store = RecordStore::default();
        handle_register_user(&mut store, &mut console("Alice\n30\nblue\n"), today()).unwrap();

        let mut c = console("Paris Trip\n2024-06-01\n2024-06-10\nParis\nFrance\n");
        handle_register_trip(&mut store, &mut c, "Alice").unwrap();

        let trips = store.trips_for("Alice").unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].name, "Paris Trip");
        assert_eq!(trips[0].location.city, "Paris");
        assert_eq!(trips[0].location.country, "France");
        assert!(output(c).ends_with("Trip added successfully!\n"));
    }

    #[test]
    fn test_register_trip_unknown_user_is_an_error() {
        let mut store = RecordStore::default();
        let mut c = console("x\n2024-06-01\n2024-06-02\nc\nd\n");
        let result = handle_register_trip(&mut store, &mut c, "Ghost");
        assert!(matches!(
            result,
            Err(CommandError::Store(StoreError::UnknownUser(_)))
        ));
    }

    #[test]
    fn test_list_users_empty() {
        let store = RecordStore::default();
        let mut c = console("");
        handle_list_users(&store, &mut c).unwrap();
        assert_eq!(output(c), "No users registered yet.\n");
    }

    #[test]
    fn test_list_trips_empty() {
        let mut store = RecordStore::default();
        handle_register_user(&mut store, &mut console("Alice\n30\nblue\n"), today()).unwrap();

        let mut c = console("");
        handle_list_trips(&store, &mut c, "Alice").unwrap();
        assert_eq!(output(c), "No trips recorded for Alice yet.\n");
    }
}
