use journal_types::{format_date, Trip, User};

pub const NO_USERS_MESSAGE: &str = "No users registered yet.";

pub fn format_no_trips(username: &str) -> String {
    format!("No trips recorded for {} yet.", username)
}

/// Every entry starts with an empty line, so the output opens with a blank
/// line that separates it from whatever was printed before.
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return NO_USERS_MESSAGE.to_string();
    }

    let mut lines = Vec::new();
    for (i, user) in users.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("User {}:", i + 1));
        lines.push(format!("Name: {}", user.name));
        lines.push(format!("Age: {}", user.age));
        lines.push(format!("Favorite Color: {}", user.favorite_color));
        lines.push(format!("Joined Date: {}", format_date(&user.joined_date)));
    }
    lines.join("\n")
}

pub fn format_trips(username: &str, trips: &[Trip]) -> String {
    if trips.is_empty() {
        return format_no_trips(username);
    }

    let mut lines = Vec::new();
    for (i, trip) in trips.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("Trip {}:", i + 1));
        lines.push(format!("Name: {}", trip.name));
        lines.push(format_trip_dates(trip));
        lines.push(format!(
            "Location: {}, {}",
            trip.location.city, trip.location.country
        ));
    }
    lines.join("\n")
}

fn format_trip_dates(trip: &Trip) -> String {
    format!(
        "Dates: {} to {}",
        format_date(&trip.start_date),
        format_date(&trip.end_date)
    )
}
