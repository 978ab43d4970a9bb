use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub name: String,
    pub start_date: NaiveDate,
    /// Not checked against `start_date`.
    pub end_date: NaiveDate,
    pub location: Location,
}

impl Trip {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            location: Location {
                city: city.into(),
                country: country.into(),
            },
        }
    }
}
