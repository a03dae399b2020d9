//! Shared record fixtures for core tests.
//!
//! Every fixture goes through `#[derive(Sortable)]`, so these tests also
//! exercise the generated field registries.

use crate::Sortable;
use chrono::NaiveDate;

///
/// Country
///

#[derive(Clone, Debug, PartialEq, Sortable)]
#[sort(rename_all = "PascalCase")]
pub struct Country {
    pub code: String,
    pub(crate) population: u64,
}

///
/// Address
///

#[derive(Clone, Debug, PartialEq, Sortable)]
#[sort(rename_all = "PascalCase")]
pub struct Address {
    pub city: String,
    pub zip: Option<u32>,
    #[sort(nested)]
    pub country: Option<Box<Country>>,
}

///
/// Person
///
/// `rank` is private and `nickname` is renamed, mirroring records that
/// expose internal-only columns for sorting.
///

#[derive(Clone, Debug, PartialEq, Sortable)]
#[sort(rename_all = "PascalCase")]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: i32,
    pub born: Option<NaiveDate>,
    pub score: f64,
    #[sort(nested)]
    pub address: Address,
    #[sort(nested)]
    pub previous: Option<Address>,
    #[sort(rename = "Alias")]
    pub nickname: Option<String>,
    rank: i16,
    #[sort(skip)]
    pub notes: Vec<String>,
}

impl Person {
    pub fn new(id: u32, name: &str, age: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            born: None,
            score: 0.0,
            address: Address::new("Nowhere"),
            previous: None,
            nickname: None,
            rank: 0,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn living_in(mut self, city: &str) -> Self {
        self.address = Address::new(city);
        self
    }

    #[must_use]
    pub fn with_country(mut self, code: &str, population: u64) -> Self {
        self.address.country = Some(Box::new(Country {
            code: code.to_string(),
            population,
        }));
        self
    }

    #[must_use]
    pub fn with_previous(mut self, city: &str) -> Self {
        self.previous = Some(Address::new(city));
        self
    }

    #[must_use]
    pub const fn with_rank(mut self, rank: i16) -> Self {
        self.rank = rank;
        self
    }

    #[must_use]
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn born_on(mut self, y: i32, m: u32, d: u32) -> Self {
        self.born = NaiveDate::from_ymd_opt(y, m, d);
        self
    }
}

impl Address {
    pub fn new(city: &str) -> Self {
        Self {
            city: city.to_string(),
            zip: None,
            country: None,
        }
    }
}

/// Ids of `rows` in their current order.
pub fn ids(rows: &[Person]) -> Vec<u32> {
    rows.iter().map(|person| person.id).collect()
}

/// Ten people with duplicated ages and names for tie-break checks.
pub fn people() -> Vec<Person> {
    vec![
        Person::new(0, "Mia", 30).living_in("Sofia"),
        Person::new(1, "Ann", 25).living_in("Varna"),
        Person::new(2, "Zoe", 30).living_in("Burgas"),
        Person::new(3, "Bob", 25).living_in("Sofia"),
        Person::new(4, "Ann", 41).living_in("Plovdiv"),
        Person::new(5, "Eve", 30).living_in("Varna"),
        Person::new(6, "Ann", 25).living_in("Ruse"),
        Person::new(7, "Tom", 19).living_in("Sofia"),
        Person::new(8, "Kim", 41).living_in("Burgas"),
        Person::new(9, "Lea", 19).living_in("Pleven"),
    ]
}
