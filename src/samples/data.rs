//! Fixed sample records for the showcase.

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => f.write_str("Female"),
            Self::Male => f.write_str("Male"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

impl Person {
    /// Whole years between the birth date and `today`.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }

    /// Whether `today` is this person's birthday.
    #[must_use]
    pub fn has_birthday_on(&self, today: NaiveDate) -> bool {
        use chrono::Datelike;
        self.birth_date.month() == today.month() && self.birth_date.day() == today.day()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub unit_price: f64,
}

pub const DECIMALS: [f64; 12] = [
    112.45, 845.10, 301.99, 599.99, 42.00, 600.00, 300.00, 777.77, 455.25, 18.50, 512.75, 299.99,
];

pub const PRODUCTS: [Product; 8] = [
    Product { name: "Rustic Wooden Chair", category: "Furniture", unit_price: 149.99 },
    Product { name: "Cotton Hoodie", category: "Clothing", unit_price: 39.50 },
    Product { name: "Steel Water Bottle", category: "Outdoors", unit_price: 24.00 },
    Product { name: "Leather Jacket", category: "Clothing", unit_price: 219.00 },
    Product { name: "Granite Desk Lamp", category: "Furniture", unit_price: 89.95 },
    Product { name: "Wool Socks", category: "Clothing", unit_price: 12.25 },
    Product { name: "Trail Tent", category: "Outdoors", unit_price: 310.00 },
    Product { name: "Oak Bookshelf", category: "Furniture", unit_price: 129.00 },
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The sample people, in id order.
#[must_use]
pub fn people() -> Vec<Person> {
    vec![
        Person { id: 1, first_name: "Ada", last_name: "Lovelace", gender: Gender::Female, birth_date: date(1975, 12, 10) },
        Person { id: 2, first_name: "Alan", last_name: "Turing", gender: Gender::Male, birth_date: date(1952, 6, 23) },
        Person { id: 3, first_name: "Grace", last_name: "Hopper", gender: Gender::Female, birth_date: date(1946, 12, 9) },
        Person { id: 4, first_name: "Edsger", last_name: "Dijkstra", gender: Gender::Male, birth_date: date(1990, 5, 11) },
        Person { id: 5, first_name: "Barbara", last_name: "Liskov", gender: Gender::Female, birth_date: date(1979, 11, 7) },
        Person { id: 6, first_name: "Donald", last_name: "Knuth", gender: Gender::Male, birth_date: date(1968, 1, 10) },
        Person { id: 7, first_name: "Margaret", last_name: "Hamilton", gender: Gender::Female, birth_date: date(1986, 8, 17) },
        Person { id: 8, first_name: "Ken", last_name: "Thompson", gender: Gender::Male, birth_date: date(1953, 2, 4) },
        Person { id: 9, first_name: "Frances", last_name: "Allen", gender: Gender::Female, birth_date: date(1962, 8, 4) },
        Person { id: 10, first_name: "Dennis", last_name: "Ritchie", gender: Gender::Male, birth_date: date(1981, 9, 9) },
    ]
}
