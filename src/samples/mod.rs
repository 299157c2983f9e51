//! Showcase routines rendering the fixed sample data.
//!
//! Each routine writes one titled section to a [`Console`]. The filtering and
//! grouping logic lives in small pure functions next to them so it can be
//! tested without rendering.

pub mod data;

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::domain::error::Result;
use crate::domain::label::{Category, Label};
use crate::extensions::RangeExt;
use crate::ui::style::Style;
use crate::ui::table::{Justify, Table, TableBorder};
use crate::ui::text::Text;
use crate::ui::{Console, Renderable};

pub use data::{people, Gender, Person, Product, DECIMALS, PRODUCTS};

/// Values sorted from largest to smallest.
#[must_use]
pub fn descending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted
}

/// Inclusive range filter written with iterator adapters.
#[must_use]
pub fn filter_between(values: &[f64], lower: f64, upper: f64) -> Vec<f64> {
    descending(values)
        .into_iter()
        .filter(|value| value.between(lower, upper))
        .collect()
}

/// The same filter as [`filter_between`], written as a plain loop.
#[must_use]
pub fn filter_between_manual(values: &[f64], lower: f64, upper: f64) -> Vec<f64> {
    let mut filtered = Vec::new();
    for value in descending(values) {
        if value >= lower && value <= upper {
            filtered.push(value);
        }
    }
    filtered
}

/// Products above `threshold`, most expensive first.
#[must_use]
pub fn high_value_products(products: &[Product], threshold: f64) -> Vec<&Product> {
    let mut selected: Vec<&Product> = products.iter().filter(|p| p.unit_price > threshold).collect();
    selected.sort_by(|a, b| b.unit_price.total_cmp(&a.unit_price));
    selected
}

/// Products whose category matches exactly.
#[must_use]
pub fn products_in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.category == category).collect()
}

/// People born in `first_year..=last_year`, in input order.
#[must_use]
pub fn born_between(people: &[Person], first_year: i32, last_year: i32) -> Vec<&Person> {
    people
        .iter()
        .filter(|p| p.birth_date.year().between(first_year, last_year))
        .collect()
}

/// People grouped by gender, each group ordered by last name.
#[must_use]
pub fn group_by_gender(people: &[Person]) -> BTreeMap<Gender, Vec<&Person>> {
    let mut groups: BTreeMap<Gender, Vec<&Person>> = BTreeMap::new();
    for person in people {
        groups.entry(person.gender).or_default().push(person);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|p| p.last_name);
    }
    groups
}

const fn yes_no(value: bool) -> (&'static str, Category) {
    if value {
        ("Yes", Category::Success)
    } else {
        ("No", Category::Error)
    }
}

/// Shows one pill per category in a borderless row.
///
/// # Errors
///
/// Returns an error if writing to the console fails.
pub fn category_pills<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.heading("category_pills")?;

    let mut table = Table::new().border(TableBorder::None).justify(Justify::Center);
    let mut cells: Vec<Box<dyn Renderable>> = Vec::new();
    for category in Category::ALL {
        table = table.add_column("");
        cells.push(Box::new(Label::new(category.as_str(), category)));
    }
    table.push_row(cells);
    console.write(&table)
}

/// Writes `values` as an `index: value` listing followed by a blank line.
fn indexed_values<W: Write>(
    console: &mut Console<W>,
    values: &[f64],
    index_style: Style,
    value_style: Style,
) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        let index = format!("{index:<4}");
        let value = format!("{value:.2}");
        console.spans(&[
            (index.as_str(), index_style),
            (": ", Style::plain()),
            (value.as_str(), value_style),
        ])?;
    }
    console.blank_line()
}

/// Orders, filters and compares the decimal samples.
///
/// # Errors
///
/// Returns an error if writing to the console fails.
pub fn decimal_examples<W: Write>(console: &mut Console<W>) -> Result<()> {
    let colors = console.theme().colors.clone();
    let emphasis = Style::foreground(colors.emphasis_fg).bold();
    let index_style = Style::foreground(colors.index_fg).bold();
    let value_style = Style::foreground(colors.value_fg);

    console.heading("decimal_examples")?;

    console.line("All elements in descending order:", emphasis)?;
    indexed_values(console, &descending(&DECIMALS), index_style, value_style)?;

    console.line("Between 300 and 600 using filter:", emphasis)?;
    let filtered = filter_between(&DECIMALS, 300.0, 600.0);
    indexed_values(console, &filtered, index_style, value_style)?;

    console.line("Between 300 and 600 using a manual if:", emphasis)?;
    let manual = filter_between_manual(&DECIMALS, 300.0, 600.0);
    indexed_values(console, &manual, index_style, value_style)?;

    let (answer, category) = yes_no(filtered == manual);
    tracing::debug!(filtered = filtered.len(), manual = manual.len(), "compared filters");

    let table = Table::new()
        .border(TableBorder::None)
        .add_column("")
        .add_column("")
        .add_row([
            Box::new(Text::new("Filter and loop results are equal:", emphasis)) as Box<dyn Renderable>,
            Box::new(Label::new(answer, category)),
        ]);
    console.write(&table)
}

/// Lists products priced above 100 and the clothing products.
///
/// # Errors
///
/// Returns an error if writing to the console fails.
pub fn product_examples<W: Write>(console: &mut Console<W>) -> Result<()> {
    let colors = console.theme().colors.clone();
    let name_style = Style::foreground(colors.index_fg).bold();
    let price_style = Style::foreground(colors.value_fg);
    let emphasis = Style::foreground(colors.emphasis_fg).bold();

    console.heading("product_examples")?;

    console.line("Priced above 100:", emphasis)?;
    for product in high_value_products(&PRODUCTS, 100.0) {
        let name = format!("{:<25}", product.name);
        let price = format!("${:.2}", product.unit_price);
        console.spans(&[(name.as_str(), name_style), (price.as_str(), price_style)])?;
    }
    console.blank_line()?;

    console.line("Clothing:", emphasis)?;
    for product in products_in_category(&PRODUCTS, "Clothing") {
        let name = format!("{:<25}", product.name);
        let price = format!("${:.2}", product.unit_price);
        console.spans(&[(name.as_str(), name_style), (price.as_str(), price_style)])?;
    }
    Ok(())
}

/// Lists people born between 1950 and 1980.
///
/// # Errors
///
/// Returns an error if writing to the console fails.
pub fn born_between_examples<W: Write>(console: &mut Console<W>, people: &[Person]) -> Result<()> {
    let colors = console.theme().colors.clone();
    let name_style = Style::foreground(colors.index_fg).bold();
    let year_style = Style::foreground(colors.value_fg);

    console.heading("born_between_1950_and_1980")?;
    for person in born_between(people, 1950, 1980) {
        let name = format!("{:<15}{:<15}", person.first_name, person.last_name);
        let year = person.birth_date.year().to_string();
        console.spans(&[
            (name.as_str(), name_style),
            (" born in ", Style::plain()),
            (year.as_str(), year_style),
        ])?;
    }
    Ok(())
}

/// Groups people by gender and shows their ages as of `today`.
///
/// # Errors
///
/// Returns an error if writing to the console fails.
pub fn gender_groups<W: Write>(console: &mut Console<W>, people: &[Person], today: NaiveDate) -> Result<()> {
    let colors = console.theme().colors.clone();
    let name_style = Style::foreground(colors.index_fg);
    let age_style = Style::foreground(colors.value_fg);

    console.heading("group_by_gender")?;
    for (gender, members) in group_by_gender(people) {
        let category = match gender {
            Gender::Female => Category::Warning,
            Gender::Male => Category::Info,
        };
        console.write(&Label::new(gender.to_string(), category))?;
        for person in members {
            let age = person.age_on(today).to_string();
            let mut spans = vec![
                ("    ", Style::plain()),
                (person.first_name, name_style),
                (" ", Style::plain()),
                (person.last_name, name_style),
                (" age ", Style::plain()),
                (age.as_str(), age_style),
            ];
            if person.has_birthday_on(today) {
                spans.push((" (birthday today)", Style::plain().bold()));
            }
            console.spans(&spans)?;
        }
        console.blank_line()?;
    }
    Ok(())
}

/// Shows the people in a rounded table with gender markers.
///
/// The markers are `♀`/`♂` on Unicode surfaces and `F`/`M` otherwise.
///
/// # Errors
///
/// Returns an error if writing to the console fails.
pub fn people_table<W: Write>(console: &mut Console<W>, people: &[Person]) -> Result<()> {
    let colors = console.theme().colors.clone();
    let unicode = console.options().unicode();
    let heading = Style::foreground(colors.heading_fg);

    let mut table = Table::new()
        .border(TableBorder::Rounded)
        .border_style(Style::foreground(colors.border_fg))
        .justify(Justify::Center)
        .title(Text::new("Humans", heading.bold()))
        .header_style(heading)
        .add_column("Id")
        .add_column("First Name")
        .add_column("Last Name")
        .add_column("Gender")
        .add_column("Birth Date");

    for person in people {
        let marker = match (person.gender, unicode) {
            (Gender::Female, true) => Text::new("♀", Style::foreground(colors.female_fg)),
            (Gender::Male, true) => Text::new("♂", Style::foreground(colors.male_fg)),
            (Gender::Female, false) => Text::new("F", Style::foreground(colors.female_fg)),
            (Gender::Male, false) => Text::new("M", Style::foreground(colors.male_fg)),
        };
        table.push_row([
            Box::new(Text::plain(person.id.to_string())) as Box<dyn Renderable>,
            Box::new(Text::plain(person.first_name)),
            Box::new(Text::plain(person.last_name)),
            Box::new(marker),
            Box::new(Text::plain(person.birth_date.format("%Y-%m-%d").to_string())),
        ]);
    }

    console.write(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::renderable::{Capabilities, RenderOptions};
    use crate::ui::Theme;

    fn plain_console(width: usize) -> Console<Vec<u8>> {
        Console::new(
            Vec::new(),
            RenderOptions::new(Capabilities { unicode: false, ansi: false }),
            width,
            Theme::default(),
        )
    }

    #[test]
    fn descending_orders_largest_first() {
        let sorted = descending(&[1.0, 3.0, 2.0]);
        assert_eq!(sorted, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn filter_strategies_agree() {
        let filtered = filter_between(&DECIMALS, 300.0, 600.0);
        assert_eq!(filtered, filter_between_manual(&DECIMALS, 300.0, 600.0));
        assert_eq!(filtered, vec![600.00, 599.99, 512.75, 455.25, 301.99, 300.00]);
    }

    #[test]
    fn high_value_products_sorted_desc() {
        let names: Vec<_> = high_value_products(&PRODUCTS, 100.0).iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Trail Tent", "Leather Jacket", "Rustic Wooden Chair", "Oak Bookshelf"]
        );
    }

    #[test]
    fn clothing_filter() {
        assert_eq!(products_in_category(&PRODUCTS, "Clothing").len(), 3);
        assert!(products_in_category(&PRODUCTS, "Toys").is_empty());
    }

    #[test]
    fn born_between_is_inclusive() {
        let people = people();
        let ids: Vec<_> = born_between(&people, 1950, 1980).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 5, 6, 8, 9]);
    }

    #[test]
    fn groups_are_sorted_by_last_name() {
        let people = people();
        let groups = group_by_gender(&people);
        let female: Vec<_> = groups[&Gender::Female].iter().map(|p| p.last_name).collect();
        assert_eq!(female, vec!["Allen", "Hamilton", "Hopper", "Liskov", "Lovelace"]);
        assert_eq!(groups[&Gender::Male].len(), 5);
    }

    #[test]
    fn age_and_birthday() {
        let people = people();
        let ada = &people[0];
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        assert_eq!(ada.age_on(today), 50);
        assert!(ada.has_birthday_on(today));
        assert_eq!(ada.age_on(NaiveDate::from_ymd_opt(2025, 12, 9).unwrap()), 49);
    }

    #[test]
    fn decimal_examples_reports_equal_filters() {
        let mut console = plain_console(80);
        decimal_examples(&mut console).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("0   : 845.10"));
        let manual_listing = out.split("using a manual if:").nth(1).unwrap();
        let expected = filter_between_manual(&DECIMALS, 300.0, 600.0);
        assert!(manual_listing.contains(&format!("0   : {:.2}", expected[0])));
        assert!(out.contains("  Yes  "));
    }

    #[test]
    fn people_table_uses_ascii_markers_without_unicode() {
        let mut console = plain_console(100);
        people_table(&mut console, &people()).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("| F      |"));
        assert!(out.contains("1975-12-10"));
        assert!(!out.contains('♀'));
    }

    #[test]
    fn category_pills_render_every_category() {
        let mut console = plain_console(80);
        category_pills(&mut console).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        for category in Category::ALL {
            assert!(out.contains(&format!("  {category}  ")));
        }
    }
}
