//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use birthday_core::Birthday;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one birthday as a table row.
pub fn row(birthday: &Birthday) {
    println!(
        "{:>6}  {:<24} {:04}-{:02}-{:02}  {}",
        birthday.id.to_string().dimmed(),
        birthday.name,
        birthday.birth_year,
        birthday.birth_month,
        birthday.birth_day_of_month,
        format!("age {}", birthday.age).cyan(),
    );
}

/// Print every field of one birthday.
pub fn detail(birthday: &Birthday) {
    field("Id", &birthday.id.to_string());
    field("Name", &birthday.name);
    field(
        "Born",
        &format!(
            "{:04}-{:02}-{:02}",
            birthday.birth_year, birthday.birth_month, birthday.birth_day_of_month
        ),
    );
    field("Age", &birthday.age.to_string());
    if !birthday.owner_id.is_empty() {
        field("Owner", birthday.owner_id.as_str());
    }
    if let Some(remarks) = &birthday.remarks {
        field("Remarks", remarks);
    }
    if let Some(url) = &birthday.picture_url {
        field("Picture", url);
    }
}
