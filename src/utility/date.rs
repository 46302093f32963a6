use anyhow::{ensure, Context, Result};

static WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Converts a clipping timestamp of the fixed form
// "Added on <Weekday>, <D> <Month> <Y> <HH:MM:SS>" into "DD/MM/YY HH:MM".
//
// The device writes full English weekday and month names and a 24-hour time.
// No fallback formats are attempted; anything off-pattern is an error.
pub fn normalize_added_on(raw: &str) -> Result<String> {
    let date = raw.strip_prefix("Added on ").unwrap_or(raw).trim();

    let (weekday, rest) = date
        .split_once(", ")
        .with_context(|| format!("Missing weekday separator in {:?}", date))?;
    ensure!(
        WEEKDAYS.contains(&weekday),
        "Unknown weekday: {:?}",
        weekday
    );

    let fields: Vec<&str> = rest.split_whitespace().collect();
    ensure!(
        fields.len() == 4,
        "Expected day, month, year and time in {:?}",
        rest
    );

    let day: usize = fields[0]
        .parse()
        .with_context(|| format!("Invalid day: {:?}", fields[0]))?;
    ensure!(1 <= day && day <= 31, "Day out of range: {}", day);

    let month = MONTHS
        .iter()
        .position(|&m| m == fields[1])
        .with_context(|| format!("Unknown month: {:?}", fields[1]))?
        + 1;

    let year: usize = fields[2]
        .parse()
        .with_context(|| format!("Invalid year: {:?}", fields[2]))?;

    let time: Vec<&str> = fields[3].split(':').collect();
    ensure!(time.len() == 3, "Invalid time: {:?}", fields[3]);

    let hour: usize = time[0]
        .parse()
        .with_context(|| format!("Invalid hour: {:?}", time[0]))?;
    let minute: usize = time[1]
        .parse()
        .with_context(|| format!("Invalid minute: {:?}", time[1]))?;
    let second: usize = time[2]
        .parse()
        .with_context(|| format!("Invalid second: {:?}", time[2]))?;
    ensure!(hour < 24, "Hour out of range: {}", hour);
    ensure!(minute < 60, "Minute out of range: {}", minute);
    ensure!(second < 60, "Second out of range: {}", second);

    Ok(format!(
        "{:02}/{:02}/{:02} {:02}:{:02}",
        day,
        month,
        year % 100,
        hour,
        minute
    ))
}

#[cfg(test)]
mod tests {
    use super::normalize_added_on;

    #[test]
    fn normalizes_full_timestamp() {
        assert_eq!(
            normalize_added_on("Added on Friday, 13 September 2013 21:29:52").unwrap(),
            "13/09/13 21:29"
        );
    }

    #[test]
    fn accepts_short_year() {
        assert_eq!(
            normalize_added_on("Added on Tuesday, 4 December 12 22:52:19").unwrap(),
            "04/12/12 22:52"
        );
    }

    #[test]
    fn prefix_is_optional() {
        assert_eq!(
            normalize_added_on("Monday, 1 January 2024 00:00:00").unwrap(),
            "01/01/24 00:00"
        );
    }

    #[test]
    fn rejects_off_pattern_input() {
        assert!(normalize_added_on("Added on Someday, 4 December 2012 22:52:19").is_err());
        assert!(normalize_added_on("Added on Tuesday, 4 Frimaire 2012 22:52:19").is_err());
        assert!(normalize_added_on("Added on Tuesday, 44 December 2012 22:52:19").is_err());
        assert!(normalize_added_on("Added on Tuesday, 4 December 2012 25:00:00").is_err());
        assert!(normalize_added_on("Added on Tuesday, 4 December 2012").is_err());
        assert!(normalize_added_on("04/12/12 22:52").is_err());
        assert!(normalize_added_on("").is_err());
    }
}
