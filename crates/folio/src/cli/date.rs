//! Date formatting command.

use chrono_tz::Tz;
use folio_core::date::{FormatOptions, Locale, format_date, parse_instant};

/// Handle the date command.
pub fn handle_date(
    input: &str,
    relative: bool,
    time_zone: Option<&str>,
    locale: Option<&str>,
    now: Option<&str>,
) -> Result<(), String> {
    let mut options = FormatOptions::default();

    if let Some(tz) = time_zone {
        options.time_zone = Some(
            tz.parse::<Tz>()
                .map_err(|_| format!("unknown timezone '{}'", tz))?,
        );
    }
    if let Some(now) = now {
        options.now = Some(parse_instant(now).map_err(|e| e.to_string())?);
    }
    // Unrecognized locale codes are not an error; rendering falls back to
    // the English default.
    options.locale = locale.and_then(Locale::resolve);

    let out = format_date(input, relative, &options).map_err(|e| e.to_string())?;
    println!("{}", out);
    Ok(())
}
