//! Usage: Human-readable timestamps pushed to the frontend.

use chrono::{DateTime, Local, TimeZone, Utc};

const RFC1123_UTC: &str = "%a, %d %b %Y %H:%M:%S GMT";
const RFC1123_NUMERIC_ZONE: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Which clock the formatted timestamp is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockZone {
    #[default]
    Local,
    Utc,
}

pub(crate) fn now_rfc1123(zone: ClockZone) -> String {
    format_rfc1123(Utc::now(), zone)
}

pub(crate) fn format_rfc1123(instant: DateTime<Utc>, zone: ClockZone) -> String {
    match zone {
        ClockZone::Utc => instant.format(RFC1123_UTC).to_string(),
        ClockZone::Local => format_with_offset(&instant.with_timezone(&Local)),
    }
}

fn format_with_offset<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.format(RFC1123_NUMERIC_ZONE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn reference_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
    }

    #[test]
    fn utc_uses_gmt_suffix() {
        assert_eq!(
            format_rfc1123(reference_instant(), ClockZone::Utc),
            "Mon, 02 Jan 2006 15:04:05 GMT"
        );
    }

    #[test]
    fn numeric_offset_is_rendered() {
        let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
        let local = reference_instant().with_timezone(&east8);
        assert_eq!(format_with_offset(&local), "Mon, 02 Jan 2006 23:04:05 +0800");
    }

    #[test]
    fn both_zones_parse_as_rfc2822() {
        for zone in [ClockZone::Local, ClockZone::Utc] {
            let formatted = format_rfc1123(reference_instant(), zone);
            let parsed = DateTime::parse_from_rfc2822(&formatted)
                .unwrap_or_else(|e| panic!("{formatted:?} did not parse: {e}"));
            assert_eq!(parsed.with_timezone(&Utc), reference_instant());
        }
    }

    #[test]
    fn now_is_parseable() {
        let formatted = now_rfc1123(ClockZone::default());
        assert!(DateTime::parse_from_rfc2822(&formatted).is_ok());
    }
}
