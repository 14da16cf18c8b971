// SPDX-License-Identifier: MPL-2.0
//! Query URL construction for the archive endpoint.

use chrono::NaiveDate;

/// Fixed archive endpoint.
pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Embedded demo credential used when no key is configured.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Builds the range query URL with exactly three parameters: the credential
/// and the inclusive start and end dates.
///
/// Date ordering is not validated here; the remote service rejects inverted
/// ranges itself.
pub fn build_request_url(api_key: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{APOD_ENDPOINT}?api_key={api_key}&start_date={}&end_date={}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn url_contains_key_and_both_bounds() {
        let url = build_request_url("abc123", date(2020, 1, 1), date(2020, 1, 3));
        assert_eq!(
            url,
            "https://api.nasa.gov/planetary/apod\
             ?api_key=abc123&start_date=2020-01-01&end_date=2020-01-03"
        );
    }

    #[test]
    fn url_has_no_extraneous_parameters() {
        let url = build_request_url(DEMO_API_KEY, date(1995, 6, 16), date(1995, 6, 16));
        assert_eq!(url.matches('?').count(), 1);
        assert_eq!(url.matches('&').count(), 2);
    }

    #[test]
    fn dates_are_zero_padded() {
        let url = build_request_url("k", date(2021, 3, 5), date(2021, 3, 7));
        assert!(url.contains("start_date=2021-03-05"));
        assert!(url.contains("end_date=2021-03-07"));
    }
}
