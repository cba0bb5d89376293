//! Reading and checking submitted forms. Nothing here knows about HTML.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    db::{ArtistFields, NewShow, VenueFields},
    filters,
};

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const GENRES: &[&str] = &[
    "Alternative", "Blues", "Classical", "Country", "Electronic", "Folk", "Funk", "Hip-Hop",
    "Heavy Metal", "Instrumental", "Jazz", "Musical Theatre", "Pop", "Punk", "R&B", "Reggae",
    "Rock n Roll", "Soul", "Other",
];

/// A submitted form body, in order, with repeated keys kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// First value under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.0.iter().filter(|(k, _)| k == key).map(|(_, v)| v.clone()).collect()
    }

    fn text(&self, key: &str) -> String {
        self.get(key).map(str::trim).unwrap_or_default().to_owned()
    }

    fn optional(&self, key: &str) -> Option<String> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
    }

    /// Only the literal `True` counts; an unchecked box sends nothing at all.
    fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("True")
    }
}

/// Problems found in a submission, per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &String)> {
        self.0.iter().flat_map(|(field, messages)| messages.iter().map(move |m| (*field, m)))
    }
}

pub fn venue_from_form(form: &FormFields) -> VenueFields {
    VenueFields {
        name: form.text("name"),
        city: form.text("city"),
        state: form.text("state"),
        address: form.optional("address"),
        phone: form.optional("phone"),
        image_link: form.optional("image_link"),
        facebook_link: form.optional("facebook_link"),
        genres: form.get_all("genres"),
        website: form.optional("website"),
        seeking_talent: form.flag("seeking_talent"),
        seeking_description: form.optional("seeking_description"),
    }
}

pub fn artist_from_form(form: &FormFields) -> ArtistFields {
    ArtistFields {
        name: form.text("name"),
        city: form.text("city"),
        state: form.text("state"),
        phone: form.optional("phone"),
        genres: form.get_all("genres"),
        image_link: form.optional("image_link"),
        facebook_link: form.optional("facebook_link"),
        website: form.optional("website"),
        seeking_venue: form.flag("seeking_venue"),
        seeking_description: form.optional("seeking_description"),
    }
}

pub fn validate_venue(venue: &VenueFields) -> FormErrors {
    let mut errors = FormErrors::default();
    check_place(&mut errors, &venue.name, &venue.city, &venue.state);
    check_phone(&mut errors, &venue.phone);
    check_genres(&mut errors, &venue.genres);
    check_link(&mut errors, "image_link", &venue.image_link);
    check_link(&mut errors, "facebook_link", &venue.facebook_link);
    check_link(&mut errors, "website", &venue.website);
    errors
}

pub fn validate_artist(artist: &ArtistFields) -> FormErrors {
    let mut errors = FormErrors::default();
    check_place(&mut errors, &artist.name, &artist.city, &artist.state);
    check_phone(&mut errors, &artist.phone);
    check_genres(&mut errors, &artist.genres);
    check_link(&mut errors, "image_link", &artist.image_link);
    check_link(&mut errors, "facebook_link", &artist.facebook_link);
    check_link(&mut errors, "website", &artist.website);
    errors
}

/// Whether the referenced artist and venue exist is left to the database.
pub fn show_from_form(form: &FormFields) -> Result<NewShow, FormErrors> {
    let mut errors = FormErrors::default();

    let artist_id = positive_id(form, "artist_id");
    if artist_id.is_none() {
        errors.add("artist_id", "Artist ID must be a positive whole number.");
    }
    let venue_id = positive_id(form, "venue_id");
    if venue_id.is_none() {
        errors.add("venue_id", "Venue ID must be a positive whole number.");
    }
    let start_time = form.get("start_time").and_then(filters::parse_timestamp);
    if start_time.is_none() {
        errors.add("start_time", "Start time must look like YYYY-MM-DD HH:MM.");
    }

    match (artist_id, venue_id, start_time) {
        (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow { artist_id, venue_id, start_time }),
        _ => Err(errors),
    }
}

fn positive_id(form: &FormFields, key: &str) -> Option<i64> {
    form.get(key)?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

fn check_place(errors: &mut FormErrors, name: &str, city: &str, state: &str) {
    if name.is_empty() {
        errors.add("name", "Name is required.");
    }
    if city.is_empty() {
        errors.add("city", "City is required.");
    }
    if state.is_empty() {
        errors.add("state", "State is required.");
    } else if !STATES.contains(&state) {
        errors.add("state", format!("{state} is not a US state code."));
    }
}

fn check_phone(errors: &mut FormErrors, phone: &Option<String>) {
    let Some(phone) = phone else {
        return;
    };
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    let allowed = phone.chars().all(|c| c.is_ascii_digit() || " -+().".contains(c));
    if !allowed || digits < 7 {
        errors.add("phone", "Phone must be a number like 123-456-7890.");
    }
}

fn check_genres(errors: &mut FormErrors, genres: &[String]) {
    for genre in genres {
        if !GENRES.contains(&genre.as_str()) {
            errors.add("genres", format!("{genre} is not a known genre."));
        }
    }
}

fn check_link(errors: &mut FormErrors, field: &'static str, link: &Option<String>) {
    if let Some(link) = link {
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            errors.add(field, "Links must start with http:// or https://.");
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn fillmore() -> FormFields {
        FormFields::from_pairs([
            ("name", "The Fillmore"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1805 Geary Blvd"),
            ("phone", "415-346-6000"),
            ("genres", "Rock n Roll"),
            ("genres", "Jazz"),
            ("website", "https://www.thefillmore.com"),
            ("seeking_talent", "True"),
        ])
    }

    #[test]
    fn repeated_genres_are_kept_in_order() {
        let venue = venue_from_form(&fillmore());
        assert_eq!(venue.genres, ["Rock n Roll", "Jazz"]);
        assert_eq!(venue.address.as_deref(), Some("1805 Geary Blvd"));
        assert_eq!(venue.image_link, None);
        assert!(validate_venue(&venue).is_empty());
    }

    #[test]
    fn only_literal_true_seeks() {
        for (value, expected) in [("True", true), ("true", false), ("y", false), ("on", false), ("", false)] {
            let form = FormFields::from_pairs([("seeking_talent", value), ("seeking_venue", value)]);
            assert_eq!(venue_from_form(&form).seeking_talent, expected, "{value:?}");
            assert_eq!(artist_from_form(&form).seeking_venue, expected, "{value:?}");
        }

        let absent = FormFields::default();
        assert!(!venue_from_form(&absent).seeking_talent);
        assert!(!artist_from_form(&absent).seeking_venue);
    }

    #[test]
    fn missing_place_is_reported_per_field() {
        let artist = artist_from_form(&FormFields::from_pairs([("state", "XX"), ("image_link", "ftp://x")]));
        let errors = validate_artist(&artist);

        assert_eq!(errors.field("name"), ["Name is required."]);
        assert_eq!(errors.field("city"), ["City is required."]);
        assert_eq!(errors.field("state"), ["XX is not a US state code."]);
        assert_eq!(errors.field("image_link").len(), 1);
        assert!(errors.field("website").is_empty());
    }

    #[test]
    fn bad_genre_and_phone() {
        let mut form = fillmore();
        form.0.push(("genres".to_owned(), "Polka".to_owned()));
        form.0.retain(|(k, _)| k != "phone");
        form.0.push(("phone".to_owned(), "call me".to_owned()));

        let errors = validate_venue(&venue_from_form(&form));
        assert_eq!(errors.field("genres"), ["Polka is not a known genre."]);
        assert_eq!(errors.field("phone").len(), 1);
        assert_eq!(errors.iter().count(), 2);
    }

    #[test]
    fn show_form_parses_ids_and_time() {
        let show = show_from_form(&FormFields::from_pairs([
            ("artist_id", "4"),
            ("venue_id", " 1 "),
            ("start_time", "2035-04-01T20:00"),
        ]))
        .unwrap();

        assert_eq!(show, NewShow { artist_id: 4, venue_id: 1, start_time: datetime!(2035-04-01 20:00) });
    }

    #[test]
    fn show_form_collects_every_problem() {
        let errors = show_from_form(&FormFields::from_pairs([
            ("artist_id", "-2"),
            ("venue_id", "abc"),
            ("start_time", "soon"),
        ]))
        .unwrap_err();

        assert_eq!(errors.iter().count(), 3);
        assert!(!errors.field("artist_id").is_empty());
        assert!(!errors.field("venue_id").is_empty());
        assert!(!errors.field("start_time").is_empty());
    }
}
