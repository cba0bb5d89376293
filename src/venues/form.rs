use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};

use crate::{
    db::VenueFields,
    forms::FormErrors,
    include_res,
    res::{self, escape, escape_opt},
    widgets,
};

/// Where the form posts to, and how it presents itself.
pub(super) struct VenueFormPage {
    pub(super) heading: String,
    pub(super) action: String,
    pub(super) submit: &'static str,
}

impl VenueFormPage {
    pub(super) fn new_venue() -> Self {
        Self {
            heading: "List a new venue".to_owned(),
            action: "/venues/create".to_owned(),
            submit: "Create Venue",
        }
    }

    pub(super) fn edit_venue(venue_id: i64, name: &str) -> Self {
        Self {
            heading: format!("Edit venue {name}"),
            action: format!("/venues/{venue_id}/edit"),
            submit: "Save",
        }
    }

    fn render(&self, venue: &VenueFields, errors: &FormErrors) -> String {
        include_res!(str, "/pages/forms/venue.html")
            .replace("{heading}", &escape(&self.heading))
            .replace("{action}", &escape(&self.action))
            .replace("{submit}", self.submit)
            .replace("{errors}", &widgets::error_list(errors))
            .replace("{name}", &escape(&venue.name))
            .replace("{city}", &escape(&venue.city))
            .replace("{state_options}", &widgets::state_options(&venue.state))
            .replace("{address}", &escape_opt(&venue.address))
            .replace("{phone}", &escape_opt(&venue.phone))
            .replace("{genre_options}", &widgets::genre_options(&venue.genres))
            .replace("{image_link}", &escape_opt(&venue.image_link))
            .replace("{facebook_link}", &escape_opt(&venue.facebook_link))
            .replace("{website}", &escape_opt(&venue.website))
            .replace("{seeking_checked}", widgets::checked(venue.seeking_talent))
            .replace("{seeking_description}", &escape_opt(&venue.seeking_description))
    }

    pub(super) fn page(&self, venue: &VenueFields, flashes: &[String]) -> Response {
        Html(res::page(&self.heading, &self.render(venue, &FormErrors::default()), flashes)).into_response()
    }

    /// The form again, with what was submitted and why it was turned down.
    pub(super) fn rejected(&self, venue: &VenueFields, errors: &FormErrors) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(res::page(&self.heading, &self.render(venue, errors), &[])),
        )
            .into_response()
    }
}
