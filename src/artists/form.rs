use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};

use crate::{
    db::ArtistFields,
    forms::FormErrors,
    include_res,
    res::{self, escape, escape_opt},
    widgets,
};

pub(super) struct ArtistFormPage {
    pub(super) heading: String,
    pub(super) action: String,
    pub(super) submit: &'static str,
}

impl ArtistFormPage {
    pub(super) fn new_artist() -> Self {
        Self {
            heading: "List a new artist".to_owned(),
            action: "/artists/create".to_owned(),
            submit: "Create Artist",
        }
    }

    pub(super) fn edit_artist(artist_id: i64, name: &str) -> Self {
        Self {
            heading: format!("Edit artist {name}"),
            action: format!("/artists/{artist_id}/edit"),
            submit: "Save",
        }
    }

    fn render(&self, artist: &ArtistFields, errors: &FormErrors) -> String {
        include_res!(str, "/pages/forms/artist.html")
            .replace("{heading}", &escape(&self.heading))
            .replace("{action}", &escape(&self.action))
            .replace("{submit}", self.submit)
            .replace("{errors}", &widgets::error_list(errors))
            .replace("{name}", &escape(&artist.name))
            .replace("{city}", &escape(&artist.city))
            .replace("{state_options}", &widgets::state_options(&artist.state))
            .replace("{phone}", &escape_opt(&artist.phone))
            .replace("{genre_options}", &widgets::genre_options(&artist.genres))
            .replace("{image_link}", &escape_opt(&artist.image_link))
            .replace("{facebook_link}", &escape_opt(&artist.facebook_link))
            .replace("{website}", &escape_opt(&artist.website))
            .replace("{seeking_checked}", widgets::checked(artist.seeking_venue))
            .replace("{seeking_description}", &escape_opt(&artist.seeking_description))
    }

    pub(super) fn page(&self, artist: &ArtistFields, flashes: &[String]) -> Response {
        Html(res::page(&self.heading, &self.render(artist, &FormErrors::default()), flashes)).into_response()
    }

    pub(super) fn rejected(&self, artist: &ArtistFields, errors: &FormErrors) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(res::page(&self.heading, &self.render(artist, errors), &[])),
        )
            .into_response()
    }
}
