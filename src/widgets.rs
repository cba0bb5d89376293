//! Form controls shared by the venue, artist and show forms.

use crate::{
    forms::{FormErrors, GENRES, STATES},
    res::escape,
};

pub fn error_list(errors: &FormErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors.iter()
        .map(|(field, message)| format!("<li data-field=\"{field}\">{}</li>", escape(message)))
        .collect();
    format!("<ul class=\"form-errors\">{items}</ul>")
}

pub fn state_options(selected: &str) -> String {
    STATES.iter()
        .map(|state| format!(
            "<option value=\"{state}\"{}>{state}</option>",
            if *state == selected { " selected" } else { "" }
        ))
        .collect()
}

pub fn genre_options(selected: &[String]) -> String {
    GENRES.iter()
        .map(|genre| format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(genre),
            if selected.iter().any(|g| g == genre) { " selected" } else { "" }
        ))
        .collect()
}

pub fn checked(flag: bool) -> &'static str {
    if flag { " checked" } else { "" }
}
