use time::PrimitiveDateTime;

use crate::{
    db::{ShowWithArtist, ShowWithVenue},
    filters,
};

/// One show as seen from a detail page: who or where is on the other side, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSlot {
    pub id: i64,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: String,
}

/// Shows split around a point in time. Both lists always exist, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub upcoming: Vec<ShowSlot>,
    pub past: Vec<ShowSlot>,
}

impl Schedule {
    /// A show is upcoming when it starts strictly after `now`; one starting exactly at `now` is past.
    pub fn partition<S, I>(shows: I, now: PrimitiveDateTime) -> Self
    where
        S: Into<(PrimitiveDateTime, ShowSlot)>,
        I: IntoIterator<Item = S>,
    {
        let mut schedule = Schedule::default();
        for show in shows {
            let (start_time, slot) = show.into();
            if start_time > now {
                schedule.upcoming.push(slot);
            } else {
                schedule.past.push(slot);
            }
        }
        schedule
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }
}

impl From<ShowWithArtist> for (PrimitiveDateTime, ShowSlot) {
    fn from(show: ShowWithArtist) -> Self {
        (
            show.start_time,
            ShowSlot {
                id: show.artist_id,
                name: show.artist_name,
                image_link: show.artist_image_link,
                start_time: filters::show_time(show.start_time),
            },
        )
    }
}

impl From<ShowWithVenue> for (PrimitiveDateTime, ShowSlot) {
    fn from(show: ShowWithVenue) -> Self {
        (
            show.start_time,
            ShowSlot {
                id: show.venue_id,
                name: show.venue_name,
                image_link: show.venue_image_link,
                start_time: filters::show_time(show.start_time),
            },
        )
    }
}
