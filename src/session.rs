use tower_sessions::{Session, session::Error};

pub const FLASHES: &str = "flashes";

/// Queues a message for the next page this session renders.
pub async fn flash(session: &Session, message: impl Into<String>) -> Result<(), Error> {
    let mut flashes = session.get::<Vec<String>>(FLASHES).await?.unwrap_or_default();
    flashes.push(message.into());
    session.insert(FLASHES, flashes).await
}

pub async fn take_flashes(session: &Session) -> Result<Vec<String>, Error> {
    Ok(session.remove::<Vec<String>>(FLASHES).await?.unwrap_or_default())
}
