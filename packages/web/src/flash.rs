//! One-shot messages carried across a redirect in the session.

use tower_sessions::Session;
use ui::{FlashCategory, FlashMessage};

use crate::error::AppResult;

const FLASHES_KEY: &str = "_flashes";

/// Queue a message for the next rendered page.
pub async fn flash(
    session: &Session,
    category: FlashCategory,
    text: impl Into<String>,
) -> AppResult<()> {
    let mut flashes: Vec<FlashMessage> = session.get(FLASHES_KEY).await?.unwrap_or_default();
    flashes.push(FlashMessage::new(category, text));
    session.insert(FLASHES_KEY, flashes).await?;
    Ok(())
}

/// Remove and return every queued message.
pub async fn take_flashes(session: &Session) -> AppResult<Vec<FlashMessage>> {
    let flashes: Option<Vec<FlashMessage>> = session.get(FLASHES_KEY).await?;
    if flashes.is_some() {
        session.remove_value(FLASHES_KEY).await?;
    }
    Ok(flashes.unwrap_or_default())
}
