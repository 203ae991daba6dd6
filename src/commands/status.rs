use crate::{
    db::habits::Habits,
    libs::analytics,
    libs::messages::Message,
    libs::view::View,
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let all = Habits::new()?.get_all()?;
    if all.is_empty() {
        msg_info!(Message::NoHabitsFound);
        return Ok(());
    }

    let now = Local::now().naive_local();
    msg_print!(Message::StatusHeader, true);
    View::status(&analytics::list_all(&all), now)?;
    Ok(())
}
