//! Text rendering for the webapp screens.

use prizedraw_core::controller::Screen;
use prizedraw_core::models::raffle::RaffleSnapshot;

/// Render a screen as terminal text.
pub fn screen(screen: &Screen, can_join: bool) -> String {
    match screen {
        Screen::NotFound => "Raffle not found.".into(),
        Screen::Loading => "Loading...".into(),
        Screen::LoadFailed { reason } => format!(
            "Could not load the raffle: {reason}\nRun the command again to retry."
        ),
        Screen::Finished(snapshot) => render_finished(snapshot),
        Screen::Active(snapshot) => render_active(snapshot, can_join),
    }
}

fn render_finished(snapshot: &RaffleSnapshot) -> String {
    let mut out = String::from("This raffle has finished.\n");
    out.push_str(&participants_line(
        snapshot.participants_count,
        snapshot.participants_cap,
    ));
    out
}

fn render_active(snapshot: &RaffleSnapshot, can_join: bool) -> String {
    let mut out = String::from("Raffle is running.\n");
    if let Some(ends_at) = snapshot.ends_at {
        out.push_str(&format!(
            "Ends at: {}\n",
            ends_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    out.push_str(&participants_line(
        snapshot.participants_count,
        snapshot.participants_cap,
    ));
    if !snapshot.channels.is_empty() {
        out.push_str("Required subscriptions:\n");
        for channel in &snapshot.channels {
            out.push_str(&channel_line(&channel.title, channel.is_subscribed));
        }
    }
    if snapshot.is_participating {
        out.push_str("You are in the draw. Good luck!\n");
    } else if can_join {
        out.push_str("You can join this raffle.\n");
    } else if !snapshot.all_mandatory_subscribed() {
        out.push_str("Subscribe to the channels above to join.\n");
    }
    out
}

fn participants_line(count: u32, cap: u32) -> String {
    format!("Participants: {count}/{cap}\n")
}

fn channel_line(title: &str, subscribed: bool) -> String {
    let mark = if subscribed { "x" } else { " " };
    format!("  [{mark}] {title}\n")
}
