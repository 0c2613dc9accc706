use ratatui::style::Color;

use crate::types::ServiceStatus;

/// Statuses shown in the legend, in display order.
pub const LEGEND_STATUSES: [ServiceStatus; 5] = [
    ServiceStatus::Ok,
    ServiceStatus::Corrupt,
    ServiceStatus::Mumble,
    ServiceStatus::Down,
    ServiceStatus::Error,
];

/// Display color for a service status. Unknown statuses get no color and the
/// cell falls back to the terminal default.
pub fn color_for_status(status: ServiceStatus) -> Option<Color> {
    match status {
        ServiceStatus::Ok => Some(Color::Rgb(0, 255, 0)),        // lime
        ServiceStatus::Corrupt => Some(Color::Rgb(218, 112, 214)), // orchid
        ServiceStatus::Mumble => Some(Color::Rgb(255, 165, 0)),  // orange
        ServiceStatus::Down => Some(Color::Rgb(255, 0, 0)),      // red
        ServiceStatus::Error => Some(Color::Rgb(255, 255, 0)),   // yellow
        ServiceStatus::Unknown => None,
    }
}
