pub mod shell;

pub use shell::Shell;

use crate::error::{BookingError, Result};

/// Пункты меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowSeatMap,
    ChooseSeats,
    ModifyBooking,
    CancelBooking,
    ListBookings,
    Exit,
}

impl Command {
    pub const MENU: [(Command, &'static str); 6] = [
        (Command::ShowSeatMap, "Show free and occupied seats"),
        (Command::ChooseSeats, "Choose free seats"),
        (Command::ModifyBooking, "Modify booking"),
        (Command::CancelBooking, "Cancel booking"),
        (Command::ListBookings, "List bookings"),
        (Command::Exit, "Exit"),
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::ShowSeatMap),
            "2" => Some(Command::ChooseSeats),
            "3" => Some(Command::ModifyBooking),
            "4" => Some(Command::CancelBooking),
            "5" => Some(Command::ListBookings),
            "6" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub fn parse_count(input: &str) -> Result<usize> {
    input
        .trim()
        .parse()
        .map_err(|_| BookingError::InvalidSelection(format!("'{}' is not a number", input.trim())))
}

/// Разбирает список номеров вида `1,3,5`.
pub fn parse_selection(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<usize>()
                .map_err(|_| BookingError::InvalidSelection(format!("'{}' is not a seat number", part)))
        })
        .collect()
}
