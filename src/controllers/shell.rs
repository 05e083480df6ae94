use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::info;

use super::{parse_count, parse_selection, Command};
use crate::error::BookingError;
use crate::AppState;

// Итог одного шага диалога с оператором
#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    Eof,
}

type Step<T = ()> = Result<T, StepError>;

/// Текстовое меню поверх движка бронирования.
///
/// Читает строки из `R`, пишет ответы в `W`. Само ничего не хранит:
/// всё состояние в `AppState`.
pub struct Shell<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W) -> Self {
        Self { lines: input.lines(), out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Крутится до пункта "Exit" или конца ввода, затем сохраняет брони.
    pub async fn run(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        loop {
            self.print_menu().await?;

            let step = match self.prompt("Choose a menu item (1-6): ").await {
                Ok(line) => match Command::parse(&line) {
                    Some(Command::ShowSeatMap) => self.show_seat_map(state).await,
                    Some(Command::ChooseSeats) => self.choose_seats(state).await,
                    Some(Command::ModifyBooking) => self.modify_booking(state).await,
                    Some(Command::CancelBooking) => self.cancel_booking(state).await,
                    Some(Command::ListBookings) => self.list_bookings(state).await,
                    Some(Command::Exit) => return self.exit(state).await,
                    None => self.say("Invalid choice. Please choose again.").await,
                },
                Err(e) => Err(e),
            };

            match step {
                Ok(()) => {}
                Err(StepError::Booking(e)) => self.report(&e).await?,
                Err(StepError::Eof) => return self.exit(state).await,
                Err(StepError::Io(e)) => return Err(e.into()),
            }

            self.say("").await?;
        }
    }

    async fn print_menu(&mut self) -> Step {
        let mut menu = String::from("----- Theater Ticket Office -----\n");
        for (i, (_, label)) in Command::MENU.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", i + 1, label));
        }
        self.write(&menu).await
    }

    async fn show_seat_map(&mut self, state: &AppState) -> Step {
        self.say("----- Auditorium -----").await?;
        let map = state.engine.seat_map();
        self.write(&map).await
    }

    async fn choose_seats(&mut self, state: &mut AppState) -> Step {
        let selection = self
            .pick_seats(state, "How many free seats would you like to choose? ")
            .await?;
        let name = self.prompt("Enter your name: ").await?;

        state.engine.create_booking(&name, &selection)?;
        self.say("Seats booked successfully!").await
    }

    async fn modify_booking(&mut self, state: &mut AppState) -> Step {
        let name = self.prompt("Enter the name of the booking to modify: ").await?;
        let old = state
            .engine
            .store()
            .find_by_name(name.trim())
            .map(|b| b.to_string())
            .ok_or_else(|| BookingError::BookingNotFound(name.trim().to_string()))?;
        self.say(&format!("Old booking: {}", old)).await?;

        let selection = self
            .pick_seats(state, "How many free seats for the modified booking? ")
            .await?;

        state.engine.modify_booking(&name, &selection)?;
        self.say("Booking modified successfully!").await
    }

    async fn cancel_booking(&mut self, state: &mut AppState) -> Step {
        let name = self.prompt("Enter the name of the booking to cancel: ").await?;

        state.engine.cancel_booking(&name)?;
        self.say("Booking cancelled successfully!").await
    }

    async fn list_bookings(&mut self, state: &AppState) -> Step {
        let listing: String = state
            .engine
            .list_bookings()?
            .iter()
            .map(|b| format!("{}\n", b))
            .collect();

        self.say("Saved bookings:").await?;
        self.write(&listing).await
    }

    // Спрашиваем количество, показываем свободные места, читаем номера
    async fn pick_seats(&mut self, state: &AppState, question: &str) -> Step<Vec<usize>> {
        let count = parse_count(&self.prompt(question).await?)?;
        let free = state.engine.check_availability(count)?;

        let listing: String = free
            .iter()
            .enumerate()
            .map(|(i, seat)| format!("{}. {}\n", i + 1, seat))
            .collect();
        self.say("Available free seats:").await?;
        self.write(&listing).await?;

        let selection = parse_selection(&self.prompt("Choose seats (e.g. 1,3,5): ").await?)?;
        if selection.len() != count {
            return Err(BookingError::InvalidSelection(format!(
                "expected {} seats, got {}",
                count,
                selection.len()
            ))
            .into());
        }
        Ok(selection)
    }

    async fn exit(&mut self, state: &AppState) -> anyhow::Result<()> {
        state.shutdown().await?;
        info!("Bookings saved, shutting down");
        self.say("Bookings saved. Goodbye!").await?;
        Ok(())
    }

    async fn report(&mut self, error: &BookingError) -> Step {
        match error {
            BookingError::NoBookings => self.say("No saved bookings.").await,
            other => self.say(&format!("Error: {}", other)).await,
        }
    }

    async fn prompt(&mut self, text: &str) -> Step<String> {
        self.write(text).await?;
        self.lines.next_line().await?.ok_or(StepError::Eof)
    }

    async fn say(&mut self, text: &str) -> Step {
        self.write(&format!("{}\n", text)).await
    }

    async fn write(&mut self, text: &str) -> Step {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
