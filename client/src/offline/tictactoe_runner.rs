use std::io::BufRead;
use std::time::Duration;

use common::games::tictactoe::{MoveError, Outcome, TicTacToeSession};
use common::log;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::state::{ClientCommand, HELP_TEXT};
use crate::ui::{render_board, render_scores};

#[derive(Debug, PartialEq, Eq)]
pub enum Reaction {
    Redraw,
    /// Human move accepted, the computer answers after the delay.
    ScheduleReply,
    /// Board was reset; any pending reply is obsolete.
    Restarted,
    Rejected(String),
    ShowHelp,
    Ignored,
    Quit,
}

pub fn apply_command(session: &mut TicTacToeSession, command: &ClientCommand) -> Reaction {
    match command {
        ClientCommand::PlaceMark { cell } => match session.place_human_move(*cell) {
            Ok(Outcome::Continuing(_)) => Reaction::ScheduleReply,
            Ok(_) => Reaction::Redraw,
            Err(e) => Reaction::Rejected(e.to_string()),
        },
        ClientCommand::ComputerReply => match session.computer_reply() {
            Ok(_) => Reaction::Redraw,
            Err(MoveError::InvalidMove(_)) => Reaction::Ignored,
            Err(MoveError::NoMoveAvailable) => Reaction::Redraw,
        },
        ClientCommand::Restart => {
            session.restart(session.difficulty());
            Reaction::Restarted
        }
        ClientCommand::SwitchMode { difficulty } => {
            session.restart(*difficulty);
            Reaction::Restarted
        }
        ClientCommand::Help => Reaction::ShowHelp,
        ClientCommand::Quit => Reaction::Quit,
    }
}

pub fn schedule_reply(
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = command_tx.send(ClientCommand::ComputerReply);
    })
}

pub async fn run_tictactoe_game(mut session: TicTacToeSession, reply_delay: Duration) {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let input_tx = command_tx.clone();
    std::thread::spawn(move || read_commands(input_tx));

    let mut pending_reply: Option<JoinHandle<()>> = None;
    print_game(&session);

    while let Some(command) = command_rx.recv().await {
        match apply_command(&mut session, &command) {
            Reaction::ScheduleReply => {
                print_game(&session);
                pending_reply = Some(schedule_reply(command_tx.clone(), reply_delay));
            }
            Reaction::Redraw => {
                if command == ClientCommand::ComputerReply {
                    pending_reply = None;
                }
                print_game(&session);
            }
            Reaction::Restarted => {
                if let Some(handle) = pending_reply.take() {
                    handle.abort();
                }
                print_game(&session);
            }
            Reaction::Rejected(message) => println!("{}", message),
            Reaction::ShowHelp => println!("{}", HELP_TEXT),
            Reaction::Ignored => {}
            Reaction::Quit => break,
        }
    }

    if let Some(handle) = pending_reply.take() {
        handle.abort();
    }

    let scores = session.scores();
    log!(
        "Leaving with human {}, computer {}, draw {}",
        scores.human,
        scores.computer,
        scores.draw
    );
}

fn read_commands(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match ClientCommand::parse(&line) {
            Ok(command) => {
                if command_tx.send(command).is_err() {
                    return;
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    let _ = command_tx.send(ClientCommand::Quit);
}

fn print_game(session: &TicTacToeSession) {
    let snapshot = session.snapshot();
    println!();
    println!("{}", render_board(&snapshot));
    println!();
    println!("{}", render_scores(&snapshot));
    println!("{}", session.status_message());
}
