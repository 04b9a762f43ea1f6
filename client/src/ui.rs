use common::games::tictactoe::{BOARD_SIDE, Mark, Outcome, SessionSnapshot};

/// Empty cells show their index; cells of a winning line are bracketed.
pub fn render_board(snapshot: &SessionSnapshot) -> String {
    let winning_line = match snapshot.last_outcome {
        Some(Outcome::Win(line)) => Some(line),
        _ => None,
    };

    let rows: Vec<String> = snapshot
        .board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIDE + col;
                    let text = match mark {
                        Mark::Empty => index.to_string(),
                        mark => mark.to_string(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", text)
                    } else {
                        format!(" {} ", text)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_scores(snapshot: &SessionSnapshot) -> String {
    format!(
        "You {} : {} Computer   Draws {}   Mode: {}",
        snapshot.scores.human, snapshot.scores.computer, snapshot.scores.draw, snapshot.difficulty
    )
}
