//! A minimal AI subprocess used to exercise the protocol and the match
//! runner end to end: always moves toward the nearest known cheese, or
//! stays put once none remain.

use pyrat_engine::{Coordinates, Direction};
use pyrat_host::{AiSession, Identity, Strategy};
use pyrat_protocol::parse_command;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

struct GreedyStrategy {
    position: Coordinates,
    cheese: Vec<Coordinates>,
}

impl Strategy for GreedyStrategy {
    fn get_move(&mut self, _poll_stop: &dyn Fn() -> bool) -> Direction {
        let Some(target) = self.cheese.first().copied() else {
            return Direction::Stay;
        };
        if target.x > self.position.x {
            Direction::Right
        } else if target.x < self.position.x {
            Direction::Left
        } else if target.y > self.position.y {
            Direction::Up
        } else if target.y < self.position.y {
            Direction::Down
        } else {
            Direction::Stay
        }
    }
}

#[tokio::main]
async fn main() {
    let identity = Identity {
        name: "test-bot".to_string(),
        author: "pyrat-headless".to_string(),
        options: vec![],
    };
    let strategy = Box::new(GreedyStrategy {
        position: Coordinates::new(0, 0),
        cheese: Vec::new(),
    });
    let session = AiSession::new(identity, strategy);

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (emit_tx, mut emit_rx) = mpsc::unbounded_channel();

    let reader = tokio::spawn(async move {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if let Some(command) = parse_command(&line) {
                if cmd_tx.send(command).is_err() {
                    break;
                }
            }
        }
    });

    let writer = tokio::spawn(async move {
        let mut stdout = std::io::stdout();
        while let Some(line) = emit_rx.recv().await {
            let _ = writeln!(stdout, "{line}");
            let _ = stdout.flush();
        }
    });

    session.run(cmd_rx, emit_tx).await;
    let _ = reader.await;
    let _ = writer.await;
}
