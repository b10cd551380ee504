//! Client composition with a scripted frontend.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use game_core::Direction;
use runtime::{RuntimeConfig, Session};
use twenty48_client::{Client, Frontend};

/// Plays a fixed list of moves and records the resulting move count.
struct ScriptedFrontend {
    moves: Vec<Direction>,
    played: Arc<Mutex<Option<u64>>>,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, mut session: Session) -> Result<()> {
        for &direction in &self.moves {
            session.apply(direction);
        }
        *self.played.lock().unwrap() = Some(session.moves());
        Ok(())
    }
}

fn session() -> Session {
    Session::builder()
        .config(RuntimeConfig::default().with_seed(2048))
        .build()
        .unwrap()
}

#[tokio::test]
async fn run_hands_the_session_to_the_frontend() {
    let played = Arc::new(Mutex::new(None));
    let frontend = ScriptedFrontend {
        moves: vec![Direction::Left, Direction::Down, Direction::Right],
        played: Arc::clone(&played),
    };

    Client::builder()
        .session(session())
        .frontend(frontend)
        .build()
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(*played.lock().unwrap(), Some(3));
}

#[test]
fn build_requires_a_frontend() {
    let err = Client::builder().session(session()).build().err().unwrap();
    assert!(err.to_string().contains("Frontend is required"));
}

#[test]
fn build_requires_a_session() {
    let frontend = ScriptedFrontend {
        moves: Vec::new(),
        played: Arc::new(Mutex::new(None)),
    };
    let err = Client::builder().frontend(frontend).build().err().unwrap();
    assert!(err.to_string().contains("Session is required"));
}
