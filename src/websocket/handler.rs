use crate::{
    game::{BoggleGame, ClickOutcome, Point},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState, GameSession,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::{sync::Arc, time::Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays one game at a time.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let mut game_id = create_game(&state);
    tracing::info!("WebSocket connection established for game {}", game_id);

    for msg in game_created_messages(&state, game_id) {
        if tx.send(msg).await.is_err() {
            break;
        }
    }

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client, one click at a time
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        match handle_client_message(client_msg, &state_for_recv, &tx, &mut game_id)
                            .await
                        {
                            Ok(true) => {}
                            Ok(false) => break,
                            Err(e) => {
                                tracing::error!("Error handling message: {}", e);
                                let error_msg = ServerMessage::Error {
                                    message: e.to_string(),
                                };
                                let _ = tx.send(error_msg).await;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected from game {}", game_id);
                    break;
                }
                _ => {}
            }
        }
        game_id
    });

    // Wait for either task to finish
    let final_game_id = tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
            None
        }
        result = (&mut recv_task) => {
            // Let queued messages (e.g. GameOver) drain before the socket drops
            let _ = send_task.await;
            result.ok()
        }
    };

    // The receive task owns the current id; if it was aborted fall back to the first one
    let game_id = final_game_id.unwrap_or(game_id);
    state.games.remove(&game_id);

    tracing::info!("WebSocket connection closed for game {}", game_id);
}

fn create_game(state: &AppState) -> Uuid {
    let game = BoggleGame::new(state.dictionary.clone(), state.config.game.game_options());
    let game_id = game.id();
    state.games.insert(
        game_id,
        GameSession {
            game,
            last_activity: Instant::now(),
        },
    );
    game_id
}

fn game_created_messages(state: &AppState, game_id: Uuid) -> Vec<ServerMessage> {
    let mut messages = vec![ServerMessage::GameCreated {
        game_id: game_id.to_string(),
    }];
    if let Some(session) = state.games.get(&game_id) {
        messages.push(ServerMessage::GameState {
            board: Box::new(session.game.snapshot()),
        });
    }
    messages
}

/// Apply one click and collect the replies. The session lock is released before
/// anything is sent.
pub fn apply_click(
    state: &AppState,
    game_id: Uuid,
    point: Point,
) -> anyhow::Result<Vec<ServerMessage>> {
    let mut session = state
        .games
        .get_mut(&game_id)
        .ok_or_else(|| anyhow::anyhow!("Game {} has expired; start a new game", game_id))?;
    session.last_activity = Instant::now();

    let game = &mut session.game;
    let outcome = game.click(point);

    if !outcome.keeps_playing() {
        return Ok(vec![ServerMessage::GameOver {
            found_words: game.found_words().to_vec(),
            score: game.score(),
        }]);
    }

    let mut replies = Vec::new();
    if let ClickOutcome::Found { word, points } = outcome {
        replies.push(ServerMessage::WordFound {
            word,
            points,
            score: game.score(),
        });
    }

    replies.push(ServerMessage::GameState {
        board: Box::new(game.snapshot()),
    });
    Ok(replies)
}

/// Handle individual client messages. Returns false once the game is over.
async fn handle_client_message(
    msg: ClientMessage,
    state: &AppState,
    tx: &mpsc::Sender<ServerMessage>,
    game_id: &mut Uuid,
) -> anyhow::Result<bool> {
    match msg {
        ClientMessage::NewGame => {
            state.games.remove(&*game_id);
            *game_id = create_game(state);
            tracing::info!("Started new game {}", game_id);
            for reply in game_created_messages(state, *game_id) {
                tx.send(reply).await?;
            }
        }
        ClientMessage::Click { x, y } => {
            let replies = apply_click(state, *game_id, Point::new(x, y))?;
            let game_over = replies
                .iter()
                .any(|reply| matches!(reply, ServerMessage::GameOver { .. }));

            for reply in replies {
                tx.send(reply).await?;
            }

            if game_over {
                tracing::info!("Game {} exited by player", game_id);
                return Ok(false);
            }
        }
        ClientMessage::GetState => {
            let snapshot = state
                .games
                .get(&*game_id)
                .map(|session| session.game.snapshot())
                .ok_or_else(|| anyhow::anyhow!("Game {} has expired; start a new game", game_id))?;
            tx.send(ServerMessage::GameState {
                board: Box::new(snapshot),
            })
            .await?;
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dictionary::Dictionary,
        game::GameOptions,
        models::Position,
        test_support::{insert_game, test_state},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn cell_center(state: &AppState, game_id: Uuid, row: usize, col: usize) -> Point {
        let session = state.games.get(&game_id).unwrap();
        session
            .game
            .board()
            .geometry()
            .cell_rect(Position::new(row, col))
            .center()
    }

    #[test]
    fn test_apply_click_returns_state() {
        let state = test_state(&["ZZZZ"]);
        let game_id = create_game(&state);
        let point = cell_center(&state, game_id, 0, 0);

        let replies = apply_click(&state, game_id, point).unwrap();
        assert_eq!(replies.len(), 1);
        match &replies[0] {
            ServerMessage::GameState { board } => assert_eq!(board.path.len(), 1),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_apply_click_reports_found_word() {
        let seeded = || StdRng::seed_from_u64(5);
        let probe = BoggleGame::with_rng(
            Arc::new(Dictionary::from_words(Vec::<String>::new())),
            GameOptions::default(),
            seeded(),
        );
        let letter = probe.board().cell(Position::new(1, 1)).unwrap().letter().to_string();

        let state = test_state(&[letter.as_str()]);
        let game = BoggleGame::with_rng(
            state.dictionary.clone(),
            state.config.game.game_options(),
            seeded(),
        );
        let game_id = insert_game(&state, game);
        let point = cell_center(&state, game_id, 1, 1);

        apply_click(&state, game_id, point).unwrap();
        let replies = apply_click(&state, game_id, point).unwrap();

        // Single tiles are below the scoring threshold
        assert!(matches!(
            replies.as_slice(),
            [
                ServerMessage::WordFound { word, points: 0, score: 0 },
                ServerMessage::GameState { .. },
            ] if *word == letter
        ));
    }

    #[test]
    fn test_apply_click_on_exit_ends_game() {
        let state = test_state(&[]);
        let game_id = create_game(&state);
        let exit = state.config.game.game_options().geometry.exit_rect().center();

        let replies = apply_click(&state, game_id, exit).unwrap();
        assert!(matches!(
            replies.as_slice(),
            [ServerMessage::GameOver { score: 0, .. }]
        ));
    }

    #[test]
    fn test_apply_click_on_missing_game_is_error() {
        let state = test_state(&[]);
        let result = apply_click(&state, Uuid::new_v4(), Point::new(75.0, 75.0));
        assert!(result.is_err());
    }
}
