use serde::{Deserialize, Serialize};

use crate::models::BoardSnapshot;

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Discard the current game and start a fresh one
    NewGame,
    /// Pointer activated at a screen coordinate
    Click {
        x: f64,
        y: f64,
    },
    GetState,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameCreated {
        game_id: String,
    },
    GameState {
        board: Box<BoardSnapshot>,
    },
    WordFound {
        word: String,
        points: u32,
        score: u32,
    },
    GameOver {
        found_words: Vec<String>,
        score: u32,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_deserialization() {
        let json = r#"{"type": "click", "x": 75.5, "y": 120}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Click { x, y } => {
                assert_eq!(x, 75.5);
                assert_eq!(y, 120.0);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_new_game_deserialization() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "new_game"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::NewGame));
    }

    #[test]
    fn test_word_found_serialization() {
        let msg = ServerMessage::WordFound {
            word: "TREE".to_string(),
            points: 1,
            score: 4,
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "word_found");
        assert_eq!(json["word"], "TREE");
        assert_eq!(json["score"], 4);
    }

    #[test]
    fn test_unknown_message_is_rejected() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"type": "submit_word"}"#);
        assert!(result.is_err());
    }
}
