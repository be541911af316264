use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    AddPlayer {
        name: String,
    },
    StartGame,
    /// A player taps their own button to see their prompt
    ViewPrompt {
        index: PlayerIndex,
    },
    /// "Pass the phone": clear the prompt from the shared screen
    HidePrompt,
    RevealOfficial,
    RevealAll,
    NextRound,
    /// Back to setup, keeping players
    ResetGame,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        server_now: String,
        snapshot: SessionSnapshot,
    },
    Players {
        players: Vec<String>,
        can_start: bool,
    },
    RoundStarted {
        round: RoundInfo,
    },
    /// Sent only to the socket that asked, never broadcast
    Prompt {
        index: PlayerIndex,
        prompt: PlayerPrompt,
    },
    ViewStatus {
        index: PlayerIndex,
        statuses: Vec<ViewState>,
        status: RoundStatus,
    },
    PromptHidden,
    OfficialRevealed {
        theme: String,
        official_prompt: String,
    },
    AllRevealed {
        theme: String,
        official_prompt: String,
        impostor_prompt: String,
        impostor_name: String,
    },
    GameReset {
        snapshot: SessionSnapshot,
    },
    Error {
        code: String,
        msg: String,
    },
}

impl ServerMessage {
    pub fn error(code: &str, msg: impl Into<String>) -> Self {
        ServerMessage::Error {
            code: code.to_string(),
            msg: msg.into(),
        }
    }
}

impl From<crate::error::GameError> for ServerMessage {
    fn from(e: crate::error::GameError) -> Self {
        ServerMessage::error(e.code(), e.to_string())
    }
}

impl From<OfficialReveal> for ServerMessage {
    fn from(r: OfficialReveal) -> Self {
        ServerMessage::OfficialRevealed {
            theme: r.theme,
            official_prompt: r.official_prompt,
        }
    }
}

impl From<FullReveal> for ServerMessage {
    fn from(r: FullReveal) -> Self {
        ServerMessage::AllRevealed {
            theme: r.theme,
            official_prompt: r.official_prompt,
            impostor_prompt: r.impostor_prompt,
            impostor_name: r.impostor_name,
        }
    }
}
