use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type SessionId = String;
pub type PlayerIndex = usize;

/// One theme with its two prompts. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhraseEntry {
    pub theme: String,
    pub official_prompt: String,
    pub impostor_prompt: String,
}

/// The outcome of drawing a round: which entry is in play and who gets the decoy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSelection {
    pub entry: PhraseEntry,
    /// Position of `entry` in the phrase book (for logging without prompt text)
    pub entry_index: usize,
    pub impostor_index: PlayerIndex,
}

impl RoundSelection {
    /// The prompt a given player should see this round
    pub fn prompt_for(&self, index: PlayerIndex) -> PlayerPrompt {
        let prompt = if index == self.impostor_index {
            &self.entry.impostor_prompt
        } else {
            &self.entry.official_prompt
        };
        PlayerPrompt {
            theme: self.entry.theme.clone(),
            prompt: prompt.clone(),
        }
    }
}

/// How themes are drawn from the phrase book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DrawPolicy {
    /// Without replacement until every theme has been shown, then refill
    #[default]
    NoRepeat,
    /// Independent uniform draw every round (themes may repeat back to back)
    Uniform,
}

impl std::str::FromStr for DrawPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no-repeat" | "no_repeat" | "norepeat" | "deck" => Ok(DrawPolicy::NoRepeat),
            "uniform" | "random" => Ok(DrawPolicy::Uniform),
            other => Err(format!("unknown draw policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Setup,
    Playing,
}

/// Per-player, per-round view state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Hidden,
    Viewed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    InProgress,
    AllViewed,
}

/// What a single player is shown when they look at their prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPrompt {
    pub theme: String,
    pub prompt: String,
}

/// Result of a player looking at their prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
    /// `None` when the player had already looked this round
    pub prompt: Option<PlayerPrompt>,
    pub status: RoundStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfficialReveal {
    pub theme: String,
    pub official_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FullReveal {
    pub theme: String,
    pub official_prompt: String,
    pub impostor_prompt: String,
    pub impostor_name: String,
}

/// Spoiler-free description of a freshly started round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundInfo {
    pub round_no: u32,
    pub player_count: usize,
    pub turn_order: Vec<String>,
}

/// Everything a reconnecting client needs, minus anything that would spoil the round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub phase: GamePhase,
    pub players: Vec<String>,
    pub min_players: usize,
    pub round_no: u32,
    pub statuses: Vec<ViewState>,
    pub round_status: Option<RoundStatus>,
    pub turn_order: Vec<String>,
}
