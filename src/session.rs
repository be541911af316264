//! The game session: players, the current round, and every operation the
//! view layer can invoke.
//!
//! A session is created once at startup (or per test) and owns all game state.
//! Every failing operation leaves the session unchanged.

use crate::error::{GameError, GameResult};
use crate::order;
use crate::phrases::PhraseBook;
use crate::reveal::RevealStateMachine;
use crate::selector::RoundSelector;
use crate::types::*;
use rand::rngs::StdRng;

/// Smallest table the game makes sense for
pub const DEFAULT_MIN_PLAYERS: usize = 3;

#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    phase: GamePhase,
    players: Vec<String>,
    min_players: usize,
    round_no: u32,
    selector: RoundSelector,
    reveal: RevealStateMachine,
    current: Option<RoundSelection>,
    turn_order: Vec<String>,
    rng: StdRng,
}

impl GameSession {
    pub fn new(book: PhraseBook, policy: DrawPolicy, min_players: usize, rng: StdRng) -> Self {
        let id = ulid::Ulid::new().to_string();
        tracing::info!(
            "Created session {} ({} themes, {:?}, min {} players)",
            id,
            book.len(),
            policy,
            min_players
        );
        Self {
            id,
            phase: GamePhase::Setup,
            players: Vec::new(),
            min_players: min_players.max(1),
            round_no: 0,
            selector: RoundSelector::new(book, policy),
            reveal: RevealStateMachine::default(),
            current: None,
            turn_order: Vec::new(),
            rng,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn min_players(&self) -> usize {
        self.min_players
    }

    pub fn book(&self) -> &PhraseBook {
        self.selector.book()
    }

    pub fn policy(&self) -> DrawPolicy {
        self.selector.policy()
    }

    /// The current round's selection. Holds spoilers; never send it to clients as-is.
    pub fn current_round(&self) -> Option<&RoundSelection> {
        self.current.as_ref()
    }

    pub fn turn_order(&self) -> &[String] {
        &self.turn_order
    }

    pub fn is_round_ready(&self) -> bool {
        self.current.is_some() && self.reveal.is_round_ready()
    }

    fn require_playing(&self, action: &str) -> GameResult<&RoundSelection> {
        match (&self.phase, &self.current) {
            (GamePhase::Playing, Some(round)) => Ok(round),
            _ => Err(GameError::invalid_state(format!(
                "Cannot {} before the game has started",
                action
            ))),
        }
    }

    /// Add a player during setup. Names are trimmed and must be unique.
    pub fn add_player(&mut self, name: &str) -> GameResult<&[String]> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::invalid_state(
                "Players can only be added before the game starts",
            ));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::Empty);
        }
        if self.players.iter().any(|p| p == name) {
            return Err(GameError::Duplicate(name.to_string()));
        }

        self.players.push(name.to_string());
        tracing::info!("Added player {} ({} total)", name, self.players.len());
        Ok(&self.players)
    }

    /// Leave setup and play the first round
    pub fn start_game(&mut self) -> GameResult<RoundInfo> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::invalid_state("Game already started"));
        }
        if self.players.len() < self.min_players {
            return Err(GameError::invalid_state(format!(
                "Need at least {} players to start (have {})",
                self.min_players,
                self.players.len()
            )));
        }

        let info = self.setup_round()?;
        self.phase = GamePhase::Playing;
        tracing::info!("Game {} started with {} players", self.id, self.players.len());
        Ok(info)
    }

    pub fn next_round(&mut self) -> GameResult<RoundInfo> {
        self.require_playing("start the next round")?;
        self.setup_round()
    }

    /// Draw a selection, reset viewing, and shuffle the turn order
    fn setup_round(&mut self) -> GameResult<RoundInfo> {
        let selection = self
            .selector
            .select_round(self.players.len(), &mut self.rng)?;

        self.reveal.reset(self.players.len());
        self.turn_order = order::turn_order(&self.players, &mut self.rng);
        self.round_no += 1;

        tracing::info!(
            "Round {} started: theme {:?} (entry {})",
            self.round_no,
            selection.entry.theme,
            selection.entry_index
        );
        self.current = Some(selection);

        Ok(self.round_info())
    }

    pub fn round_info(&self) -> RoundInfo {
        RoundInfo {
            round_no: self.round_no,
            player_count: self.players.len(),
            turn_order: self.turn_order.clone(),
        }
    }

    /// A player looks at their prompt. Only the first look in a round returns it.
    pub fn view_prompt(&mut self, index: PlayerIndex) -> GameResult<ViewOutcome> {
        let prompt = self.require_playing("view prompts")?.prompt_for(index);

        let newly_viewed = self.reveal.mark_viewed(index)?;
        let status = self.reveal.status();

        if newly_viewed {
            tracing::debug!(
                "Player {} viewed their prompt ({:?})",
                self.players[index],
                status
            );
        } else {
            tracing::debug!("Player {} already viewed, ignoring", self.players[index]);
        }

        Ok(ViewOutcome {
            prompt: newly_viewed.then_some(prompt),
            status,
        })
    }

    pub fn view_states(&self) -> Vec<ViewState> {
        self.reveal.states()
    }

    pub fn round_status(&self) -> Option<RoundStatus> {
        self.current.as_ref().map(|_| self.reveal.status())
    }

    /// Show the theme and official prompt. Only once everybody has looked.
    pub fn reveal_official(&self) -> GameResult<OfficialReveal> {
        let round = self.require_playing("reveal the official prompt")?;
        if !self.reveal.is_round_ready() {
            return Err(GameError::invalid_state(
                "Every player must view their prompt before the reveal",
            ));
        }

        Ok(OfficialReveal {
            theme: round.entry.theme.clone(),
            official_prompt: round.entry.official_prompt.clone(),
        })
    }

    /// Show everything, including who the impostor was
    pub fn reveal_all(&self) -> GameResult<FullReveal> {
        let round = self.require_playing("reveal the impostor")?;
        let impostor_name = self
            .players
            .get(round.impostor_index)
            .cloned()
            .ok_or_else(|| GameError::invalid_state("Impostor is no longer in the game"))?;

        tracing::info!("Round {} revealed", self.round_no);

        Ok(FullReveal {
            theme: round.entry.theme.clone(),
            official_prompt: round.entry.official_prompt.clone(),
            impostor_prompt: round.entry.impostor_prompt.clone(),
            impostor_name,
        })
    }

    /// Back to setup. Players and the theme pool carry over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Setup;
        self.current = None;
        self.turn_order.clear();
        self.reveal.reset(0);
        self.round_no = 0;
        tracing::info!("Session {} reset to setup", self.id);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            phase: self.phase,
            players: self.players.clone(),
            min_players: self.min_players,
            round_no: self.round_no,
            statuses: self.reveal.states(),
            round_status: self.round_status(),
            turn_order: self.turn_order.clone(),
        }
    }
}
