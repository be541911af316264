//! Server configuration loaded from environment variables

use crate::error::PhraseBookError;
use crate::phrases::PhraseBook;
use crate::session::{GameSession, DEFAULT_MIN_PLAYERS};
use crate::types::DrawPolicy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub addr: SocketAddr,
    pub draw_policy: DrawPolicy,
    pub min_players: usize,
    /// JSON phrase file (None = built-in dataset)
    pub phrases_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
    pub static_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            draw_policy: DrawPolicy::default(),
            min_players: DEFAULT_MIN_PLAYERS,
            phrases_path: None,
            seed: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Trimmed, non-empty env var
fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse an env var, warning and returning None if it doesn't parse
fn parse_env<T>(name: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env_var(name)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Ignoring invalid {}={:?}: {}", name, raw, e);
            None
        }
    }
}

impl GameConfig {
    /// Load config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let min_players = match parse_env::<usize>("IMPOSTOR_MIN_PLAYERS") {
            Some(0) => {
                tracing::warn!("IMPOSTOR_MIN_PLAYERS must be at least 1, using 1");
                1
            }
            Some(n) => n,
            None => defaults.min_players,
        };

        let config = Self {
            addr: parse_env("IMPOSTOR_ADDR").unwrap_or(defaults.addr),
            draw_policy: parse_env("IMPOSTOR_DRAW_POLICY").unwrap_or(defaults.draw_policy),
            min_players,
            phrases_path: env_var("IMPOSTOR_PHRASES").map(PathBuf::from),
            seed: parse_env("IMPOSTOR_SEED"),
            static_dir: env_var("IMPOSTOR_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        };

        if config.seed.is_some() {
            tracing::warn!("IMPOSTOR_SEED is set - rounds are reproducible");
        }

        config
    }

    pub fn load_phrases(&self) -> Result<PhraseBook, PhraseBookError> {
        match &self.phrases_path {
            Some(path) => PhraseBook::from_file(path),
            None => PhraseBook::builtin(),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build a fresh session from this config
    pub fn build_session(&self) -> Result<GameSession, PhraseBookError> {
        let book = self.load_phrases()?;
        Ok(GameSession::new(
            book,
            self.draw_policy,
            self.min_players,
            self.rng(),
        ))
    }
}
