use scoundrel::prelude::*;
use scoundrel::init_tracing;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

const SEED_VAR: &str = "SCOUNDREL_SEED";
const MAX_HEALTH_VAR: &str = "SCOUNDREL_MAX_HEALTH";

#[derive(Debug, thiserror::Error)]
#[error("{key} must be a positive integer, got {value:?}")]
struct ConfigError {
    key: &'static str,
    value: String,
}

#[derive(Debug, Clone)]
struct AutoplayConfig {
    /// Unset means a fresh shuffle every run.
    seed: Option<u64>,
    max_health: i32,
    table: TableConfig,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_health: GameConfig::default().max_health,
            table: TableConfig::default(),
        }
    }
}

impl AutoplayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError { key: SEED_VAR, value })?,
            );
        }
        if let Some(value) = lookup(MAX_HEALTH_VAR) {
            config.max_health = match value.trim().parse::<i32>() {
                Ok(health) if health > 0 => health,
                _ => return Err(ConfigError { key: MAX_HEALTH_VAR, value }),
            };
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Picks the next move, or `None` once the game is over.
///
/// Skips rooms whose monsters could kill outright, heals when hurt, trades
/// up weapons, then fights the weakest monster left.
fn choose_action(state: &GameState) -> Option<Action> {
    if state.game_over {
        return None;
    }

    let threat: i32 = state
        .room
        .iter()
        .filter_map(Card::as_monster)
        .map(|m| i32::from(m.damage))
        .sum();
    if state.can_avoid_now() && threat >= state.health {
        return Some(Action::avoid_room());
    }
    if state.can_draw_room() {
        return Some(Action::draw_room());
    }

    state
        .room
        .iter()
        .min_by_key(|card| priority(state, card))
        .map(|card| Action::for_card(state, card))
}

/// Lower plays first.
fn priority(state: &GameState, card: &Card) -> (u8, i32) {
    match card {
        Card::HealthPotion(p) if state.health < state.max_health => (0, -i32::from(p.healing)),
        Card::Weapon(w) if state.equipped_weapon.as_ref().is_none_or(|cur| w.damage > cur.damage) => {
            (1, -i32::from(w.damage))
        }
        Card::Monster(m) => (2, i32::from(m.damage)),
        _ => (3, 0),
    }
}

// ---------------------------------------------------------------------------
// Game loop
// ---------------------------------------------------------------------------

async fn play(config: &AutoplayConfig) -> Result<GameState, ScoundrelError> {
    let deck = Deck::shuffled(&DeckConfig { seed: config.seed });
    let game = deck.deal(&GameConfig {
        max_health: config.max_health,
    });

    let mut tables = TableManager::new();
    let table_id = tables.create_table(game, config.table.clone());
    let table = tables.table(table_id)?;

    loop {
        let state = table.snapshot().await?;
        let Some(action) = choose_action(&state) else {
            break;
        };
        tracing::debug!(%table_id, %action, health = state.health, "playing");
        if table.dispatch(action).await? == Dispatch::Unchanged {
            tracing::warn!(%table_id, "policy picked a move with no effect, stopping");
            break;
        }
    }

    let state = table.snapshot().await?;
    tables.destroy_table(table_id).await?;
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AutoplayConfig::from_env()?;
    tracing::info!(seed = ?config.seed, max_health = config.max_health, "starting autoplay");

    let state = play(&config).await?;
    let outcome = if state.is_victory() { "survived" } else { "died" };
    println!(
        "{outcome} with {} health, score {} ({} cards discarded)",
        state.health,
        state.score,
        state.discard_pile.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn room_state(room: Vec<Card>) -> GameState {
        let mut state = GameState::new(&GameConfig::default(), Vec::new());
        state.room = room;
        state.original_room_size = 4;
        state
    }

    #[test]
    fn test_config_defaults() {
        let config = AutoplayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_health, 20);
    }

    #[test]
    fn test_config_reads_values() {
        let config =
            AutoplayConfig::from_lookup(lookup(&[(SEED_VAR, "42"), (MAX_HEALTH_VAR, " 12 ")]))
                .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_health, 12);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = AutoplayConfig::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert_eq!(err.key, SEED_VAR);
        assert!(AutoplayConfig::from_lookup(lookup(&[(MAX_HEALTH_VAR, "0")])).is_err());
    }

    #[test]
    fn test_policy_avoids_lethal_room() {
        let mut state = room_state(vec![
            Card::from(Monster::new(Suit::Spades, Rank::Ace)),
            Card::from(Monster::new(Suit::Clubs, Rank::King)),
        ]);
        state.health = 20;
        assert_eq!(choose_action(&state), Some(Action::avoid_room()));

        state.can_avoid_room = false;
        assert_eq!(
            choose_action(&state),
            Some(Action::fight_monster(Monster::new(Suit::Clubs, Rank::King)))
        );
    }

    #[test]
    fn test_policy_heals_when_hurt() {
        let mut state = room_state(vec![
            Card::from(Monster::new(Suit::Spades, Rank::Two)),
            Card::from(HealthPotion::new(Suit::Hearts, Rank::Five)),
        ]);
        state.can_avoid_room = false;
        state.health = 10;
        assert_eq!(choose_action(&state), Some(Action::use_health_potion(5)));

        state.health = 20;
        assert_eq!(
            choose_action(&state),
            Some(Action::fight_monster(Monster::new(Suit::Spades, Rank::Two)))
        );
    }

    #[test]
    fn test_policy_draws_when_room_is_done() {
        let state = room_state(Vec::new());
        assert_eq!(choose_action(&state), Some(Action::draw_room()));
    }

    #[tokio::test]
    async fn test_seeded_autoplay_finishes() {
        let config = AutoplayConfig {
            seed: Some(2024),
            ..AutoplayConfig::default()
        };
        let state = play(&config).await.unwrap();
        assert!(state.game_over);
        assert_eq!(state.card_count(), 44);
    }
}
