//! One-shot effect recipes.
//!
//! Each effect is a fixed recipe of one to three chains with literal timing
//! constants; a few read the parameter store at trigger time (jump's start
//! frequency, punch's decay, coin's end frequency, explosion's intensity).
//! Recipes are pure: they build chains, the mixer schedules them.
//!
//! # Example
//!
//! ```ignore
//! use blipfx::{params::Params, sfx::Effect};
//!
//! let params = Params::default();
//! mixer.schedule(Effect::Coin.chains(&params), now);
//! ```

mod alert;
mod coin;
mod explosion;
mod gameover;
mod heal;
mod jump;
mod kick;
mod laser;
mod powerup;
mod punch;

pub use alert::alert;
pub use coin::coin;
pub use explosion::explosion;
pub use gameover::game_over;
pub use heal::heal;
pub use jump::jump;
pub use kick::kick;
pub use laser::laser;
pub use powerup::power_up;
pub use punch::punch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::synth::Chain;

/// The one-shot effects, in pad order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Jump,
    Punch,
    Kick,
    Coin,
    PowerUp,
    GameOver,
    Explosion,
    Laser,
    Heal,
    Alert,
}

impl Effect {
    pub const ALL: [Effect; 10] = [
        Effect::Jump,
        Effect::Punch,
        Effect::Kick,
        Effect::Coin,
        Effect::PowerUp,
        Effect::GameOver,
        Effect::Explosion,
        Effect::Laser,
        Effect::Heal,
        Effect::Alert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Effect::Jump => "jump",
            Effect::Punch => "punch",
            Effect::Kick => "kick",
            Effect::Coin => "coin",
            Effect::PowerUp => "power-up",
            Effect::GameOver => "game-over",
            Effect::Explosion => "explosion",
            Effect::Laser => "laser",
            Effect::Heal => "heal",
            Effect::Alert => "alert",
        }
    }

    /// Build this effect's chains from the current parameters.
    pub fn chains(self, params: &Params) -> Vec<Chain> {
        match self {
            Effect::Jump => jump(params),
            Effect::Punch => punch(params),
            Effect::Kick => kick(params),
            Effect::Coin => coin(params),
            Effect::PowerUp => power_up(params),
            Effect::GameOver => game_over(params),
            Effect::Explosion => explosion(params),
            Effect::Laser => laser(params),
            Effect::Heal => heal(params),
            Effect::Alert => alert(params),
        }
    }
}
