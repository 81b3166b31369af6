//! Opening play-off selection.

use crate::cards::Card;
use crate::core::player::Player;

/// Every hand card of the lowest non-special value.
///
/// Empty if the hand holds only Twos and Tens, which forfeits the
/// play-off.
#[must_use]
pub fn get_ai_starting_card(player: &Player) -> Vec<Card> {
    let startable = player.hand().iter().filter(|c| !c.is_special());
    let Some(lowest) = startable.clone().map(|c| c.value()).min() else {
        return Vec::new();
    };
    startable.filter(|c| c.value() == lowest).copied().collect()
}
