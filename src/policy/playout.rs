//! Driving a controller with a policy.

use crate::core::Millis;
use crate::resolution::ResolutionSystem;
use crate::session::GameController;

use super::ClickPolicy;

/// Summary of one automated game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Accepted clicks (the game's move counter).
    pub moves: u32,
    pub matches: u32,
    pub won: bool,
    /// Clicks attempted, including ignored ones.
    pub clicks: u32,
    /// Host time when play stopped.
    pub elapsed: Millis,
}

/// Play the controller's current game with `policy`.
///
/// The clock starts at the time of the last recorded click (or zero) and
/// moves `step_ms` per click. While no click is legal it jumps to the next
/// resolution deadline. Stops on a win, after `max_clicks`, or when the
/// policy gives up.
pub fn play_out<R, P>(
    controller: &mut GameController<R>,
    policy: &mut P,
    step_ms: u64,
    max_clicks: u32,
) -> PlayStats
where
    R: ResolutionSystem,
    P: ClickPolicy + ?Sized,
{
    let mut rng = controller.rng_mut().fork();
    let mut now = controller
        .session()
        .history()
        .last()
        .map_or(Millis::ZERO, |record| record.at);
    let mut clicks = 0;
    policy.reset();

    loop {
        controller.advance(now);
        if controller.session().won() || clicks >= max_clicks {
            break;
        }
        policy.observe(controller.session());

        if controller.session().legal_clicks().is_empty() {
            match controller.next_deadline() {
                Some(due) => {
                    now = now.max(due);
                    continue;
                }
                None => break,
            }
        }

        let Some(index) = policy.choose(controller.session(), &mut rng) else {
            break;
        };
        controller.handle_card_click(index, now);
        clicks += 1;
        policy.observe(controller.session());
        now = now.after(step_ms);
    }

    let session = controller.session();
    log::debug!(
        "{} finished by {} policy: {} moves, won={}",
        session.id(),
        policy.name(),
        session.move_count(),
        session.won()
    );
    PlayStats {
        moves: session.move_count(),
        matches: session.match_count(),
        won: session.won(),
        clicks,
        elapsed: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::policy::{MemoryPolicy, RandomPolicy};

    #[test]
    fn test_memory_policy_wins() {
        let config = GameConfig::default().with_seed(11);
        let mut game = GameController::new(config).unwrap();
        let stats = play_out(&mut game, &mut MemoryPolicy::new(), 100, 1000);

        assert!(stats.won);
        assert_eq!(stats.matches, 4);
        assert!(stats.moves <= 16);
        assert_eq!(stats.clicks, stats.moves);
        // At least the final match delay has passed.
        assert!(stats.elapsed >= Millis::new(500));
    }

    #[test]
    fn test_click_limit_stops_play() {
        let config = GameConfig::default().with_seed(11);
        let mut game = GameController::immediate(config).unwrap();
        let stats = play_out(&mut game, &mut RandomPolicy, 0, 3);

        assert_eq!(stats.clicks, 3);
        assert!(!stats.won);
    }
}
