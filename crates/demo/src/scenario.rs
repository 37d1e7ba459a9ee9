//! Trees used by the demo.
//!
//! The leaves print what the agent would do and read or update a tiny shared
//! [`World`]. Everything else is plain engine composition.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use behavior_tree::builder::*;
use behavior_tree::{BoxedBehavior, Status};

/// Ticks a random walk takes before the agent stops to look around.
const RANDOM_WALK_STEPS: u32 = 2;

/// Shared state the leaves observe and mutate.
#[derive(Debug, Default)]
pub struct World {
    player_visible: AtomicBool,
    player_in_range: AtomicBool,
    suspected_location: AtomicBool,
    walk_progress: AtomicU32,
    shots_fired: AtomicU32,
}

impl World {
    pub fn new(player_visible: bool) -> Self {
        Self {
            player_visible: AtomicBool::new(player_visible),
            player_in_range: AtomicBool::new(true),
            ..Self::default()
        }
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired.load(Ordering::Relaxed)
    }

    pub fn player_visible(&self) -> bool {
        self.player_visible.load(Ordering::Relaxed)
    }
}

/// A sequence with a single printing leaf.
pub fn hello_world() -> BoxedBehavior {
    tree(vec![sequence(vec![println("Hello World will be printed")])])
}

/// A failed condition stops the sequence before the printing leaf.
pub fn gated_hello_world() -> BoxedBehavior {
    tree(vec![sequence(vec![
        condition(action(|_| Status::Failure)),
        println("Hello World will NOT be printed"),
    ])])
}

/// Engage a visible player, otherwise investigate the last known location,
/// otherwise wander.
pub fn detect_and_shoot(world: Arc<World>) -> BoxedBehavior {
    tree(vec![selector(vec![
        sequence(vec![
            condition(is_player_visible(Arc::clone(&world))),
            selector(vec![
                sequence(vec![
                    condition(is_player_in_range(Arc::clone(&world))),
                    repeat(fire_at_player(Arc::clone(&world)), 3),
                ]),
                say("Move towards player!"),
            ]),
        ]),
        sequence(vec![
            condition(have_suspected_location(Arc::clone(&world))),
            say("Move to players last known location!"),
            look_around(Arc::clone(&world)),
        ]),
        sequence(vec![
            move_to_random_location(Arc::clone(&world)),
            look_around(world),
        ]),
    ])])
}

fn is_player_visible(world: Arc<World>) -> BoxedBehavior {
    action(move |_| {
        let visible = world.player_visible.load(Ordering::Relaxed);
        if visible {
            println!("Player is visible!");
        } else {
            println!("Player is NOT visible!");
        }
        Status::from(visible)
    })
}

fn is_player_in_range(world: Arc<World>) -> BoxedBehavior {
    action(move |_| {
        let in_range = world.player_in_range.load(Ordering::Relaxed);
        if in_range {
            println!("Player is in range!");
        }
        Status::from(in_range)
    })
}

fn fire_at_player(world: Arc<World>) -> BoxedBehavior {
    action(move |_| {
        world.shots_fired.fetch_add(1, Ordering::Relaxed);
        println!("Peng!!!");
        Status::Success
    })
}

fn have_suspected_location(world: Arc<World>) -> BoxedBehavior {
    action(move |_| {
        let suspected = world.suspected_location.load(Ordering::Relaxed);
        if suspected {
            println!("We have a suspected location!");
        }
        Status::from(suspected)
    })
}

/// Takes several ticks; reports `Running` until the walk is done and gives up
/// once the host cancels.
fn move_to_random_location(world: Arc<World>) -> BoxedBehavior {
    action(move |ctx| {
        if ctx.is_cancelled() {
            println!("Random walk interrupted!");
            return Status::Failure;
        }
        let step = world.walk_progress.fetch_add(1, Ordering::Relaxed) + 1;
        println!("Move to random location! ({step}/{RANDOM_WALK_STEPS})");
        if step < RANDOM_WALK_STEPS {
            Status::Running
        } else {
            world.walk_progress.store(0, Ordering::Relaxed);
            Status::Success
        }
    })
}

/// Looking around reveals the player's hiding spot.
fn look_around(world: Arc<World>) -> BoxedBehavior {
    action(move |_| {
        println!("Looking around!");
        if world.suspected_location.swap(true, Ordering::Relaxed) {
            world.player_visible.store(true, Ordering::Relaxed);
        }
        Status::Success
    })
}

fn say(message: &'static str) -> BoxedBehavior {
    action(move |_| {
        println!("{message}");
        Status::Success
    })
}

#[cfg(test)]
mod tests {
    use behavior_tree::{Behavior, CancellationToken, Context};

    use super::*;

    #[test]
    fn intro_trees() {
        let ctx = Context::background();
        assert_eq!(hello_world().execute(&ctx), Status::Success);
        assert_eq!(gated_hello_world().execute(&ctx), Status::Failure);
    }

    #[test]
    fn visible_player_gets_shot_three_times() {
        let world = Arc::new(World::new(true));
        let root = detect_and_shoot(Arc::clone(&world));

        assert_eq!(root.execute(&Context::background()), Status::Success);
        assert_eq!(world.shots_fired(), 3);
    }

    #[test]
    fn hidden_player_is_eventually_found() {
        let world = Arc::new(World::new(false));
        let root = detect_and_shoot(Arc::clone(&world));
        let ctx = Context::background();

        // Wander: one running tick, then the walk completes and we look around.
        assert_eq!(root.execute(&ctx), Status::Running);
        assert_eq!(root.execute(&ctx), Status::Success);
        assert!(!world.player_visible());

        // Investigate the suspected location, which reveals the player.
        assert_eq!(root.execute(&ctx), Status::Success);
        assert!(world.player_visible());

        assert_eq!(root.execute(&ctx), Status::Success);
        assert_eq!(world.shots_fired(), 3);
    }

    #[test]
    fn cancelled_walk_fails() {
        let world = Arc::new(World::new(false));
        let root = detect_and_shoot(world);
        let token = CancellationToken::new();
        token.cancel();

        assert_eq!(root.execute(&Context::new(&token)), Status::Failure);
    }
}
