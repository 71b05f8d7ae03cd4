//! A rectangle patrolling the edges of a screen, driven by a behavior tree.
//!
//! The rectangle is the context of the tree: the host owns it, every tick
//! hands it to the tree, and the leaves move it.

use bt_tick::{
    builder::{leaf, sequence},
    run_with, BoxedNode, NodeStatus,
};
use log::{info, trace};

use crate::config::PatrolConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Rect {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        self.min_x += dx;
        self.max_x += dx;
        self.min_y += dy;
        self.max_y += dy;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

/// Leaf that moves the rectangle by `(dx, dy)` every tick until it hits an
/// edge of the screen. The rectangle is pushed back flush with the edge it
/// crossed and the leaf succeeds.
pub fn move_by(dx: i32, dy: i32, screen: Screen) -> BoxedNode<Rect> {
    leaf(move |rect: &mut Rect| {
        rect.shift(dx, 0);
        if rect.min_x < 0 {
            rect.shift(-rect.min_x, 0);
            return NodeStatus::Success;
        }
        if rect.max_x > screen.width {
            rect.shift(screen.width - rect.max_x, 0);
            return NodeStatus::Success;
        }

        rect.shift(0, dy);
        if rect.min_y < 0 {
            rect.shift(0, -rect.min_y);
            return NodeStatus::Success;
        }
        if rect.max_y > screen.height {
            rect.shift(0, screen.height - rect.max_y);
            return NodeStatus::Success;
        }

        NodeStatus::NotDone
    })
}

/// Right, down, left, up: one clockwise lap around the screen.
pub fn patrol_tree(speed: i32, screen: Screen) -> BoxedNode<Rect> {
    sequence(vec![
        move_by(speed, 0, screen),
        move_by(0, speed, screen),
        move_by(-speed, 0, screen),
        move_by(0, -speed, screen),
    ])
}

/// Ticks the patrol tree against `rect` until `config.laps` laps are done.
/// A lap is one SUCCESS of the root. `before_tick` is called ahead of every
/// tick so the caller can pace the loop.
///
/// Returns the number of ticks each lap took.
pub fn patrol(
    config: &PatrolConfig,
    rect: &mut Rect,
    mut before_tick: impl FnMut(),
) -> Vec<u64> {
    let screen = Screen {
        width: config.screen_width,
        height: config.screen_height,
    };
    let mut tree = patrol_tree(config.speed, screen);

    let mut laps = Vec::with_capacity(config.laps as usize);
    let mut ticks_this_lap = 0u64;

    while laps.len() < config.laps as usize {
        before_tick();

        let status = run_with(&mut tree, &mut *rect);
        ticks_this_lap += 1;
        trace!("{status} {rect:?}");

        if status == NodeStatus::Success {
            info!(
                "lap {} finished after {ticks_this_lap} ticks at {rect:?}",
                laps.len() + 1
            );
            laps.push(ticks_this_lap);
            ticks_this_lap = 0;
        }
    }

    laps
}

#[cfg(test)]
mod tests {
    use super::*;
    use bt_tick::{run_until_done, Node};

    const SCREEN: Screen = Screen {
        width: 640,
        height: 480,
    };

    #[test]
    fn move_stops_flush_with_the_edge() {
        let mut node = move_by(5, 0, SCREEN);
        let mut rect = Rect::new(520, 10, 620, 60);

        // 625, 630, 635, 640 are still on screen.
        for _ in 0..4 {
            assert_eq!(node.execute(&mut rect), NodeStatus::NotDone);
        }
        assert_eq!(rect.max_x, 640);
        assert_eq!(node.execute(&mut rect), NodeStatus::Success);
        assert_eq!(rect, Rect::new(540, 10, 640, 60));
    }

    #[test]
    fn move_up_clamps_at_top() {
        let mut node = move_by(0, -7, SCREEN);
        let mut rect = Rect::new(0, 3, 100, 53);

        assert_eq!(node.execute(&mut rect), NodeStatus::Success);
        assert_eq!(rect, Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn lap_ends_in_the_top_left_corner() {
        let mut tree = patrol_tree(5, SCREEN);
        let mut rect = Rect::new(10, 10, 110, 60);

        let status = run_until_done(&mut tree, &mut rect, 10_000).unwrap();

        assert_eq!(status, NodeStatus::Success);
        assert_eq!(rect, Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn next_lap_starts_by_moving_right() {
        let mut tree = patrol_tree(5, SCREEN);
        let mut rect = Rect::new(10, 10, 110, 60);

        run_until_done(&mut tree, &mut rect, 10_000).unwrap();

        assert_eq!(run_with(&mut tree, &mut rect), NodeStatus::NotDone);
        assert_eq!(rect, Rect::new(5, 0, 105, 50));
    }

    #[test]
    fn one_tree_shape_drives_separate_rectangles() {
        let mut tree = patrol_tree(5, SCREEN);
        let mut a = Rect::new(10, 10, 110, 60);
        let mut b = Rect::new(300, 200, 340, 220);

        run_with(&mut tree, &mut a);
        run_with(&mut tree, &mut b);

        assert_eq!(a, Rect::new(15, 10, 115, 60));
        assert_eq!(b, Rect::new(305, 200, 345, 220));
    }

    fn config(json: &str) -> PatrolConfig {
        PatrolConfig::from_json(json).unwrap()
    }

    #[test]
    fn patrol_runs_the_configured_laps() {
        let config = config(r#"{ "laps": 2, "tick_rate": 0, "start": [0, 0, 100, 50] }"#);
        let mut rect = config.start_rect();
        let mut ticks = 0u64;

        let laps = patrol(&config, &mut rect, || ticks += 1);

        // 109 right, 87 down, 109 left, 87 up.
        assert_eq!(laps, vec![392, 392]);
        assert_eq!(ticks, 784);
        assert_eq!(rect, Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn patrol_counts_ticks_per_lap_from_the_default_start() {
        let config = config(r#"{ "laps": 2, "tick_rate": 0 }"#);
        let mut rect = config.start_rect();

        let laps = patrol(&config, &mut rect, || {});

        // 107 right, 85 down, 109 left, 87 up, then full laps from the corner.
        assert_eq!(laps, vec![388, 392]);
        assert_eq!(rect, Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn zero_laps_ticks_nothing() {
        let config = config(r#"{ "laps": 0 }"#);
        let mut rect = config.start_rect();
        let mut ticks = 0u64;

        let laps = patrol(&config, &mut rect, || ticks += 1);

        assert!(laps.is_empty());
        assert_eq!(ticks, 0);
        assert_eq!(rect, config.start_rect());
    }

    #[test]
    fn fastest_accepted_speed_does_not_overflow() {
        let config = config(r#"{ "speed": 480, "laps": 3 }"#);
        let mut rect = config.start_rect();

        let laps = patrol(&config, &mut rect, || {});

        assert_eq!(laps.len(), 3);
        assert_eq!(rect, Rect::new(0, 0, 100, 50));
    }
}
