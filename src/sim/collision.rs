//! Collision detection for the playfield walls and the paddle
//!
//! Both checks look only at the ball's top-left corner. Walls are tested as an
//! ordered chain where the first matching boundary wins; the paddle test is
//! independent of the wall result.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Which boundary the ball touched this frame, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallContact {
    /// Past the right edge: the rally is over
    RightExit,
    /// At or left of the left edge
    Left,
    /// At or above the top edge
    Top,
    /// At or below the bottom edge
    Bottom,
}

impl WallContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            WallContact::RightExit => "right-exit",
            WallContact::Left => "left",
            WallContact::Top => "top",
            WallContact::Bottom => "bottom",
        }
    }
}

/// Classify the ball corner against the playfield.
///
/// Guards are checked in order and only the first match is reported, so a
/// ball past two boundaries at once (e.g. off the right edge and above the
/// top) only yields the higher-priority contact.
pub fn wall_contact(ball: &Rect, bounds: IVec2) -> Option<WallContact> {
    let chain: [(WallContact, fn(&Rect, IVec2) -> bool); 4] = [
        (WallContact::RightExit, |b, bounds| b.x > bounds.x),
        (WallContact::Left, |b, _| b.x <= 0),
        (WallContact::Top, |b, _| b.y <= 0),
        (WallContact::Bottom, |b, bounds| b.y >= bounds.y),
    ];

    chain
        .iter()
        .find(|(_, hit)| hit(ball, bounds))
        .map(|(contact, _)| *contact)
}

/// Whether the ball corner sits in the paddle's hit region.
///
/// The region is every point at or right of the paddle's leading edge,
/// between its top and bottom inclusive. The paddle's far edge and the ball's
/// size are not considered.
pub fn paddle_contact(ball: &Rect, paddle: &Rect) -> bool {
    ball.x >= paddle.x && ball.y >= paddle.y && ball.y <= paddle.bottom()
}
