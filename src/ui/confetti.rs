use egui::{Color32, Context, Id, LayerId, Order, Rect, Vec2, pos2};
use rand::Rng;

const PIECES: usize = 100;
const LIFETIME_SECS: f64 = 5.0;
const PIECE_SIZE: f32 = 6.0;

#[derive(Clone, Debug)]
struct Piece {
    x: f32,     // fraction of the screen width
    speed: f32, // px per second
    color: Color32,
}

/// Celebration shown when the quiz is passed. Driven by the frame clock,
/// gone after a few seconds.
#[derive(Clone, Debug)]
pub struct Confetti {
    started_at: f64,
    pieces: Vec<Piece>,
}

impl Confetti {
    pub fn launch(now: f64) -> Self {
        let mut rng = rand::thread_rng();
        let pieces = (0..PIECES)
            .map(|_| Piece {
                x: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(120.0..300.0),
                color: Color32::from_rgb(
                    rng.gen_range(0..=255),
                    rng.gen_range(0..=255),
                    rng.gen_range(0..=255),
                ),
            })
            .collect();
        Self {
            started_at: now,
            pieces,
        }
    }

    pub fn is_done(&self, now: f64) -> bool {
        now - self.started_at >= LIFETIME_SECS
    }

    pub fn paint(&self, ctx: &Context, now: f64) {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
        let screen = ctx.screen_rect();
        let elapsed = (now - self.started_at) as f32;

        for piece in &self.pieces {
            let y = screen.top() - 20.0 + piece.speed * elapsed;
            if y > screen.bottom() {
                continue;
            }
            let x = screen.left() + piece.x * screen.width();
            let rect = Rect::from_min_size(pos2(x, y), Vec2::splat(PIECE_SIZE));
            painter.rect_filled(rect, 0.0, piece.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launches_a_hundred_pieces_for_five_seconds() {
        let confetti = Confetti::launch(2.0);
        assert_eq!(confetti.pieces.len(), 100);
        assert!(confetti.pieces.iter().all(|p| (0.0..1.0).contains(&p.x)));
        assert!(!confetti.is_done(6.9));
        assert!(confetti.is_done(7.0));
    }
}
