use core::fmt;
use core::ops::Range;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const POCKET_COUNT: usize = 37;

/// European single-zero layout, clockwise from zero.
pub const WHEEL_ORDER: [u8; POCKET_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

pub const WHEEL_DAMPING: f64 = 0.99;
pub const BALL_DAMPING: f64 = 0.98;
pub const MIN_SPIN_TICKS: u32 = 100;
pub const STOP_SPEED: f64 = 0.01;
/// Launch speeds in radians per tick.
pub const WHEEL_SPEED_RANGE: Range<f64> = 0.1..0.2;
pub const BALL_SPEED_RANGE: Range<f64> = 0.15..0.25;
/// Interval at which a scheduler is expected to call `step`.
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PocketColor {
    Red,
    Black,
    Green,
}

impl PocketColor {
    pub fn of(number: u8) -> Self {
        if number == 0 {
            PocketColor::Green
        } else if RED_NUMBERS.contains(&number) {
            PocketColor::Red
        } else {
            PocketColor::Black
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PocketColor::Red => "red",
            PocketColor::Black => "black",
            PocketColor::Green => "green",
        }
    }
}

impl fmt::Display for PocketColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation of the wheel and the ball, advanced one fixed tick at a time.
/// Angles are radians and keep accumulating across spins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WheelState {
    wheel_angle: f64,
    ball_angle: f64,
    wheel_speed: f64,
    ball_speed: f64,
    ticks: u32,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launch(&mut self, wheel_speed: f64, ball_speed: f64) {
        self.wheel_speed = wheel_speed;
        self.ball_speed = ball_speed;
        self.ticks = 0;
    }

    pub fn launch_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let wheel_speed = rng.gen_range(WHEEL_SPEED_RANGE);
        let ball_speed = rng.gen_range(BALL_SPEED_RANGE);
        self.launch(wheel_speed, ball_speed);
    }

    pub fn tick(&mut self) {
        self.ticks += 1;
        self.wheel_angle += self.wheel_speed;
        self.ball_angle += self.ball_speed;
        self.wheel_speed *= WHEEL_DAMPING;
        self.ball_speed *= BALL_DAMPING;
    }

    pub fn is_stopped(&self) -> bool {
        self.ticks >= MIN_SPIN_TICKS && self.wheel_speed < STOP_SPEED
    }

    /// Index into [`WHEEL_ORDER`] of the sector under the ball.
    pub fn pocket_index(&self) -> usize {
        let sector = 360.0 / POCKET_COUNT as f64;
        let degrees = self.ball_angle.to_degrees().rem_euclid(360.0);
        ((degrees / sector).floor() as usize).min(POCKET_COUNT - 1)
    }

    pub fn winning_number(&self) -> u8 {
        WHEEL_ORDER[self.pocket_index()]
    }

    pub fn wheel_angle(&self) -> f64 {
        self.wheel_angle
    }

    pub fn ball_angle(&self) -> f64 {
        self.ball_angle
    }

    pub fn wheel_speed(&self) -> f64 {
        self.wheel_speed
    }

    pub fn ball_speed(&self) -> f64 {
        self.ball_speed
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn wheel_order_covers_every_number_once() {
        let unique: HashSet<u8> = WHEEL_ORDER.iter().copied().collect();
        assert_eq!(unique.len(), POCKET_COUNT);
        assert!(WHEEL_ORDER.iter().all(|&n| n <= 36));
    }

    #[test]
    fn colors_follow_table_layout() {
        assert_eq!(PocketColor::of(0), PocketColor::Green);
        assert_eq!(PocketColor::of(1), PocketColor::Red);
        assert_eq!(PocketColor::of(2), PocketColor::Black);
        assert_eq!(PocketColor::of(11), PocketColor::Black);
        assert_eq!(PocketColor::of(12), PocketColor::Red);
        assert_eq!(PocketColor::of(17), PocketColor::Black);
        assert_eq!(PocketColor::of(36), PocketColor::Red);
        let reds = (0..=36).filter(|&n| PocketColor::of(n) == PocketColor::Red).count();
        assert_eq!(reds, 18);
    }

    #[test]
    fn speeds_decay_geometrically() {
        let (s, b) = (0.15, 0.2);
        let mut wheel = WheelState::new();
        wheel.launch(s, b);
        for t in 1..=150 {
            wheel.tick();
            assert_eq!(wheel.ticks(), t);
            assert!(close(wheel.wheel_speed(), s * WHEEL_DAMPING.powi(t as i32)));
            assert!(close(wheel.ball_speed(), b * BALL_DAMPING.powi(t as i32)));
        }
    }

    #[test]
    fn stops_only_after_min_ticks_and_slow_wheel() {
        let mut wheel = WheelState::new();
        wheel.launch(0.15, 0.2);
        let mut last_speed = wheel.wheel_speed();
        while !wheel.is_stopped() {
            assert!(wheel.ticks() < MIN_SPIN_TICKS || last_speed >= STOP_SPEED);
            wheel.tick();
            last_speed = wheel.wheel_speed();
        }
        assert!(wheel.ticks() >= MIN_SPIN_TICKS);
        assert!(wheel.wheel_speed() < STOP_SPEED);
        assert_eq!(wheel.ticks(), 270);
    }

    #[test]
    fn slow_launch_still_runs_min_ticks() {
        let mut wheel = WheelState::new();
        wheel.launch(0.005, 0.005);
        let mut ticks = 0;
        while !wheel.is_stopped() {
            wheel.tick();
            ticks += 1;
        }
        assert_eq!(ticks, MIN_SPIN_TICKS);
    }

    #[test]
    fn random_launch_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut wheel = WheelState::new();
        for _ in 0..100 {
            wheel.launch_random(&mut rng);
            assert!(WHEEL_SPEED_RANGE.contains(&wheel.wheel_speed()));
            assert!(BALL_SPEED_RANGE.contains(&wheel.ball_speed()));
            assert_eq!(wheel.ticks(), 0);
        }
    }

    #[test]
    fn ball_angle_maps_to_equal_sectors() {
        let sector = (360.0 / POCKET_COUNT as f64).to_radians();
        let mut wheel = WheelState::new();
        assert_eq!(wheel.winning_number(), 0);

        wheel.launch(0.0, sector * 1.5);
        wheel.tick();
        assert_eq!(wheel.pocket_index(), 1);
        assert_eq!(wheel.winning_number(), 32);

        let mut wrapped = WheelState::new();
        wrapped.launch(0.0, std::f64::consts::TAU + sector * 36.5);
        wrapped.tick();
        assert_eq!(wrapped.winning_number(), 26);
    }
}
