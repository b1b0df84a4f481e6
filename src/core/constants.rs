// World geometry (world units, y grows downward)
pub const WORLD_WIDTH: f64 = 400.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 100.0;

// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS

// Vehicle geometry
pub const VEHICLE_X: f64 = 80.0;
pub const VEHICLE_WIDTH: f64 = 34.0;
pub const VEHICLE_HEIGHT: f64 = 24.0;
/// Fraction of the vehicle height used on each side of its center for obstacle hits.
pub const VEHICLE_HITBOX_FRACTION: f64 = 0.2;

// Vehicle physics (per tick)
pub const BASE_GRAVITY: f64 = 0.3;
pub const FLAP_STRENGTH: f64 = -3.0;
pub const TERMINAL_VELOCITY: f64 = 8.0;
pub const FLAP_COOLDOWN_TICKS: u32 = 8;
pub const TAKEOFF_BOOST: f64 = 2.0;
pub const WING_ENERGY_MAX: f64 = 0.12;
pub const WING_ENERGY_DECAY: f64 = 0.9;
pub const FLAP_MOMENTUM_MAX: f64 = 5.0;
pub const FLAP_MOMENTUM_DECAY: f64 = 0.99;
pub const LIFT_PER_MOMENTUM: f64 = 0.004;
pub const BASE_LIFT: f64 = 0.01;
pub const ROTATION_SMOOTHING: f64 = 0.15;
pub const WING_TILT: f64 = 0.15;
pub const ANIMATION_SPEED: f64 = 0.2;
pub const TRAIL_INTERVAL_TICKS: u64 = 2;

// Obstacles
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_BASE_SPEED: f64 = 2.0;
/// Gap height band as fractions of the world height (180..200 at 600).
pub const PIPE_GAP_MIN_FRACTION: f64 = 0.30;
pub const PIPE_GAP_MAX_FRACTION: f64 = 1.0 / 3.0;
pub const PIPE_GAP_SHRINK_PER_LEVEL: f64 = 5.0;
/// Gap top offset band as fractions of the world height.
pub const PIPE_TOP_MIN_FRACTION: f64 = 0.1;
pub const PIPE_TOP_MAX_FRACTION: f64 = 0.6;
pub const PIPE_INITIAL_INTERVAL: u32 = 120;
pub const PIPE_BASE_INTERVAL: u32 = 100;
pub const PIPE_MIN_INTERVAL: u32 = 80;
pub const PIPE_INTERVAL_STEP: u32 = 2;

// Scoring and difficulty
pub const PERFECT_PASS_THRESHOLD: f64 = 20.0;
pub const COMBO_PER_STREAK: f64 = 0.5;
pub const COMBO_MAX: f64 = 5.0;
pub const SCORE_ANIMATION_SPEED: f64 = 0.1;
pub const DIFFICULTY_THRESHOLD: f64 = 10.0;
pub const DIFFICULTY_SCORE_DIVISOR: f64 = 15.0;
pub const DIFFICULTY_MAX: u32 = 8;
pub const SPEED_SCORE_DIVISOR: f64 = 150.0;
pub const SPEED_MAX: f64 = 1.3;
pub const BANNER_FADE_PER_TICK: f64 = 2.0;

// Weather (stormy mode)
pub const WEATHER_WARNING_TICKS: u32 = 90;
pub const WEATHER_INITIAL_COOLDOWN_TICKS: u32 = 240;
pub const WEATHER_COOLDOWN_MIN_TICKS: u32 = 300;
pub const WEATHER_COOLDOWN_MAX_TICKS: u32 = 600;
pub const WEATHER_START_CHANCE: f64 = 0.01;

// Environment
pub const DAY_LENGTH_TICKS: u32 = 7200;
pub const CLOUD_SPAWN_CHANCE: f64 = 0.01;
pub const CLOUD_MIN_COUNT: usize = 3;
pub const PARALLAX_SPEED: f64 = 0.5;
pub const STAR_COUNT: usize = 80;
pub const STAR_SEED: u64 = 0x5EED_57A2;

// Session
pub const AD_DURATION_MS: u64 = 5000;
pub const DEATH_SOUND_DELAY_TICKS: u32 = 30;
pub const LEADERBOARD_CAPACITY: usize = 5;
pub const PLAYER_NAME_MAX_LEN: usize = 10;
pub const DEFAULT_PLAYER_NAME: &str = "Player";
