/// Game tuning parameters for Pong
///
/// These values are part of the contract with the presentation layer: the AI
/// and collision math depend on them.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 5.0; // units per tick
    pub const PADDLE_INSET: f32 = 50.0; // distance from side wall

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 7.0; // units per tick

    // AI
    pub const AI_DIFFICULTY_DEFAULT: i32 = 2;
    pub const AI_DIFFICULTY_MIN: i32 = 1;
    pub const AI_DIFFICULTY_MAX: i32 = 4; // 4 = perfect tracking
    pub const AI_ERROR_PER_LEVEL: i32 = 30;

    // Loop
    pub const TICK_RATE: u32 = 60; // ticks per second
}
