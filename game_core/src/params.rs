/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const COLLISION_MIDLINE: f32 = 300.0; // Ball top edge below this checks the player paddle

    // Paddle
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PLAYER_PADDLE_X: f32 = 175.0;
    pub const PLAYER_PADDLE_Y: f32 = 580.0;
    pub const COMPUTER_PADDLE_X: f32 = 175.0;
    pub const COMPUTER_PADDLE_Y: f32 = 10.0;
    pub const PLAYER_STEP: f32 = 4.0; // units per frame

    // AI
    pub const AI_DEADZONE: f32 = 4.0;
    pub const AI_STEP: f32 = 5.0;

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPAWN_X: f32 = 200.0;
    pub const BALL_SPAWN_Y: f32 = 300.0;
    pub const BALL_SPEED: f32 = 3.0; // Vertical speed on serve and after every paddle hit

    // Keyboard
    pub const KEY_LEFT: u32 = 37;
    pub const KEY_RIGHT: u32 = 39;

    // Score text
    pub const SCORE_TEXT_X: f32 = 175.0;
    pub const PLAYER_SCORE_Y: f32 = 400.0;
    pub const COMPUTER_SCORE_Y: f32 = 200.0;
    pub const SCORE_FONT_PX: f32 = 75.0;
}
