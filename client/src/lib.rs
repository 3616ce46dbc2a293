//! Native Pong front end: menu, match loop, leaderboard screen

pub mod env;
pub mod fsm;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod source;

pub use env::{Environment, FixedRate, SystemEnv};
pub use fsm::{AppAction, AppFsm, AppState, TransitionResult};
pub use input::{InputEvent, Key, KeyState};
pub use render::{Renderer, TextRenderer, View};
pub use session::{run, RunOptions, Session};
pub use settings::Settings;
pub use source::{Autopilot, InputSource, ScriptError, ScriptedInput};
