//! Input sources: anything that can feed key events to a session

use std::collections::BTreeMap;
use std::fmt;

use game_core::Snapshot;

use crate::input::{InputEvent, Key};

/// Supplies the key events that arrive before each tick
pub trait InputSource {
    /// Events for tick `tick`. `snapshot` is the running match, if any.
    fn poll(&mut self, tick: u64, snapshot: Option<&Snapshot>) -> Vec<InputEvent>;
}

/// Bad line in an input script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Replays key events from a text script.
///
/// One event per line: `<tick> down <key>`, `<tick> up <key>`,
/// `<tick> press <key>` (down and up in the same tick) or `<tick> quit`.
/// Blank lines and `#` comments are skipped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: BTreeMap<u64, Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut events: BTreeMap<u64, Vec<InputEvent>> = BTreeMap::new();

        for (index, raw) in script.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let error = |message: String| ScriptError {
                line: index + 1,
                message,
            };

            let mut parts = line.split_whitespace();
            let tick = parts
                .next()
                .and_then(|t| t.parse::<u64>().ok())
                .ok_or_else(|| error(format!("expected a tick number in '{line}'")))?;
            let action = parts
                .next()
                .ok_or_else(|| error("missing action".to_string()))?;

            let mut key = || -> Result<Key, ScriptError> {
                let name = parts
                    .next()
                    .ok_or_else(|| error(format!("'{action}' needs a key")))?;
                Key::from_name(name).ok_or_else(|| error(format!("unknown key '{name}'")))
            };

            let parsed = match action {
                "down" => vec![InputEvent::KeyDown(key()?)],
                "up" => vec![InputEvent::KeyUp(key()?)],
                "press" => {
                    let key = key()?;
                    vec![InputEvent::KeyDown(key), InputEvent::KeyUp(key)]
                }
                "quit" => vec![InputEvent::Quit],
                other => return Err(error(format!("unknown action '{other}'"))),
            };
            events.entry(tick).or_default().extend(parsed);
        }

        Ok(Self { events })
    }

    /// Tick of the last scripted event
    pub fn last_tick(&self) -> Option<u64> {
        self.events.keys().next_back().copied()
    }

    pub fn is_finished(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, tick: u64, _snapshot: Option<&Snapshot>) -> Vec<InputEvent> {
        self.events.remove(&tick).unwrap_or_default()
    }
}

/// Unattended player: starts a match against the AI from the menu and holds
/// W/S so the left paddle follows the ball.
#[derive(Debug, Clone)]
pub struct Autopilot {
    deadzone: f32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self { deadzone: 10.0 }
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, _tick: u64, snapshot: Option<&Snapshot>) -> Vec<InputEvent> {
        let Some(snapshot) = snapshot else {
            return vec![InputEvent::KeyDown(Key::Digit1), InputEvent::KeyUp(Key::Digit1)];
        };

        let ball_y = snapshot.ball.center_y();
        let paddle_y = snapshot.paddle_left.center_y();
        if ball_y < paddle_y - self.deadzone {
            vec![InputEvent::KeyUp(Key::S), InputEvent::KeyDown(Key::W)]
        } else if ball_y > paddle_y + self.deadzone {
            vec![InputEvent::KeyUp(Key::W), InputEvent::KeyDown(Key::S)]
        } else {
            vec![InputEvent::KeyUp(Key::W), InputEvent::KeyUp(Key::S)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Rect;
    use glam::Vec2;

    #[test]
    fn test_parse_script() {
        let script = "\
# start a match
0 press 1
5 down w
12 up w   # let go
40 quit
";
        let mut input = ScriptedInput::parse(script).unwrap();
        assert_eq!(input.last_tick(), Some(40));
        assert_eq!(
            input.poll(0, None),
            vec![InputEvent::KeyDown(Key::Digit1), InputEvent::KeyUp(Key::Digit1)]
        );
        assert!(input.poll(1, None).is_empty());
        assert_eq!(input.poll(5, None), vec![InputEvent::KeyDown(Key::W)]);
        assert_eq!(input.poll(12, None), vec![InputEvent::KeyUp(Key::W)]);
        assert_eq!(input.poll(40, None), vec![InputEvent::Quit]);
        assert!(input.is_finished());
    }

    #[test]
    fn test_same_tick_events_keep_order() {
        let mut input = ScriptedInput::parse("3 down s\n3 down ArrowUp").unwrap();
        assert_eq!(
            input.poll(3, None),
            vec![InputEvent::KeyDown(Key::S), InputEvent::KeyDown(Key::ArrowUp)]
        );
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = ScriptedInput::parse("0 press 1\nsoon down w").unwrap_err();
        assert_eq!(err.line, 2);

        let err = ScriptedInput::parse("1 jump w").unwrap_err();
        assert!(err.message.contains("jump"));

        let err = ScriptedInput::parse("1 down q").unwrap_err();
        assert!(err.message.contains("unknown key"));

        let err = ScriptedInput::parse("1 press").unwrap_err();
        assert!(err.message.contains("needs a key"));
    }

    fn snapshot_with(ball_y: f32, paddle_top: f32) -> Snapshot {
        Snapshot {
            tick: 1,
            ball: Rect::new(400.0, ball_y, 15.0, 15.0),
            ball_vel: Vec2::ZERO,
            paddle_left: Rect::new(50.0, paddle_top, 15.0, 90.0),
            paddle_right: Rect::new(735.0, 255.0, 15.0, 90.0),
            score_left: 0,
            score_right: 0,
        }
    }

    #[test]
    fn test_autopilot_starts_match_from_menu() {
        let mut pilot = Autopilot::new();
        assert_eq!(pilot.poll(0, None)[0], InputEvent::KeyDown(Key::Digit1));
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let mut pilot = Autopilot::new();
        let up = pilot.poll(1, Some(&snapshot_with(100.0, 255.0)));
        assert!(up.contains(&InputEvent::KeyDown(Key::W)));

        let down = pilot.poll(2, Some(&snapshot_with(500.0, 255.0)));
        assert!(down.contains(&InputEvent::KeyDown(Key::S)));

        let hold = pilot.poll(3, Some(&snapshot_with(292.5, 255.0)));
        assert!(!hold.contains(&InputEvent::KeyDown(Key::W)));
        assert!(!hold.contains(&InputEvent::KeyDown(Key::S)));
    }
}
