//! Line-oriented commands for the headless front end.
//!
//! | Command | Event |
//! | --- | --- |
//! | `start` / `stop` / `toggle` | running state |
//! | `inner <px>` / `outer <px>` | circle sizes, within the editing limits |
//! | `inner-color <#hex>` / `outer-color <#hex>` | circle colors |
//! | `reset` | default circles |
//! | `displays` | rebuild surfaces from the current display list |
//! | `autostart on\|off` | auto-start preference |
//! | `quit` | shut down |

use crate::error::CommandError;
use crate::events::AppEvent;
use crate::model::constants::*;

/// Parse one command line into an event.
pub fn parse_command(line: &str) -> Result<AppEvent, CommandError> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(CommandError::Empty)?;
    let arg = words.next();

    let event = match command.to_ascii_lowercase().as_str() {
        "start" => AppEvent::SetRunning(true),
        "stop" => AppEvent::SetRunning(false),
        "toggle" => AppEvent::ToggleRunning,
        "inner" => AppEvent::SetInnerSize(parse_size("inner", arg, MAX_INNER_SIZE)?),
        "outer" => AppEvent::SetOuterSize(parse_size("outer", arg, MAX_OUTER_SIZE)?),
        "inner-color" => AppEvent::SetInnerColor(parse_color("inner-color", arg)?),
        "outer-color" => AppEvent::SetOuterColor(parse_color("outer-color", arg)?),
        "reset" => AppEvent::ResetToDefaults,
        "displays" => AppEvent::TopologyChanged,
        "autostart" => match arg {
            Some("on") => AppEvent::SetAutoStart(true),
            Some("off") => AppEvent::SetAutoStart(false),
            Some(other) => return Err(CommandError::Unknown(format!("autostart {other}"))),
            None => return Err(CommandError::MissingArgument("autostart")),
        },
        "quit" | "exit" => AppEvent::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(event)
}

fn parse_size(what: &'static str, arg: Option<&str>, max: f64) -> Result<f64, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument(what))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))?;
    if !(MIN_SIZE..=max).contains(&value) {
        return Err(CommandError::OutOfRange {
            what,
            value,
            min: MIN_SIZE,
            max,
        });
    }
    Ok(value)
}

fn parse_color(what: &'static str, arg: Option<&str>) -> Result<String, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument(what))?;
    let digits = raw
        .strip_prefix('#')
        .ok_or_else(|| CommandError::InvalidColor(raw.to_string()))?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CommandError::InvalidColor(raw.to_string()));
    }
    Ok(raw.to_ascii_lowercase())
}
