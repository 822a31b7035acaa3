//! Function tools exposed to the model.
//!
//! Both tools take a [`CityArgs`] and answer with a [`ToolResult`] map.
//! Only New York is known; every other city is an in-band error.

mod args;
mod result;
mod time;
mod weather;

pub use args::CityArgs;
pub use result::ToolResult;
pub use time::{NEW_YORK_TZ, get_current_time, time_report_at, time_tool};
pub use weather::{get_weather, weather_report, weather_tool};

pub const WEATHER_TOOL_NAME: &str = "get_weather";
pub const WEATHER_TOOL_DESCRIPTION: &str = "Retrieves the current weather report for a specified city.";

pub const TIME_TOOL_NAME: &str = "get_current_time";
pub const TIME_TOOL_DESCRIPTION: &str = "Returns the current time in a specified city.";
