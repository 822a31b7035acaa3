use super::{CityArgs, TIME_TOOL_DESCRIPTION, TIME_TOOL_NAME, ToolResult};
use adk_core::{Result, ToolContext};
use adk_tool::FunctionTool;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use std::sync::Arc;

pub const NEW_YORK_TZ: &str = "America/New_York";

// e.g. "2024-01-15 07:00:00 EST-0500"
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

/// Reports the time in the city at the instant returned by `clock`.
///
/// Unknown cities return before the clock or the zone database is touched.
/// A zone lookup failure is an in-band error, never an `Err`.
pub fn time_report_at(args: &CityArgs, clock: impl FnOnce() -> DateTime<Utc>) -> ToolResult {
    report_in_zone(args, clock, NEW_YORK_TZ)
}

fn report_in_zone(
    args: &CityArgs,
    clock: impl FnOnce() -> DateTime<Utc>,
    zone: &str,
) -> ToolResult {
    if !args.is_new_york() {
        return ToolResult::error(format!(
            "Sorry, I don't have timezone information for {}.",
            args.city
        ));
    }

    let tz: Tz = match zone.parse() {
        Ok(tz) => tz,
        Err(e) => {
            return ToolResult::error(format!("Failed to load timezone data for {}: {}", zone, e));
        }
    };

    let local = clock().with_timezone(&tz);
    ToolResult::success(format!(
        "The current time in {} is {}",
        args.city,
        local.format(TIMESTAMP_FORMAT)
    ))
}

pub async fn get_current_time(_ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
    let args = CityArgs::from_value(TIME_TOOL_NAME, args)?;
    tracing::debug!(city = %args.city, "get_current_time called");

    let result = time_report_at(&args, Utc::now);
    if let Some(message) = result.error_message() {
        tracing::debug!(city = %args.city, "{}", message);
    }
    Ok(result.into_value())
}

pub fn time_tool() -> FunctionTool {
    FunctionTool::new(TIME_TOOL_NAME, TIME_TOOL_DESCRIPTION, get_current_time)
        .with_parameters_schema::<CityArgs>()
}
