use super::{CityArgs, ToolResult, WEATHER_TOOL_DESCRIPTION, WEATHER_TOOL_NAME};
use adk_core::{Result, ToolContext};
use adk_tool::FunctionTool;
use serde_json::Value;
use std::sync::Arc;

const NEW_YORK_WEATHER: &str =
    "The weather in New York is sunny with a temperature of 25 degrees Celsius (77 degrees Fahrenheit).";

pub fn weather_report(args: &CityArgs) -> ToolResult {
    if args.is_new_york() {
        ToolResult::success(NEW_YORK_WEATHER)
    } else {
        ToolResult::error(format!("Weather information for '{}' is not available.", args.city))
    }
}

pub async fn get_weather(_ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
    let args = CityArgs::from_value(WEATHER_TOOL_NAME, args)?;
    tracing::debug!(city = %args.city, "get_weather called");

    let result = weather_report(&args);
    if let Some(message) = result.error_message() {
        tracing::debug!(city = %args.city, "{}", message);
    }
    Ok(result.into_value())
}

pub fn weather_tool() -> FunctionTool {
    FunctionTool::new(WEATHER_TOOL_NAME, WEATHER_TOOL_DESCRIPTION, get_weather)
        .with_parameters_schema::<CityArgs>()
}
