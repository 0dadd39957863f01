use foreca_core::Observation;

const SEPARATOR_WIDTH: usize = 40;

/// Render the console report, one line per field.
pub fn render(location: &str, obs: &Observation) -> String {
    [
        "-".repeat(SEPARATOR_WIDTH),
        format!("Latest observation: {}", obs.timestamp_text),
        format!("{:.1}", obs.temperature_c),
        format!("Temperature in {location}: {}", obs.temperature_text),
        format!("{:.1}", obs.feels_like_c),
        obs.feels_like_text.clone(),
    ]
    .join("\n")
}
