use crate::ModelParameters;

/// Float parameters closer than this are considered equal, slider steps and
/// float noise stay below it.
pub const PARAMETER_TOLERANCE: f64 = 0.01;

/// Which fields of two parameter sets differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterDiff {
    pub model: bool,
    pub temperature: bool,
    pub max_tokens: bool,
    pub top_p: bool,
    pub frequency_penalty: bool,
    pub presence_penalty: bool,
}

fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() > PARAMETER_TOLERANCE
}

/// Compares two parameter sets field by field.
pub fn diff(a: &ModelParameters, b: &ModelParameters) -> ParameterDiff {
    ParameterDiff {
        model: a.model != b.model,
        temperature: differs(a.temperature, b.temperature),
        max_tokens: a.max_tokens != b.max_tokens,
        top_p: differs(a.top_p, b.top_p),
        frequency_penalty: differs(a.frequency_penalty, b.frequency_penalty),
        presence_penalty: differs(a.presence_penalty, b.presence_penalty),
    }
}

impl ParameterDiff {
    pub fn any(&self) -> bool {
        !self.changed().is_empty()
    }

    /// Names of the differing fields, in their wire spelling.
    pub fn changed(&self) -> Vec<&'static str> {
        [
            ("model", self.model),
            ("temperature", self.temperature),
            ("maxTokens", self.max_tokens),
            ("topP", self.top_p),
            ("frequencyPenalty", self.frequency_penalty),
            ("presencePenalty", self.presence_penalty),
        ]
        .into_iter()
        .filter_map(|(name, changed)| changed.then_some(name))
        .collect()
    }
}
