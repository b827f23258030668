use colored::Colorize;
use parley_domain::{
    diff, format_cost, format_response_time, format_token_count, AIResponse, ModelParameters,
    Provider,
};
use parley_server::{ChatRequest, ChatService};

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub name: &'static str,
    pub provider: Provider,
    pub parameters: ModelParameters,
}

impl Panel {
    pub fn new(name: &'static str, (provider, parameters): (Provider, ModelParameters)) -> Self {
        Self { name, provider, parameters }
    }

    fn request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::new(prompt, self.parameters.clone())
    }
}

/// Sends `prompt` to both panels concurrently and renders the outcome. A
/// failed panel is rendered with its error and does not affect the other.
pub async fn compare(
    service: &ChatService,
    prompt: &str,
    a: &Panel,
    b: &Panel,
) -> anyhow::Result<String> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        anyhow::bail!("Prompt must not be empty");
    }

    let (left, right) = tokio::join!(
        service.generate(a.provider, a.request(prompt)),
        service.generate(b.provider, b.request(prompt)),
    );

    let mut output = String::new();
    output.push_str(&render_panel(a, left.as_ref().map_err(|e| e.public_message())));
    output.push('\n');
    output.push_str(&render_panel(b, right.as_ref().map_err(|e| e.public_message())));
    output.push('\n');
    output.push_str(&render_diff(&a.parameters, &b.parameters));
    Ok(output)
}

fn render_panel(panel: &Panel, outcome: Result<&AIResponse, String>) -> String {
    let title = format!(
        "{} · {} · {}",
        panel.name,
        panel.provider.label(),
        panel.parameters.model
    );
    let mut out = format!("{}\n", title.bold().bright_yellow());
    match outcome {
        Ok(response) => {
            let meta = &response.metadata;
            out.push_str(&response.response);
            out.push('\n');
            out.push_str(&format!(
                "{} {}  {} {} ({} in / {} out)  {} {}\n",
                "Time:".dimmed(),
                format_response_time(meta.response_time),
                "Tokens:".dimmed(),
                format_token_count(meta.token_count),
                meta.input_tokens,
                meta.output_tokens,
                "Cost:".dimmed(),
                format_cost(meta.estimated_cost),
            ));
        }
        Err(message) => {
            out.push_str(&format!("{} {}\n", "Error:".red().bold(), message));
        }
    }
    out
}

fn render_diff(a: &ModelParameters, b: &ModelParameters) -> String {
    let changed = diff(a, b).changed();
    if changed.is_empty() {
        format!("{}\n", "Parameters are identical".green())
    } else {
        format!("{} {}\n", "Parameters differ:".yellow(), changed.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use parley_domain::{Completion, OpenAIUsage, UsageRecord};
    use pretty_assertions::assert_eq;

    use super::*;

    fn panel(name: &'static str, provider: Provider) -> Panel {
        Panel::new(name, (provider, provider.default_parameters()))
    }

    #[tokio::test]
    async fn test_compare_reports_failed_panel_independently() {
        colored::control::set_override(false);
        let service = ChatService::new().provider(Provider::OpenAI, Fixed);
        let a = panel("A", Provider::OpenAI);
        let b = panel("B", Provider::Anthropic);

        let actual = compare(&service, "  Hi ", &a, &b).await.unwrap();

        assert!(actual.contains("A · OpenAI · gpt-4o\nHello\n"), "{actual}");
        assert!(actual.contains("Tokens: 2.0k (1500 in / 500 out)"), "{actual}");
        assert!(actual.contains("Cost: $0.0088"), "{actual}");
        assert!(
            actual.contains("B · Anthropic · claude-sonnet-4-20250514\nError: Anthropic API key not configured"),
            "{actual}"
        );
        assert!(actual.ends_with("Parameters differ: model\n"), "{actual}");
    }

    #[tokio::test]
    async fn test_compare_rejects_blank_prompt() {
        let a = panel("A", Provider::OpenAI);
        let actual = compare(&ChatService::new(), "   ", &a, &a).await.unwrap_err();
        assert_eq!(actual.to_string(), "Prompt must not be empty");
    }

    #[test]
    fn test_render_diff() {
        colored::control::set_override(false);
        let a = Provider::OpenAI.default_parameters();
        assert_eq!(render_diff(&a, &a.clone().temperature(0.705)), "Parameters are identical\n");
        assert_eq!(
            render_diff(&a, &a.clone().temperature(0.72).max_tokens(200u32)),
            "Parameters differ: temperature, maxTokens\n"
        );
    }

    struct Fixed;

    #[async_trait::async_trait]
    impl parley_domain::ProviderService for Fixed {
        async fn complete(
            &self,
            _message: &str,
            _parameters: &ModelParameters,
        ) -> anyhow::Result<Completion> {
            Ok(Completion {
                text: "Hello".to_string(),
                model: "gpt-4o".to_string(),
                usage: Some(UsageRecord::OpenAI(OpenAIUsage {
                    prompt_tokens: Some(1500),
                    completion_tokens: Some(500),
                    total_tokens: None,
                })),
            })
        }
    }
}
