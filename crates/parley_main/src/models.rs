use colored::Colorize;
use parley_domain::{get_price, Provider};
use strum::IntoEnumIterator;

/// Renders the selectable models of every provider with their price per
/// 1K tokens.
pub fn render_models() -> String {
    let mut out = String::new();
    for provider in Provider::iter() {
        out.push_str(&format!("{}\n", provider.label().bold().bright_yellow()));
        for option in provider.models() {
            let price = match get_price(provider, option.id) {
                Some(price) => format!("${} in / ${} out per 1K", price.input, price.output),
                None => "unpriced".to_string(),
            };
            let default = if option.id == provider.default_model() { " (default)" } else { "" };
            out.push_str(&format!(
                "  {:<28} {:<26} {}{}\n",
                option.id,
                option.label,
                price.dimmed(),
                default
            ));
        }
    }
    out
}
