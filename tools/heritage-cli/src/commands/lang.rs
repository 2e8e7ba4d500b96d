//! Language preference command.

use anyhow::{Context as _, Result};
use heritage_i18n::SUPPORTED_LANGUAGES;

use super::LangArgs;
use crate::context::Context;

/// Run the lang command.
pub fn run(args: LangArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;

    if let Some(code) = args.language {
        let language = storefront
            .switch_language(&code)
            .with_context(|| format!("Cannot switch language to '{}'", code))?;
        ctx.output
            .success(&format!("Language set to {}", language.native_name()));
    }

    let language = storefront.language();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "language": language,
            "direction": storefront.direction().as_str(),
        }));
        return Ok(());
    }

    ctx.output.kv("language", &format!("{} ({})", language.native_name(), language.code()));
    ctx.output.kv("direction", storefront.direction().as_str());

    ctx.output.info("Available:");
    for available in SUPPORTED_LANGUAGES {
        let marker = if *available == language { " *" } else { "" };
        ctx.output
            .list_item(&format!("{} {}{}", available.code(), available.native_name(), marker));
    }
    Ok(())
}
