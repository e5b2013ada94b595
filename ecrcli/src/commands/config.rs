use super::{CommandError, CommandResult};
use crate::config::{self, Config};
use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use std::path::Path;

impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let mut output = format!(
            "[style]\nformat = \"{}\"\ncolor = \"{}\"\n",
            self.style.format, self.style.color
        );

        output.push_str("\n[aws]\n");
        let fields = [
            ("region", &self.aws.region),
            ("profile", &self.aws.profile),
            ("endpoint_url", &self.aws.endpoint_url),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                output.push_str(&format!("{} = \"{}\"\n", key, value));
            }
        }

        output
    }
}

/// Handle `config init`
pub fn handle_init(ctx: &AppContext, config_path: &Path) -> CommandResult {
    config::init_config(config_path).map_err(CommandError::Config)?;
    format::success(
        ctx,
        &format!("Initialized config file at: {}", config_path.display()),
    );
    Ok(())
}

/// Handle `config show`: the configuration after env vars and flags are applied
pub fn handle_show(ctx: &AppContext, output: OutputFormat) -> CommandResult {
    let rendered = format::format_output(&ctx.config, output).map_err(CommandError::Output)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Handle `config get <KEY>`
pub fn handle_get(ctx: &AppContext, key: &str) -> CommandResult {
    let value = config::get_config_value(&ctx.config, key).map_err(CommandError::Config)?;
    println!("{}", value);
    Ok(())
}

/// Handle `config set <KEY> <VALUE>`
pub fn handle_set(ctx: &AppContext, config_path: &Path, key: &str, value: &str) -> CommandResult {
    config::set_config_value(config_path, key, value).map_err(CommandError::Config)?;
    format::success(ctx, &format!("Set {} = {}", key, value));
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
