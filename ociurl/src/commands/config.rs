use crate::config;
use crate::context::AppContext;
use crate::format::{self, OutputFormat};

/// Handle the config init command
pub fn handle_init(ctx: &AppContext) {
    let config_path = config::get_config_path();

    match config::init_config(&config_path) {
        Ok(()) => format::success(
            ctx,
            &format!("Initialized config file at {}", config_path.display()),
        ),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Render one config value, or the whole resolved config if no key is given
pub fn render_get(
    ctx: &AppContext,
    key: Option<&str>,
    format: OutputFormat,
) -> Result<String, String> {
    match key {
        Some(key) => config::get_config_value(&ctx.config, key),
        None => format::format_output(&ctx.config, format),
    }
}

/// Handle the config get command
pub fn handle_get(ctx: &AppContext, key: Option<&str>, format: Option<OutputFormat>) {
    let format = format.unwrap_or(ctx.config.style.format);

    match render_get(ctx, key, format) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the config path command
pub fn handle_path() {
    println!("{}", config::get_config_path().display());
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
