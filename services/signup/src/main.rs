use anyhow::{Context, Result};
use common::{config::SignupConfig, telemetry::init_tracing};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::info;

use signup::form::{
    SIGN_IN_LABEL, SIGN_IN_PROMPT, SUBMIT_LABEL, SUBTITLE, TITLE, WELCOME_TEXT, WELCOME_TITLE,
};
use signup::navigation::{Navigator, SIGN_IN_ROUTE, SIGN_UP_ROUTE};
use signup::{
    Field, HistoryNavigator, HttpRegistrationEndpoint, SignUpForm, SignupError, SubmitEvent,
    ValidationSchema,
};

/// Typed at any prompt to leave the form
const BACK_COMMAND: &str = ":back";
/// Typed at a prompt to empty that field; a blank line keeps the value
const CLEAR_COMMAND: &str = ":clear";

/// New value for a field from a prompt answer, `None` to keep the current one
fn field_value(line: &str) -> Option<&str> {
    match line {
        "" => None,
        CLEAR_COMMAND => Some(""),
        value => Some(value),
    }
}

async fn say(stdout: &mut Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = SignupConfig::load().context("Failed to load configuration")?;
    config.validate()?;

    // Initialize logging
    init_tracing(&config.log_level)?;

    info!("Starting sign-up front-end");

    let endpoint = HttpRegistrationEndpoint::from_config(&config)?;
    let navigator = HistoryNavigator::with_initial(SIGN_IN_ROUTE);
    navigator.push(SIGN_UP_ROUTE);
    let form = SignUpForm::new(endpoint, navigator, ValidationSchema::from_config(&config));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let header = format!(
        "{}\n{}\n\n{}\n{}\n",
        WELCOME_TITLE, WELCOME_TEXT, TITLE, SUBTITLE
    );
    say(&mut stdout, &header).await?;

    loop {
        for field in Field::ALL {
            let current = form.draft().get(field).to_string();
            let shown = if field.is_secret() { "" } else { current.as_str() };
            say(&mut stdout, &format!("{} [{}]: ", field.label(), shown)).await?;

            let Some(line) = lines.next_line().await? else {
                info!("Input closed, leaving sign-up form");
                return Ok(());
            };
            let line = line.trim_end();

            if line == BACK_COMMAND {
                form.handle_back();
                let route = form.navigator().current();
                say(
                    &mut stdout,
                    &format!("{} {}: {}\n", SIGN_IN_PROMPT, SIGN_IN_LABEL, route),
                )
                .await?;
                return Ok(());
            }
            if let Some(value) = field_value(line) {
                form.handle_change(field, value);
            }
        }

        say(&mut stdout, &format!("{}...\n", SUBMIT_LABEL)).await?;
        match form.handle_submit(&mut SubmitEvent::new()).await {
            Ok(()) => {
                let route = form.navigator().current();
                say(&mut stdout, &format!("Cadastro realizado. Rota atual: {}\n", route)).await?;
                return Ok(());
            }
            Err(SignupError::Validation(errors)) => {
                for (field, messages) in errors.iter() {
                    for message in messages {
                        say(&mut stdout, &format!("  {}: {}\n", field.label(), message)).await?;
                    }
                }
            }
            Err(e) => {
                let message = form.submit_error().unwrap_or_else(|| e.to_string());
                say(&mut stdout, &format!("  {}\n", message)).await?;
            }
        }
    }
}
