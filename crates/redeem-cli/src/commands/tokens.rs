//! Implementation of the `redeem tokens` command.

use tracing::instrument;

use redeem_core::application::RedemptionService;

use crate::{
    cli::{ListFormat, TokensArgs, global::GlobalArgs},
    commands::{DataSource, resolve_user},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, token_row},
};

#[instrument(skip_all)]
pub fn execute(
    args: TokensArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let user = resolve_user(args.user, &config)?;

    let (catalog, inventory) = DataSource::resolve(&global, &config).open()?;
    let service = RedemptionService::new(Box::new(catalog), Box::new(inventory));
    let tokens = service.tokens_for_user(user)?;

    match output.list_format(args.format) {
        ListFormat::Json => output.json(&tokens)?,
        ListFormat::List => {
            for token in &tokens {
                output.data(&token.id().get().to_string())?;
            }
        }
        ListFormat::Table => {
            if tokens.is_empty() {
                output.warning(&format!("User {user} holds no tokens"))?;
                return Ok(());
            }
            output.header(&format!("Tokens held by user {user}:"))?;
            for token in &tokens {
                output.data(&token_row(token))?;
            }
        }
    }

    Ok(())
}
