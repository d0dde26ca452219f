//! Implementation of the `redeem eligible` command.
//!
//! Responsibility: resolve the user and data source, ask the redemption
//! service which tokens qualify, and display results. No business logic
//! lives here.

use serde::Serialize;
use tracing::{info, instrument};

use redeem_core::{
    application::{Assessment, RedemptionService},
    domain::{Course, CourseId, Token, UserId},
};

use crate::{
    cli::{EligibleArgs, ListFormat, global::GlobalArgs},
    commands::{DataSource, resolve_user},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, token_row},
};

/// Execute the `redeem eligible` command.
#[instrument(skip_all, fields(course = args.course))]
pub fn execute(
    args: EligibleArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let user = resolve_user(args.user, &config)?;
    let course = CourseId::new(args.course);

    let (catalog, inventory) = DataSource::resolve(&global, &config).open()?;
    let service = RedemptionService::new(Box::new(catalog), Box::new(inventory));
    let format = output.list_format(args.format);

    if args.explain {
        let assessment = service.assess(user, course)?;
        info!(
            user = %user,
            eligible = assessment.eligible_count(),
            held = assessment.verdicts.len(),
            "Assessment complete"
        );
        return render_assessment(user, &assessment, format, &output);
    }

    let tokens = service.available_tokens_for_course(user, course)?;
    render_tokens(user, course, &tokens, format, &output)
}

fn render_tokens(
    user: UserId,
    course: CourseId,
    tokens: &[Token],
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        ListFormat::Json => output.json(tokens)?,
        ListFormat::List => {
            for token in tokens {
                output.data(&token.id().get().to_string())?;
            }
        }
        ListFormat::Table => {
            if tokens.is_empty() {
                output.warning(&format!(
                    "User {user} has no token eligible for course {course}"
                ))?;
                return Ok(());
            }
            output.header(&format!(
                "Tokens user {user} can redeem for course {course}:"
            ))?;
            for token in tokens {
                output.data(&token_row(token))?;
            }
        }
    }
    Ok(())
}

/// JSON shape of `--explain` output.
#[derive(Serialize)]
struct ExplainReport<'a> {
    course: &'a Course,
    eligible: usize,
    tokens: Vec<ExplainedToken<'a>>,
}

#[derive(Serialize)]
struct ExplainedToken<'a> {
    token: &'a Token,
    eligible: bool,
    reasons: Vec<String>,
}

impl<'a> ExplainReport<'a> {
    fn new(assessment: &'a Assessment) -> Self {
        Self {
            course: &assessment.course,
            eligible: assessment.eligible_count(),
            tokens: assessment
                .verdicts
                .iter()
                .map(|v| ExplainedToken {
                    token: &v.token,
                    eligible: v.is_eligible(),
                    reasons: v.rejections.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }
}

fn render_assessment(
    user: UserId,
    assessment: &Assessment,
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        ListFormat::Json => output.json(&ExplainReport::new(assessment))?,
        ListFormat::List => {
            for verdict in &assessment.verdicts {
                let status = if verdict.is_eligible() { "eligible" } else { "rejected" };
                output.data(&format!("{} {}", verdict.token.id().get(), status))?;
            }
        }
        ListFormat::Table => {
            output.header(&format!("User {user} on {}:", assessment.course))?;
            if assessment.verdicts.is_empty() {
                output.warning("User holds no tokens")?;
                return Ok(());
            }
            for verdict in &assessment.verdicts {
                let row = token_row(&verdict.token);
                if verdict.is_eligible() {
                    output.success(row.trim_start())?;
                } else {
                    output.failure(row.trim_start())?;
                    for rejection in &verdict.rejections {
                        output.detail(&format!("      {rejection}"))?;
                    }
                }
            }
            output.print("")?;
            output.info(&format!(
                "{} of {} tokens eligible",
                assessment.eligible_count(),
                assessment.verdicts.len()
            ))?;
        }
    }
    Ok(())
}
