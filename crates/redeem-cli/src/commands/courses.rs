//! Implementation of the `redeem courses` command.

use tracing::instrument;

use redeem_core::{application::CatalogService, domain::Category};

use crate::{
    cli::{CoursesArgs, ListFormat, global::GlobalArgs},
    commands::DataSource,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, course_row},
};

#[instrument(skip_all, fields(category = ?args.category))]
pub fn execute(
    args: CoursesArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (catalog, _) = DataSource::resolve(&global, &config).open()?;
    let service = CatalogService::new(Box::new(catalog));

    let courses = match &args.category {
        Some(name) => {
            let category = Category::try_new(name.as_str()).map_err(|e| CliError::InvalidInput {
                message: format!("--category: {e}"),
                source: Some(Box::new(e)),
            })?;
            service.courses_in_category(&category)?
        }
        None => service.list()?,
    };

    match output.list_format(args.format) {
        ListFormat::Json => output.json(&courses)?,
        ListFormat::List => {
            for course in &courses {
                output.data(&course.id().to_string())?;
            }
        }
        ListFormat::Table => {
            if courses.is_empty() {
                output.warning("No courses found")?;
                return Ok(());
            }
            output.header("Courses:")?;
            output.detail(&format!("  {:<5} {:<14} {:>6}  {}", "ID", "CATEGORY", "COST", "TITLE"))?;
            for course in &courses {
                output.data(&course_row(course))?;
            }
        }
    }

    Ok(())
}
