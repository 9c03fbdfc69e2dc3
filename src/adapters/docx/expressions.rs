use std::collections::{BTreeMap, BTreeSet};

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::AppError;

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env
}

/// Top-level names a part reads without binding them itself.
pub fn undeclared_names(part_name: &str, xml: &str) -> Result<BTreeSet<String>, AppError> {
    let env = environment();
    let template = env
        .template_from_str(xml)
        .map_err(|err| AppError::Template(format!("{}: {}", part_name, err)))?;
    Ok(template.undeclared_variables(false).into_iter().collect())
}

/// Render a part with already XML-escaped values.
pub fn render_part(
    part_name: &str,
    xml: &str,
    values: &BTreeMap<String, String>,
) -> Result<String, AppError> {
    environment()
        .render_str(xml, values)
        .map_err(|err| AppError::Render(format!("{}: {}", part_name, err)))
}
