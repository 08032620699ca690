use anyhow::Result;

use crate::core::facade::Facade;
use crate::core::record::{Named, SceneObject, Severity};

/// Route one message through the facade the same way library call sites do.
pub fn main(
    facade: &Facade,
    author: Option<&str>,
    severity: Severity,
    context: Option<&str>,
    message: &[String],
) -> Result<()> {
    let text = message.join(" ");
    let named = context.map(Named::new);
    let ctx = named.as_ref().map(|n| n as &dyn SceneObject);
    match severity {
        Severity::Info => facade.info(&text, ctx, author),
        Severity::Warning => facade.warn(&text, ctx, author),
        Severity::Error => facade.error(&text, ctx, author),
        // From the command line an assertion is always a failed one.
        Severity::Assert => facade.assert_log(false, &text, ctx, author),
    }
    Ok(())
}
