use chrono::Datelike;

use crate::context::PageContext;

/// Write the current calendar year into the footer.
pub fn stamp_year(ctx: &PageContext) -> bool {
    let Some(year) = ctx.select(&ctx.config().selectors.year) else {
        return false;
    };
    year.set_text_content(Some(&chrono::Local::now().year().to_string()));
    true
}
