use crate::cli::UserArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::page;

pub async fn run(ctx: &AppContext, args: UserArgs) -> AppResult<()> {
    let backend = ctx.backend()?;
    let page = page::assemble(&backend, &args.id).await?;

    ctx.output.emit_page(&page.html, &page)
}
