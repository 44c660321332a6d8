use serde_json::json;

use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::resolve;

pub async fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    let backend = ctx.backend()?;
    let id = resolve::resolve(&backend, &args.token).await?;

    ctx.output.emit(&id.to_string(), &json!({ "id": id }))
}
